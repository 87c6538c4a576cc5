//! Go type mapper implementation.

use svcgen_codegen::builder::{PrimitiveType, TypeMapper};

/// Maps language-agnostic TypeRef types to Go type syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "string".to_string(),
            PrimitiveType::Int => "int64".to_string(),
            PrimitiveType::Error => "error".to_string(),
        }
    }

    fn map_pointer(&self, inner: &str) -> String {
        format!("*{}", inner)
    }

    fn map_slice(&self, inner: &str) -> String {
        format!("[]{}", inner)
    }

    fn map_map(&self, key: &str, value: &str) -> String {
        format!("map[{}]{}", key, value)
    }
}

#[cfg(test)]
mod tests {
    use svcgen_codegen::builder::TypeRef;

    use super::*;

    #[test]
    fn test_primitives() {
        let mapper = GoTypeMapper;
        assert_eq!(mapper.render_type(&TypeRef::int()), "int64");
        assert_eq!(mapper.render_type(&TypeRef::string()), "string");
        assert_eq!(mapper.render_type(&TypeRef::error()), "error");
    }

    #[test]
    fn test_composite_types() {
        let mapper = GoTypeMapper;
        assert_eq!(
            mapper.render_type(&TypeRef::slice(TypeRef::pointer_to("todo.TodoData"))),
            "[]*todo.TodoData"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::map(TypeRef::string(), TypeRef::string())),
            "map[string]string"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::placeholder("SomeRelationships")),
            "SomeRelationships"
        );
    }
}
