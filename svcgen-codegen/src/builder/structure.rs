//! Struct type definitions.

use super::types::TypeRef;

/// A struct type and its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl StructSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An embedded struct field, contributing its methods to the enclosing
/// struct.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub ty: TypeRef,
}

impl FieldSpec {
    pub fn embedded(ty: TypeRef) -> Self {
        Self { ty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_spec() {
        let helper = TypeRef::pointer_to("aphgrpc.Service");
        let field = FieldSpec::embedded(helper.clone());
        let spec = StructSpec::new("TodoService").field(field);
        assert!(!spec.is_empty());
        assert_eq!(spec.fields[0].ty, helper);
        assert!(StructSpec::new("dbTodo").is_empty());
    }
}
