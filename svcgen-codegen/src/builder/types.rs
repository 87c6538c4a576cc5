//! Language-neutral type references.
//!
//! This module provides abstractions for representing types in a way that
//! can be rendered to any target language via the [`TypeMapper`] trait.

/// A language-neutral type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type (string, int, error).
    Primitive(PrimitiveType),
    /// A named type, optionally package qualified (e.g. `todo.Todo`).
    Named(String),
    /// A pointer to the inner type.
    Pointer(Box<TypeRef>),
    /// A growable sequence of the inner type.
    Slice(Box<TypeRef>),
    /// A map from key type to value type.
    Map {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    /// A scaffolding type name the user is expected to replace.
    Placeholder(String),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a pointer type.
    pub fn pointer(inner: TypeRef) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Create a pointer to a named type.
    pub fn pointer_to(name: impl Into<String>) -> Self {
        Self::pointer(Self::named(name))
    }

    /// Create a slice type.
    pub fn slice(inner: TypeRef) -> Self {
        Self::Slice(Box::new(inner))
    }

    /// Create a map type.
    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a placeholder type.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder(name.into())
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: 64-bit integer type.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: error type.
    pub fn error() -> Self {
        Self::Primitive(PrimitiveType::Error)
    }

    /// Visit this type and every type nested inside it.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a TypeRef)) {
        f(self);
        match self {
            Self::Pointer(inner) | Self::Slice(inner) => inner.walk(f),
            Self::Map { key, value } => {
                key.walk(f);
                value.walk(f);
            }
            Self::Primitive(_) | Self::Named(_) | Self::Placeholder(_) => {}
        }
    }
}

/// Primitive types the declaration model needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// String type (Go: string).
    String,
    /// 64-bit integer type (Go: int64).
    Int,
    /// The language's error type (Go: error).
    Error,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Error => "error",
        }
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map a pointer type (e.g. `*T`).
    fn map_pointer(&self, inner: &str) -> String;

    /// Map a slice type (e.g. `[]T`).
    fn map_slice(&self, inner: &str) -> String;

    /// Map a map type (e.g. `map[K]V`).
    fn map_map(&self, key: &str, value: &str) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Named(name) | TypeRef::Placeholder(name) => name.clone(),
            TypeRef::Pointer(inner) => {
                let inner_str = self.render_type(inner);
                self.map_pointer(&inner_str)
            }
            TypeRef::Slice(inner) => {
                let inner_str = self.render_type(inner);
                self.map_slice(&inner_str)
            }
            TypeRef::Map { key, value } => {
                let key_str = self.render_type(key);
                let value_str = self.render_type(value);
                self.map_map(&key_str, &value_str)
            }
        }
    }
}
