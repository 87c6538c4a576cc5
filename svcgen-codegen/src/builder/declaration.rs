//! Top-level declarations of a generated module.

use super::{expr::Expr, function::FunctionSpec, structure::StructSpec, types::TypeRef};

/// A named constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstSpec {
    pub name: String,
    pub value: Expr,
}

impl ConstSpec {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A package-level variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VarSpec {
    pub name: String,
    pub value: Expr,
}

impl VarSpec {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The kind of a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Const,
    Var,
    Type,
    Func,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Const(ConstSpec),
    Var(VarSpec),
    Type(StructSpec),
    Func(FunctionSpec),
}

impl Declaration {
    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Const(c) => &c.name,
            Self::Var(v) => &v.name,
            Self::Type(s) => &s.name,
            Self::Func(f) => &f.name,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Const(_) => DeclarationKind::Const,
            Self::Var(_) => DeclarationKind::Var,
            Self::Type(_) => DeclarationKind::Type,
            Self::Func(_) => DeclarationKind::Func,
        }
    }

    /// Leading comment, if any.
    pub fn doc(&self) -> Option<&str> {
        match self {
            Self::Func(f) => f.doc.as_deref(),
            Self::Const(_) | Self::Var(_) | Self::Type(_) => None,
        }
    }

    /// Visit every expression in this declaration.
    pub fn walk_exprs<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        match self {
            Self::Const(c) => c.value.walk(f),
            Self::Var(v) => v.value.walk(f),
            Self::Type(_) => {}
            Self::Func(func) => func.walk_exprs(f),
        }
    }

    /// Visit every type referenced by this declaration.
    pub fn walk_types<'a>(&'a self, f: &mut impl FnMut(&'a TypeRef)) {
        match self {
            Self::Const(c) => c.value.walk_types(f),
            Self::Var(v) => v.value.walk_types(f),
            Self::Type(s) => {
                for field in &s.fields {
                    field.ty.walk(f);
                }
            }
            Self::Func(func) => func.walk_types(f),
        }
    }
}

impl From<ConstSpec> for Declaration {
    fn from(spec: ConstSpec) -> Self {
        Self::Const(spec)
    }
}

impl From<VarSpec> for Declaration {
    fn from(spec: VarSpec) -> Self {
        Self::Var(spec)
    }
}

impl From<StructSpec> for Declaration {
    fn from(spec: StructSpec) -> Self {
        Self::Type(spec)
    }
}

impl From<FunctionSpec> for Declaration {
    fn from(spec: FunctionSpec) -> Self {
        Self::Func(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FieldSpec;

    #[test]
    fn test_declaration_name_and_kind() {
        let table = Expr::string("--TABLE NAME--");
        let decl: Declaration = ConstSpec::new("todoDbTable", table).into();
        assert_eq!(decl.name(), "todoDbTable");
        assert_eq!(decl.kind(), DeclarationKind::Const);
        assert_eq!(decl.doc(), None);

        let constructor = FunctionSpec::new("NewTodoService").doc("-- Constructor");
        let decl: Declaration = constructor.into();
        assert_eq!(decl.kind(), DeclarationKind::Func);
        assert_eq!(decl.doc(), Some("-- Constructor"));

        let decl: Declaration = StructSpec::new("dbTodo").into();
        assert_eq!(decl.kind(), DeclarationKind::Type);
        assert_eq!(decl.doc(), None);
    }

    #[test]
    fn test_walk_types_struct_fields() {
        let helper = FieldSpec::embedded(TypeRef::pointer_to("aphgrpc.Service"));
        let decl: Declaration = StructSpec::new("TodoService").field(helper).into();
        let mut seen = Vec::new();
        decl.walk_types(&mut |t| seen.push(t.clone()));
        assert_eq!(
            seen,
            [
                TypeRef::pointer_to("aphgrpc.Service"),
                TypeRef::named("aphgrpc.Service"),
            ]
        );
    }
}
