//! Language-neutral expressions.
//!
//! Templates build [`Expr`] trees with ordinary calls; a language-specific
//! [`Renderer`] turns them into source text.
//!
//! # Example
//!
//! ```
//! use svcgen_codegen::builder::{Expr, MethodCall};
//!
//! // s.Dbh.Select(cols...).From(table).Exec()
//! let query = Expr::ident("s").field("Dbh").chain([
//!     MethodCall::new("Select", [Expr::ident("cols").spread()]),
//!     MethodCall::new("From", [Expr::ident("table")]),
//!     MethodCall::new("Exec", []),
//! ]);
//! assert!(matches!(query, Expr::Chain { .. }));
//! ```

use super::{Indent, TypeRef};

/// A language-neutral expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier (variable, parameter, function or constant name).
    Ident(String),
    /// String literal (will be quoted).
    String(String),
    /// The null/nil value.
    Nil,
    /// A scaffolding identifier the user is expected to replace.
    Placeholder(String),
    /// Field or member selection: `base.name`.
    Field { base: Box<Expr>, name: String },
    /// Function call.
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// Fluent method chain: `base.a(..).b(..)`.
    Chain {
        base: Box<Expr>,
        calls: Vec<MethodCall>,
    },
    /// Variadic expansion of a slice argument.
    Spread(Box<Expr>),
    /// Address-of / reference to the inner value.
    AddrOf(Box<Expr>),
    /// Element access: `base[index]`.
    Index { base: Box<Expr>, index: Box<Expr> },
    /// Binary operation.
    Binary {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },
    /// Keyed composite value: `Type{Key: value, ...}`.
    Composite {
        ty: TypeRef,
        fields: Vec<(String, Expr)>,
    },
    /// Positional composite value: `Type{a, b}`.
    List { ty: TypeRef, items: Vec<Expr> },
    /// Allocate a slice of the given type and length.
    MakeSlice { ty: TypeRef, len: Box<Expr> },
    /// Length of a collection.
    Len(Box<Expr>),
    /// Append items to a slice, yielding the new slice.
    Append { slice: Box<Expr>, items: Vec<Expr> },
}

/// Binary operators used by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    NotEq,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEq => "!=",
        }
    }
}

/// One call in a [`Expr::Chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub name: String,
    pub args: Vec<Expr>,
}

impl MethodCall {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }
}

impl Expr {
    /// Create an identifier.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Create a string literal.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a placeholder identifier.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder(name.into())
    }

    /// Create an empty keyed composite value, `Type{}`.
    pub fn empty(ty: TypeRef) -> Self {
        Self::Composite {
            ty,
            fields: Vec::new(),
        }
    }

    /// Create a keyed composite value.
    pub fn composite<K: Into<String>>(
        ty: TypeRef,
        fields: impl IntoIterator<Item = (K, Expr)>,
    ) -> Self {
        let fields = fields.into_iter().map(|(k, v)| (k.into(), v));
        Self::Composite {
            ty,
            fields: fields.collect(),
        }
    }

    /// Create a positional composite value.
    pub fn list(ty: TypeRef, items: impl IntoIterator<Item = Expr>) -> Self {
        Self::List {
            ty,
            items: items.into_iter().collect(),
        }
    }

    /// Allocate a slice of `ty` with length `len`.
    pub fn make_slice(ty: TypeRef, len: Expr) -> Self {
        Self::MakeSlice {
            ty,
            len: Box::new(len),
        }
    }

    /// Length of `of`.
    pub fn len(of: Expr) -> Self {
        Self::Len(Box::new(of))
    }

    /// Append `items` to `slice`.
    pub fn append(slice: Expr, items: impl IntoIterator<Item = Expr>) -> Self {
        Self::Append {
            slice: Box::new(slice),
            items: items.into_iter().collect(),
        }
    }

    /// Select a field of this expression.
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::Field {
            base: Box::new(self),
            name: name.into(),
        }
    }

    /// Call this expression.
    pub fn call(self, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::Call {
            callee: Box::new(self),
            args: args.into_iter().collect(),
        }
    }

    /// Call a method on this expression: `self.name(args)`.
    pub fn method(self, name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        self.field(name).call(args)
    }

    /// Start a fluent chain of calls on this expression.
    pub fn chain(self, calls: impl IntoIterator<Item = MethodCall>) -> Self {
        Self::Chain {
            base: Box::new(self),
            calls: calls.into_iter().collect(),
        }
    }

    /// Take the address of this expression.
    pub fn addr(self) -> Self {
        Self::AddrOf(Box::new(self))
    }

    /// Expand this expression as variadic arguments.
    pub fn spread(self) -> Self {
        Self::Spread(Box::new(self))
    }

    /// Index into this expression.
    pub fn index(self, index: Expr) -> Self {
        Self::Index {
            base: Box::new(self),
            index: Box::new(index),
        }
    }

    /// `self != rhs`.
    pub fn not_eq(self, rhs: Expr) -> Self {
        Self::Binary {
            lhs: Box::new(self),
            op: BinaryOp::NotEq,
            rhs: Box::new(rhs),
        }
    }

    /// Visit this expression and every expression nested inside it.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        f(self);
        match self {
            Self::Ident(_) | Self::String(_) | Self::Nil | Self::Placeholder(_) => {}
            Self::Field { base, .. } => base.walk(f),
            Self::Call { callee, args } => {
                callee.walk(f);
                for arg in args {
                    arg.walk(f);
                }
            }
            Self::Chain { base, calls } => {
                base.walk(f);
                for arg in calls.iter().flat_map(|call| &call.args) {
                    arg.walk(f);
                }
            }
            Self::Spread(inner) | Self::AddrOf(inner) | Self::Len(inner) => inner.walk(f),
            Self::Index { base, index } => {
                base.walk(f);
                index.walk(f);
            }
            Self::Binary { lhs, rhs, .. } => {
                lhs.walk(f);
                rhs.walk(f);
            }
            Self::Composite { fields, .. } => {
                for (_, value) in fields {
                    value.walk(f);
                }
            }
            Self::List { items, .. } => {
                for item in items {
                    item.walk(f);
                }
            }
            Self::MakeSlice { len, .. } => len.walk(f),
            Self::Append { slice, items } => {
                slice.walk(f);
                for item in items {
                    item.walk(f);
                }
            }
        }
    }

    /// Visit every type mentioned by this expression tree.
    pub fn walk_types<'a>(&'a self, f: &mut impl FnMut(&'a TypeRef)) {
        self.walk(&mut |expr| match expr {
            Self::Composite { ty, .. } | Self::List { ty, .. } | Self::MakeSlice { ty, .. } => {
                ty.walk(&mut *f)
            }
            _ => {}
        });
    }
}

/// Options for rendering multi-line expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Nesting level of the line the expression starts on.
    pub level: usize,
    /// Indentation written per level.
    pub indent: Indent,
}

impl RenderOptions {
    pub fn new(indent: Indent) -> Self {
        Self { level: 0, indent }
    }

    /// Set the nesting level.
    pub fn at_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Options one level deeper.
    pub fn nested(&self) -> Self {
        Self {
            level: self.level + 1,
            indent: self.indent,
        }
    }

    /// Indentation string for the current level.
    pub fn indent_str(&self) -> String {
        self.indent.repeat(self.level)
    }
}

/// Trait for rendering expressions to language-specific code.
///
/// Continuation lines of a multi-line result carry their full indentation;
/// the first line carries none.
pub trait Renderer {
    /// Render an expression starting on a line at `opts.level`.
    fn render_expr(&self, expr: &Expr, opts: &RenderOptions) -> String;

    /// Render an expression as if it started at the outermost level.
    fn render_inline(&self, expr: &Expr) -> String {
        self.render_expr(expr, &RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinators() {
        let call = Expr::ident("s").method("GetResourceName", []);
        assert_eq!(
            call,
            Expr::Call {
                callee: Box::new(Expr::Field {
                    base: Box::new(Expr::ident("s")),
                    name: "GetResourceName".into(),
                }),
                args: vec![],
            }
        );

        let cond = Expr::ident("err").not_eq(Expr::Nil);
        assert!(matches!(cond, Expr::Binary { op: BinaryOp::NotEq, .. }));
    }

    #[test]
    fn test_walk_reaches_chain_arguments() {
        let expr = Expr::ident("s").field("Dbh").chain([
            MethodCall::new("Select", [Expr::ident("cols").spread()]),
            MethodCall::new("Where", [Expr::string("id = $1"), Expr::ident("id")]),
        ]);

        let mut idents = Vec::new();
        expr.walk(&mut |e| {
            if let Expr::Ident(name) = e {
                idents.push(name.as_str());
            }
        });
        assert_eq!(idents, ["s", "cols", "id"]);
    }

    #[test]
    fn test_walk_types() {
        let links = Expr::empty(TypeRef::named("jsonapi.Links")).addr();
        let data = Expr::composite(TypeRef::named("todo.TodoData"), [("Links", links)]);
        let expr = data.addr();

        let mut names = Vec::new();
        expr.walk_types(&mut |t| {
            if let TypeRef::Named(name) = t {
                names.push(name.as_str());
            }
        });
        assert_eq!(names, ["todo.TodoData", "jsonapi.Links"]);
    }

    #[test]
    fn test_render_options() {
        let opts = RenderOptions::new(Indent::Tab).at_level(2);
        assert_eq!(opts.indent_str(), "\t\t");
        assert_eq!(opts.nested().indent_str(), "\t\t\t");
        assert_eq!(RenderOptions::default().indent_str(), "");
    }
}
