//! Language-neutral function definitions.
//!
//! Functions, methods and their bodies, in a form that can be rendered to
//! any target language.

use super::{expr::Expr, types::TypeRef};

/// A function or method definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    /// Function name.
    pub name: String,
    /// Leading comment.
    pub doc: Option<String>,
    /// Receiver, if this is a method.
    pub receiver: Option<Receiver>,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Result types, in order. Empty for no result.
    pub results: Vec<TypeRef>,
    /// Function body as statements.
    pub body: Vec<Statement>,
}

impl FunctionSpec {
    /// Create a new function spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the leading comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Make this a method on `ty`, bound to `name` in the body.
    pub fn receiver(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.receiver = Some(Receiver {
            name: name.into(),
            ty,
        });
        self
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(ParamSpec::new(name, ty));
        self
    }

    /// Add a result type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.results.push(ty);
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Visit every top-level and nested statement of the body.
    pub fn walk_statements<'a>(&'a self, f: &mut impl FnMut(&'a Statement)) {
        for stmt in &self.body {
            stmt.walk(f);
        }
    }

    /// Visit every expression in the body.
    pub fn walk_exprs<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        self.walk_statements(&mut |stmt| {
            for expr in stmt.exprs() {
                expr.walk(&mut *f);
            }
        });
    }

    /// Visit every type mentioned by the signature and the body.
    pub fn walk_types<'a>(&'a self, f: &mut impl FnMut(&'a TypeRef)) {
        if let Some(recv) = &self.receiver {
            recv.ty.walk(f);
        }
        for param in &self.params {
            param.ty.walk(f);
        }
        for result in &self.results {
            result.walk(f);
        }
        self.walk_statements(&mut |stmt| {
            if let Statement::Var { ty, .. } = stmt {
                ty.walk(&mut *f);
            }
            for expr in stmt.exprs() {
                expr.walk_types(&mut *f);
            }
        });
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A method receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    pub name: String,
    pub ty: TypeRef,
}

/// A statement in a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Declare and initialize one or more names: `a, b := value`.
    Define { names: Vec<String>, value: Expr },
    /// Assign to an existing target: `target = value`.
    Assign { target: Expr, value: Expr },
    /// Declare a zero-valued variable: `var name T`.
    Var { name: String, ty: TypeRef },
    /// Return statement with zero or more values.
    Return(Vec<Expr>),
    /// If statement.
    If {
        condition: Expr,
        then_branch: Vec<Statement>,
    },
    /// Loop over a collection binding index and item.
    ForRange {
        index: String,
        item: String,
        iter: Expr,
        body: Vec<Statement>,
    },
    /// A comment line addressed to whoever edits the generated code.
    Comment(String),
}

impl Statement {
    /// Create a single-name definition.
    pub fn define(name: impl Into<String>, value: Expr) -> Self {
        Self::Define {
            names: vec![name.into()],
            value,
        }
    }

    /// Create a multi-name definition.
    pub fn define_many<S: Into<String>>(names: impl IntoIterator<Item = S>, value: Expr) -> Self {
        Self::Define {
            names: names.into_iter().map(Into::into).collect(),
            value,
        }
    }

    /// Create an assignment.
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    /// Create a zero-valued variable declaration.
    pub fn var(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::Var {
            name: name.into(),
            ty,
        }
    }

    /// Create a return statement.
    pub fn return_(values: impl IntoIterator<Item = Expr>) -> Self {
        Self::Return(values.into_iter().collect())
    }

    /// Create an if statement.
    pub fn if_(condition: Expr, then_branch: Vec<Statement>) -> Self {
        Self::If {
            condition,
            then_branch,
        }
    }

    /// Create a range loop.
    pub fn for_range(
        index: impl Into<String>,
        item: impl Into<String>,
        iter: Expr,
        body: Vec<Statement>,
    ) -> Self {
        Self::ForRange {
            index: index.into(),
            item: item.into(),
            iter,
            body,
        }
    }

    /// Create a comment line.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Expressions owned directly by this statement (not nested statements).
    pub fn exprs(&self) -> Vec<&Expr> {
        match self {
            Self::Define { value, .. } => vec![value],
            Self::Assign { target, value } => vec![target, value],
            Self::Return(values) => values.iter().collect(),
            Self::If { condition, .. } => vec![condition],
            Self::ForRange { iter, .. } => vec![iter],
            Self::Var { .. } | Self::Comment(_) => Vec::new(),
        }
    }

    /// Visit this statement and every statement nested inside it.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Statement)) {
        f(self);
        match self {
            Self::If { then_branch, .. } => {
                for stmt in then_branch {
                    stmt.walk(f);
                }
            }
            Self::ForRange { body, .. } => {
                for stmt in body {
                    stmt.walk(f);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FunctionSpec {
        FunctionSpec::new("getAllRows")
            .receiver("s", TypeRef::pointer_to("TodoService"))
            .returns(TypeRef::slice(TypeRef::pointer_to("dbTodo")))
            .returns(TypeRef::error())
            .statement(Statement::var(
                "dtdRows",
                TypeRef::slice(TypeRef::pointer_to("dbTodo")),
            ))
            .statement(Statement::return_([Expr::ident("dtdRows"), Expr::Nil]))
    }

    #[test]
    fn test_function_spec() {
        let spec = sample();
        assert_eq!(spec.name, "getAllRows");
        assert_eq!(spec.results.len(), 2);
        assert!(spec.receiver.is_some());
        assert_eq!(spec.body.len(), 2);
    }

    #[test]
    fn test_walk_statements_descends_into_blocks() {
        let spec = FunctionSpec::new("f").statement(Statement::for_range(
            "_",
            "d",
            Expr::ident("rows"),
            vec![Statement::if_(
                Expr::ident("err").not_eq(Expr::Nil),
                vec![Statement::return_([Expr::ident("err")])],
            )],
        ));

        let mut count = 0;
        spec.walk_statements(&mut |_| count += 1);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_walk_types_covers_signature_and_body() {
        let spec = sample();
        let mut names = Vec::new();
        spec.walk_types(&mut |t| {
            if let TypeRef::Named(name) = t {
                names.push(name.as_str());
            }
        });
        assert_eq!(names, ["TodoService", "dbTodo", "dbTodo"]);
    }

    #[test]
    fn test_walk_exprs() {
        let spec = sample();
        let mut idents = Vec::new();
        spec.walk_exprs(&mut |e| {
            if let Expr::Ident(name) = e {
                idents.push(name.as_str());
            }
        });
        assert_eq!(idents, ["dtdRows"]);
    }

    #[test]
    fn test_statement_constructors() {
        let stmt = Statement::define_many(["jsLinks", "pages"], Expr::ident("x"));
        let Statement::Define { names, .. } = &stmt else {
            panic!("expected definition");
        };
        assert_eq!(names, &["jsLinks", "pages"]);
        assert!(Statement::comment("note").exprs().is_empty());
    }
}
