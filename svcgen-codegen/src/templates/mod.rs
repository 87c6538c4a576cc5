//! The declaration template library.
//!
//! Each template is a pure function from the [`SymbolTable`] to one or more
//! declarations. [`TEMPLATES`] lists them in the order they appear in the
//! generated module.
//!
//! Templates never derive names themselves: service-dependent names come
//! from the table, fixed method and helper names from [`names`], and
//! everything else is an explicit placeholder.

mod any;
mod collection;
mod constructor;
mod converters;
pub mod names;
mod queries;
mod resource;
mod storage;

use crate::{
    builder::{Declaration, Expr, FunctionSpec, TypeRef},
    symbols::{Role, SymbolTable},
};

/// A pure function producing declarations from the symbol table.
pub type Template = fn(&SymbolTable) -> Vec<Declaration>;

/// All templates, named, in output order.
pub const TEMPLATES: &[(&str, Template)] = &[
    ("storage", storage::storage),
    ("service", storage::service),
    ("constructor", constructor::constructor),
    ("exists_resource", queries::exists_resource),
    (
        "get_resource_with_selected_attr",
        queries::get_resource_with_selected_attr,
    ),
    ("get_resource", queries::get_resource),
    ("get_all_rows", queries::get_all_rows),
    ("converters", converters::converters),
    ("build_resource", resource::build_resource),
    (
        "build_resource_relationships",
        resource::build_resource_relationships,
    ),
    ("collection", collection::collection),
    ("convert_all_to_any", any::convert_all_to_any),
];

/// A method on the generated service struct.
fn method(symbols: &SymbolTable, name: &str) -> FunctionSpec {
    FunctionSpec::new(name).receiver(
        names::RECEIVER,
        TypeRef::pointer_to(symbols.get(Role::ServiceStructName)),
    )
}

/// The method receiver as an expression.
fn recv() -> Expr {
    Expr::ident(names::RECEIVER)
}

fn err() -> Expr {
    Expr::ident("err")
}

fn id() -> Expr {
    Expr::ident("id")
}

/// `*T` for the type named by `role`.
fn ptr(symbols: &SymbolTable, role: Role) -> TypeRef {
    TypeRef::pointer_to(symbols.get(role))
}

/// `[]*T` for the type named by `role`.
fn ptr_slice(symbols: &SymbolTable, role: Role) -> TypeRef {
    TypeRef::slice(ptr(symbols, role))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use svcgen_core::ServiceDescriptor;

    use super::*;
    use crate::builder::{DeclarationKind, Statement};

    pub(super) fn todo() -> SymbolTable {
        SymbolTable::derive(&ServiceDescriptor::new("todo", "td").unwrap())
    }

    fn all(symbols: &SymbolTable) -> Vec<Declaration> {
        TEMPLATES.iter().flat_map(|(_, t)| t(symbols)).collect()
    }

    pub(super) fn find<'a>(decls: &'a [Declaration], name: &str) -> &'a FunctionSpec {
        decls
            .iter()
            .find_map(|d| match d {
                Declaration::Func(f) if f.name == name => Some(f),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_declaration_order() {
        let decls = all(&todo());
        let order: Vec<_> = decls.iter().map(Declaration::name).collect();
        assert_eq!(
            order,
            [
                "todoDbTable",
                "todoCols",
                "dbTodo",
                "TodoService",
                "NewTodoService",
                "existsResource",
                "getResourceWithSelectedAttr",
                "getResource",
                "getAllRows",
                "dbToResourceAttributes",
                "attrTodbTodo",
                "buildResourceData",
                "buildResource",
                "buildResourceRelationships",
                "dbToCollResourceData",
                "dbToCollResource",
                "dbToCollResourceWithPagination",
                "dbToCollResourceWithRelAndPagination",
                "convertAllToAny",
            ]
        );
    }

    #[test]
    fn test_templates_are_pure() {
        let symbols = todo();
        assert_eq!(all(&symbols), all(&symbols));
    }

    #[test]
    fn test_section_comments() {
        let decls = all(&todo());
        let documented: Vec<_> = decls
            .iter()
            .filter_map(|d| d.doc().map(|doc| (d.name(), doc)))
            .collect();
        assert_eq!(documented.len(), 5);
        assert_eq!(documented[0], ("NewTodoService", "-- Constructor"));
        assert_eq!(documented[1].0, "existsResource");
        assert_eq!(documented[2].0, "getAllRows");
        assert_eq!(documented[3].0, "dbToResourceAttributes");
        assert_eq!(documented[4].0, "buildResourceData");
    }

    #[test]
    fn test_every_called_method_is_declared() {
        let decls = all(&todo());
        let declared: BTreeSet<_> = decls.iter().map(Declaration::name).collect();
        let helpers = [
            names::GET_RESOURCE_NAME,
            names::GEN_RESOURCE_SELF_LINK,
            names::GEN_COLL_RESOURCE_SELF_LINK,
            names::GET_PAGINATION,
            names::MAP_FIELDS_TO_COLUMNS,
        ];

        for decl in &decls {
            decl.walk_exprs(&mut |expr| {
                let Expr::Call { callee, .. } = expr else {
                    return;
                };
                let Expr::Field { base, name } = callee.as_ref() else {
                    return;
                };
                if matches!(base.as_ref(), Expr::Ident(b) if b == names::RECEIVER) {
                    let name = name.as_str();
                    assert!(
                        declared.contains(name) || helpers.contains(&name),
                        "{name} is called but never declared"
                    );
                }
            });
        }
    }

    #[test]
    fn test_no_dangling_type_references() {
        let symbols = todo();
        let decls = all(&symbols);
        let declared: BTreeSet<_> = decls
            .iter()
            .filter(|d| d.kind() == DeclarationKind::Type)
            .map(Declaration::name)
            .collect();
        let packages = [
            "aphgrpc",
            "jsonapi",
            "runner",
            "any",
            symbols.get(Role::ProtoPackage),
        ];

        for decl in &decls {
            decl.walk_types(&mut |ty| {
                if let TypeRef::Named(name) = ty {
                    let qualified = name
                        .split_once('.')
                        .is_some_and(|(pkg, _)| packages.contains(&pkg));
                    let known = symbols.contains_value(name) || declared.contains(name.as_str());
                    assert!(
                        known || qualified,
                        "{name} in {} does not resolve",
                        decl.name()
                    );
                }
            });
        }
    }

    #[test]
    fn test_methods_use_shared_receiver() {
        let decls = all(&todo());
        for decl in decls.iter().skip(5) {
            let Declaration::Func(f) = decl else {
                panic!("{} is not a function", decl.name());
            };
            let recv = f.receiver.as_ref().unwrap();
            assert_eq!(recv.name, "s");
            assert_eq!(recv.ty, TypeRef::pointer_to("TodoService"));
        }
    }

    #[test]
    fn test_comments_flag_documented_asymmetries() {
        let decls = all(&todo());
        for name in [names::GET_RESOURCE, names::DB_TO_COLL_RESOURCE_DATA] {
            let mut comments = 0;
            find(&decls, name).walk_statements(&mut |s| {
                if matches!(s, Statement::Comment(_)) {
                    comments += 1;
                }
            });
            assert_eq!(comments, 1, "{name}");
        }
    }
}
