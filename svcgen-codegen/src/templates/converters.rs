//! Row <-> attribute converters. Both bodies are left for the user.

use super::{method, names, ptr};
use crate::{
    builder::{Declaration, Expr, Statement, TypeRef},
    symbols::{Role, SymbolTable},
};

const SECTION: &str =
    "Functions that generates resource objects or parts of it from database mapped objects";

pub fn converters(symbols: &SymbolTable) -> Vec<Declaration> {
    let attributes = Expr::empty(TypeRef::named(symbols.get(Role::AttributesType))).addr();
    let to_attributes = method(symbols, names::DB_TO_RESOURCE_ATTRIBUTES)
        .doc(SECTION)
        .param(
            symbols.get(Role::ReceiverVarName),
            ptr(symbols, Role::DbStructName),
        )
        .returns(ptr(symbols, Role::AttributesType))
        .statement(Statement::return_([attributes]));

    let row = Expr::empty(TypeRef::named(symbols.get(Role::DbStructName))).addr();
    let to_row = method(symbols, symbols.get(Role::AttrToRowFunc))
        .param("attr", ptr(symbols, Role::AttributesType))
        .returns(ptr(symbols, Role::DbStructName))
        .statement(Statement::return_([row]));

    vec![to_attributes.into(), to_row.into()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::tests::{find, todo};

    #[test]
    fn test_converters_return_empty_values() {
        let decls = converters(&todo());
        let to_row = find(&decls, "attrTodbTodo");
        let attributes = TypeRef::pointer_to("todo.TodoAttributes");
        assert_eq!(to_row.params[0].ty, attributes);

        let row = Expr::empty(TypeRef::named("dbTodo")).addr();
        assert_eq!(to_row.body, [Statement::return_([row])]);

        let to_attributes = find(&decls, "dbToResourceAttributes");
        assert_eq!(to_attributes.params[0].name, "dtd");
        assert_eq!(to_attributes.results, [attributes]);
    }

    #[test]
    fn test_section_comment_has_no_marker() {
        let decls = converters(&todo());
        assert_eq!(decls[0].doc(), Some(SECTION));
        assert!(!SECTION.starts_with("--"));
    }
}
