//! Storage scaffolding and the service struct.

use super::names;
use crate::{
    builder::{ConstSpec, Declaration, Expr, FieldSpec, StructSpec, TypeRef, VarSpec},
    symbols::{Role, SymbolTable},
};

/// Table-name constant, column list and the row-shape struct.
pub fn storage(symbols: &SymbolTable) -> Vec<Declaration> {
    let table = Expr::string(names::TABLE_NAME_PLACEHOLDER);
    let columns = [Expr::string(names::COLUMNS_PLACEHOLDER)];
    let columns = Expr::list(TypeRef::slice(TypeRef::string()), columns);
    vec![
        ConstSpec::new(symbols.get(Role::TableConst), table).into(),
        VarSpec::new(symbols.get(Role::ColumnsVar), columns).into(),
        StructSpec::new(symbols.get(Role::DbStructName)).into(),
    ]
}

/// The service struct embedding the helper service.
pub fn service(symbols: &SymbolTable) -> Vec<Declaration> {
    let name = symbols.get(Role::ServiceStructName);
    let helper = FieldSpec::embedded(TypeRef::pointer_to(names::HELPER_SERVICE));
    vec![StructSpec::new(name).field(helper).into()]
}
