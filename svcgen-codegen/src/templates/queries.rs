//! Methods that query the storage.

use super::{err, id, method, names, ptr, ptr_slice, recv};
use crate::{
    builder::{Declaration, Expr, MethodCall, Statement, TypeRef},
    symbols::{Role, SymbolTable},
};

const DISCARDED_ERROR: &str = "query error is discarded, check it before relying on the row";

/// `s.Dbh.Select(<columns>...).From(<table>)`, followed by `tail`.
fn select(
    symbols: &SymbolTable,
    columns: Expr,
    tail: impl IntoIterator<Item = MethodCall>,
) -> Expr {
    let table = Expr::ident(symbols.get(Role::TableConst));
    let mut calls = vec![
        MethodCall::new("Select", [columns.spread()]),
        MethodCall::new("From", [table]),
    ];
    calls.extend(tail);
    recv().field(names::DBH).chain(calls)
}

fn where_id() -> MethodCall {
    MethodCall::new("Where", [Expr::string(names::WHERE_PLACEHOLDER), id()])
}

fn query_struct(row: &str) -> MethodCall {
    MethodCall::new("QueryStruct", [Expr::ident(row)])
}

fn all_columns(symbols: &SymbolTable) -> Expr {
    Expr::ident(symbols.get(Role::ColumnsVar))
}

fn empty_row(symbols: &SymbolTable) -> Expr {
    Expr::empty(TypeRef::named(symbols.get(Role::DbStructName))).addr()
}

/// `s.buildResource(id, s.dbToResourceAttributes(<row>))`
fn build_from_row(row: Expr) -> Expr {
    let attributes = recv().method(names::DB_TO_RESOURCE_ATTRIBUTES, [row]);
    recv().method(names::BUILD_RESOURCE, [id(), attributes])
}

/// Existence check. Only the query error is reported.
pub fn exists_resource(symbols: &SymbolTable) -> Vec<Declaration> {
    let tail = [where_id(), MethodCall::new("Exec", [])];
    let query = select(symbols, all_columns(symbols), tail);

    let func = method(symbols, names::EXISTS_RESOURCE)
        .doc("-- Functions that queries the storage and generates resource object")
        .param("id", TypeRef::int())
        .returns(TypeRef::error())
        .statement(Statement::define_many(["_", "err"], query))
        .statement(Statement::return_([err()]));

    vec![func.into()]
}

pub fn get_resource_with_selected_attr(symbols: &SymbolTable) -> Vec<Declaration> {
    let row = symbols.get(Role::ReceiverVarName);
    let tail = [where_id(), query_struct(row)];
    let query = select(symbols, Expr::ident("columns"), tail);

    let fields = recv().field(names::PARAMS).field(names::FIELDS);
    let columns = recv().method(names::MAP_FIELDS_TO_COLUMNS, [fields]);
    let payload = Expr::empty(TypeRef::named(symbols.get(Role::PayloadType))).addr();
    let on_error = vec![Statement::return_([payload, err()])];
    let resource = build_from_row(Expr::ident(row));

    let func = method(symbols, names::GET_RESOURCE_WITH_SELECTED_ATTR)
        .param("id", TypeRef::int())
        .returns(ptr(symbols, Role::PayloadType))
        .returns(TypeRef::error())
        .statement(Statement::define(row, empty_row(symbols)))
        .statement(Statement::define("columns", columns))
        .statement(Statement::define("err", query))
        .statement(Statement::if_(err().not_eq(Expr::Nil), on_error))
        .statement(Statement::return_([resource, Expr::Nil]));

    vec![func.into()]
}

/// Unlike [`get_resource_with_selected_attr`], the query error is dropped.
pub fn get_resource(symbols: &SymbolTable) -> Vec<Declaration> {
    let row = symbols.get(Role::ReceiverVarName);
    let tail = [where_id(), query_struct(row)];
    let query = select(symbols, all_columns(symbols), tail);
    let resource = build_from_row(Expr::ident(row));

    let func = method(symbols, names::GET_RESOURCE)
        .param("id", TypeRef::int())
        .returns(ptr(symbols, Role::PayloadType))
        .returns(TypeRef::error())
        .statement(Statement::define(row, empty_row(symbols)))
        .statement(Statement::comment(DISCARDED_ERROR))
        .statement(Statement::assign(Expr::ident("_"), query))
        .statement(Statement::return_([resource, Expr::Nil]));

    vec![func.into()]
}

pub fn get_all_rows(symbols: &SymbolTable) -> Vec<Declaration> {
    let rows = symbols.get(Role::RowsVarName);
    let into_rows = Expr::ident(rows).addr();
    let query = select(
        symbols,
        all_columns(symbols),
        [MethodCall::new("QueryStructs", [into_rows])],
    );

    let func = method(symbols, names::GET_ALL_ROWS)
        .doc("-- Functions that queries the storage and generates database mapped objects")
        .returns(ptr_slice(symbols, Role::DbStructName))
        .returns(TypeRef::error())
        .statement(Statement::var(rows, ptr_slice(symbols, Role::DbStructName)))
        .statement(Statement::define("err", query))
        .statement(Statement::return_([Expr::ident(rows), err()]));

    vec![func.into()]
}
