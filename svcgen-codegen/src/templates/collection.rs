//! Builders for resource collections.

use super::{method, names, ptr, ptr_slice, recv};
use crate::{
    builder::{Declaration, Expr, FunctionSpec, Statement, TypeRef},
    symbols::{Role, SymbolTable},
};

pub fn collection(symbols: &SymbolTable) -> Vec<Declaration> {
    vec![
        coll_resource_data(symbols).into(),
        coll_resource(symbols).into(),
        paginated(symbols, false).into(),
        paginated(symbols, true).into(),
    ]
}

fn rows_param(symbols: &SymbolTable, func: FunctionSpec) -> FunctionSpec {
    func.param(
        symbols.get(Role::RowsVarName),
        ptr_slice(symbols, Role::DbStructName),
    )
}

fn rows(symbols: &SymbolTable) -> Expr {
    Expr::ident(symbols.get(Role::RowsVarName))
}

fn coll_resource_data(symbols: &SymbolTable) -> FunctionSpec {
    let row = Expr::ident("d");
    let id = row.clone().field(names::ROW_ID_PLACEHOLDER);
    let attributes = recv().method(names::DB_TO_RESOURCE_ATTRIBUTES, [row]);
    let build = recv().method(names::BUILD_RESOURCE_DATA, [id, attributes]);
    let append = Expr::append(Expr::ident("dslice"), [build]);
    let note = format!(
        "d.{} is a placeholder, replace it with the row id field",
        names::ROW_ID_PLACEHOLDER
    );
    let body = vec![
        Statement::comment(note),
        Statement::assign(Expr::ident("dslice"), append),
    ];

    let data_slice = ptr_slice(symbols, Role::DataType);
    let func = method(symbols, names::DB_TO_COLL_RESOURCE_DATA);
    rows_param(symbols, func)
        .returns(data_slice.clone())
        .statement(Statement::var("dslice", data_slice))
        .statement(Statement::for_range("_", "d", rows(symbols), body))
        .statement(Statement::return_([Expr::ident("dslice")]))
}

fn self_links(link: Expr) -> Expr {
    Expr::composite(TypeRef::named(names::LINKS), [("Self", link)]).addr()
}

fn coll_resource(symbols: &SymbolTable) -> FunctionSpec {
    let collection_type = TypeRef::named(symbols.get(Role::CollectionType));
    let data = recv().method(names::DB_TO_COLL_RESOURCE_DATA, [rows(symbols)]);
    let links = self_links(recv().method(names::GEN_COLL_RESOURCE_SELF_LINK, []));
    let fields = [("Data", data), ("Links", links)];
    let collection = Expr::composite(collection_type, fields).addr();

    let func = method(symbols, names::DB_TO_COLL_RESOURCE);
    rows_param(symbols, func)
        .returns(ptr(symbols, Role::CollectionType))
        .statement(Statement::return_([collection]))
}

/// The paginated collection builders. With `relations`, the collection also
/// carries included resources and the method reports an error.
fn paginated(symbols: &SymbolTable, relations: bool) -> FunctionSpec {
    let name = if relations {
        names::DB_TO_COLL_RESOURCE_WITH_REL_AND_PAGINATION
    } else {
        names::DB_TO_COLL_RESOURCE_WITH_PAGINATION
    };
    let count = || Expr::ident("count");
    let pagenum = || Expr::ident("pagenum");
    let pagesize = || Expr::ident("pagesize");

    let pagination = [
        ("Records", count()),
        ("Total", Expr::ident("pages")),
        ("Size", pagesize()),
        ("Number", pagenum()),
    ];
    let pagination = Expr::composite(TypeRef::named(names::PAGINATION), pagination).addr();
    let meta_fields = [("Pagination", pagination)];
    let meta = Expr::composite(TypeRef::named(names::META), meta_fields).addr();

    let mut fields = vec![
        ("Data", Expr::ident("dslice")),
        ("Links", Expr::ident("jsLinks")),
    ];
    if relations {
        let included = Expr::placeholder(names::RELATIONS_OBJECT_PLACEHOLDER);
        fields.push(("Included", included));
    }
    fields.push(("Meta", meta));

    let collection_type = TypeRef::named(symbols.get(Role::CollectionType));
    let mut result = vec![Expr::composite(collection_type, fields).addr()];
    if relations {
        result.push(Expr::Nil);
    }

    let mut func = method(symbols, name).param("count", TypeRef::int());
    func = rows_param(symbols, func)
        .param("pagenum", TypeRef::int())
        .param("pagesize", TypeRef::int())
        .returns(ptr(symbols, Role::CollectionType));
    if relations {
        func = func.returns(TypeRef::error());
    }

    let dslice = recv().method(names::DB_TO_COLL_RESOURCE_DATA, [rows(symbols)]);
    let pages = recv().method(names::GET_PAGINATION, [count(), pagenum(), pagesize()]);
    func.statement(Statement::define("dslice", dslice))
        .statement(Statement::define_many(["jsLinks", "pages"], pages))
        .statement(Statement::Return(result))
}
