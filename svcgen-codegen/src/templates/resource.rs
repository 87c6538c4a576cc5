//! Builders for a single resource.

use super::{id, method, names, ptr, recv};
use crate::{
    builder::{Declaration, Expr, Statement, TypeRef},
    symbols::{Role, SymbolTable},
};

const DATA_SECTION: &str =
    "-- Functions that builds up the various parts of the final user resource objects";

/// `buildResourceData` and `buildResource`.
pub fn build_resource(symbols: &SymbolTable) -> Vec<Declaration> {
    let data_type = symbols.get(Role::DataType);
    let payload_type = symbols.get(Role::PayloadType);
    let attr = || Expr::ident("attr");

    let self_link = recv().method(names::GEN_RESOURCE_SELF_LINK, [id()]);
    let links = Expr::composite(TypeRef::named(names::LINKS), [("Self", self_link)]);
    let relationships = TypeRef::placeholder(names::RELATIONSHIPS_PLACEHOLDER);
    let fields = [
        ("Type", recv().method(names::GET_RESOURCE_NAME, [])),
        ("Id", id()),
        ("Attributes", attr()),
        ("Links", links.addr()),
        ("Relationships", Expr::empty(relationships).addr()),
    ];
    let resource_data = Expr::composite(TypeRef::named(data_type), fields).addr();

    let data = method(symbols, names::BUILD_RESOURCE_DATA)
        .doc(DATA_SECTION)
        .param("id", TypeRef::int())
        .param("attr", ptr(symbols, Role::AttributesType))
        .returns(TypeRef::pointer_to(data_type))
        .statement(Statement::return_([resource_data]));

    let build = recv().method(names::BUILD_RESOURCE_DATA, [id(), attr()]);
    let resource = Expr::composite(TypeRef::named(payload_type), [("Data", build)]).addr();

    let payload = method(symbols, names::BUILD_RESOURCE)
        .param("id", TypeRef::int())
        .param("attr", ptr(symbols, Role::AttributesType))
        .returns(TypeRef::pointer_to(payload_type))
        .statement(Statement::return_([resource]));

    vec![data.into(), payload.into()]
}

/// Attaches an empty set of included resources to the payload.
pub fn build_resource_relationships(symbols: &SymbolTable) -> Vec<Declaration> {
    let payload = symbols.get(Role::ProtoPackage);
    let any_slice = TypeRef::slice(TypeRef::pointer_to(names::ANY));
    let included = Expr::ident(payload).field("Included");

    let func = method(symbols, names::BUILD_RESOURCE_RELATIONSHIPS)
        .param("id", TypeRef::int())
        .param(payload, ptr(symbols, Role::PayloadType))
        .returns(TypeRef::error())
        .statement(Statement::var("allInc", any_slice))
        .statement(Statement::assign(included, Expr::ident("allInc")))
        .statement(Statement::return_([Expr::Nil]));

    vec![func.into()]
}
