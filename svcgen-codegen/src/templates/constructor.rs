use super::names;
use crate::{
    builder::{Declaration, Expr, FunctionSpec, Statement, TypeRef},
    symbols::{Role, SymbolTable},
};

/// `New<Service>Service(dbh, pathPrefix)`.
pub fn constructor(symbols: &SymbolTable) -> Vec<Declaration> {
    let service_struct = symbols.get(Role::ServiceStructName);
    let strings = || TypeRef::slice(TypeRef::string());
    let placeholder_list = |ty: TypeRef, name: &str| Expr::list(ty, [Expr::string(name)]);

    let resource = Expr::string(symbols.get(Role::ResourceName));
    let includes = placeholder_list(strings(), names::INCLUDES_PLACEHOLDER);
    let string_map = TypeRef::map(TypeRef::string(), TypeRef::string());
    let columns = placeholder_list(string_map, names::FIELD_COLUMNS_PLACEHOLDER);
    let required = placeholder_list(strings(), names::REQUIRED_ATTRS_PLACEHOLDER);
    let fields = [
        ("Resource", resource),
        (names::DBH, Expr::ident("dbh")),
        ("PathPrefix", Expr::ident("pathPrefix")),
        ("Include", includes),
        ("FilToColumns", columns),
        ("ReqAttrs", required),
    ];
    let helper = Expr::composite(TypeRef::named(names::HELPER_SERVICE), fields).addr();
    let service = Expr::list(TypeRef::named(service_struct), [helper]).addr();

    let func = FunctionSpec::new(symbols.get(Role::ConstructorName))
        .doc("-- Constructor")
        .param("dbh", TypeRef::pointer_to(names::RUNNER_DB))
        .param("pathPrefix", TypeRef::string())
        .returns(TypeRef::pointer_to(service_struct))
        .statement(Statement::return_([service]));

    vec![func.into()]
}
