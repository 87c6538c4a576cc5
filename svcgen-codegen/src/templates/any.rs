use super::{err, method, names, ptr_slice};
use crate::{
    builder::{Declaration, Expr, Statement, TypeRef},
    symbols::{Role, SymbolTable},
};

/// Packs every data object into an `any.Any`.
///
/// The result slice is allocated with the input's length, so an empty input
/// yields an empty result and the marshal call is the only error source.
pub fn convert_all_to_any(symbols: &SymbolTable) -> Vec<Declaration> {
    let items = symbols.get(Role::ResourceName);
    let any_slice = || TypeRef::slice(TypeRef::pointer_to(names::ANY));
    let aslice = || Expr::ident("aslice");

    let allocate = Expr::make_slice(any_slice(), Expr::len(Expr::ident(items)));
    let marshal = Expr::ident(names::PTYPES).method(names::MARSHAL_ANY, [Expr::ident("u")]);
    let on_error = vec![Statement::return_([aslice(), err()])];
    let pack = vec![
        Statement::define_many(["pkg", "err"], marshal),
        Statement::if_(err().not_eq(Expr::Nil), on_error),
        Statement::assign(aslice().index(Expr::ident("i")), Expr::ident("pkg")),
    ];

    let func = method(symbols, names::CONVERT_ALL_TO_ANY)
        .param(items, ptr_slice(symbols, Role::DataType))
        .returns(any_slice())
        .returns(TypeRef::error())
        .statement(Statement::define("aslice", allocate))
        .statement(Statement::for_range("i", "u", Expr::ident(items), pack))
        .statement(Statement::return_([aslice(), Expr::Nil]));

    vec![func.into()]
}
