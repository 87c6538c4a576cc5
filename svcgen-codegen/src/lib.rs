//! Language-neutral code generation for svcgen.
//!
//! This crate turns a resolved service descriptor into a structured module:
//!
//! - [`builder`] - Declaration model (Expr, Statement, TypeRef, ...) and CodeBuilder
//! - [`symbols`] - Identifier derivation ([`SymbolTable`])
//! - [`templates`] - The ordered declaration template library
//! - [`module`] - Assembly into a [`GeneratedModule`]
//! - [`naming`] - Reserved-word escaping for target languages
//!
//! Target-language syntax lives in the renderer crates.

pub mod builder;
pub mod module;
pub mod naming;
pub mod symbols;
pub mod templates;

pub use module::{GeneratedModule, ModuleRenderer};
pub use naming::NamingConvention;
pub use symbols::{Role, SymbolTable};
