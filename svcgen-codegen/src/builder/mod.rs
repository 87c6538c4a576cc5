//! Code generation building blocks.
//!
//! This module provides the language-neutral pieces templates build with
//! and renderers walk:
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`Indent`] - Indentation configuration
//! - [`ImportSet`] - Deduplicated, sorted package imports
//!
//! # Declaration Model
//!
//! - [`Declaration`] - One named top-level construct (const, var, type, func)
//! - [`FunctionSpec`], [`Statement`] - Function and method bodies
//! - [`StructSpec`] - Type definitions
//! - [`Expr`] - Expressions, rendered per language via [`Renderer`]
//! - [`TypeRef`] - Type references, rendered per language via [`TypeMapper`]

mod code_builder;
mod declaration;
mod expr;
mod function;
mod imports;
mod indent;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use declaration::{ConstSpec, Declaration, DeclarationKind, VarSpec};
pub use expr::{BinaryOp, Expr, MethodCall, RenderOptions, Renderer};
pub use function::{FunctionSpec, ParamSpec, Receiver, Statement};
pub use imports::{Import, ImportSet};
pub use indent::Indent;
pub use structure::{FieldSpec, StructSpec};
pub use types::{PrimitiveType, TypeMapper, TypeRef};
