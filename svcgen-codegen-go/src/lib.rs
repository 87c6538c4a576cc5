//! Go code generator for svcgen.
//!
//! Renders the module assembled by `svcgen-codegen` as a single Go source
//! file backing an `aphgrpc` based gRPC service.

mod generator;
mod naming;
mod renderer;
mod type_mapper;

pub use generator::Generator;
pub use naming::GO_NAMING;
pub use renderer::GoRenderer;
pub use type_mapper::GoTypeMapper;
