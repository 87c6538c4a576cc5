//! Module assembly.

use tracing::{debug, trace};

use crate::{
    builder::{Declaration, Import, ImportSet},
    symbols::{Role, SymbolTable},
    templates::TEMPLATES,
};

/// Import path of the gRPC helper package.
pub const HELPER_IMPORT: &str = "github.com/dictyBase/apihelpers/aphgrpc";
/// Import path of the protobuf `ptypes` package.
pub const PTYPES_IMPORT: &str = "github.com/golang/protobuf/ptypes";
/// Import path of the protobuf `any` package.
pub const ANY_IMPORT: &str = "github.com/golang/protobuf/ptypes/any";
/// Import path of the SQL runner, imported as `runner`.
pub const RUNNER_IMPORT: &str = "gopkg.in/mgutz/dat.v1/sqlx-runner";

/// One complete generated compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModule {
    pub package: String,
    pub imports: ImportSet,
    pub declarations: Vec<Declaration>,
}

impl GeneratedModule {
    /// Assemble every template's output, in order, under `package`.
    pub fn assemble(symbols: &SymbolTable, package: impl Into<String>) -> Self {
        let mut declarations = Vec::new();
        for (name, template) in TEMPLATES {
            let produced = template(symbols);
            let count = produced.len();
            trace!(template = name, count, "applied template");
            declarations.extend(produced);
        }

        let imports: ImportSet = [
            Import::new(HELPER_IMPORT),
            Import::new(symbols.get(Role::ProtoImportPath)),
            Import::new(symbols.get(Role::JsonApiImportPath)),
            Import::new(PTYPES_IMPORT),
            Import::new(ANY_IMPORT),
            Import::aliased(RUNNER_IMPORT, "runner"),
        ]
        .into_iter()
        .collect();

        let module = Self {
            package: package.into(),
            imports,
            declarations,
        };
        debug!(
            package = %module.package,
            declarations = module.declarations.len(),
            imports = module.imports.len(),
            "assembled module"
        );
        module
    }
}

/// Serializes a [`GeneratedModule`] to source text.
pub trait ModuleRenderer {
    fn render_module(&self, module: &GeneratedModule) -> String;
}
