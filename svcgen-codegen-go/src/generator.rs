use svcgen_codegen::{GeneratedModule, ModuleRenderer, SymbolTable};
use svcgen_core::{Output, Result, ServiceDescriptor};
use tracing::debug;

use crate::GoRenderer;

/// Go code generator for one service descriptor.
///
/// The symbol table is derived once, when the generator is created, and
/// shared read-only by everything it produces.
pub struct Generator<'a> {
    descriptor: &'a ServiceDescriptor,
    symbols: SymbolTable,
}

impl<'a> Generator<'a> {
    pub fn new(descriptor: &'a ServiceDescriptor) -> Self {
        Self {
            descriptor,
            symbols: SymbolTable::derive(descriptor),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Assemble the module under the descriptor's package name.
    pub fn module(&self) -> GeneratedModule {
        GeneratedModule::assemble(&self.symbols, self.descriptor.package())
    }

    /// Render the module to Go source.
    pub fn render(&self) -> String {
        let source = GoRenderer::new().render_module(&self.module());
        debug!(bytes = source.len(), "rendered go module");
        source
    }

    /// Render the module and write it to `output`, releasing the stream.
    pub fn write(&self, output: Output) -> Result<()> {
        output.emit(self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use svcgen_codegen::Role;
    use svcgen_core::{DescriptorInput, OutputTarget};

    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let descriptor = ServiceDescriptor::new("todo", "td").unwrap();
        let generator = Generator::new(&descriptor);
        assert_eq!(generator.render(), generator.render());
        let fresh = Generator::new(&descriptor);
        assert_eq!(generator.render(), fresh.render());
    }

    #[test]
    fn test_package_clause() {
        let descriptor = DescriptorInput {
            service: Some("user".into()),
            short_service: Some("u".into()),
            package: Some("handlers".into()),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        let source = Generator::new(&descriptor).render();
        assert!(source.starts_with("package handlers\n\nimport (\n"));
        let constructor = "func NewUserService(dbh *runner.DB, pathPrefix string) *UserService {";
        assert!(source.contains(constructor));
    }

    #[test]
    fn test_symbols_flow_into_source() {
        let descriptor = ServiceDescriptor::new("todo", "td").unwrap();
        let generator = Generator::new(&descriptor);
        let source = generator.render();
        let roles = [
            Role::ConstructorName,
            Role::DbStructName,
            Role::RowsVarName,
            Role::AttrToRowFunc,
        ];
        for role in roles {
            let name = generator.symbols().get(role);
            assert!(source.contains(name), "{role} missing");
        }
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.go");
        let descriptor = ServiceDescriptor::new("todo", "td").unwrap();
        let generator = Generator::new(&descriptor);

        let output = OutputTarget::File(path.clone()).open().unwrap();
        generator.write(output).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, generator.render());
    }
}
