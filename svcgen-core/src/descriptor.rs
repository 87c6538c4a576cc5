//! Descriptor resolution.
//!
//! A [`ServiceDescriptor`] is the fully validated input of one generation
//! run. It is built once from raw [`DescriptorInput`] values and never
//! mutated afterwards.

use std::path::PathBuf;

use tracing::debug;

use crate::{Error, OutputTarget, Result};

/// Package name used when none is given.
pub const DEFAULT_PACKAGE: &str = "server";

/// Root import path of the generated protocol packages.
pub const DEFAULT_PROTO_ROOT: &str = "github.com/dictyBase/go-genproto/dictybaseapis";

/// Raw, unvalidated descriptor fields as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct DescriptorInput {
    pub service: Option<String>,
    pub short_service: Option<String>,
    pub package: Option<String>,
    pub output: Option<PathBuf>,
    pub proto_root: Option<String>,
}

impl DescriptorInput {
    /// Validate the input and apply defaults.
    ///
    /// Surrounding whitespace is trimmed and a blank value counts as absent.
    /// `service` is checked before `short-service`.
    pub fn resolve(self) -> Result<ServiceDescriptor> {
        let service = required(self.service, "service")?;
        let short_service = required(self.short_service, "short-service")?;
        let package = non_blank(self.package).unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
        let proto_root = non_blank(self.proto_root)
            .map(|root| root.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_PROTO_ROOT.to_string());
        let output = match self.output.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        };

        debug!(%service, %short_service, %package, %proto_root, ?output, "resolved descriptor");

        Ok(ServiceDescriptor {
            service,
            short_service,
            package,
            proto_root,
            output,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    non_blank(value).ok_or(Error::MissingField { name })
}

/// The validated input of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    service: String,
    short_service: String,
    package: String,
    proto_root: String,
    output: OutputTarget,
}

impl ServiceDescriptor {
    /// Resolve a descriptor from the two required names, using defaults
    /// for everything else.
    pub fn new(service: impl Into<String>, short_service: impl Into<String>) -> Result<Self> {
        DescriptorInput {
            service: Some(service.into()),
            short_service: Some(short_service.into()),
            ..Default::default()
        }
        .resolve()
    }

    /// Service token, e.g. `todo`.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Abbreviated service token, e.g. `td`.
    pub fn short_service(&self) -> &str {
        &self.short_service
    }

    /// Name of the generated module's package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Import path under which protocol packages live.
    pub fn proto_root(&self) -> &str {
        &self.proto_root
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }
}
