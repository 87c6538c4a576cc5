use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, Parser};
use eyre::{Context, Result};
use svcgen_codegen_go::Generator;
use svcgen_core::{DEFAULT_PACKAGE, DEFAULT_PROTO_ROOT, DescriptorInput};
use tracing::debug;

/// Extension trait for exiting on generator errors with the fixed exit code
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for svcgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                let code = e.exit_code();
                eprintln!("{}", e);
                debug!("{:?}", miette::Report::new(e));
                std::process::exit(code);
            }
        }
    }
}

/// Short alias accepted for `--short-service`.
const SHORT_SERVICE_ALIAS: &str = "-ss";

/// Rewrite the two-letter `-ss` alias to `--short-service`.
///
/// Arguments after a literal `--` are left alone.
pub(crate) fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut rest = false;
    args.into_iter()
        .map(|arg| {
            if rest {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                rest = true;
                arg
            } else if s == SHORT_SERVICE_ALIAS {
                OsString::from("--short-service")
            } else if let Some(value) = s.strip_prefix("-ss=") {
                OsString::from(format!("--short-service={}", value))
            } else {
                arg
            }
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(name = "svcgen")]
#[command(version)]
#[command(about = "Generates code for implementing grpc server")]
pub(crate) struct Cli {
    /// service name
    #[arg(short, long)]
    pub service: Option<String>,

    /// short name of the service (also accepted as -ss)
    #[arg(long)]
    pub short_service: Option<String>,

    /// package name
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// output file name, by default printed to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// root import path of the protocol packages
    #[arg(long, default_value = DEFAULT_PROTO_ROOT)]
    pub proto_root: String,

    /// print the derived symbol table as JSON instead of the module
    #[arg(long)]
    pub print_symbols: bool,

    /// raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn descriptor_input(&self) -> DescriptorInput {
        DescriptorInput {
            service: self.service.clone(),
            short_service: self.short_service.clone(),
            package: Some(self.package.clone()),
            output: self.output.clone(),
            proto_root: Some(self.proto_root.clone()),
        }
    }

    /// Resolve, generate and write. The output is opened only after the
    /// descriptor is valid.
    pub fn run(&self) -> Result<()> {
        let descriptor = self.descriptor_input().resolve().unwrap_or_exit();
        let output = descriptor.output().open().unwrap_or_exit();
        let generator = Generator::new(&descriptor);

        if self.print_symbols {
            let mut json = serde_json::to_string_pretty(generator.symbols())
                .wrap_err("Failed to serialize symbol table")?;
            json.push('\n');
            output.emit(json.as_bytes()).unwrap_or_exit();
        } else {
            generator.write(output).unwrap_or_exit();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn parse(list: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args(list)))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_short_service_alias() {
        assert_eq!(
            normalize_args(args(&["svcgen", "-ss", "td", "-s", "todo"])),
            args(&["svcgen", "--short-service", "td", "-s", "todo"])
        );
        assert_eq!(
            normalize_args(args(&["svcgen", "-ss=td"])),
            args(&["svcgen", "--short-service=td"])
        );
        assert_eq!(
            normalize_args(args(&["svcgen", "--", "-ss"])),
            args(&["svcgen", "--", "-ss"])
        );
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["svcgen", "-s", "todo", "-ss", "td", "-o", "out.go", "-vv"]);
        assert_eq!(cli.service.as_deref(), Some("todo"));
        assert_eq!(cli.short_service.as_deref(), Some("td"));
        assert_eq!(cli.output, Some(PathBuf::from("out.go")));
        assert_eq!(cli.package, "server");
        assert_eq!(cli.proto_root, DEFAULT_PROTO_ROOT);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.print_symbols);
    }

    #[test]
    fn test_missing_flags_parse_and_fail_in_resolver() {
        let cli = parse(&["svcgen", "--short-service", "td"]);
        let err = cli.descriptor_input().resolve().unwrap_err();
        assert_eq!(err.to_string(), "option service is not set");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_blank_package_falls_back_to_default() {
        let cli = parse(&["svcgen", "-s", "todo", "-ss", "td", "-p", "  "]);
        let descriptor = cli.descriptor_input().resolve().unwrap();
        assert_eq!(descriptor.package(), "server");
    }
}
