mod cli;
mod logging;

use clap::Parser;
use eyre::Result;

use crate::cli::{Cli, normalize_args};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    logging::init(cli.verbose);
    cli.run()
}
