mod cli;
mod config;
mod error;
mod input;
mod logging;
mod repl;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use pdbtool_core::core::io::pdb::PdbFile;
use pdbtool_core::core::io::traits::StructureFile;
use pdbtool_core::workflows::session::Session;
use std::io;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        if e.is_usage_error() {
            eprintln!("Usage: pdbtool <pdb_file_path>");
        }
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("pdbtool v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = AppConfig::load(cli.config.as_deref())?;
    let path = input::validate_input_path(&cli.input)?;

    let records = PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Loaded {} atom records from {:?}.", records.len(), path);

    let session = Session::new(records, app_config.query);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl::run(&session, stdin.lock(), &mut stdout, &app_config.prompt)?;

    info!("Session finished.");
    Ok(())
}
