mod dump;
mod error;
mod extract;
mod import;
mod pngio;

use clap::Parser;
use log::error;
use std::process::ExitCode;

use crate::error::ToolError;

/// Card graphics extractor for YWCT2K4 ROM images
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Extract(extract::ExtractCommand),
    Import(import::ImportCommand),
    Dump(dump::DumpCommand),
}

fn run_command(sub: SubCommand) -> Result<(), ToolError> {
    match sub {
        SubCommand::Extract(cmd) => cmd.execute(),
        SubCommand::Import(cmd) => cmd.execute(),
        SubCommand::Dump(cmd) => cmd.execute(),
    }
}

fn main() -> ExitCode {
    lib_wct::init_logging();
    let args = Args::parse();

    match run_command(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
