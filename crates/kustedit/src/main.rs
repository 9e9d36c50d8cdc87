use clap::Parser;
use kustedit::{cli::Cli, commands, logging, shared::fs::RealFileSystem};
use snafu::{ResultExt, Snafu};

const LOG_ENV_VAR: &str = "KUSTEDIT_LOG";

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to initialize logging"))]
    InitializeLogging { source: logging::Error },

    #[snafu(transparent)]
    Command { source: commands::Error },
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    logging::initialize_logging(LOG_ENV_VAR, env!("CARGO_PKG_NAME"))
        .context(InitializeLoggingSnafu)?;

    let (kind, args) = cli.command.metadata_arguments();
    commands::add_metadata(&mut RealFileSystem, &cli.directory, kind, args)?;

    Ok(())
}
