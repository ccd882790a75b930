use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use pfsense_untangle_dhcp::logging::Logger;
use pfsense_untangle_dhcp::{convert, ConvertError, APPLICATION_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(name = "pfsense-untangle-dhcp", version, about = APPLICATION_NAME)]
struct Args {
    /// Input pfSense XML static DHCP export file
    #[arg(long = "inputFile", default_value = "data/pfsense.xml")]
    input_file: PathBuf,

    /// Output Untangle JSON static DHCP import file
    #[arg(long = "outputFile", default_value = "data/untangle.json")]
    output_file: PathBuf,

    /// Human readable development logging instead of JSON
    #[arg(long)]
    devlogger: bool,
}

fn run(args: &Args) -> Result<usize, ConvertError> {
    info!(version = VERSION, "Starting application");
    let written = convert(&args.input_file, &args.output_file)?;
    info!("Ending application");
    Ok(written)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let logger = Logger::new(APPLICATION_NAME, args.devlogger);
    match logger.scope(|| run(&args)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
