mod entry;
mod error;
mod export;
pub mod logging;
mod structure;

use std::path::Path;

use tracing::{debug, error, info};

pub use entry::{map_reservations, ExportRecord, ReservationRecord, DHCP_STATIC_ENTRY_CLASS};
pub use error::ConvertError;
pub use export::{render, write_export};
pub use structure::read_reservations;

pub const APPLICATION_NAME: &str = "PfSense to Untangle Static DHCP Converter";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Converts a pfSense static DHCP export into an Untangle import file.
///
/// Returns the number of entries written. The output is not touched if the
/// input cannot be read or parsed.
pub fn convert(input: &Path, output: &Path) -> Result<usize, ConvertError> {
    debug!(input_file = ?input, output_file = ?output, "Files to process");

    let reservations = read_reservations(input).inspect_err(|e| {
        error!(error = %e, "Error reading in pfsense dhcp export xml file");
    })?;
    debug!(
        num_entries = reservations.len(),
        "Loaded pfsense xml input file successfully"
    );

    let entries = map_reservations(reservations);
    write_export(output, &entries).inspect_err(|e| {
        error!(error = %e, "Error writing out Untangle import file");
    })?;
    info!(output = ?output, num_entries = entries.len(), "Wrote untangle import file");

    Ok(entries.len())
}
