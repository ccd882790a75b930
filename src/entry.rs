use serde::Serialize;

/// Discriminator Untangle expects on every imported static DHCP entry.
pub const DHCP_STATIC_ENTRY_CLASS: &str = "com.untangle.uvm.network.DhcpStaticEntry";

/// A static DHCP reservation as read from the pfSense export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRecord {
    pub mac_address: String,
    pub ip_address: String,
    pub description: String,
}

/// A static DHCP entry in the shape the Untangle import accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "macAddress")]
    pub mac_address: String,
    #[serde(rename = "address")]
    pub address: String,
    #[serde(rename = "javaClass")]
    pub record_type: &'static str,
    #[serde(rename = "description")]
    pub description: String,
}

impl From<ReservationRecord> for ExportRecord {
    fn from(record: ReservationRecord) -> Self {
        ExportRecord {
            mac_address: record.mac_address,
            address: record.ip_address,
            record_type: DHCP_STATIC_ENTRY_CLASS,
            description: record.description,
        }
    }
}

pub fn map_reservations(records: Vec<ReservationRecord>) -> Vec<ExportRecord> {
    records.into_iter().map(ExportRecord::from).collect()
}
