use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_xml_rs::{Deserializer, EventReader, ParserConfig};
use tracing::{debug, trace};
use xml::reader::XmlEvent;

use crate::entry::ReservationRecord;
use crate::error::ConvertError;

#[derive(Deserialize)]
#[serde(rename = "dhcpd")]
pub struct Dhcpd {
    #[serde(rename = "lan", default)]
    pub lans: Vec<Lan>,
}

#[derive(Deserialize)]
pub struct Lan {
    #[serde(rename = "staticmap", default)]
    pub entries: Vec<StaticMap>,
}

#[derive(Deserialize)]
pub struct StaticMap {
    #[serde(rename = "mac", default)]
    pub mac: String,
    #[serde(rename = "ipaddr", default)]
    pub ip_addr: String,
    #[serde(rename = "hostname", default)]
    pub host_name: String,
    #[serde(rename = "descr", default)]
    pub descr: String,
}

impl From<StaticMap> for ReservationRecord {
    fn from(entry: StaticMap) -> Self {
        trace!(host_name = %entry.host_name, mac = %entry.mac, "Dropping host name");
        ReservationRecord {
            mac_address: entry.mac,
            ip_address: entry.ip_addr,
            description: entry.descr,
        }
    }
}

const ROOT_ELEMENT: &str = "dhcpd";

/// Reads the static DHCP reservations of the first `lan` segment.
///
/// Later segments are skipped, and so is each entry's host name.
pub fn read_reservations(path: &Path) -> Result<Vec<ReservationRecord>, ConvertError> {
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;

    let root = root_element(&bytes).map_err(|e| ConvertError::parse(path, e))?;
    if root != ROOT_ELEMENT {
        return Err(ConvertError::unexpected_root(path, root));
    }

    let dhcpd = decode(&bytes).map_err(|e| ConvertError::parse(path, e))?;
    Ok(first_segment(dhcpd))
}

fn root_element(bytes: &[u8]) -> Result<String, serde_xml_rs::Error> {
    let mut reader = EventReader::new(bytes);
    loop {
        match reader.next()? {
            XmlEvent::StartElement { name, .. } => return Ok(name.local_name),
            XmlEvent::EndDocument => return Ok(String::new()),
            _ => {}
        }
    }
}

// Leaf text is kept exactly as written, and repeated elements are collected
// even when other elements sit between them.
fn decode(bytes: &[u8]) -> Result<Dhcpd, serde_xml_rs::Error> {
    let config = ParserConfig::new()
        .trim_whitespace(false)
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .ignore_comments(true)
        .coalesce_characters(true);

    let mut de = Deserializer::new(EventReader::new_with_config(bytes, config))
        .non_contiguous_seq_elements(true);
    Dhcpd::deserialize(&mut de)
}

pub(crate) fn first_segment(dhcpd: Dhcpd) -> Vec<ReservationRecord> {
    if dhcpd.lans.len() > 1 {
        debug!(skipped = dhcpd.lans.len() - 1, "Ignoring segments after the first");
    }

    dhcpd
        .lans
        .into_iter()
        .next()
        .map(|lan| lan.entries.into_iter().map(ReservationRecord::from).collect())
        .unwrap_or_default()
}
