//! Maps the header of a zone inventory to column positions and reads the
//! rows into typed device records.

use crate::core::error::{Error, Result};
use crate::table::Row;

pub const LOCATION: &str = "Location";
pub const ZONE: &str = "Zone";
pub const UPLINK: &str = "Uplink";
pub const MODEL: &str = "Model";
pub const MAC: &str = "MAC";
pub const IP_ADDRESS: &str = "IP Address";
pub const SOURCE_PORT: &str = "Source Port";
pub const DESTINATION_PORT: &str = "Destination Port";
pub const LABEL: &str = "Label";

/// The column positions of a zone inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSchema {
    pub location: usize,
    pub zone: usize,
    pub identity: usize,
    pub uplink: usize,
    pub model: Option<usize>,
    pub mac: Option<usize>,
    pub ip: Option<usize>,
    pub source_port: Option<usize>,
    pub destination_port: Option<usize>,
    pub label: Option<usize>,
}

fn find(header: &Row, name: &str) -> Option<usize> {
    header.iter().position(|h| h == name)
}

fn require(header: &Row, name: &str) -> Result<usize> {
    find(header, name).ok_or_else(|| Error::MissingColumn(name.to_string()))
}

impl ClusterSchema {
    /// Resolves the columns by their header text. The devices are named by
    /// the column \p identity_column.
    pub fn resolve(header: &Row, identity_column: &str) -> Result<Self> {
        Ok(Self {
            location: require(header, LOCATION)?,
            zone: require(header, ZONE)?,
            identity: require(header, identity_column)?,
            uplink: require(header, UPLINK)?,
            model: find(header, MODEL),
            mac: find(header, MAC),
            ip: find(header, IP_ADDRESS),
            source_port: find(header, SOURCE_PORT),
            destination_port: find(header, DESTINATION_PORT),
            label: find(header, LABEL),
        })
    }

    /// Reads one data row. Empty cells and absent columns become
    /// \p sentinel.
    pub fn read(&self, row: &Row, sentinel: &str) -> DeviceRow {
        let get = |col: Option<usize>| -> String {
            match col.and_then(|c| row.get(c)) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => sentinel.to_string(),
            }
        };
        DeviceRow {
            name: get(Some(self.identity)),
            location: get(Some(self.location)),
            zone: get(Some(self.zone)),
            model: get(self.model),
            mac: get(self.mac),
            ip: get(self.ip),
            uplink: get(Some(self.uplink)),
            source_port: get(self.source_port),
            destination_port: get(self.destination_port),
            label: get(self.label),
        }
    }
}

/// One row of a zone inventory, with the raw (unsanitized) values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRow {
    pub name: String,
    pub location: String,
    pub zone: String,
    pub model: String,
    pub mac: String,
    pub ip: String,
    pub uplink: String,
    pub source_port: String,
    pub destination_port: String,
    pub label: String,
}
