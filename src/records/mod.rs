use serde::{Deserialize, Serialize};

use crate::geocode::GeocodeResult;

pub mod reader;
pub mod writer;

/// Column order of the output file. The header is written from this list
/// and `OutputRecord`'s field order must match it.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "NAME", "DBA", "STADDR", "STADDR2", "CITY", "STATE", "ZIP",
    "MATCH_ADDR", "LAT_Y", "LONG_X"
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct InputRecord {
    pub name: String,
    pub dba: String,
    pub staddr: String,
    pub staddr2: String,
    pub city: String,
    pub state: String,
    pub zip: String
}

impl InputRecord {
    /// Single-line address for the geocoder: both street fields trimmed and
    /// joined by one space (empty parts dropped), then city, state and zip
    /// verbatim.
    pub fn address_query(&self) -> String {
        let street = [self.staddr.trim(), self.staddr2.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<&str>>()
            .join(" ");

        format!("{}, {}, {} {}", street, self.city, self.state, self.zip)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct OutputRecord {
    pub name: String,
    pub dba: String,
    pub staddr: String,
    pub staddr2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub match_addr: String,
    pub lat_y: f64,
    pub long_x: f64
}

impl OutputRecord {
    pub fn from_record(record: InputRecord, located: GeocodeResult) -> Self {
        OutputRecord {
            name: record.name,
            dba: record.dba,
            staddr: record.staddr,
            staddr2: record.staddr2,
            city: record.city,
            state: record.state,
            zip: record.zip,
            match_addr: located.match_addr,
            lat_y: located.lat,
            long_x: located.lon
        }
    }
}
