//! Static airport coordinates table.
//!
//! Loads an `iata-icao.csv`-shaped file (columns: `country_code`,
//! `region_name`, `iata`, `icao`, `airport`, `latitude`, `longitude`) into
//! an in-memory lookup keyed by IATA code. The table is read once at
//! startup and shared read-only; the geographic join uses it to attach
//! state names and coordinates to both endpoints of each itinerary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while loading the airport table.
#[derive(Debug, thiserror::Error)]
pub enum AirportTableError {
    #[error("airport table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("airport table {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One airport row from the coordinates table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirportInfo {
    /// ISO country code.
    pub country_code: String,
    /// State or region name, e.g. "Georgia".
    pub region_name: String,
    /// IATA code, e.g. "ATL".
    pub iata: String,
    /// ICAO code, e.g. "KATL".
    pub icao: String,
    /// Airport name.
    pub airport: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// In-memory airport lookup keyed by IATA code.
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    by_iata: HashMap<String, AirportInfo>,
}

impl AirportTable {
    /// Load the table from a CSV file.
    ///
    /// Rows without an IATA code are skipped; the flight search only ever
    /// joins on IATA.
    pub fn load(path: &Path) -> Result<Self, AirportTableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|source| AirportTableError::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        let mut by_iata = HashMap::new();
        for row in reader.deserialize::<AirportInfo>() {
            let info = row.map_err(|source| AirportTableError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            if info.iata.is_empty() {
                continue;
            }
            by_iata.insert(info.iata.clone(), info);
        }

        log::info!("loaded {} airports from {:?}", by_iata.len(), path);
        Ok(Self { by_iata })
    }

    /// Build a table from rows already in memory. Used by tests.
    pub fn from_rows(rows: Vec<AirportInfo>) -> Self {
        let by_iata = rows
            .into_iter()
            .filter(|info| !info.iata.is_empty())
            .map(|info| (info.iata.clone(), info))
            .collect();
        Self { by_iata }
    }

    /// Look up an airport by IATA code.
    pub fn get(&self, iata: &str) -> Option<&AirportInfo> {
        self.by_iata.get(iata)
    }

    pub fn len(&self) -> usize {
        self.by_iata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_iata.is_empty()
    }
}
