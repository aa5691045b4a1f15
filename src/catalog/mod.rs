//! Airport reference catalog.
//!
//! Airports are read once from a CSV dataset on first access and kept for
//! the lifetime of the process. A dataset that cannot be read degrades to an
//! empty catalog rather than failing the service.
//!
//! # Example
//!
//! ```ignore
//! use crate::catalog::{AirportCatalog, AirportSource};
//!
//! let catalog = AirportCatalog::new("data/airports.csv");
//! if let Some(airport) = catalog.get_by_id(10397) {
//!     println!("{}", airport.name);
//! }
//! ```

mod parser;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::models::Airport;

pub use parser::{AirportCsvParser, ParseError};

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Airport dataset not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse airport dataset: {0}")]
    ParseError(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only source of airport reference data
pub trait AirportSource: Send + Sync {
    /// All airports, ascending by name
    fn list_all(&self) -> Vec<Airport>;

    /// Look up a single airport by ID
    fn get_by_id(&self, id: i32) -> Option<Airport>;
}

/// CSV-backed airport catalog with lazy, one-time loading.
#[derive(Debug)]
pub struct AirportCatalog {
    path: PathBuf,
    airports: OnceLock<Vec<Airport>>,
}

impl AirportCatalog {
    /// Create a catalog for the dataset at `path`. Nothing is read until first use.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            airports: OnceLock::new(),
        }
    }

    /// Create an already-loaded catalog from in-memory records.
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        let catalog = Self {
            path: PathBuf::new(),
            airports: OnceLock::new(),
        };
        let _ = catalog.airports.set(sorted(airports));
        catalog
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of airports loaded.
    pub fn len(&self) -> usize {
        self.airports().len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports().is_empty()
    }

    fn airports(&self) -> &[Airport] {
        self.airports.get_or_init(|| match load(&self.path) {
            Ok(airports) => {
                log::info!(
                    "Loaded {} airports from {}",
                    airports.len(),
                    self.path.display()
                );
                sorted(airports)
            }
            Err(e) => {
                log::error!("Airport catalog unavailable, serving no airports: {}", e);
                Vec::new()
            }
        })
    }
}

impl AirportSource for AirportCatalog {
    fn list_all(&self) -> Vec<Airport> {
        self.airports().to_vec()
    }

    fn get_by_id(&self, id: i32) -> Option<Airport> {
        self.airports().iter().find(|a| a.id == id).cloned()
    }
}

fn load(path: &Path) -> Result<Vec<Airport>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    Ok(AirportCsvParser::parse_all(file)?)
}

/// Byte-wise (case-sensitive) name order, ties broken by ID
fn sorted(mut airports: Vec<Airport>) -> Vec<Airport> {
    airports.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    airports
}
