// 🛒 Price Catalog - Normalized records from loaded price lists
// Derived values are frozen at ingestion; the catalog is read-only after load

use serde::{Deserialize, Serialize};

// ============================================================================
// RECORD
// ============================================================================

/// One normalized catalog entry, built from a single data row of a price list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Product name, lowercased and trimmed (duplicates across files are kept)
    pub name: String,

    /// Unit price, as parsed from the source row
    pub unit_price: f64,

    /// Unit mass in kilograms, as parsed from the source row
    pub unit_mass: f64,

    /// Name of the file this row came from
    pub source_file: String,

    /// Price per kilogram, rounded to one decimal place.
    /// Computed once here; search and export read the stored value and
    /// never recompute it.
    pub price_per_kg: f64,
}

impl Record {
    /// Build a record, computing the derived price per kilogram
    pub fn new(name: String, unit_price: f64, unit_mass: f64, source_file: String) -> Self {
        Record {
            name,
            unit_price,
            unit_mass,
            source_file,
            price_per_kg: round_to_tenth(unit_price / unit_mass),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// CATALOG
// ============================================================================

/// The full in-memory collection of records for one session.
/// Produced once by the loader; consumers only borrow it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn from_records(records: Vec<Record>) -> Self {
        Catalog { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a catalog position (file discovery order, then row order)
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
