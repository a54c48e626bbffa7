// 📋 Column Resolver - Maps a header row to the three logical columns
// Price lists name their columns inconsistently; resolution is a first-match
// linear scan against fixed synonym sets.

// ============================================================================
// SYNONYM SETS
// ============================================================================

/// Accepted header spellings for the product name column
pub const NAME_HEADERS: &[&str] = &["название", "продукт", "товар", "наименование"];

/// Accepted header spellings for the price column
pub const PRICE_HEADERS: &[&str] = &["цена", "розница"];

/// Accepted header spellings for the mass column (kilograms)
pub const MASS_HEADERS: &[&str] = &["фасовка", "масса", "вес"];

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Positional indices of the three logical columns within one header row.
/// Each field is resolved independently; `None` means no header matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub price: Option<usize>,
    pub mass: Option<usize>,
}

impl ColumnMap {
    /// True when all three columns were located
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.price.is_some() && self.mass.is_some()
    }
}

/// Resolve a header row to column indices.
///
/// Matching is a case-insensitive exact comparison after trimming; the first
/// header (left to right) matching any synonym of a set wins. A missing
/// column is not an error here - the loader fails when an unresolved index
/// is first used on a data row.
pub fn resolve_columns(headers: &[&str]) -> ColumnMap {
    ColumnMap {
        name: find_column(headers, NAME_HEADERS),
        price: find_column(headers, PRICE_HEADERS),
        mass: find_column(headers, MASS_HEADERS),
    }
}

fn find_column(headers: &[&str], synonyms: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| synonyms.contains(&header.trim().to_lowercase().as_str()))
}

// ============================================================================
// TESTS
// ============================================================================
