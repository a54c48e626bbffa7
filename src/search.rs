// 🔍 Search & Rank Engine - Substring search over the catalog
// Matches are ranked ascending by price per kilogram.

use crate::catalog::Catalog;

// ============================================================================
// MATCHING
// ============================================================================

/// One search hit: the record's catalog position and its frozen price per
/// kilogram (the ranking key).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchMatch {
    pub position: usize,
    pub price_per_kg: f64,
}

/// Find every record whose name contains the trimmed, lowercased query as a
/// substring, ranked ascending by the whole-currency part of the price per
/// kilogram. The sort is stable, so equal keys keep catalog order.
pub fn search(catalog: &Catalog, query: &str) -> Vec<SearchMatch> {
    let needle = query.trim().to_lowercase();

    let mut matches: Vec<SearchMatch> = catalog
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name.contains(&needle))
        .map(|(position, record)| SearchMatch {
            position,
            price_per_kg: record.price_per_kg,
        })
        .collect();

    matches.sort_by_key(|hit| hit.price_per_kg as i64);

    matches
}

// ============================================================================
// CONSOLE TABLE
// ============================================================================

/// Render ranked matches as a column-aligned console table.
pub fn render_matches(catalog: &Catalog, matches: &[SearchMatch]) -> String {
    let mut table = format!(
        "{:<4} {:<40} {:<6} {:<6} {:<20} {:<6}\n",
        "№", "Наименование", "Цена", "Вес", "Файл", "Цена за кг."
    );

    for (rank, hit) in matches.iter().enumerate() {
        if let Some(record) = catalog.get(hit.position) {
            table.push_str(&format!(
                "{:<4} {:<40} {:<6} {:<6} {:<20} {:<6}\n",
                rank + 1,
                record.name,
                record.unit_price,
                record.unit_mass,
                record.source_file,
                record.price_per_kg
            ));
        }
    }

    table
}

// ============================================================================
// TESTS
// ============================================================================
