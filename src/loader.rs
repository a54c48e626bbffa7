// 📂 Catalog Loader - Price list discovery and CSV ingestion
// Scans one directory for files with "price" in the name and accumulates
// their rows into a single catalog.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Record};
use crate::columns::{resolve_columns, ColumnMap};

/// Directory scanned when none is given
pub const DEFAULT_PRICES_DIR: &str = "docs";

/// Load every price list under `dir` into a catalog.
///
/// Catalog order is directory enumeration order, then row order within each
/// file. A file with no rows at all is skipped with a warning; any other
/// failure (unresolved column, malformed number, I/O) aborts the load.
pub fn load_prices(dir: &Path) -> Result<Catalog> {
    let mut records = Vec::new();

    for path in discover_price_files(dir)? {
        load_price_file(&path, &mut records)?;
    }

    Ok(Catalog::from_records(records))
}

/// List immediate directory entries whose name contains "price"
/// (case-insensitive, any extension). No sorting is applied.
pub fn discover_price_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to list directory: {}", dir.display()))?;
        if entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .contains("price")
        {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Read one price list and append its records in row order.
fn load_price_file(path: &Path, records: &mut Vec<Record>) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open price file: {}", path.display()))?;

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Failed to read {} as CSV", path.display()))?;

    if rows.is_empty() {
        println!("⚠️  Предупреждение: файл {} пуст", path.display());
        return Ok(());
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    // Row 0 is the header. Unresolved indices are kept as-is and only fail
    // when a data row actually needs them.
    let headers: Vec<&str> = rows[0].iter().collect();
    let columns = resolve_columns(&headers);

    for (row_number, row) in rows.iter().enumerate().skip(1) {
        let record = parse_row(row, &columns, &file_name)
            .with_context(|| format!("Bad data in {} row {}", file_name, row_number + 1))?;
        records.push(record);
    }

    Ok(())
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap, file_name: &str) -> Result<Record> {
    let name = field(row, columns.name, "product name")?
        .to_lowercase()
        .trim()
        .to_string();
    let price = parse_number(field(row, columns.price, "price")?, "price")?;
    let mass = parse_number(field(row, columns.mass, "mass")?, "mass")?;

    Ok(Record::new(name, price, mass, file_name.to_string()))
}

/// Fetch a field by resolved index. An unresolved column and a row shorter
/// than the index are both data-format errors.
fn field<'a>(row: &'a csv::StringRecord, index: Option<usize>, label: &str) -> Result<&'a str> {
    let index = index.with_context(|| format!("no {} column in header", label))?;
    row.get(index)
        .with_context(|| format!("row has no field {} ({} column)", index, label))
}

fn parse_number(raw: &str, label: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid {} value '{}'", label, raw))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_loads_single_price_list() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_list.csv", "товар,цена,вес\nЯблоко,100,2\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        let record = catalog.get(0).unwrap();
        assert_eq!(record.name, "яблоко");
        assert_eq!(record.unit_price, 100.0);
        assert_eq!(record.unit_mass, 2.0);
        assert_eq!(record.source_file, "price_list.csv");
        assert_eq!(record.price_per_kg, 50.0);
    }

    #[test]
    fn test_ignores_files_without_price_in_name() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_1.csv", "товар,цена,вес\nЧай,50,1\n");
        write_file(&dir, "notes.txt", "товар,цена,вес\nКофе,500,1\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "чай");
    }

    #[test]
    fn test_discovery_matches_name_case_insensitively() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "PRICE_2024.csv", "товар,цена,вес\nРис,90,1\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().source_file, "PRICE_2024.csv");
    }

    #[test]
    fn test_any_extension_is_accepted() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_export.txt", "товар,цена,вес\nСахар,60,1\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_file_is_skipped_without_error() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_empty.csv", "");
        write_file(&dir, "price_ok.csv", "товар,цена,вес\nСоль,20,1\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "соль");
    }

    #[test]
    fn test_header_only_file_loads_zero_records() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_header.csv", "товар,цена,вес\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_unresolvable_header_without_data_rows_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_odd.csv", "артикул,количество\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_column_fails_on_first_data_row() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_bad.csv", "товар,цена\nЯблоко,100\n");

        let err = load_prices(dir.path()).unwrap_err();

        assert!(err.to_string().contains("price_bad.csv"));
    }

    #[test]
    fn test_malformed_price_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_bad.csv", "товар,цена,вес\nЯблоко,дорого,2\n");

        assert!(load_prices(dir.path()).is_err());
    }

    #[test]
    fn test_malformed_mass_aborts_the_load() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_bad.csv", "товар,цена,вес\nЯблоко,100,кг\n");

        assert!(load_prices(dir.path()).is_err());
    }

    #[test]
    fn test_row_order_within_a_file_is_preserved() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "price_list.csv",
            "товар,цена,вес\nЯблоко,100,2\nГруша,120,2\nСлива,90,1\n",
        );

        let catalog = load_prices(dir.path()).unwrap();

        let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["яблоко", "груша", "слива"]);
    }

    #[test]
    fn test_column_layout_can_differ_between_files() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_a.csv", "цена,товар,вес\n100,Яблоко,2\n");
        write_file(&dir, "price_b.csv", "вес,розница,наименование\n1,80,Молоко\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.len(), 2);

        let apple = catalog.iter().find(|r| r.name == "яблоко").unwrap();
        assert_eq!(apple.unit_price, 100.0);
        assert_eq!(apple.unit_mass, 2.0);

        let milk = catalog.iter().find(|r| r.name == "молоко").unwrap();
        assert_eq!(milk.unit_price, 80.0);
        assert_eq!(milk.unit_mass, 1.0);
        assert_eq!(milk.source_file, "price_b.csv");
    }

    #[test]
    fn test_name_is_lowercased_and_trimmed() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "price_list.csv", "товар,цена,вес\n  МОЛОКО  ,80,1\n");

        let catalog = load_prices(dir.path()).unwrap();

        assert_eq!(catalog.get(0).unwrap().name, "молоко");
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("docs");

        assert!(load_prices(&missing).is_err());
    }
}
