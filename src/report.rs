// 📄 Report Exporter - Static HTML table of the whole catalog

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;

/// Report path written when none is given
pub const DEFAULT_REPORT_FILE: &str = "output.html";

/// Write the full catalog as an HTML table, overwriting `path` if it exists.
/// Returns the confirmation message shown to the user.
pub fn export_to_html(catalog: &Catalog, path: &Path) -> Result<String> {
    let html = render_html(catalog);
    fs::write(path, html)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    Ok(format!("HTML сформирован в файле {}", path.display()))
}

fn render_html(catalog: &Catalog) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Позиции продуктов</title>
</head>
<body>
    <table>
        <tr>
            <th>Номер</th>
            <th>Название</th>
            <th>Цена</th>
            <th>Фасовка</th>
            <th>Файл</th>
            <th>Цена за кг.</th>
        </tr>
"#,
    );

    for (index, record) in catalog.iter().enumerate() {
        html.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{:.2}</td></tr>\n",
            index + 1,
            record.name,
            record.unit_price,
            record.unit_mass,
            record.source_file,
            record.price_per_kg
        ));
    }

    html.push_str(&format!(
        "    </table>\n    <p>Сформировано: {}</p>\n</body>\n</html>\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    html
}

// ============================================================================
// TESTS
// ============================================================================
