use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use price_machine::{
    export_to_html, load_prices, render_matches, search, Catalog, DEFAULT_PRICES_DIR,
    DEFAULT_REPORT_FILE,
};

fn main() -> Result<()> {
    println!("🛒 Price Machine — анализ прайс-листов");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load every price list from the default directory
    let catalog = load_prices(Path::new(DEFAULT_PRICES_DIR))?;
    println!("✓ Загружено {} позиций\n", catalog.len());

    // 2. Interactive search until `exit`
    run_search_loop(&catalog)?;

    println!("the end");

    // 3. Static HTML report
    let message = export_to_html(&catalog, Path::new(DEFAULT_REPORT_FILE))?;
    println!("{}", message);

    Ok(())
}

/// Blocking read-print loop: prompt, search, render, until `exit` or
/// end of input.
fn run_search_loop(catalog: &Catalog) -> Result<()> {
    let stdin = io::stdin();

    loop {
        print!("Введите название продукта для поиска: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim().to_lowercase();
        if query == "exit" {
            break;
        }

        let matches = search(catalog, &query);
        if matches.is_empty() {
            println!("Не найдено ни одного совпадения.");
        } else {
            print!("{}", render_matches(catalog, &matches));
            println!("Поиск завершен.");
        }
    }

    Ok(())
}
