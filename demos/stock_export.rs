use std::fs;
use std::path::Path;

use godown::core::BillingConfig;
use godown::export::*;
use godown::stock::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BillingConfig::default();
    let mut stock = StockBook::new();
    stock.upsert(
        StockItem::new("main_godown_2", "p-101", "Flower Pot Deluxe", 30, 12, dec!(100))
            .with_brand("sri_kaliswari")
            .with_type("flower_pots"),
    );
    stock.upsert(
        StockItem::new("town_shop", "p-204", "Color Matches", 4, 10, dec!(50))
            .with_brand("standard")
            .with_type("sparklers"),
    );

    let book = stock_workbook(&stock, config.low_stock_threshold)?;

    let out_dir = Path::new("target/stock_export");
    fs::create_dir_all(out_dir)?;
    for (name, csv) in book.to_csv_files() {
        let path = out_dir.join(&name);
        fs::write(&path, &csv)?;
        println!("Wrote {} ({} rows)", path.display(), csv.lines().count() - 1);
    }
    Ok(())
}
