use super::ui;
use crate::core::{RateStore, metadata};
use anyhow::Result;
use comfy_table::Cell;

/// Lists every selectable currency, using the cached rate table without
/// touching the network.
pub fn display_as_table(codes: &[String]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell("Symbol"),
    ]);

    for code in codes {
        let meta = metadata::lookup(code);
        table.add_row(vec![
            Cell::new(code),
            Cell::new(meta.map_or("", |m| m.name)),
            Cell::new(meta.map_or("", |m| m.symbol_native)),
        ]);
    }
    table.to_string()
}

pub fn run(store: &RateStore) -> Result<()> {
    let cached = store.read_cached();
    let codes = metadata::available_currencies(cached.as_ref());
    println!("{}", display_as_table(&codes));
    Ok(())
}
