use super::convert::DEGRADED_NOTICE;
use super::ui;
use crate::core::{RateSnapshot, RateStore, metadata};
use anyhow::Result;
use chrono::Local;
use comfy_table::Cell;

pub fn display_as_table(snapshot: &RateSnapshot) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate (1 {})", snapshot.base)),
    ]);

    let mut codes: Vec<&String> = snapshot.rates.keys().collect();
    codes.sort();
    for code in codes {
        let name = metadata::lookup(code).map_or("", |m| m.name);
        table.add_row(vec![
            Cell::new(code),
            Cell::new(name),
            ui::number_cell(ui::format_number(snapshot.rates[code], 6)),
        ]);
    }

    let fetched = snapshot.fetched_at.with_timezone(&Local);
    let mut output = format!(
        "Rates base: {}\n\n",
        ui::style_text(&snapshot.base, ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            &format!(
                "Published: {} · fetched: {}",
                snapshot.date.as_deref().unwrap_or("N/A"),
                fetched.format("%Y-%m-%d %H:%M:%S")
            ),
            ui::StyleType::Subtle
        )
    ));
    output
}

pub async fn run(store: &RateStore, refresh: bool) -> Result<()> {
    let pb = ui::new_spinner("Loading rates...");
    let loaded = store.get_snapshot(refresh).await;
    pb.finish_and_clear();

    let outcome = loaded?;
    if outcome.degraded {
        println!("{}", ui::style_text(DEGRADED_NOTICE, ui::StyleType::Warning));
    }
    println!("{}", display_as_table(&outcome.snapshot));
    Ok(())
}
