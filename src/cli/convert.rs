use super::ui;
use crate::core::metadata;
use crate::core::{
    KeyValueStorage, RateStore, RateStoreError, SnapshotOutcome, UiState, convert, parse_amount,
};
use anyhow::Result;
use chrono::Local;
use tracing::warn;

pub const DEGRADED_NOTICE: &str = "Using cached rates due to network error.";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load rates.";

const DEFAULT_TARGET_DIGITS: usize = 4;
const DEFAULT_SOURCE_DIGITS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub refresh: bool,
}

impl ConvertArgs {
    /// Overrides the remembered inputs with whatever was given on the command line.
    pub fn apply(&self, state: &mut UiState) {
        if let Some(amount) = &self.amount {
            state.amount = amount.clone();
        }
        if let Some(from) = &self.from {
            state.from = from.trim().to_uppercase();
        }
        if let Some(to) = &self.to {
            state.to = to.trim().to_uppercase();
        }
    }
}

pub async fn run(
    store: &RateStore,
    storage: &dyn KeyValueStorage,
    defaults: &UiState,
    args: &ConvertArgs,
) -> Result<()> {
    let mut state = UiState::load_or(storage, defaults);
    args.apply(&mut state);
    if let Err(e) = state.save(storage) {
        warn!(error = %e, "Failed to remember converter inputs");
    }

    let pb = ui::new_spinner("Loading rates...");
    let loaded = store.get_snapshot(args.refresh).await;
    pb.finish_and_clear();

    let output = match &loaded {
        Ok(outcome) => render(&state, Some(outcome), None),
        Err(e) => render(&state, None, Some(e)),
    };
    println!("{output}");
    Ok(())
}

/// Renders the conversion of `state` against the loaded snapshot, if any.
pub fn render(
    state: &UiState,
    outcome: Option<&SnapshotOutcome>,
    load_error: Option<&RateStoreError>,
) -> String {
    let mut lines = Vec::new();

    if let Some(e) = load_error {
        lines.push(ui::style_text(LOAD_FAILED_NOTICE, ui::StyleType::Error));
        lines.push(ui::style_text(&e.to_string(), ui::StyleType::Subtle));
    }
    if outcome.is_some_and(|o| o.degraded) {
        lines.push(ui::style_text(DEGRADED_NOTICE, ui::StyleType::Warning));
    }

    let snapshot = outcome.map(|o| &o.snapshot);
    let amount = parse_amount(&state.amount);
    let conversion = match convert(snapshot, &state.from, &state.to, amount) {
        Ok(conversion) => conversion,
        Err(e) => {
            lines.push(ui::style_text(&e.to_string(), ui::StyleType::Error));
            return lines.join("\n");
        }
    };

    let from_meta = metadata::lookup(&state.from);
    let to_meta = metadata::lookup(&state.to);

    let source = ui::format_currency(
        amount.unwrap_or_default(),
        from_meta.map(|m| m.symbol_native),
        from_meta.map_or(DEFAULT_SOURCE_DIGITS, |m| m.decimal_digits),
    );
    let target = ui::format_currency(
        conversion.value,
        to_meta.map(|m| m.symbol_native),
        to_meta.map_or(DEFAULT_TARGET_DIGITS, |m| m.decimal_digits),
    );

    lines.push(format!("{} {}", ui::style_text(&source, ui::StyleType::Title), state.from));
    lines.push(format!("{} {}", ui::style_text(&target, ui::StyleType::Value), state.to));
    lines.push(ui::style_text(
        &format!("Rate: 1 {} = {:.6} {}", state.from, conversion.rate, state.to),
        ui::StyleType::Subtle,
    ));

    if let Some(snapshot) = snapshot {
        let fetched = snapshot.fetched_at.with_timezone(&Local);
        lines.push(ui::style_text(
            &format!(
                "Rates base: {} · fetched: {}",
                snapshot.base,
                fetched.format("%Y-%m-%d %H:%M:%S")
            ),
            ui::StyleType::Subtle,
        ));
    }

    lines.join("\n")
}
