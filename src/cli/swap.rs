use super::ui;
use crate::core::{KeyValueStorage, UiState};
use anyhow::Result;

pub fn run(storage: &dyn KeyValueStorage, defaults: &UiState) -> Result<UiState> {
    let mut state = UiState::load_or(storage, defaults);
    state.swap();
    state.save(storage)?;
    println!(
        "Converting {} → {}",
        ui::style_text(&state.from, ui::StyleType::Value),
        ui::style_text(&state.to, ui::StyleType::Value)
    );
    Ok(state)
}
