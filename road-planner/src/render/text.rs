//! Plain-text day list.

use crate::domain::Location;

/// One line per stop: `[Day N] Name, Region`, with the start as day 0.
pub fn render_text<'a>(stops: impl IntoIterator<Item = &'a Location>) -> String {
    stops
        .into_iter()
        .enumerate()
        .map(|(day, city)| format!("[Day {day}] {city}\n"))
        .collect()
}
