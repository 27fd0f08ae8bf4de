pub mod core_load;
pub mod footer;
pub mod header;
pub mod impact;
pub mod language_switcher;
pub mod performance;
pub mod radar;

/// Two-decimal SVG coordinate.
pub(crate) fn px(value: f64) -> String {
    format!("{value:.2}")
}
