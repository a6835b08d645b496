#![warn(clippy::uninlined_format_args)]

pub mod report_presenter;
pub mod text_table;
pub mod transactions_presenter;

pub use report_presenter::ReportPresenter;
pub use transactions_presenter::TransactionsPresenter;

/// Two-decimal rendering; anything that rounds to zero prints as `0.00`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", normalize(amount))
}

/// Like [`format_amount`], with an explicit `+` for non-negative values.
pub fn format_signed_amount(amount: f64) -> String {
    let amount = normalize(amount);
    let sign = if amount >= 0.0 { "+" } else { "" };
    format!("{sign}{amount:.2}")
}

fn normalize(amount: f64) -> f64 {
    if amount.abs() < 0.005 { 0.0 } else { amount }
}
