//! # cloudtrack-adapter-console
//!
//! Terminal rendering of the read models produced by `cloudtrack-app`.
//!
//! ## Responsibilities
//! - Render the service listing as a table (via [comfy-table](https://docs.rs/comfy-table))
//! - Render the usage report and the total-cost line as plain text
//!
//! Every function returns a value instead of printing, so the caller decides
//! where the output goes.
//!
//! ## Dependency rule
//! Depends on `cloudtrack-app` (for read models) and `cloudtrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod report;
pub mod table;

/// Format an amount of money with two decimals.
#[must_use]
pub fn format_cost(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_cost_to_two_decimals() {
        assert_eq!(format_cost(5.0), "5.00");
        assert_eq!(format_cost(3.456), "3.46");
        assert_eq!(format_cost(0.0), "0.00");
    }
}
