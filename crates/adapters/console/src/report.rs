//! Plain-text usage report and total-cost line.

use cloudtrack_app::report::UsageReport;

use crate::format_cost;

/// Title printed above the usage report.
pub const REPORT_TITLE: &str = "Cloud Service Usage Report";

/// Render the usage report: a title, an underline, then one line per service.
#[must_use]
pub fn usage_report(report: &UsageReport) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        "-".repeat(REPORT_TITLE.len() + 4),
    ];
    lines.extend(report.lines.iter().map(ToString::to_string));
    lines.push(String::new());
    lines.join("\n")
}

/// Render the total-cost line.
#[must_use]
pub fn total_cost(total: f64) -> String {
    format!("Total Cloud Cost: ${}", format_cost(total))
}
