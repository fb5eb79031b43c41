//! Tabular listing of tracked services.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cloudtrack_app::report::ServiceRow;
use cloudtrack_domain::service::ServiceStatus;
use cloudtrack_domain::time::format_date;

use crate::format_cost;

const HEADERS: [&str; 7] = [
    "ID",
    "Service Name",
    "Type",
    "Status",
    "Usage (hrs)",
    "Cost ($)",
    "Created",
];

/// Build the service table, one row per service in iteration order.
#[must_use]
pub fn services_table(rows: impl IntoIterator<Item = ServiceRow>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(
        HEADERS
            .iter()
            .map(|title| Cell::new(title).add_attribute(Attribute::Bold)),
    );

    for row in rows {
        let status = match row.status {
            ServiceStatus::Active => Cell::new(row.status).fg(Color::Green),
            ServiceStatus::Inactive => Cell::new(row.status).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(row.name),
            Cell::new(row.service_type),
            status,
            Cell::new(row.usage_hours).set_alignment(CellAlignment::Right),
            Cell::new(format_cost(row.cost)).set_alignment(CellAlignment::Right),
            Cell::new(format_date(row.created_at)),
        ]);
    }

    table
}
