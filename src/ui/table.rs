// EventLens - ui/table.rs
//
// Result-table rendering. Columns are padded to the widest cell so the
// table stays aligned regardless of content.

use crate::core::model::ChangeEvent;
use crate::util::constants;

const COLUMNS: usize = 5;

/// Column headers, in record-field order.
const HEADERS: [&str; COLUMNS] = [
    "Event Type",
    "Entity Name",
    "Entity ID",
    "Fields Updated",
    "Timestamp",
];

/// Render a set of events as an aligned text table.
pub fn render_table(events: &[&ChangeEvent]) -> String {
    let rows: Vec<[String; COLUMNS]> = events.iter().map(|e| row_cells(e)).collect();

    let mut widths: [usize; COLUMNS] = [0; COLUMNS];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.len();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    push_rule(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn row_cells(event: &ChangeEvent) -> [String; COLUMNS] {
    [
        event.kind.label().to_string(),
        event.entity_name.clone(),
        event.entity_id.to_string(),
        match &event.fields_updated {
            Some(fields) => fields.join(", "),
            None => constants::NO_FIELDS_SENTINEL.to_string(),
        },
        match event.timestamp {
            Some(ts) => ts.format(constants::TABLE_TIMESTAMP_FORMAT).to_string(),
            None => constants::BAD_TIMESTAMP_SENTINEL.to_string(),
        },
    ]
}

fn push_row(out: &mut String, cells: &[String; COLUMNS], widths: &[usize; COLUMNS]) {
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            out.push_str(" | ");
        }
        if idx + 1 == COLUMNS {
            // Last column unpadded: no trailing spaces on any line.
            out.push_str(cell);
        } else {
            let width = widths[idx];
            out.push_str(&format!("{cell:<width$}"));
        }
    }
    out.push('\n');
}

fn push_rule(out: &mut String, widths: &[usize; COLUMNS]) {
    for (idx, width) in widths.iter().enumerate() {
        if idx > 0 {
            out.push_str("-+-");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
}
