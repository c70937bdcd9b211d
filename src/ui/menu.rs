// EventLens - ui/menu.rs
//
// Interactive menu rendering. Applied filter kinds are marked so the
// user can see which dimensions the current chain already narrows by.

use crate::core::filter::FilterSession;
use crate::core::model::FilterKind;
use crate::util::constants;

/// Render the main menu for the current session state.
pub fn render_menu(session: &FilterSession) -> String {
    let rule = "-".repeat(constants::MENU_RULE_WIDTH);

    let header = match session.subset_len() {
        Some(filtered) => format!(
            "{} ({} events, {filtered} after filters)",
            constants::APP_NAME,
            session.total()
        ),
        None => format!("{} ({} events)", constants::APP_NAME, session.total()),
    };

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "1: Filter by entity type{}\n",
        selected_marker(session, FilterKind::EntityType)
    ));
    out.push_str(&format!(
        "2: Filter by updated field{}\n",
        selected_marker(session, FilterKind::Field)
    ));
    out.push_str(&format!(
        "3: Filter by date range{}\n",
        selected_marker(session, FilterKind::DateRange)
    ));
    out.push('\n');
    out.push_str("Enter: submit\n");
    out.push_str("c: clear filters\n");
    out.push_str("q: quit\n");
    out.push_str(&rule);
    out.push('\n');
    out
}

fn selected_marker(session: &FilterSession, kind: FilterKind) -> &'static str {
    if session.is_applied(kind) {
        " (selected)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ChangeEvent, EventKind};
    use crate::core::parser;

    fn make_session() -> FilterSession {
        FilterSession::new(vec![
            ChangeEvent {
                kind: EventKind::Inserted,
                entity_name: "Order".to_string(),
                entity_id: 1,
                fields_updated: None,
                timestamp: parser::parse_timestamp("2025-01-10 09:00:00"),
            },
            ChangeEvent {
                kind: EventKind::Updated,
                entity_name: "Order".to_string(),
                entity_id: 2,
                fields_updated: Some(vec!["status".to_string()]),
                timestamp: parser::parse_timestamp("2025-01-10 10:00:00"),
            },
        ])
    }

    #[test]
    fn test_menu_shows_total_without_filters() {
        let session = make_session();
        let menu = render_menu(&session);
        assert!(menu.contains("(2 events)"));
        assert!(!menu.contains("(selected)"));
    }

    #[test]
    fn test_menu_marks_applied_kind_and_filtered_count() {
        let mut session = make_session();
        session.filter_by_type("U").unwrap();
        let menu = render_menu(&session);
        assert!(menu.contains("(2 events, 1 after filters)"));
        assert!(menu.contains("1: Filter by entity type (selected)"));
        assert!(menu.contains("2: Filter by updated field\n"));
    }
}
