// EventLens - core/parser.rs
//
// Record parsing for the flat event-log format. Accepts file content as
// a string; the app layer handles reading. Any malformed record aborts
// the whole load — there is no per-line recovery.

use crate::core::model::{ChangeEvent, EventKind};
use crate::util::constants;
use crate::util::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Parse the full text content of an event-log file into an ordered
/// sequence of events, preserving line order.
///
/// Each line holds exactly five fields separated by `", "`:
/// `eventType, entityName, entityId, fieldsUpdated, timestamp`, where
/// `fieldsUpdated` is either the literal `null` or a bracketed list
/// `[f1, f2, ...]`. Blank lines are skipped so a trailing newline does
/// not abort the load.
pub fn parse_content(content: &str) -> Result<Vec<ChangeEvent>, ParseError> {
    let mut events = Vec::new();

    for (line_idx, raw_line) in content.lines().enumerate() {
        let line_number = line_idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }

        let line = normalise_list(raw_line);
        let fields: Vec<&str> = line.split(constants::FIELD_SEPARATOR).collect();
        if fields.len() != constants::FIELD_COUNT {
            return Err(ParseError::FieldCount {
                line_number,
                count: fields.len(),
            });
        }

        let kind =
            EventKind::from_record_literal(fields[0]).ok_or_else(|| ParseError::UnknownKind {
                line_number,
                raw: fields[0].to_string(),
            })?;

        let entity_id: i64 = fields[2].trim().parse().map_err(|_| ParseError::InvalidId {
            line_number,
            raw: fields[2].to_string(),
        })?;

        let fields_updated = if fields[3] == constants::NULL_LITERAL {
            None
        } else {
            Some(
                fields[3]
                    .split(constants::LIST_SEPARATOR)
                    .map(str::to_string)
                    .collect(),
            )
        };

        // Malformed timestamps are not a parse error; the event keeps
        // timestamp: None and fails every date-range comparison later.
        let timestamp = parse_timestamp(fields[4]);

        events.push(ChangeEvent {
            kind,
            entity_name: fields[1].to_string(),
            entity_id,
            fields_updated,
            timestamp,
        });
    }

    tracing::debug!(events = events.len(), "Event-log content parsed");
    Ok(events)
}

/// Rewrite the first bracket-delimited span of a line so the top-level
/// field split cannot break inside the fields-updated list:
/// `[status, total]` becomes `status;total` (brackets removed,
/// comma-space inside becomes the list separator).
fn normalise_list(line: &str) -> String {
    static BRACKETED: OnceLock<Regex> = OnceLock::new();
    let re = BRACKETED.get_or_init(|| Regex::new(r"\[(.*?)\]").expect("normalise_list: invalid regex"));

    match re.captures(line) {
        Some(caps) => {
            // Both groups exist whenever the pattern matches.
            let span = caps.get(0).expect("group 0 always present");
            let inner = caps
                .get(1)
                .expect("capture 1 present on match")
                .as_str()
                .replace(constants::FIELD_SEPARATOR, &constants::LIST_SEPARATOR.to_string());
            format!("{}{}{}", &line[..span.start()], inner, &line[span.end()..])
        }
        None => line.to_string(),
    }
}

/// Parse a timestamp string, trying layered strategies in order:
///
///   1. `%Y-%m-%d %H:%M:%S%.f` — the event-log format, fractional
///      seconds optional.
///   2. Date-only `%Y-%m-%d`, treated as midnight UTC. Lets date-range
///      prompts take bare dates.
///   3. RFC 3339 / ISO 8601 with an explicit timezone.
///
/// Returns `None` when nothing matches. Used for both record fields and
/// user-entered date bounds.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ndt.and_utc());
    }

    if let Ok(nd) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(ndt) = nd.and_hms_opt(0, 0, 0) {
            return Some(ndt.and_utc());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.into());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::EventKind;

    #[test]
    fn test_parse_example_line() {
        let events =
            parse_content("INSERTED, Order, 42, [status, total], 2025-01-10 12:00:00.000").unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.kind, EventKind::Inserted);
        assert_eq!(event.entity_name, "Order");
        assert_eq!(event.entity_id, 42);
        assert_eq!(
            event.fields_updated,
            Some(vec!["status".to_string(), "total".to_string()])
        );
        assert_eq!(
            event.timestamp,
            parse_timestamp("2025-01-10 12:00:00.000")
        );
    }

    #[test]
    fn test_parse_null_fields_updated() {
        let events = parse_content("DELETED, Order, 7, null, 2025-01-10 09:00:00.000").unwrap();
        assert_eq!(events[0].fields_updated, None);
    }

    #[test]
    fn test_parse_preserves_line_order() {
        let content = "INSERTED, Order, 1, null, 2025-01-10 09:00:00.000\n\
                       UPDATED, Order, 2, [status], 2025-01-10 10:00:00.000\n\
                       DELETED, Order, 3, null, 2025-01-10 11:00:00.000";
        let events = parse_content(content).unwrap();
        let ids: Vec<i64> = events.iter().map(|e| e.entity_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = "INSERTED, Order, 1, null, 2025-01-10 09:00:00.000\n\n\
                       DELETED, Order, 2, null, 2025-01-10 10:00:00.000\n";
        let events = parse_content(content).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_wrong_field_count_is_fatal() {
        let result = parse_content("INSERTED, Order, 42, null");
        assert!(matches!(
            result,
            Err(ParseError::FieldCount {
                line_number: 1,
                count: 4
            })
        ));
    }

    #[test]
    fn test_one_bad_line_aborts_whole_load() {
        let content = "INSERTED, Order, 1, null, 2025-01-10 09:00:00.000\n\
                       not a record line\n\
                       DELETED, Order, 2, null, 2025-01-10 10:00:00.000";
        let result = parse_content(content);
        assert!(matches!(
            result,
            Err(ParseError::FieldCount { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_event_type_is_fatal() {
        let result = parse_content("inserted, Order, 42, null, 2025-01-10 12:00:00.000");
        assert!(matches!(
            result,
            Err(ParseError::UnknownKind { line_number: 1, .. })
        ));
    }

    #[test]
    fn test_non_integer_id_is_fatal() {
        let result = parse_content("INSERTED, Order, abc, null, 2025-01-10 12:00:00.000");
        assert!(matches!(
            result,
            Err(ParseError::InvalidId { line_number: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_timestamp_is_not_fatal() {
        let events = parse_content("INSERTED, Order, 42, null, not-a-date").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timestamp, None);
    }

    #[test]
    fn test_single_item_list() {
        let events =
            parse_content("UPDATED, Customer, 9, [email], 2025-01-10 12:00:00.000").unwrap();
        assert_eq!(events[0].fields_updated, Some(vec!["email".to_string()]));
    }

    #[test]
    fn test_commas_outside_brackets_still_split_fields() {
        // Only the first bracketed span is rewritten; the field
        // separators around it must survive untouched.
        let events =
            parse_content("UPDATED, Order, 42, [status, total, notes], 2025-01-10 12:00:00.000")
                .unwrap();
        assert_eq!(
            events[0].fields_updated,
            Some(vec![
                "status".to_string(),
                "total".to_string(),
                "notes".to_string()
            ])
        );
    }

    // -------------------------------------------------------------------------
    // Timestamp parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_timestamp_with_millis() {
        let ts = parse_timestamp("2025-01-10 12:00:00.500").unwrap();
        assert_eq!(
            ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2025-01-10 12:00:00.500"
        );
    }

    #[test]
    fn test_parse_timestamp_without_millis() {
        let ts = parse_timestamp("2025-01-10 12:00:00").unwrap();
        assert_eq!(
            ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-01-10 12:00:00"
        );
    }

    #[test]
    fn test_parse_timestamp_date_only_is_midnight() {
        let ts = parse_timestamp("2025-01-10").unwrap();
        assert_eq!(
            ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-01-10 00:00:00"
        );
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2025-01-10T12:00:00+02:00").unwrap();
        assert_eq!(
            ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-01-10 10:00:00" // converted to UTC
        );
    }

    #[test]
    fn test_parse_timestamp_garbage_is_none() {
        assert_eq!(parse_timestamp("not-a-date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
    }
}
