// EventLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// terminal dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};

// =============================================================================
// Event kind
// =============================================================================

/// The three recorded change kinds, matching the event-log literals
/// `INSERTED`, `UPDATED` and `DELETED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Inserted,
    Updated,
    Deleted,
}

impl EventKind {
    /// Returns all variants in record-literal order.
    pub fn all() -> &'static [EventKind] {
        &[EventKind::Inserted, EventKind::Updated, EventKind::Deleted]
    }

    /// The exact event-log literal for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Inserted => "INSERTED",
            EventKind::Updated => "UPDATED",
            EventKind::Deleted => "DELETED",
        }
    }

    /// One-letter shorthand accepted by the entity-type filter prompt.
    pub fn shorthand(&self) -> char {
        match self {
            EventKind::Inserted => 'I',
            EventKind::Updated => 'U',
            EventKind::Deleted => 'D',
        }
    }

    /// Parses the event-type field of a record line. Case-sensitive:
    /// anything but the three exact literals is a format error.
    pub fn from_record_literal(raw: &str) -> Option<EventKind> {
        match raw {
            "INSERTED" => Some(EventKind::Inserted),
            "UPDATED" => Some(EventKind::Updated),
            "DELETED" => Some(EventKind::Deleted),
            _ => None,
        }
    }

    /// Parses a user-entered type selector. Accepts the full literals or
    /// the one-letter shorthand, case-insensitive.
    pub fn from_selector(raw: &str) -> Option<EventKind> {
        match raw.to_ascii_uppercase().as_str() {
            "I" | "INSERTED" => Some(EventKind::Inserted),
            "U" | "UPDATED" => Some(EventKind::Updated),
            "D" | "DELETED" => Some(EventKind::Deleted),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Change event (normalised output of parsing)
// =============================================================================

/// A single parsed entity-change event.
///
/// This is the core data unit that flows through filtering and display.
/// Immutable once parsed; the filter engine only ever references events,
/// never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// What happened to the entity instance.
    pub kind: EventKind,

    /// Name of the affected entity/table.
    pub entity_name: String,

    /// Integer identifier of the affected entity instance.
    pub entity_id: i64,

    /// Names of the fields touched by an update. `None` when the source
    /// field is the literal `null`. Meaningful only for UPDATED events,
    /// but not enforced.
    pub fields_updated: Option<Vec<String>>,

    /// Parsed timestamp in UTC. `None` when the source text did not
    /// parse; such events fail every date-range comparison.
    pub timestamp: Option<DateTime<Utc>>,
}

// =============================================================================
// Filter kind
// =============================================================================

/// The three filter dimensions a session can narrow by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    EntityType,
    Field,
    DateRange,
}

impl FilterKind {
    /// Number of filter dimensions (size of the applied-flags array).
    pub const COUNT: usize = 3;

    /// Returns all variants in menu order.
    pub fn all() -> &'static [FilterKind] {
        &[FilterKind::EntityType, FilterKind::Field, FilterKind::DateRange]
    }

    /// Slot of this kind in the applied-flags array.
    pub fn index(self) -> usize {
        match self {
            FilterKind::EntityType => 0,
            FilterKind::Field => 1,
            FilterKind::DateRange => 2,
        }
    }

    /// Human-readable label for prompts and error messages.
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::EntityType => "entity-type",
            FilterKind::Field => "updated-field",
            FilterKind::DateRange => "date-range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_literal_is_case_sensitive() {
        assert_eq!(
            EventKind::from_record_literal("INSERTED"),
            Some(EventKind::Inserted)
        );
        assert_eq!(EventKind::from_record_literal("inserted"), None);
        assert_eq!(EventKind::from_record_literal("Inserted"), None);
        assert_eq!(EventKind::from_record_literal(""), None);
    }

    #[test]
    fn test_selector_accepts_shorthand_and_literal() {
        assert_eq!(EventKind::from_selector("I"), Some(EventKind::Inserted));
        assert_eq!(EventKind::from_selector("u"), Some(EventKind::Updated));
        assert_eq!(EventKind::from_selector("DELETED"), Some(EventKind::Deleted));
        assert_eq!(EventKind::from_selector("deleted"), Some(EventKind::Deleted));
    }

    #[test]
    fn test_shorthand_and_literal_select_the_same_kind() {
        for kind in EventKind::all() {
            assert_eq!(
                EventKind::from_selector(&kind.shorthand().to_string()),
                Some(*kind)
            );
            assert_eq!(EventKind::from_selector(kind.label()), Some(*kind));
        }
    }

    #[test]
    fn test_selector_rejects_unknown() {
        assert_eq!(EventKind::from_selector(""), None);
        assert_eq!(EventKind::from_selector("X"), None);
        assert_eq!(EventKind::from_selector("INSERT"), None);
    }

    #[test]
    fn test_filter_kind_indices_cover_flag_array() {
        for (expected, kind) in FilterKind::all().iter().enumerate() {
            assert_eq!(kind.index(), expected);
        }
    }
}
