// EventLens - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "EventLens";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Event-log file format
// =============================================================================

/// Required extension for the event-log file (without the dot).
pub const EVENT_FILE_EXTENSION: &str = "csv";

/// Top-level field separator in a record line. A comma without the
/// trailing space does NOT separate fields.
pub const FIELD_SEPARATOR: &str = ", ";

/// Exact number of top-level fields per record line.
pub const FIELD_COUNT: usize = 5;

/// Separator the bracket rewrite introduces inside the fields-updated
/// list so the top-level split cannot break on list items.
pub const LIST_SEPARATOR: char = ';';

/// Literal marking an absent fields-updated list.
pub const NULL_LITERAL: &str = "null";

// =============================================================================
// Rendering
// =============================================================================

/// Sentinel shown in the result table when fields_updated is absent.
pub const NO_FIELDS_SENTINEL: &str = "N/A";

/// Shown in the Timestamp column when the source text did not parse.
pub const BAD_TIMESTAMP_SENTINEL: &str = "(unparseable)";

/// Display format for timestamps in the result table.
pub const TABLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the horizontal rule framing the menu.
pub const MENU_RULE_WIDTH: usize = 50;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
