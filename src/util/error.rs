// EventLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Two tiers: fatal load/parse errors abort startup with a message and a
// non-zero exit; filter errors are recoverable and never corrupt state.

use chrono::{DateTime, Utc};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all EventLens operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum EventLensError {
    /// Event-log file loading failed.
    Load(LoadError),

    /// Event-log record parsing failed.
    Parse(ParseError),

    /// Filter operation failed.
    Filter(FilterError),
}

impl fmt::Display for EventLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
        }
    }
}

impl std::error::Error for EventLensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Filter(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Fatal errors raised before the interactive session starts.
#[derive(Debug)]
pub enum LoadError {
    /// No path argument was given on the command line.
    MissingPath,

    /// The given path does not end in the required extension.
    WrongExtension { path: PathBuf },

    /// The file exists but contains no records.
    Empty { path: PathBuf },

    /// I/O error reading the event-log file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(
                f,
                "No event-log file provided. Pass the path to an event file (.csv)."
            ),
            Self::WrongExtension { path } => {
                write!(f, "'{}' is not a .csv event-log file", path.display())
            }
            Self::Empty { path } => {
                write!(f, "Event-log file '{}' is empty", path.display())
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "Cannot read event-log file '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for EventLensError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Fatal record-format errors. Any one of these aborts the whole load;
/// there is no per-line recovery.
#[derive(Debug)]
pub enum ParseError {
    /// A line did not split into exactly the required field count.
    FieldCount { line_number: usize, count: usize },

    /// The event-type field is not one of the three known literals.
    UnknownKind { line_number: usize, raw: String },

    /// The entity-id field is not an integer.
    InvalidId { line_number: usize, raw: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { line_number, count } => write!(
                f,
                "line {line_number}: expected {} fields, found {count}",
                crate::util::constants::FIELD_COUNT
            ),
            Self::UnknownKind { line_number, raw } => {
                write!(f, "line {line_number}: unknown event type '{raw}'")
            }
            Self::InvalidId { line_number, raw } => {
                write!(f, "line {line_number}: entity id '{raw}' is not an integer")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for EventLensError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Recoverable errors from filter operations. The session state is
/// guaranteed unchanged when one of these is returned.
#[derive(Debug)]
pub enum FilterError {
    /// The filter kind has already been applied in this chain.
    AlreadyApplied { kind: &'static str },

    /// No entity type was entered.
    EmptyTypeSelector,

    /// The entity-type selector is not a known literal or shorthand.
    UnknownTypeSelector { raw: String },

    /// No field name was entered.
    EmptyFieldName,

    /// One or both date bounds were left empty.
    MissingDateBound,

    /// A date bound could not be parsed as a timestamp.
    InvalidDate { raw: String },

    /// The start of the range is strictly after the end.
    InvertedRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyApplied { kind } => write!(
                f,
                "The {kind} filter is already applied. Clear filters to select it again."
            ),
            Self::EmptyTypeSelector => write!(
                f,
                "No entity type entered. Expected INSERTED, UPDATED, DELETED or I/U/D."
            ),
            Self::UnknownTypeSelector { raw } => write!(
                f,
                "Unrecognised entity type '{raw}'. Expected INSERTED, UPDATED, DELETED or I/U/D."
            ),
            Self::EmptyFieldName => write!(f, "No field name entered."),
            Self::MissingDateBound => {
                write!(f, "Both a start date and an end date are required.")
            }
            Self::InvalidDate { raw } => {
                write!(f, "Cannot parse '{raw}' as a timestamp.")
            }
            Self::InvertedRange { start, end } => write!(
                f,
                "Start date {} is after end date {}.",
                start.format(crate::util::constants::TABLE_TIMESTAMP_FORMAT),
                end.format(crate::util::constants::TABLE_TIMESTAMP_FORMAT)
            ),
        }
    }
}

impl std::error::Error for FilterError {}

impl From<FilterError> for EventLensError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

/// Convenience type alias for EventLens results.
pub type Result<T> = std::result::Result<T, EventLensError>;
