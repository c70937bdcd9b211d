// EventLens - app/loader.rs
//
// Event-log file loading: path-level checks, the single startup read,
// and record parsing. Every failure here is fatal for the session.

use crate::core::model::ChangeEvent;
use crate::core::parser;
use crate::util::constants;
use crate::util::error::{LoadError, Result};
use std::fs;
use std::path::Path;

/// Load and parse the event-log file at `path`.
///
/// Checks the `.csv` extension, reads the whole file into memory (the
/// file is the session's fixed input; there is no streaming), rejects
/// empty files and hands the content to the record parser.
pub fn load_events(path: &Path) -> Result<Vec<ChangeEvent>> {
    if path.extension().and_then(|e| e.to_str()) != Some(constants::EVENT_FILE_EXTENSION) {
        return Err(LoadError::WrongExtension {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }

    let events = parser::parse_content(&content)?;
    if events.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }

    tracing::info!(
        path = %path.display(),
        events = events.len(),
        "Event log loaded"
    );
    Ok(events)
}
