// EventLens - core/filter.rs
//
// Incremental filter-accumulation session for change events.
// Successive filters are AND-combined: each successful application
// narrows the current subset, never the full set and never backwards.
// Core layer: pure logic, no I/O or terminal dependencies.

use crate::core::model::{ChangeEvent, EventKind, FilterKind};
use crate::core::parser;
use crate::util::error::FilterError;

/// One interactive filtering session over a fixed event set.
///
/// The subset is stored as indices into `events` (in event order), so
/// narrowing never clones events and prior results are never mutated.
/// Each filter kind may be applied at most once per chain; `clear`
/// resets the chain.
#[derive(Debug)]
pub struct FilterSession {
    /// Full ordered event sequence, fixed for the session.
    events: Vec<ChangeEvent>,

    /// Indices of the current filtered subset. `None` = no filter active.
    subset: Option<Vec<usize>>,

    /// Which filter kinds have been applied in this chain.
    applied: [bool; FilterKind::COUNT],
}

impl FilterSession {
    pub fn new(events: Vec<ChangeEvent>) -> Self {
        Self {
            events,
            subset: None,
            applied: [false; FilterKind::COUNT],
        }
    }

    /// The full event set loaded at startup.
    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    pub fn total(&self) -> usize {
        self.events.len()
    }

    /// True once the given kind has been applied in the current chain.
    pub fn is_applied(&self, kind: FilterKind) -> bool {
        self.applied[kind.index()]
    }

    /// True once any filter has been applied in the current chain.
    pub fn any_applied(&self) -> bool {
        self.subset.is_some()
    }

    /// The current subset in event order, or `None` when no filter is
    /// active.
    pub fn subset(&self) -> Option<Vec<&ChangeEvent>> {
        self.subset
            .as_ref()
            .map(|indices| indices.iter().map(|&i| &self.events[i]).collect())
    }

    pub fn subset_len(&self) -> Option<usize> {
        self.subset.as_ref().map(Vec::len)
    }

    /// Reset to the no-filter state: subset absent, all kind flags off.
    pub fn clear(&mut self) {
        self.subset = None;
        self.applied = [false; FilterKind::COUNT];
        tracing::debug!("Filters cleared");
    }

    /// Keep events whose kind matches the selector. Accepts the full
    /// literals or the `I`/`U`/`D` shorthand, case-insensitive.
    pub fn filter_by_type(&mut self, selector: &str) -> Result<usize, FilterError> {
        self.check_unapplied(FilterKind::EntityType)?;

        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(FilterError::EmptyTypeSelector);
        }
        let kind = EventKind::from_selector(trimmed).ok_or_else(|| {
            FilterError::UnknownTypeSelector {
                raw: trimmed.to_string(),
            }
        })?;

        Ok(self.narrow(FilterKind::EntityType, |e| e.kind == kind))
    }

    /// Keep events whose fields-updated list contains `field` exactly.
    /// Events with an absent list never match.
    pub fn filter_by_field(&mut self, field: &str) -> Result<usize, FilterError> {
        self.check_unapplied(FilterKind::Field)?;

        let name = field.trim();
        if name.is_empty() {
            return Err(FilterError::EmptyFieldName);
        }

        Ok(self.narrow(FilterKind::Field, |e| {
            e.fields_updated
                .as_ref()
                .is_some_and(|fields| fields.iter().any(|f| f == name))
        }))
    }

    /// Keep events whose timestamp lies within `[start, end]`, both ends
    /// inclusive. Events with an unparseable timestamp never match.
    pub fn filter_by_date_range(
        &mut self,
        start_raw: &str,
        end_raw: &str,
    ) -> Result<usize, FilterError> {
        self.check_unapplied(FilterKind::DateRange)?;

        if start_raw.trim().is_empty() || end_raw.trim().is_empty() {
            return Err(FilterError::MissingDateBound);
        }
        let start = parser::parse_timestamp(start_raw).ok_or_else(|| FilterError::InvalidDate {
            raw: start_raw.trim().to_string(),
        })?;
        let end = parser::parse_timestamp(end_raw).ok_or_else(|| FilterError::InvalidDate {
            raw: end_raw.trim().to_string(),
        })?;
        if start > end {
            return Err(FilterError::InvertedRange { start, end });
        }

        Ok(self.narrow(FilterKind::DateRange, |e| {
            e.timestamp.is_some_and(|ts| ts >= start && ts <= end)
        }))
    }

    /// Re-application guard: a kind already applied in this chain is
    /// rejected until `clear`.
    fn check_unapplied(&self, kind: FilterKind) -> Result<(), FilterError> {
        if self.is_applied(kind) {
            return Err(FilterError::AlreadyApplied { kind: kind.label() });
        }
        Ok(())
    }

    /// Apply a predicate to the current subset (or the full set when no
    /// filter is active), replace the subset with the narrower result and
    /// mark the kind. Returns the new subset size.
    fn narrow<P>(&mut self, kind: FilterKind, predicate: P) -> usize
    where
        P: Fn(&ChangeEvent) -> bool,
    {
        let narrowed: Vec<usize> = match &self.subset {
            Some(indices) => indices
                .iter()
                .copied()
                .filter(|&i| predicate(&self.events[i]))
                .collect(),
            None => (0..self.events.len())
                .filter(|&i| predicate(&self.events[i]))
                .collect(),
        };

        let len = narrowed.len();
        tracing::debug!(kind = kind.label(), remaining = len, "Filter applied");
        self.subset = Some(narrowed);
        self.applied[kind.index()] = true;
        len
    }
}
