//! Client-side data types

use shared::{Gender, NameLength, NameResult};

/// Raw values captured from the form surface before normalization.
///
/// Multi-select fields may still contain the select-all sentinel and the
/// avoid fields are free text; [`crate::form::build_request`] turns this
/// into a transmittable request.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub gender: Option<Gender>,
    pub meanings: Vec<String>,
    pub cultural_source: Vec<String>,
    pub avoid_characters: String,
    pub avoid_sounds: String,
    pub count: u8,
    pub name_length: NameLength,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            gender: None,
            meanings: Vec::new(),
            cultural_source: Vec::new(),
            avoid_characters: String::new(),
            avoid_sounds: String::new(),
            count: shared::MIN_COUNT,
            name_length: NameLength::Any,
        }
    }
}

/// Lifecycle of one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request submitted yet
    Idle,
    /// A stream is open and results may still arrive
    Loading,
    /// The stream completed, possibly with partial results
    Done,
    /// The stream failed before any result arrived
    Failed,
}

impl RequestPhase {
    /// True exactly while a stream is open
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading)
    }
}

/// One event delivered by an open suggestion stream
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// An unnamed data message carrying one suggestion
    Name(NameResult),
    /// The named done event terminating a successful stream
    Done,
    /// A named error event or a transport-level failure
    Failed { message: String },
}
