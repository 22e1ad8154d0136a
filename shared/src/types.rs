//! Core types used throughout the name suggestion system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::errors::{SharedError, SharedResult};

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any component in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// WebServer process hosting the generation endpoint
    WebServer,
    /// Terminal client process
    Client,
}

impl ProcessId {
    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Initialize the global process ID for the client
    pub fn init_client() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Client)
    }

    /// Get the global process ID (must be initialized first)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().expect("ProcessId not initialized - call init_* first")
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::WebServer => write!(f, "webserver"),
            ProcessId::Client => write!(f, "client"),
        }
    }
}

/// Reserved multi-select option meaning "every concrete option".
/// Expanded client-side; must never appear in a serialized request.
pub const SELECT_ALL: &str = "ALL";

/// Inclusive bounds for the requested suggestion count
pub const MIN_COUNT: u8 = 3;
pub const MAX_COUNT: u8 = 20;

/// Gender a name is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    /// Chinese label shown in rendered cards and clipboard summaries
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
            Gender::Neutral => "中性",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "neutral" => Ok(Gender::Neutral),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Requested name length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLength {
    /// One character given name
    Single,
    /// Two character given name
    Double,
    #[default]
    Any,
}

impl fmt::Display for NameLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameLength::Single => write!(f, "single"),
            NameLength::Double => write!(f, "double"),
            NameLength::Any => write!(f, "any"),
        }
    }
}

impl std::str::FromStr for NameLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(NameLength::Single),
            "double" => Ok(NameLength::Double),
            "any" => Ok(NameLength::Any),
            _ => Err(format!("Unknown name length: {s}")),
        }
    }
}

fn default_count() -> u8 {
    MIN_COUNT
}

/// One generation request, serialized as the `params` query parameter.
///
/// Field names are camelCase on the wire; this framing is load-bearing for
/// interoperability and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub meanings: Vec<String>,
    pub cultural_source: Vec<String>,
    #[serde(default)]
    pub avoid_characters: Vec<String>,
    #[serde(default)]
    pub avoid_sounds: Vec<String>,
    #[serde(default = "default_count")]
    pub count: u8,
    #[serde(default)]
    pub name_length: NameLength,
    #[serde(default)]
    pub disliked_names: Vec<String>,
}

impl GenerationRequest {
    /// Check the request invariants before transmission or generation.
    ///
    /// Invariant: `meanings` and `culturalSource` are non-empty and never
    /// contain the select-all sentinel; `count` stays within bounds.
    pub fn validate(&self) -> SharedResult<()> {
        if self.meanings.is_empty() {
            return Err(SharedError::InvalidRequest {
                field: "meanings".to_string(),
                message: "at least one meaning must be selected".to_string(),
            });
        }
        if self.cultural_source.is_empty() {
            return Err(SharedError::InvalidRequest {
                field: "culturalSource".to_string(),
                message: "at least one cultural source must be selected".to_string(),
            });
        }
        if self.meanings.iter().any(|m| m == SELECT_ALL) {
            return Err(SharedError::InvalidRequest {
                field: "meanings".to_string(),
                message: format!("sentinel {SELECT_ALL} must be expanded before transmission"),
            });
        }
        if self.cultural_source.iter().any(|s| s == SELECT_ALL) {
            return Err(SharedError::InvalidRequest {
                field: "culturalSource".to_string(),
                message: format!("sentinel {SELECT_ALL} must be expanded before transmission"),
            });
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            return Err(SharedError::InvalidRequest {
                field: "count".to_string(),
                message: format!("count must be between {MIN_COUNT} and {MAX_COUNT}"),
            });
        }
        Ok(())
    }
}

/// One generated name suggestion. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameResult {
    pub name: String,
    pub gender: Gender,
    pub meaning: Vec<String>,
    pub source: String,
    pub explanation: String,
}
