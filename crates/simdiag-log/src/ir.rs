use serde::{Deserialize, Serialize};

/// Structured view of a failed simulation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedError {
    /// First line of the message, verbatim.
    pub main_error: String,
    /// Entries in the order they appeared in the message.
    pub event_log: Vec<EventLogEntry>,
}

impl ParsedError {
    /// Returns true if at least one event log line was recognized.
    pub fn has_events(&self) -> bool {
        !self.event_log.is_empty()
    }

    /// Entries that were recorded but not emitted because the invocation failed.
    pub fn failed_events(&self) -> impl Iterator<Item = &EventLogEntry> {
        self.event_log.iter().filter(|entry| entry.kind.is_failed())
    }
}

/// A single line of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    /// Sequence number as declared by the source. Gaps and duplicates are kept as-is.
    pub index: u64,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub contract: Option<String>,
    pub topics: Vec<String>,
    /// Raw payload text. Never decoded.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    DiagnosticEvent,
    FailedDiagnosticEvent,
    FailedContractEvent,
    ContractEvent,
    /// A bracketed label outside the known set, kept verbatim.
    Unknown(String),
}

impl EventType {
    const DIAGNOSTIC: &'static str = "Diagnostic Event";
    const FAILED_DIAGNOSTIC: &'static str = "Failed Diagnostic Event (not emitted)";
    const FAILED_CONTRACT: &'static str = "Failed Contract Event (not emitted)";
    const CONTRACT: &'static str = "Contract Event";

    /// Maps the text between the brackets of an entry line to its category.
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::DIAGNOSTIC => Self::DiagnosticEvent,
            Self::FAILED_DIAGNOSTIC => Self::FailedDiagnosticEvent,
            Self::FAILED_CONTRACT => Self::FailedContractEvent,
            Self::CONTRACT => Self::ContractEvent,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The bracketed label this category is printed with.
    pub fn label(&self) -> &str {
        match self {
            Self::DiagnosticEvent => Self::DIAGNOSTIC,
            Self::FailedDiagnosticEvent => Self::FAILED_DIAGNOSTIC,
            Self::FailedContractEvent => Self::FAILED_CONTRACT,
            Self::ContractEvent => Self::CONTRACT,
            Self::Unknown(label) => label,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::FailedDiagnosticEvent | Self::FailedContractEvent)
    }
}
