//! # simdiag Log Parser
//!
//! Parser for the diagnostic text attached to failed smart-contract transaction
//! simulations, with a structured, serializable output model.
//!
//! ## Overview
//!
//! When a simulation fails, the host returns a headline followed by an event log:
//!
//! ```text
//! HostError: Error(Contract, #7)
//!
//! Event log (newest first):
//!    0: [Diagnostic Event] contract:CAS3…, topics:[error, Error(Contract, #7)], data:"escalating error to panic"
//!    1: [Diagnostic Event] topics:[fn_call, CAS3…, borrow], data:[GB3K…, 500000]
//! ```
//!
//! This crate turns that text into a [`ParsedError`](ir::ParsedError): the headline
//! plus one [`EventLogEntry`](ir::EventLogEntry) per recognized line. The text has no
//! documented format, so the parser is tolerant:
//!
//! - **Unrecognized lines** are skipped, never fatal
//! - **Truncated input** still yields every complete entry before the cut
//! - **Unknown labels** are kept as [`EventType::Unknown`](ir::EventType::Unknown)
//! - **Payloads** (`data:`) are kept as raw text
//!
//! ## Topics
//!
//! The `topics:[...]` body is split on commas at square-bracket depth zero, so
//! `[Accrual], "updated"` gives two topics. Parentheses are not tracked:
//! `Error(WasmVm, InvalidAction)` gives two topics as well.
//!
//! ## Schema Versioning
//!
//! The JSON shape of the IR follows semantic versioning via [`SCHEMA_VERSION`].
//!
//! ## Examples
//!
//! ### One-shot Parsing
//!
//! ```
//! let message = "HostError: Error(Contract, #7)\n\
//!                Event log (newest first):\n   \
//!                0: [Diagnostic Event] topics:[error, Error(Contract, #7)], data:\"escalating error to panic\"";
//!
//! let parsed = simdiag_log::parse(message);
//! assert_eq!(parsed.main_error, "HostError: Error(Contract, #7)");
//! assert_eq!(parsed.event_log.len(), 1);
//! assert_eq!(parsed.event_log[0].contract, None);
//! ```
//!
//! ### Streaming/Incremental Parsing
//!
//! ```
//! use simdiag_log::LogParser;
//!
//! let mut parser = LogParser::new();
//!
//! let committed = parser.update("HostError: Error(Contract, #1)\n0: [Contract Event] topics:[a], data:1\n");
//! // The entry is held back until the next one arrives.
//! assert!(committed.is_empty());
//!
//! let committed = parser.update("1: [Contract Event] topics:[b], data:2\n");
//! assert_eq!(committed.len(), 1);
//!
//! let parsed = parser.finish();
//! assert_eq!(parsed.event_log.len(), 2);
//! ```
//!
//! ### Exporting to JSON
//!
//! ```
//! let parsed = simdiag_log::parse("HostError: Error(Budget, ExceededLimit)");
//! let json = serde_json::to_string(&parsed)?;
//! assert_eq!(json, r#"{"mainError":"HostError: Error(Budget, ExceededLimit)","eventLog":[]}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Typed output model.
pub mod ir;
/// Line grammar and streaming parser.
pub mod parser;

#[cfg(test)]
mod tests;

pub use ir::{EventLogEntry, EventType, ParsedError};
pub use parser::LogParser;

/// Schema version of the JSON form of [`ParsedError`].
///
/// - MAJOR: Breaking changes to field names or shapes
/// - MINOR: New optional fields or event types
/// - PATCH: Bug fixes to parsing behavior
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Parses a simulation failure message into its headline and event log.
///
/// Never fails: lines that cannot be understood are skipped, and the worst case is
/// a [`ParsedError`] with an empty `event_log`.
pub fn parse(message: &str) -> ParsedError {
    LogParser::new().parse(message)
}
