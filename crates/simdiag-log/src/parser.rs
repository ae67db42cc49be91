use crate::ir::{EventLogEntry, EventType, ParsedError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Header line printed by the host right before the entries.
const EVENT_LOG_HEADER: &str = "Event log (newest first):";

/// `<index>: [<label>] contract:<id>, topics:[<topics>], data:<rest>`
///
/// The contract group is optional. Topics stop at the first `],` that is followed by `data:`.
static ENTRY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*([0-9]+)\s*:\s*\[([^\]]*)\]\s*(?:contract:([^\s,]+),)?\s*topics:\[(.*?)\],\s*data:(.*)$",
    )
    .expect("entry line pattern is valid")
});

/// A parser for the diagnostic text attached to failed transaction simulations.
///
/// `LogParser` accepts the message whole or in chunks. The first line is kept as the
/// headline; every later line that looks like an event log entry becomes an
/// [`EventLogEntry`]. Anything else is skipped.
///
/// A matched entry is held back until the next entry matches or the input ends, so
/// [`update`](Self::update) only ever returns entries that are final.
#[derive(Debug, Default)]
pub struct LogParser {
    main_error: Option<String>,
    event_log: Vec<EventLogEntry>,
    pending: Option<EventLogEntry>,
    buffer: String,
}

impl LogParser {
    /// Creates a new, empty `LogParser`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends input to the internal buffer and processes every complete line.
    ///
    /// # Returns
    ///
    /// The entries committed by this chunk. The most recently matched entry is not
    /// included until a later entry or [`finish`](Self::finish) commits it.
    pub fn update(&mut self, input: &str) -> Vec<EventLogEntry> {
        self.buffer.push_str(input);

        let Some(last_nl) = self.buffer.rfind('\n') else {
            return Vec::new();
        };

        let chunk: String = self.buffer.drain(..=last_nl).collect();
        let mut committed = Vec::new();
        for line in chunk[..last_nl].split('\n') {
            if let Some(entry) = self.process_line(line) {
                committed.push(entry);
            }
        }
        committed
    }

    /// The headline, once its line is complete.
    pub fn main_error(&self) -> Option<&str> {
        self.main_error.as_deref()
    }

    /// Consumes the parser, treating any buffered partial line as the last line.
    ///
    /// # Returns
    ///
    /// The full [`ParsedError`], including entries already handed out by `update`.
    pub fn finish(mut self) -> ParsedError {
        if !self.buffer.is_empty() {
            let line = std::mem::take(&mut self.buffer);
            self.process_line(&line);
        }
        if let Some(last) = self.pending.take() {
            self.event_log.push(last);
        }

        log::debug!(
            "parsed simulation diagnostics: {} event log entries",
            self.event_log.len()
        );

        ParsedError {
            main_error: self.main_error.unwrap_or_default(),
            event_log: self.event_log,
        }
    }

    /// Parses a complete message in one go.
    ///
    /// Equivalent to a single [`update`](Self::update) followed by [`finish`](Self::finish).
    pub fn parse(mut self, input: &str) -> ParsedError {
        self.update(input);
        self.finish()
    }

    /// Handles one line without its terminator. Returns the entry it committed, if any.
    fn process_line(&mut self, line: &str) -> Option<EventLogEntry> {
        if self.main_error.is_none() {
            self.main_error = Some(line.to_string());
            return None;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == EVENT_LOG_HEADER {
            return None;
        }

        let Some(entry) = parse_entry(trimmed) else {
            log::trace!("skipping unrecognized event log line: {trimmed}");
            return None;
        };

        let committed = self.pending.replace(entry)?;
        self.event_log.push(committed.clone());
        Some(committed)
    }
}

/// Matches a single trimmed line against the entry grammar.
///
/// Returns `None` for lines that do not fit, including ones whose index overflows `u64`.
fn parse_entry(line: &str) -> Option<EventLogEntry> {
    let caps = ENTRY_LINE.captures(line)?;

    let index = match caps[1].parse::<u64>() {
        Ok(index) => index,
        Err(err) => {
            log::trace!("event log index {:?} out of range: {err}", &caps[1]);
            return None;
        }
    };

    Some(EventLogEntry {
        index,
        kind: EventType::from_label(&caps[2]),
        contract: caps.get(3).map(|m| m.as_str().to_string()),
        topics: split_topics(&caps[4]),
        data: caps[5].trim().to_string(),
    })
}

/// Splits the body of `topics:[...]` on commas that are not nested in square brackets.
///
/// Only `[` and `]` affect nesting: `Error(WasmVm, InvalidAction)` is split in two.
/// An unbalanced `]` drives the depth negative, and commas are then kept until the
/// depth returns to zero.
pub fn split_topics(body: &str) -> Vec<String> {
    let mut topics = Vec::new();
    let mut current = String::new();
    let mut depth: isize = 0;

    for c in body.chars() {
        match c {
            '[' => {
                depth += 1;
                current.push(c);
            }
            ']' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                topics.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        topics.push(current.trim().to_string());
    }
    topics
}
