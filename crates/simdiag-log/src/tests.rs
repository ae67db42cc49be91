use crate::ir::EventType;
use crate::parser::split_topics;
use crate::{LogParser, parse};

#[test]
fn test_parse_empty_message() {
    let result = parse("");
    assert_eq!(result.main_error, "");
    assert!(result.event_log.is_empty());
}

#[test]
fn test_parse_headline_only() {
    let result = parse("Just a simple error message");
    assert_eq!(result.main_error, "Just a simple error message");
    assert!(result.event_log.is_empty());
}

#[test]
fn test_headline_is_not_trimmed() {
    let result = parse("  HostError: Error(Storage, MissingValue)  \n");
    assert_eq!(result.main_error, "  HostError: Error(Storage, MissingValue)  ");
}

#[test]
fn test_parser_default() {
    let result = LogParser::default().parse("");
    assert!(!result.has_events());
}

#[test]
fn test_whitespace_only_message() {
    let result = parse("   \n   \n\t\n");
    assert_eq!(result.main_error, "   ");
    assert!(result.event_log.is_empty());
}

#[test]
fn test_entry_with_contract() {
    let log = "err\n0: [Diagnostic Event] contract:CABC, topics:[fn_call], data:Void";
    let result = parse(log);
    assert_eq!(result.event_log.len(), 1);
    let entry = &result.event_log[0];
    assert_eq!(entry.index, 0);
    assert_eq!(entry.kind, EventType::DiagnosticEvent);
    assert_eq!(entry.contract.as_deref(), Some("CABC"));
    assert_eq!(entry.topics, vec!["fn_call"]);
    assert_eq!(entry.data, "Void");
}

#[test]
fn test_entry_without_contract() {
    let log = "err\n3: [Contract Event] topics:[transfer], data:100";
    let result = parse(log);
    assert_eq!(result.event_log.len(), 1);
    assert_eq!(result.event_log[0].contract, None);
    assert_eq!(result.event_log[0].index, 3);
}

#[test]
fn test_all_known_labels() {
    let log = "err\n\
        0: [Diagnostic Event] topics:[a], data:1\n\
        1: [Failed Diagnostic Event (not emitted)] topics:[a], data:1\n\
        2: [Failed Contract Event (not emitted)] topics:[a], data:1\n\
        3: [Contract Event] topics:[a], data:1";
    let kinds: Vec<_> = parse(log).event_log.into_iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventType::DiagnosticEvent,
            EventType::FailedDiagnosticEvent,
            EventType::FailedContractEvent,
            EventType::ContractEvent,
        ]
    );
}

#[test]
fn test_unknown_label_is_kept() {
    let log = "err\n0: [System Event] topics:[core_metrics], data:7";
    let result = parse(log);
    assert_eq!(result.event_log.len(), 1);
    assert_eq!(
        result.event_log[0].kind,
        EventType::Unknown("System Event".to_string())
    );
    assert_eq!(result.event_log[0].kind.label(), "System Event");
}

#[test]
fn test_label_round_trip() {
    for kind in [
        EventType::DiagnosticEvent,
        EventType::FailedDiagnosticEvent,
        EventType::FailedContractEvent,
        EventType::ContractEvent,
    ] {
        assert_eq!(EventType::from_label(kind.label()), kind);
    }
}

#[test]
fn test_failed_events() {
    let log = "err\n\
        0: [Diagnostic Event] topics:[a], data:1\n\
        1: [Failed Contract Event (not emitted)] topics:[b], data:2\n\
        2: [Failed Diagnostic Event (not emitted)] topics:[c], data:3";
    let result = parse(log);
    let failed: Vec<u64> = result.failed_events().map(|e| e.index).collect();
    assert_eq!(failed, vec![1, 2]);
}

#[test]
fn test_header_and_blank_lines_are_skipped() {
    let log = "err\n\nEvent log (newest first):\n\n   0: [Diagnostic Event] topics:[a], data:1\n";
    let result = parse(log);
    assert_eq!(result.event_log.len(), 1);
}

#[test]
fn test_unrecognized_lines_do_not_abort() {
    let log = "err\n\
        garbage line\n\
        0: [Diagnostic Event] topics:[a], data:1\n\
        1: [Diagnostic Event] topics:[unterminated, data:2\n\
        2: [Diagnostic Event] topics:[c], data:3";
    let result = parse(log);
    let indices: Vec<u64> = result.event_log.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_overflowing_index_is_skipped() {
    let log = "err\n99999999999999999999999: [Diagnostic Event] topics:[a], data:1\n1: [Contract Event] topics:[b], data:2";
    let result = parse(log);
    assert_eq!(result.event_log.len(), 1);
    assert_eq!(result.event_log[0].index, 1);
}

#[test]
fn test_index_gaps_are_not_corrected() {
    let log = "err\n5: [Contract Event] topics:[a], data:1\n5: [Contract Event] topics:[b], data:2\n9: [Contract Event] topics:[c], data:3";
    let indices: Vec<u64> = parse(log).event_log.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![5, 5, 9]);
}

#[test]
fn test_data_trailing_content_is_preserved() {
    let log = "err\n0: [Diagnostic Event] topics:[a], data:\"x\" and then some ], data: more";
    let result = parse(log);
    assert_eq!(result.event_log[0].data, "\"x\" and then some ], data: more");
}

#[test]
fn test_crlf_entry_lines() {
    let log = "err\r\n0: [Diagnostic Event] topics:[a], data:1\r\n";
    let result = parse(log);
    assert_eq!(result.main_error, "err\r");
    assert_eq!(result.event_log.len(), 1);
    assert_eq!(result.event_log[0].data, "1");
}

#[test]
fn test_split_topics_nested_brackets() {
    assert_eq!(
        split_topics(r#"[Accrual], "updated""#),
        vec!["[Accrual]", "\"updated\""]
    );
    assert_eq!(
        split_topics("[a, b], [c, [d, e]], f"),
        vec!["[a, b]", "[c, [d, e]]", "f"]
    );
}

#[test]
fn test_split_topics_parentheses_are_not_nesting() {
    assert_eq!(
        split_topics("error, Error(WasmVm, InvalidAction)"),
        vec!["error", "Error(WasmVm", "InvalidAction)"]
    );
}

#[test]
fn test_split_topics_edges() {
    assert!(split_topics("").is_empty());
    assert_eq!(split_topics("a,,b"), vec!["a", "", "b"]);
    assert_eq!(split_topics("a, "), vec!["a", ""]);
    assert_eq!(split_topics("a,"), vec!["a"]);
    // A stray closing bracket keeps later commas from splitting.
    assert_eq!(split_topics("a], b, c"), vec!["a], b, c"]);
}
