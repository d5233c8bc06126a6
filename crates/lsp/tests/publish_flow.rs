//! Event-to-publish flow tests: a document event goes in, a full-replacement
//! diagnostic list comes out, and the published set tracks the latest text.

use lsp_types::{
    ClientCapabilities, DiagnosticSeverity, Position, PublishDiagnosticsClientCapabilities, Range,
    TextDocumentClientCapabilities, Url,
};
use rwl_toolchain_lsp::{DocumentEvent, EditorState, LANG_ID};

fn caps(related_information: bool) -> ClientCapabilities {
    ClientCapabilities {
        text_document: Some(TextDocumentClientCapabilities {
            publish_diagnostics: Some(PublishDiagnosticsClientCapabilities {
                related_information: Some(related_information),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn doc() -> Url {
    Url::parse("file:///rules/sample.rwl").expect("valid uri")
}

fn range(line: u32, start: u32, end: u32) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}

#[test]
fn invalid_line_publishes_one_syntax_error() {
    let mut state = EditorState::new(&caps(true));
    let update = state.process_event(DocumentEvent::Opened {
        uri: doc(),
        text: "a=b=c\nok=fine\n".into(),
    });

    assert_eq!(update.uri, doc());
    assert_eq!(update.diagnostics.len(), 1);
    let d = &update.diagnostics[0];
    assert_eq!(d.message, "Syntax Error");
    assert_eq!(d.severity, Some(DiagnosticSeverity::ERROR));
    assert_eq!(d.source.as_deref(), Some(LANG_ID));
    assert_eq!(d.range, range(0, 0, 5));

    let related = d.related_information.as_ref().expect("negotiated");
    assert_eq!(related.len(), 1);
    assert_eq!(
        related[0].message,
        "Each instruction must include exactly one equal sign."
    );
    assert_eq!(related[0].location.uri, doc());
    assert_eq!(related[0].location.range, d.range);
}

#[test]
fn related_information_is_omitted_without_the_capability() {
    let mut state = EditorState::new(&caps(false));
    assert!(!state.supports_related_information());

    let update = state.process_event(DocumentEvent::Changed {
        uri: doc(),
        text: "x=(".into(),
    });
    assert_eq!(update.diagnostics.len(), 1);
    assert!(update.diagnostics[0].related_information.is_none());
}

#[test]
fn default_capabilities_negotiate_to_no_related_information() {
    let state = EditorState::new(&ClientCapabilities::default());
    assert!(!state.supports_related_information());
}

#[test]
fn every_error_on_a_line_becomes_one_related_entry() {
    let mut state = EditorState::new(&caps(true));
    let update = state.process_event(DocumentEvent::Changed {
        uri: doc(),
        text: "(once)=(return)".into(),
    });

    assert_eq!(update.diagnostics.len(), 1);
    let related = update.diagnostics[0].related_information.as_ref().unwrap();
    let messages: Vec<&str> = related.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "(once) and another keyword cannot be used at the same time.",
            "(return) and another keyword cannot be used at the same time.",
        ]
    );
}

#[test]
fn one_diagnostic_per_invalid_line() {
    let mut state = EditorState::new(&caps(true));
    let update = state.process_event(DocumentEvent::Changed {
        uri: doc(),
        text: "bad\ngood=rule\nworse=(\n".into(),
    });

    assert_eq!(update.diagnostics.len(), 2);
    assert_eq!(update.diagnostics[0].range, range(0, 0, 3));
    assert_eq!(update.diagnostics[1].range, range(2, 0, 7));
}

#[test]
fn range_stops_before_comment_and_trailing_whitespace() {
    let mut state = EditorState::new(&caps(true));
    let update = state.process_event(DocumentEvent::Changed {
        uri: doc(),
        text: "x=(   # unclosed".into(),
    });
    assert_eq!(update.diagnostics[0].range, range(0, 0, 3));
}

#[test]
fn change_fully_replaces_the_previous_list() {
    let mut state = EditorState::new(&caps(true));
    let uri = doc();

    let first = state.process_event(DocumentEvent::Changed {
        uri: uri.clone(),
        text: "a=b=c".into(),
    });
    assert_eq!(first.diagnostics.len(), 1);
    assert_eq!(state.published(&uri).map(<[_]>::len), Some(1));

    // The edit fixes the document; the new (empty) list supersedes the old
    // one instead of merging with it.
    let second = state.process_event(DocumentEvent::Changed {
        uri: uri.clone(),
        text: "a=b".into(),
    });
    assert!(second.diagnostics.is_empty());
    assert_eq!(state.published(&uri).map(<[_]>::len), Some(0));
}

#[test]
fn close_publishes_empty_and_clears_the_document() {
    let mut state = EditorState::new(&caps(true));
    let uri = doc();

    state.process_event(DocumentEvent::Changed {
        uri: uri.clone(),
        text: "broken".into(),
    });
    assert!(state.published(&uri).is_some());

    let update = state.process_event(DocumentEvent::Closed { uri: uri.clone() });
    assert!(update.diagnostics.is_empty());
    assert!(state.published(&uri).is_none());
}

#[test]
fn documents_are_tracked_independently() {
    let mut state = EditorState::new(&caps(true));
    let a = Url::parse("file:///rules/a.rwl").unwrap();
    let b = Url::parse("file:///rules/b.rwl").unwrap();

    state.process_event(DocumentEvent::Changed {
        uri: a.clone(),
        text: "broken".into(),
    });
    state.process_event(DocumentEvent::Changed {
        uri: b.clone(),
        text: "fine=rule".into(),
    });

    assert_eq!(state.published(&a).map(<[_]>::len), Some(1));
    assert_eq!(state.published(&b).map(<[_]>::len), Some(0));

    state.process_event(DocumentEvent::Closed { uri: a.clone() });
    assert!(state.published(&a).is_none());
    assert_eq!(state.published(&b).map(<[_]>::len), Some(0));
}

#[test]
fn crlf_documents_report_correct_lines() {
    let mut state = EditorState::new(&caps(true));
    let update = state.process_event(DocumentEvent::Changed {
        uri: doc(),
        text: "a=b=c\r\nd=e=f".into(),
    });
    assert_eq!(update.diagnostics.len(), 2);
    assert_eq!(update.diagnostics[0].range, range(0, 0, 5));
    assert_eq!(update.diagnostics[1].range, range(1, 0, 5));
}
