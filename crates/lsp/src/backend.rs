use std::collections::HashMap;

use lsp_types::{
    ClientCapabilities, Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location,
    Url,
};
use rwl_toolchain_core::{scan_lines, validate_line};
use rwl_toolchain_diagnostics::LineIndex;

use crate::utils::span_to_range;

/// Language identifier, reported as the `source` of every diagnostic.
pub const LANG_ID: &str = "rwl";

/// Primary message of every published diagnostic. The individual reasons a
/// line is invalid travel as related information when the client takes them.
const SYNTAX_ERROR: &str = "Syntax Error";

/// A document lifecycle notification relayed by the host's text-document
/// synchronization layer. The `uri` is an opaque document identity.
#[derive(Debug, Clone)]
pub enum DocumentEvent {
    /// A document was opened with the given full text.
    Opened {
        /// Document identity.
        uri: Url,
        /// Full text at open time.
        text: String,
    },
    /// A document's content changed; `text` is the full current text.
    Changed {
        /// Document identity.
        uri: Url,
        /// Full text after the change.
        text: String,
    },
    /// A document was closed.
    Closed {
        /// Document identity.
        uri: Url,
    },
}

/// The full-replacement list to hand to the host's `publishDiagnostics`.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishUpdate {
    /// Document the diagnostics belong to.
    pub uri: Url,
    /// Complete new diagnostic list for that document (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
}

/// Per-connection validation state.
///
/// Owns the related-information capability negotiated at initialization
/// (read-only afterwards) and the currently published diagnostics per
/// document. Events are processed synchronously and to completion, one at a
/// time, so the published set always reflects the newest known text.
#[derive(Debug, Default)]
pub struct EditorState {
    supports_related_information: bool,
    published: HashMap<Url, Vec<Diagnostic>>,
}

impl EditorState {
    /// Create the state for one client connection, negotiating once whether
    /// the client accepts related-information entries on diagnostics.
    pub fn new(capabilities: &ClientCapabilities) -> Self {
        let supports_related_information = capabilities
            .text_document
            .as_ref()
            .and_then(|td| td.publish_diagnostics.as_ref())
            .and_then(|pd| pd.related_information)
            .unwrap_or(false);
        Self {
            supports_related_information,
            published: HashMap::new(),
        }
    }

    /// Whether related-information entries are attached to diagnostics.
    pub fn supports_related_information(&self) -> bool {
        self.supports_related_information
    }

    /// Currently published diagnostics for a document, if any.
    pub fn published(&self, uri: &Url) -> Option<&[Diagnostic]> {
        self.published.get(uri).map(Vec::as_slice)
    }

    /// Process one document event and return the list to publish.
    ///
    /// Open and change run a full validation pass over the document text;
    /// close clears the document's diagnostics. The returned list always
    /// fully replaces whatever was previously published for that document.
    pub fn process_event(&mut self, event: DocumentEvent) -> PublishUpdate {
        match event {
            DocumentEvent::Opened { uri, text } | DocumentEvent::Changed { uri, text } => {
                let diagnostics = self.validate_document(&uri, &text);
                self.published.insert(uri.clone(), diagnostics.clone());
                PublishUpdate { uri, diagnostics }
            }
            DocumentEvent::Closed { uri } => {
                self.published.remove(&uri);
                PublishUpdate {
                    uri,
                    diagnostics: Vec::new(),
                }
            }
        }
    }

    /// One diagnostic per invalid line: generic primary message, the line's
    /// trimmed span as the range, and one related-information entry per
    /// error (all at the same range) when the capability was negotiated.
    fn validate_document(&self, uri: &Url, text: &str) -> Vec<Diagnostic> {
        let index = LineIndex::new(text);
        let mut diagnostics = Vec::new();

        for line in scan_lines(text) {
            let errors = validate_line(line.text);
            if errors.is_empty() {
                continue;
            }

            let range = span_to_range(&index, line.span());
            let related_information = self.supports_related_information.then(|| {
                errors
                    .iter()
                    .map(|error| DiagnosticRelatedInformation {
                        location: Location {
                            uri: uri.clone(),
                            range,
                        },
                        message: error.message.clone(),
                    })
                    .collect()
            });

            diagnostics.push(Diagnostic {
                range,
                severity: Some(DiagnosticSeverity::ERROR),
                code: None,
                code_description: None,
                source: Some(LANG_ID.to_string()),
                message: SYNTAX_ERROR.to_string(),
                related_information,
                tags: None,
                data: None,
            });
        }

        diagnostics
    }
}
