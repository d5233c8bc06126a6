//! LSP-facing validation layer for RWL.
//!
//! This crate is transport-agnostic: the host owns the connection and the
//! text-document synchronization, forwards [`DocumentEvent`]s as they
//! arrive, and sends each returned [`PublishUpdate`] to the client via
//! `textDocument/publishDiagnostics`. Capability negotiation happens once,
//! when the [`EditorState`] is created from the client's `initialize`
//! capabilities.

#![warn(missing_docs)]

mod backend;
/// Conversions between toolchain spans and LSP positions.
pub mod utils;

pub use backend::{DocumentEvent, EditorState, LANG_ID, PublishUpdate};
pub use lsp_types;
