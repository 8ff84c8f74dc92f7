//! # docdown
//!
//! Convert the constrained HTML that document-authoring tools export
//! (headings, ordered lists with class-driven indentation, anchors) into
//! Markdown.
//!
//! ## Design
//!
//! Conversion is a single streaming pass: an HTML tokenizer reports start
//! tags, end tags and text runs in document order, and the
//! [`MarkdownEmitter`] state machine from `docdown-core` writes Markdown as
//! each event arrives. No DOM is built and nothing is buffered beyond the
//! write currently being assembled, so output cost is flat in document size.
//!
//! Anything outside the supported shape is ignored rather than rejected:
//! this is a best-effort converter for a known export format, not a
//! validating parser.
//!
//! ## Example
//!
//! ```rust
//! use docdown::DocdownService;
//!
//! let service = DocdownService::new();
//! let markdown = service
//!     .convert("<html><body><h1>Notes</h1></body></html>")
//!     .unwrap();
//! assert_eq!(markdown, "# Notes\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "html")]
mod service;

#[cfg(feature = "html")]
pub use html::convert_html;
#[cfg(feature = "html")]
pub use service::DocdownService;

pub use docdown_core::{
    attribute_value, escape_markdown, heading_level, EmitError, EmitterOptions, Frame, FrameKind,
    MarkdownEmitter,
};

/// Error type for docdown operations
#[derive(Debug, thiserror::Error)]
pub enum DocdownError {
    #[error("conversion error: {0}")]
    Emit(#[from] docdown_core::EmitError),

    #[error("converted output was not valid UTF-8: {0}")]
    OutputEncoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, DocdownError>;
