//! docdown-core - streaming Markdown emitter
//!
//! This crate provides the tag-driven state machine at the heart of docdown.
//! It consumes HTML tokenizer events (start tag, end tag, text data) one at a
//! time and writes Markdown to an output sink as a side effect, tracking its
//! position in the document with a stack of [`Frame`]s.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──tokenizer──▶ ┌─────────────────┐
//!                            │ MarkdownEmitter │ ──▶ Markdown sink
//!          start/end/data ──▶│   (frame stack) │
//!                            └─────────────────┘
//! ```
//!
//! The emitter is parser agnostic: any tokenizer that reports start tags
//! (name plus attribute pairs), end tags, and text runs in document order can
//! drive it. It performs no lookahead and buffers nothing beyond the single
//! write it is assembling.
//!
//! # Example
//!
//! ```rust
//! use docdown_core::MarkdownEmitter;
//!
//! let mut emitter = MarkdownEmitter::new(Vec::new());
//! emitter.start_tag("body", &[]).unwrap();
//! emitter.start_tag("h1", &[]).unwrap();
//! emitter.data("Hello World").unwrap();
//! emitter.end_tag("h1").unwrap();
//!
//! let markdown = String::from_utf8(emitter.into_inner()).unwrap();
//! assert_eq!(markdown, "# Hello World\n");
//! ```

mod emitter;
mod frame;
mod options;
mod utilities;

pub use emitter::MarkdownEmitter;
pub use frame::{Frame, FrameKind};
pub use options::EmitterOptions;
pub use utilities::{attribute_value, escape_markdown, heading_level};

/// Error type for emitter operations
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to write markdown output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EmitError>;
