//! DocdownService - the main entry point for HTML to Markdown conversion.

use std::io::Write;

use docdown_core::{EmitterOptions, MarkdownEmitter};

use crate::html::tokenize_into;
use crate::Result;

/// The main service for converting exported HTML documents to Markdown.
pub struct DocdownService {
    options: EmitterOptions,
}

impl DocdownService {
    /// Create a new DocdownService with default options
    pub fn new() -> Self {
        Self {
            options: EmitterOptions::default(),
        }
    }

    /// Create a DocdownService with custom options
    pub fn with_options(options: EmitterOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut EmitterOptions {
        &mut self.options
    }

    /// Convert HTML to a Markdown string.
    pub fn convert(&self, html: &str) -> Result<String> {
        let mut emitter = MarkdownEmitter::with_options(Vec::new(), self.options.clone());
        tokenize_into(html, &mut emitter)?;
        Ok(String::from_utf8(emitter.into_inner())?)
    }

    /// Convert HTML to Markdown, streaming output into `sink`.
    ///
    /// The sink is neither flushed nor closed; the caller owns its
    /// lifecycle. On a write failure the sink keeps whatever was already
    /// written.
    pub fn convert_to_writer<W: Write>(&self, html: &str, sink: W) -> Result<()> {
        let mut emitter = MarkdownEmitter::with_options(sink, self.options.clone());
        tokenize_into(html, &mut emitter)?;
        Ok(())
    }
}

impl Default for DocdownService {
    fn default() -> Self {
        Self::new()
    }
}
