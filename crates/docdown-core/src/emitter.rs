//! The tag-driven state machine that turns tokenizer events into Markdown.

use std::io::Write;

use crate::frame::{Frame, FrameKind};
use crate::options::EmitterOptions;
use crate::utilities::{attribute_value, escape_markdown, heading_level};
use crate::Result;

/// Streaming Markdown emitter.
///
/// Feed it start-tag, end-tag and data events in document order; it writes
/// Markdown to the sink as each event is handled. Structural events only
/// push or pop [`Frame`]s and emit fixed punctuation (heading markers,
/// bullets, newlines); data events are escaped and written immediately.
///
/// Events the current frame has no handler for are silent no-ops: unknown
/// tags are transparent to their children, stray end tags pop nothing, and
/// text outside a handled context is dropped. That permissiveness is the
/// whole error-handling policy; the only fault the emitter can surface is a
/// failed write to the sink.
pub struct MarkdownEmitter<W: Write> {
    sink: W,
    stack: Vec<Frame>,
    options: EmitterOptions,
}

impl<W: Write> MarkdownEmitter<W> {
    /// Create an emitter with default options writing to `sink`.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, EmitterOptions::default())
    }

    /// Create an emitter with custom options writing to `sink`.
    pub fn with_options(sink: W, options: EmitterOptions) -> Self {
        Self {
            sink,
            stack: vec![Frame::Root],
            options,
        }
    }

    /// Get the current options
    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Consume the emitter and return the sink.
    ///
    /// The emitter never flushes or closes the sink; its lifecycle belongs
    /// to the caller.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn current(&self) -> &Frame {
        self.stack.last().expect("frame stack is never empty")
    }

    /// Handle a start-tag event.
    pub fn start_tag(&mut self, name: &str, attributes: &[(String, String)]) -> Result<()> {
        let (kind, indent) = {
            let top = self.current();
            (top.kind(), top.indent())
        };

        match kind {
            FrameKind::Root => {
                if name == "body" {
                    self.stack.push(Frame::Body { indent: 0 });
                }
            }
            FrameKind::Body | FrameKind::ListItem => self.open_content(name, attributes, indent)?,
            FrameKind::OrderedList => {
                if name == "li" {
                    write!(
                        self.sink,
                        "{}{} ",
                        " ".repeat(indent),
                        self.options.bullet_marker
                    )?;
                    self.stack.push(Frame::ListItem { indent });
                }
            }
            // Headings and anchors hold only text; nested tags are ignored.
            FrameKind::Heading | FrameKind::Anchor => {}
        }

        Ok(())
    }

    /// Handle an end-tag event.
    ///
    /// Pops the current frame only when `name` is the tag that closes it;
    /// anything else leaves the stack untouched.
    pub fn end_tag(&mut self, name: &str) -> Result<()> {
        match self.current().kind() {
            FrameKind::Root => {}
            FrameKind::Body => {
                if name == "body" {
                    self.stack.pop();
                }
            }
            FrameKind::Heading => {
                // Any heading end tag closes the frame, whatever its level.
                if heading_level(name).is_some() {
                    self.sink.write_all(b"\n")?;
                    self.stack.pop();
                }
            }
            FrameKind::OrderedList => {
                if name == "ol" {
                    self.sink.write_all(b"\n")?;
                    self.stack.pop();
                }
            }
            FrameKind::ListItem => {
                if name == "li" {
                    self.sink.write_all(b"\n")?;
                    self.stack.pop();
                }
            }
            FrameKind::Anchor => {
                if name == "a" {
                    self.stack.pop();
                }
            }
        }

        Ok(())
    }

    /// Handle a text data event.
    pub fn data(&mut self, text: &str) -> Result<()> {
        let rendered = match self.current() {
            Frame::Heading { .. } | Frame::ListItem { .. } => Some(escape_markdown(text)),
            Frame::Anchor { attributes, .. } => {
                let href = attribute_value(attributes, "href").unwrap_or_default();
                Some(format!("[{}]({})", escape_markdown(text), href))
            }
            Frame::Root | Frame::Body { .. } | Frame::OrderedList { .. } => None,
        };

        if let Some(rendered) = rendered {
            self.sink.write_all(rendered.as_bytes())?;
        }

        Ok(())
    }

    /// Shared recognizer for content that can appear in `body` or inside a
    /// list item: nested ordered lists, headings and anchors. First match
    /// wins; any other tag is a no-op.
    fn open_content(
        &mut self,
        name: &str,
        attributes: &[(String, String)],
        indent: usize,
    ) -> Result<()> {
        if name == "ol" {
            let indent = self.list_indent(attributes, indent);
            self.stack.push(Frame::OrderedList { indent });
        } else if let Some(level) = heading_level(name) {
            // Headings are never indented, whatever the enclosing level.
            write!(self.sink, "{} ", "#".repeat(level))?;
            self.stack.push(Frame::Heading { indent });
        } else if name == "a" {
            self.stack.push(Frame::Anchor {
                indent,
                attributes: attributes.to_vec(),
            });
        }

        Ok(())
    }

    /// Resolve the bullet indent for an `<ol>` from its `class` attribute:
    /// the reset class forces zero, the step class deepens the enclosing
    /// indent by one step, anything else inherits unchanged.
    fn list_indent(&self, attributes: &[(String, String)], inherited: usize) -> usize {
        let Some(class) = attribute_value(attributes, "class") else {
            return inherited;
        };

        if class
            .split_whitespace()
            .any(|token| token == self.options.indent_reset_class)
        {
            0
        } else if class
            .split_whitespace()
            .any(|token| token == self.options.indent_step_class)
        {
            inherited + self.options.indent_step
        } else {
            inherited
        }
    }
}
