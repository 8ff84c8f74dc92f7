//! HTML tokenization support.
//!
//! This module bridges the html5gum tokenizer and the streaming
//! [`MarkdownEmitter`]: tokens are lowered into start/end/data events in
//! document order, nothing else is retained. html5gum already lowercases tag
//! and attribute names and decodes character entities, so the emitter sees
//! exactly the event contract it expects.

use std::io::Write;

use html5gum::{Token, Tokenizer};

use docdown_core::{EmitterOptions, MarkdownEmitter};

use crate::Result;

/// Convert an HTML document to Markdown with default options, writing to
/// `sink` and handing it back afterwards.
///
/// # Example
///
/// ```rust
/// use docdown::html::convert_html;
///
/// let out = convert_html("<body><h2>Notes</h2></body>", Vec::new()).unwrap();
/// assert_eq!(out, b"## Notes\n");
/// ```
pub fn convert_html<W: Write>(html: &str, sink: W) -> Result<W> {
    let mut emitter = MarkdownEmitter::with_options(sink, EmitterOptions::default());
    tokenize_into(html, &mut emitter)?;
    Ok(emitter.into_inner())
}

/// Tokenize `html` and feed every event to `emitter`.
pub fn tokenize_into<W: Write>(html: &str, emitter: &mut MarkdownEmitter<W>) -> Result<()> {
    for token in Tokenizer::new(html) {
        // The string reader's error type is `Infallible`.
        let token = token.unwrap_or_else(|infallible| match infallible {});
        match token {
            Token::StartTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name).into_owned();
                // Attributes arrive as a map, so duplicates are already
                // collapsed before the emitter's first-match scan.
                let attributes: Vec<(String, String)> = tag
                    .attributes
                    .iter()
                    .map(|(key, value)| {
                        (
                            String::from_utf8_lossy(key).into_owned(),
                            String::from_utf8_lossy(value).into_owned(),
                        )
                    })
                    .collect();
                emitter.start_tag(&name, &attributes)?;
                // `<x/>` counts as open-then-close, matching how permissive
                // HTML parsers report self-closing tags.
                if tag.self_closing {
                    emitter.end_tag(&name)?;
                }
            }
            Token::EndTag(tag) => {
                emitter.end_tag(&String::from_utf8_lossy(&tag.name))?;
            }
            Token::String(data) => {
                emitter.data(&String::from_utf8_lossy(&data))?;
            }
            // Comments, doctypes and tokenizer error notes carry no content.
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(html: &str) -> String {
        String::from_utf8(convert_html(html, Vec::new()).unwrap()).unwrap()
    }

    #[test]
    fn test_full_document() {
        let html = "<html><body><h1>Title</h1>\
                    <ol class=\"c0\"><li>One</li><li><a href=\"u\">Two</a></li></ol>\
                    </body></html>";
        assert_eq!(convert(html), "# Title\n* One\n* [Two](u)\n\n");
    }

    #[test]
    fn test_heading_only() {
        assert_eq!(convert("<body><h3>Deep</h3></body>"), "### Deep\n");
    }

    #[test]
    fn test_entities_are_decoded_by_tokenizer() {
        assert_eq!(convert("<body><h1>A &amp; B</h1></body>"), "# A & B\n");
    }

    #[test]
    fn test_underscore_escaped_after_tokenization() {
        assert_eq!(
            convert("<body><h1>snake_case</h1></body>"),
            "# snake\\_case\n"
        );
    }

    #[test]
    fn test_indented_list_nesting() {
        let html = "<body><ol class=\"c15\"><li>A\
                    <ol class=\"c15\"><li>B</li></ol></li></ol></body>";
        assert_eq!(convert(html), "   * A      * B\n\n\n\n");
    }

    #[test]
    fn test_pretty_printed_input_whitespace_is_dropped() {
        let html = "<body>\n  <ol>\n    <li>One</li>\n    <li>Two</li>\n  </ol>\n</body>";
        assert_eq!(convert(html), "* One\n* Two\n\n");
    }

    #[test]
    fn test_unsupported_markup_is_transparent() {
        let html = "<body><div><ol><li><span>X</span></li></ol></div></body>";
        assert_eq!(convert(html), "* X\n\n");
    }

    #[test]
    fn test_uppercase_tags_are_normalized() {
        assert_eq!(convert("<BODY><H1>Title</H1></BODY>"), "# Title\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }
}
