//! Structural context frames for the emitter's stack.
//!
//! A frame is pushed when the emitter enters a structural element and popped
//! when the matching end tag arrives. The stack always has a [`Frame::Root`]
//! at the bottom; the frame on top decides which tags the next event can
//! react to.

/// The structural contexts the emitter distinguishes.
///
/// Dispatch is keyed on this kind together with the event type; a
/// `(kind, event)` pair with no handler is a deliberate no-op, which is how
/// unsupported tags and stray content are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Before `<body>` has been seen.
    Root,
    /// Inside `<body>`, outside any list or heading.
    Body,
    /// Inside `<hN>`.
    Heading,
    /// Inside `<ol>`, waiting for `<li>`.
    OrderedList,
    /// Inside `<li>`.
    ListItem,
    /// Inside `<a>`.
    Anchor,
}

/// A stack entry recording where in the document the emitter currently is.
///
/// Every variant except `Root` carries the indent inherited from (or derived
/// off) its parent: the number of leading spaces written before bullet
/// markers while this frame is active. The `Anchor` variant additionally
/// holds the attribute pairs captured from its start tag, so the link target
/// can be resolved once the anchor's text arrives.
#[derive(Debug, Clone)]
pub enum Frame {
    Root,
    Body {
        indent: usize,
    },
    Heading {
        indent: usize,
    },
    OrderedList {
        indent: usize,
    },
    ListItem {
        indent: usize,
    },
    Anchor {
        indent: usize,
        attributes: Vec<(String, String)>,
    },
}

impl Frame {
    /// The kind this frame dispatches as.
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Root => FrameKind::Root,
            Frame::Body { .. } => FrameKind::Body,
            Frame::Heading { .. } => FrameKind::Heading,
            Frame::OrderedList { .. } => FrameKind::OrderedList,
            Frame::ListItem { .. } => FrameKind::ListItem,
            Frame::Anchor { .. } => FrameKind::Anchor,
        }
    }

    /// The bullet indent active while this frame is on top of the stack.
    pub fn indent(&self) -> usize {
        match self {
            Frame::Root => 0,
            Frame::Body { indent }
            | Frame::Heading { indent }
            | Frame::OrderedList { indent }
            | Frame::ListItem { indent }
            | Frame::Anchor { indent, .. } => *indent,
        }
    }
}
