//! Configuration options for the Markdown emitter

/// Options for the Markdown emitter
#[derive(Debug, Clone)]
pub struct EmitterOptions {
    /// Bullet marker written before list-item text
    pub bullet_marker: char,

    /// Spaces added per nesting level signalled by the indent-step class
    pub indent_step: usize,

    /// `class` token on `<ol>` that resets the bullet indent to zero
    pub indent_reset_class: String,

    /// `class` token on `<ol>` that deepens the bullet indent by one step
    pub indent_step_class: String,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            bullet_marker: '*',
            indent_step: 3,
            indent_reset_class: "c0".to_string(),
            indent_step_class: "c15".to_string(),
        }
    }
}
