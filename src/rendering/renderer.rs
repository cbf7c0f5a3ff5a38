//! Renderers for colourizing generated source

/// Classification tag carried alongside written tokens. The writer treats
/// this as opaque, passing it through to the sink unchanged; the single
/// exception is `Keyword`, which an identifier checks when deciding
/// whether it needs an escape prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Neutral, // default
    Keyword,
    Identifier,
    TypeName,
    String,
    Numeric,
    Comment,
    Directive,
    Punctuation,
}

/// Trait for different markup backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified classification
    fn style(&self, color: Color, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _color: Color, content: &str) -> String {
        content.to_string()
    }
}
