//! Canonical source text for typed literal values

use crate::writing::{escape_char_literal, escape_string};

/// A typed runtime value to be rendered as a source literal. The set of
/// supported kinds is closed so that formatting is enumerable and
/// exhaustively testable; anything else arrives pre-stringified as `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal<'i> {
    Null,
    Bool(bool),
    String(&'i str),
    Char(char),
    /// Invariant decimal digits as supplied by the caller; the formatter
    /// adds the `m` suffix.
    Decimal(&'i str),
    Float(f32),
    Double(f64),
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    /// Fallback for value kinds with no formatting rule of their own: the
    /// caller's own canonical text, passed through with no suffix.
    Other(&'i str),
}

impl Literal<'_> {
    /// Infinities and NaN have no numeric literal spelling; they render as
    /// a type keyword, a dot, and a member name, written as three separate
    /// tokens. Returns the (keyword, member) pair for such values.
    pub fn special_parts(&self) -> Option<(&'static str, &'static str)> {
        match *self {
            Literal::Float(f) if !f.is_finite() => Some(("float", special_member(f64::from(f)))),
            Literal::Double(d) if !d.is_finite() => Some(("double", special_member(d))),
            _ => None,
        }
    }
}

fn special_member(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "PositiveInfinity"
    } else {
        "NegativeInfinity"
    }
}

/// Render a literal to its canonical source text, along with the number of
/// display columns the text occupies. Width is counted in characters, not
/// bytes, so the position cursor stays exact for multi-byte content.
///
/// When `original` is given it is taken verbatim; this is how callers
/// preserve spellings (hex literals, underscore separators) that the
/// formatter does not reconstruct.
pub fn format_literal(value: &Literal, original: Option<&str>) -> (String, usize) {
    if let Some(text) = original {
        return (text.to_string(), text.chars().count());
    }

    let text = if let Some((type_name, member)) = value.special_parts() {
        format!("{}.{}", type_name, member)
    } else {
        match *value {
            Literal::Null => "null".to_string(),
            Literal::Bool(true) => "true".to_string(),
            Literal::Bool(false) => "false".to_string(),
            Literal::String(s) => format!("\"{}\"", escape_string(s)),
            Literal::Char(c) => format!("'{}'", escape_char_literal(c)),
            Literal::Decimal(digits) => format!("{}m", digits),
            Literal::Float(f) => format_float(f),
            Literal::Double(d) => format_double(d),
            Literal::Int(i) => i.to_string(),
            Literal::UInt(u) => format!("{}u", u),
            Literal::Long(l) => format!("{}L", l),
            Literal::ULong(u) => format!("{}UL", u),
            Literal::Other(text) => text.to_string(),
        }
    };

    let width = text.chars().count();
    (text, width)
}

/// Canonical literal text for a single value, for callers that need
/// formatting without a writer or an event stream.
pub fn literal_text(value: &Literal) -> String {
    format_literal(value, None).0
}

fn format_float(value: f32) -> String {
    let mut text = value.to_string();
    restore_negative_zero(value == 0.0 && value.is_sign_negative(), &mut text);
    text.push('f');
    text
}

fn format_double(value: f64) -> String {
    let mut text = value.to_string();
    restore_negative_zero(value == 0.0 && value.is_sign_negative(), &mut text);
    // a double literal must not be mistaken for an integer one
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}

// Negative zero compares equal to zero but carries a sign bit which must
// survive into the text.
fn restore_negative_zero(negative_zero: bool, text: &mut String) {
    if negative_zero && !text.starts_with('-') {
        text.insert(0, '-');
    }
}
