//! Mapping literal values to classification tags

use crate::rendering::Color;
use crate::writing::Literal;

/// Pluggable collaborator deciding which classification tag a literal
/// value carries when it is written.
pub trait Classify {
    fn classify(&self, value: &Literal) -> Color;
}

/// The stock classification: keyword colouring for the keyword-spelled
/// values, string colouring for text, numeric for everything counted.
pub struct Colorizer;

impl Classify for Colorizer {
    fn classify(&self, value: &Literal) -> Color {
        match value {
            Literal::Null | Literal::Bool(_) => Color::Keyword,
            Literal::String(_) | Literal::Char(_) => Color::String,
            Literal::Decimal(_)
            | Literal::Float(_)
            | Literal::Double(_)
            | Literal::Int(_)
            | Literal::UInt(_)
            | Literal::Long(_)
            | Literal::ULong(_) => Color::Numeric,
            Literal::Other(_) => Color::Neutral,
        }
    }
}
