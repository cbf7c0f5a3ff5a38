//! ANSI terminal markup backend

use owo_colors::OwoColorize;

use crate::rendering::{Color, Render};

/// Embellish written tokens with ANSI escapes to create syntax
/// highlighting in terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, color: Color, content: &str) -> String {
        match color {
            Color::Neutral => content.to_string(),
            Color::Keyword => content // keyword.control
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Color::Identifier => content.to_string(),
            Color::TypeName => content // entity.name.type - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Color::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Color::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Color::Comment => content // comment - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
            Color::Directive => content // meta.preprocessor
                .color(owo_colors::Rgb(0xc4, 0xa0, 0x00))
                .bold()
                .to_string(),
            Color::Punctuation => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .to_string(),
        }
    }
}
