//! The event sink: write events in, formatted source text out

use std::io;

use crate::output::Sink;
use crate::rendering::{Classify, Color, Colorizer};
use crate::writing::{format_literal, Literal, Position};

/// Comment delimiter families. The single-line kinds cannot have trailing
/// content, so writing one implies a line break; the multi-line kinds may
/// themselves span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine,
    Documentation,
    MultiLine,
    MultiLineDocumentation,
}

impl CommentKind {
    fn open(&self) -> &'static str {
        match self {
            CommentKind::SingleLine => "//",
            CommentKind::Documentation => "///",
            CommentKind::MultiLine => "/*",
            CommentKind::MultiLineDocumentation => "/**",
        }
    }

    fn spans_lines(&self) -> bool {
        matches!(
            self,
            CommentKind::MultiLine | CommentKind::MultiLineDocumentation
        )
    }
}

/// One atomic instruction to the writer. Events are consumed strictly in
/// emission order; nothing is buffered beyond the current call and no
/// already-written text is ever revisited.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<'i> {
    Identifier {
        name: &'i str,
        verbatim: bool,
        color: Color,
    },
    Keyword(&'i str),
    Token {
        text: &'i str,
        color: Color,
    },
    Space,
    NewLine,
    Indent,
    Unindent,
    Comment {
        kind: CommentKind,
        content: &'i str,
    },
    Directive {
        kind: &'i str,
        argument: Option<&'i str>,
    },
    Value {
        value: Literal<'i>,
        original: Option<&'i str>,
    },
    PrimitiveType(&'i str),
    NodeStart,
    NodeEnd,
}

/// Streaming writer converting write events into source text on a borrowed
/// sink, maintaining the exact position of the next character throughout.
///
/// Indentation is applied lazily: a line break only marks indentation as
/// pending, and the text materializes on the first write that puts visible
/// content on the new line. One writer is bound to one sink for its whole
/// lifetime; there is no concurrent-use surface.
pub struct TokenWriter<'w> {
    sink: &'w mut dyn Sink,
    classifier: Box<dyn Classify>,
    position: Position,
    depth: usize,
    unit: String,
    pending_indent: bool,
    at_line_start: bool,
}

impl<'w> TokenWriter<'w> {
    pub fn new(sink: &'w mut dyn Sink) -> TokenWriter<'w> {
        TokenWriter::with_classifier(sink, Box::new(Colorizer))
    }

    pub fn with_classifier(sink: &'w mut dyn Sink, classifier: Box<dyn Classify>) -> TokenWriter<'w> {
        TokenWriter {
            sink,
            classifier,
            position: Position::start(),
            depth: 0,
            unit: "\t".to_string(),
            pending_indent: true,
            at_line_start: true,
        }
    }

    /// Process one event to completion. Dispatch is exhaustive; no event
    /// kind is ever silently ignored.
    pub fn write_event(&mut self, event: &Event) -> io::Result<()> {
        match *event {
            Event::Identifier {
                name,
                verbatim,
                color,
            } => self.write_identifier(name, verbatim, color),
            Event::Keyword(keyword) => self.write_keyword(keyword),
            Event::Token { text, color } => self.write_token(text, color),
            Event::Space => self.space(),
            Event::NewLine => self.new_line(),
            Event::Indent => {
                self.indent();
                Ok(())
            }
            Event::Unindent => {
                self.unindent();
                Ok(())
            }
            Event::Comment { kind, content } => self.write_comment(kind, content),
            Event::Directive { kind, argument } => self.write_directive(kind, argument),
            Event::Value {
                ref value,
                original,
            } => self.write_value(value, original),
            Event::PrimitiveType(name) => self.write_primitive_type(name),
            Event::NodeStart => self.node_start(),
            Event::NodeEnd => {
                self.node_end();
                Ok(())
            }
        }
    }

    /// Position the next character will occupy. While indentation is
    /// pending the reported column already includes it, even though the
    /// text has not been materialized yet.
    pub fn position(&self) -> Position {
        if self.pending_indent {
            Position {
                line: self
                    .position
                    .line,
                column: self
                    .position
                    .column
                    + self.depth * self.unit_width(),
            }
        } else {
            self.position
        }
    }

    pub fn indentation(&self) -> usize {
        self.depth
    }

    pub fn set_indentation(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// The text written once per indentation level, one tab by default.
    pub fn indent_unit(&self) -> &str {
        &self.unit
    }

    pub fn set_indent_unit(&mut self, unit: &str) {
        self.unit = unit.to_string();
    }

    pub fn write_identifier(&mut self, name: &str, verbatim: bool, color: Color) -> io::Result<()> {
        self.flush_indentation()?;

        // an identifier spelled like a reserved word needs the escape
        // prefix; what counts as reserved is the caller's classification
        if verbatim || color == Color::Keyword {
            self.sink
                .write_text("@")?;
            self.position
                .advance(1);
        }

        self.sink
            .write_tagged(color, name)?;
        self.position
            .advance(width_of(name));
        self.at_line_start = false;
        Ok(())
    }

    pub fn write_keyword(&mut self, keyword: &str) -> io::Result<()> {
        self.flush_indentation()?;
        self.sink
            .write_tagged(Color::Keyword, keyword)?;
        self.position
            .advance(width_of(keyword));
        self.at_line_start = false;
        Ok(())
    }

    pub fn write_token(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.flush_indentation()?;
        self.sink
            .write_tagged(color, text)?;
        self.position
            .advance(width_of(text));
        self.at_line_start = false;
        Ok(())
    }

    pub fn space(&mut self) -> io::Result<()> {
        self.flush_indentation()?;
        self.sink
            .write_text(" ")?;
        self.position
            .advance(1);
        self.at_line_start = false;
        Ok(())
    }

    pub fn new_line(&mut self) -> io::Result<()> {
        self.sink
            .write_newline()?;
        self.position
            .break_line();
        self.pending_indent = true;
        self.at_line_start = true;
        Ok(())
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn unindent(&mut self) {
        self.depth = self
            .depth
            .saturating_sub(1);
    }

    pub fn write_comment(&mut self, kind: CommentKind, content: &str) -> io::Result<()> {
        self.flush_indentation()?;

        let open = kind.open();
        self.sink
            .write_tagged(Color::Comment, open)?;
        self.sink
            .write_tagged(Color::Comment, content)?;

        if kind.spans_lines() {
            // the closing delimiter's column depends on the length of the
            // content's final line
            self.sink
                .write_tagged(Color::Comment, "*/")?;
            self.position
                .advance(width_of(open));
            self.position
                .advance_through(content);
            self.position
                .advance(2);
            self.at_line_start = false;
            Ok(())
        } else {
            // nothing can follow on the same line
            self.new_line()
        }
    }

    /// Preprocessor directives begin at column 1 of a fresh line, so one
    /// is forced if anything has been written on the current line. The
    /// keyword is lower-cased, a non-empty argument follows after a single
    /// space, and a line break always closes the directive out.
    pub fn write_directive(&mut self, kind: &str, argument: Option<&str>) -> io::Result<()> {
        if !self.at_line_start {
            self.new_line()?;
        }

        // indentation for this line is forfeited, not deferred
        self.pending_indent = false;

        let keyword = format!("#{}", kind.to_lowercase());
        self.sink
            .write_tagged(Color::Directive, &keyword)?;
        self.position
            .advance(width_of(&keyword));

        if let Some(argument) = argument.filter(|a| !a.is_empty()) {
            self.sink
                .write_text(" ")?;
            self.sink
                .write_tagged(Color::Directive, argument)?;
            self.position
                .advance(1 + width_of(argument));
        }

        self.at_line_start = false;
        self.new_line()
    }

    pub fn write_value(&mut self, value: &Literal, original: Option<&str>) -> io::Result<()> {
        // infinities and NaN have no literal spelling; they come out as
        // three tokens, unless the caller supplied an original spelling
        if original.is_none() {
            if let Some((type_name, member)) = value.special_parts() {
                self.write_keyword(type_name)?;
                self.write_token(".", Color::Punctuation)?;
                return self.write_token(member, Color::Numeric);
            }
        }

        self.flush_indentation()?;

        let color = self
            .classifier
            .classify(value);
        let (text, width) = format_literal(value, original);
        self.sink
            .write_tagged(color, &text)?;
        self.position
            .advance(width);
        self.at_line_start = false;
        Ok(())
    }

    pub fn write_primitive_type(&mut self, name: &str) -> io::Result<()> {
        self.flush_indentation()?;
        self.sink
            .write_tagged(Color::TypeName, name)?;
        self.position
            .advance(width_of(name));
        self.at_line_start = false;
        Ok(())
    }

    /// Materializes pending indentation and nothing else, so an observer
    /// sampling [`position()`](TokenWriter::position) here gets the column
    /// the node's first character will occupy.
    pub fn node_start(&mut self) -> io::Result<()> {
        self.flush_indentation()
    }

    pub fn node_end(&mut self) {}

    fn flush_indentation(&mut self) -> io::Result<()> {
        if self.pending_indent {
            for _ in 0..self.depth {
                self.sink
                    .write_text(&self.unit)?;
            }
            self.position
                .advance(self.depth * self.unit_width());
            self.pending_indent = false;
        }
        Ok(())
    }

    fn unit_width(&self) -> usize {
        self.unit
            .chars()
            .count()
    }
}

fn width_of(text: &str) -> usize {
    text.chars()
        .count()
}
