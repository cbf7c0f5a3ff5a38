#[cfg(test)]
mod verify {
    use std::io;

    use quill::output::Sink;
    use quill::rendering::Color;
    use quill::writing::*;

    /// Records every call the writer makes on its sink, so tests can
    /// assert on the observable write sequence rather than just the
    /// combined text.
    struct Recorder {
        calls: Vec<(Option<Color>, String)>,
    }

    impl Recorder {
        fn new() -> Recorder {
            Recorder { calls: Vec::new() }
        }

        fn combined(&self) -> String {
            let mut result = String::new();
            for (_, text) in &self.calls {
                result.push_str(text);
            }
            result
        }
    }

    impl Sink for Recorder {
        fn write_text(&mut self, text: &str) -> io::Result<()> {
            self.calls
                .push((None, text.to_string()));
            Ok(())
        }

        fn write_newline(&mut self) -> io::Result<()> {
            self.calls
                .push((None, "\n".to_string()));
            Ok(())
        }

        fn write_tagged(&mut self, color: Color, text: &str) -> io::Result<()> {
            self.calls
                .push((Some(color), text.to_string()));
            Ok(())
        }
    }

    #[test]
    fn class_body_scenario() {
        let events = [
            Event::Keyword("public"),
            Event::Space,
            Event::Keyword("class"),
            Event::Space,
            Event::Identifier {
                name: "Foo",
                verbatim: false,
                color: Color::TypeName,
            },
            Event::Space,
            Event::Token {
                text: "{",
                color: Color::Punctuation,
            },
            Event::Indent,
            Event::NewLine,
            Event::Unindent,
            Event::Token {
                text: "}",
                color: Color::Punctuation,
            },
        ];

        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);
        for event in &events {
            writer
                .write_event(event)
                .unwrap();
        }

        assert_eq!(writer.position(), Position { line: 2, column: 2 });
        drop(writer);
        assert_eq!(buffer, "public class Foo {\n}");
    }

    #[test]
    fn indentation_is_flushed_lazily() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);
        writer.set_indentation(2);

        writer
            .write_keyword("if")
            .unwrap();
        writer
            .new_line()
            .unwrap();

        // pending indentation is already part of the reported position
        assert_eq!(writer.position(), Position { line: 2, column: 3 });

        writer
            .write_keyword("return")
            .unwrap();
        assert_eq!(writer.position(), Position { line: 2, column: 9 });

        drop(writer);
        assert_eq!(buffer, "\t\tif\n\t\treturn");
    }

    #[test]
    fn wider_indent_units_count_fully() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);
        writer.set_indent_unit("    ");
        writer.set_indentation(2);

        writer
            .new_line()
            .unwrap();
        assert_eq!(writer.position(), Position { line: 2, column: 9 });

        writer
            .write_token("x", Color::Identifier)
            .unwrap();
        assert_eq!(writer.position(), Position { line: 2, column: 10 });

        drop(writer);
        assert_eq!(buffer, "\n        x");
    }

    #[test]
    fn directive_forces_a_fresh_line() {
        let mut sink = Recorder::new();
        let mut writer = TokenWriter::new(&mut sink);

        writer
            .write_token("x", Color::Identifier)
            .unwrap();
        writer
            .write_directive("define", Some("FOO"))
            .unwrap();

        assert_eq!(writer.position(), Position { line: 3, column: 1 });
        assert_eq!(sink.combined(), "x\n#define FOO\n");

        // forced break, keyword, separator, argument, trailing break
        let texts: Vec<&str> = sink
            .calls
            .iter()
            .map(|(_, text)| text.as_str())
            .collect();
        assert_eq!(texts, vec!["x", "\n", "#define", " ", "FOO", "\n"]);
    }

    #[test]
    fn directive_at_line_start_is_not_doubled() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_directive("ENDIF", None)
            .unwrap();

        drop(writer);
        assert_eq!(buffer, "#endif\n");
    }

    #[test]
    fn single_line_comments_imply_a_break() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_comment(CommentKind::SingleLine, " trailing note")
            .unwrap();
        assert_eq!(writer.position(), Position { line: 2, column: 1 });

        writer
            .write_comment(CommentKind::Documentation, " summary")
            .unwrap();
        assert_eq!(writer.position(), Position { line: 3, column: 1 });

        drop(writer);
        assert_eq!(buffer, "// trailing note\n/// summary\n");
    }

    #[test]
    fn multi_line_comments_recompute_the_position() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_comment(CommentKind::MultiLine, " first\nsecond\nlast ")
            .unwrap();

        // two embedded breaks, then the final line plus the closing
        // delimiter: "last " is 5 wide, so 5 + 1 + 2
        assert_eq!(writer.position(), Position { line: 3, column: 8 });

        writer
            .write_token(";", Color::Punctuation)
            .unwrap();
        assert_eq!(writer.position(), Position { line: 3, column: 9 });

        drop(writer);
        assert_eq!(buffer, "/* first\nsecond\nlast */;");
    }

    #[test]
    fn multi_line_comment_on_one_line_keeps_counting() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_keyword("int")
            .unwrap();
        writer
            .write_comment(CommentKind::MultiLine, " width ")
            .unwrap();

        // 3 + 2 + 7 + 2 written on line one
        assert_eq!(writer.position(), Position { line: 1, column: 15 });
        drop(writer);
        assert_eq!(buffer, "int/* width */");
    }

    #[test]
    fn node_start_materializes_indentation_only() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);
        writer.set_indentation(1);

        writer
            .new_line()
            .unwrap();
        writer
            .node_start()
            .unwrap();

        // the sampled position is where the node's first character lands
        assert_eq!(writer.position(), Position { line: 2, column: 2 });
        writer.node_end();

        drop(writer);
        assert_eq!(buffer, "\n\t");
    }

    #[test]
    fn non_finite_values_come_out_as_three_tokens() {
        let mut sink = Recorder::new();
        let mut writer = TokenWriter::new(&mut sink);

        writer
            .write_value(&Literal::Float(f32::INFINITY), None)
            .unwrap();

        assert_eq!(writer.position(), Position { line: 1, column: 23 });
        assert_eq!(
            sink.calls,
            vec![
                (Some(Color::Keyword), "float".to_string()),
                (Some(Color::Punctuation), ".".to_string()),
                (Some(Color::Numeric), "PositiveInfinity".to_string()),
            ]
        );
    }

    #[test]
    fn original_spelling_beats_special_rendering() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_value(&Literal::Double(f64::NAN), Some("0.0 / 0.0"))
            .unwrap();
        writer
            .write_value(&Literal::Int(255), Some("0xFF"))
            .unwrap();

        assert_eq!(writer.position(), Position { line: 1, column: 14 });
        drop(writer);
        assert_eq!(buffer, "0.0 / 0.00xFF");
    }

    #[test]
    fn values_are_classified_for_the_sink() {
        let mut sink = Recorder::new();
        let mut writer = TokenWriter::new(&mut sink);

        writer
            .write_value(&Literal::Null, None)
            .unwrap();
        writer
            .space()
            .unwrap();
        writer
            .write_value(&Literal::String("hi"), None)
            .unwrap();
        writer
            .space()
            .unwrap();
        writer
            .write_value(&Literal::Long(9), None)
            .unwrap();

        assert_eq!(
            sink.calls,
            vec![
                (Some(Color::Keyword), "null".to_string()),
                (None, " ".to_string()),
                (Some(Color::String), "\"hi\"".to_string()),
                (None, " ".to_string()),
                (Some(Color::Numeric), "9L".to_string()),
            ]
        );
    }

    #[test]
    fn primitive_types_advance_the_cursor() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_primitive_type("decimal")
            .unwrap();
        assert_eq!(writer.position(), Position { line: 1, column: 8 });
        drop(writer);
        assert_eq!(buffer, "decimal");
    }

    #[test]
    fn multibyte_content_counts_display_columns() {
        let mut buffer = String::new();
        let mut writer = TokenWriter::new(&mut buffer);

        writer
            .write_identifier("café", false, Color::Identifier)
            .unwrap();
        assert_eq!(writer.position(), Position { line: 1, column: 5 });

        writer
            .write_value(&Literal::Char('é'), None)
            .unwrap();
        assert_eq!(writer.position(), Position { line: 1, column: 8 });
    }
}
