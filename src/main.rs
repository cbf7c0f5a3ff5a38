use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io;
use tracing::debug;

use quill::output::{Highlighted, Stream};
use quill::rendering::{Color, Terminal};
use quill::writing::{escape_string, literal_text, CommentKind, Literal, TokenWriter};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt::init();

    let matches = Command::new("quill")
        .version(VERSION)
        .propagate_version(true)
        .about("A streaming writer for generated source code.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("literal")
                .about("Print the canonical literal text for a single value")
                .arg(
                    Arg::new("kind")
                        .required(true)
                        .help("One of: null, bool, string, char, decimal, float, double, int, uint, long, ulong."),
                )
                .arg(
                    Arg::new("value")
                        .required(false)
                        .help("The value to format. Omitted for null."),
                ),
        )
        .subcommand(
            Command::new("escape")
                .about("Print the given text as an escaped string literal")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .help("The raw text to escape."),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Write a small sample of generated source to standard output")
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .action(ArgAction::SetTrue)
                        .help("Suppress ANSI escape codes for syntax highlighting."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("literal", submatches)) => {
            let kind = submatches
                .get_one::<String>("kind")
                .unwrap();
            let value = submatches.get_one::<String>("value");

            debug!("Formatting {} literal", kind);
            match parse_literal(kind, value.map(|v| v.as_str())) {
                Ok(text) => println!("{}", text),
                Err(problem) => {
                    eprintln!("{}: {}", "error".bright_red(), problem);
                    std::process::exit(1);
                }
            }
        }
        Some(("escape", submatches)) => {
            let text = submatches
                .get_one::<String>("text")
                .unwrap();
            println!("\"{}\"", escape_string(text));
        }
        Some(("demo", submatches)) => {
            let plain = submatches.get_flag("plain");
            let result = if plain {
                let mut sink = Stream::new(io::stdout());
                write_demo(&mut TokenWriter::new(&mut sink))
            } else {
                let mut sink = Highlighted::new(io::stdout(), Terminal);
                write_demo(&mut TokenWriter::new(&mut sink))
            };
            if let Err(error) = result {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: quill [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn parse_literal(kind: &str, value: Option<&str>) -> Result<String, String> {
    let value = |kind: &str| {
        value.ok_or_else(|| format!("the {} kind requires a value", kind))
    };

    let literal = match kind {
        "null" => Literal::Null,
        "bool" => Literal::Bool(
            value("bool")?
                .parse::<bool>()
                .map_err(|e| e.to_string())?,
        ),
        "string" => Literal::String(value("string")?),
        "char" => {
            let text = value("char")?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Literal::Char(c),
                _ => return Err("a char literal takes exactly one character".to_string()),
            }
        }
        "decimal" => Literal::Decimal(value("decimal")?),
        "float" => Literal::Float(
            value("float")?
                .parse::<f32>()
                .map_err(|e| e.to_string())?,
        ),
        "double" => Literal::Double(
            value("double")?
                .parse::<f64>()
                .map_err(|e| e.to_string())?,
        ),
        "int" => Literal::Int(
            value("int")?
                .parse::<i32>()
                .map_err(|e| e.to_string())?,
        ),
        "uint" => Literal::UInt(
            value("uint")?
                .parse::<u32>()
                .map_err(|e| e.to_string())?,
        ),
        "long" => Literal::Long(
            value("long")?
                .parse::<i64>()
                .map_err(|e| e.to_string())?,
        ),
        "ulong" => Literal::ULong(
            value("ulong")?
                .parse::<u64>()
                .map_err(|e| e.to_string())?,
        ),
        other => return Err(format!("unknown literal kind \"{}\"", other)),
    };

    Ok(literal_text(&literal))
}

// A short class body exercising most of the event kinds.
fn write_demo(writer: &mut TokenWriter) -> io::Result<()> {
    writer.write_comment(CommentKind::Documentation, " Generated by quill.")?;
    writer.write_directive("IF", Some("DEBUG"))?;
    writer.write_keyword("public")?;
    writer.space()?;
    writer.write_keyword("class")?;
    writer.space()?;
    writer.write_identifier("Example", false, Color::TypeName)?;
    writer.space()?;
    writer.write_token("{", Color::Punctuation)?;
    writer.indent();
    writer.new_line()?;

    writer.write_primitive_type("double")?;
    writer.space()?;
    writer.write_identifier("ratio", false, Color::Identifier)?;
    writer.space()?;
    writer.write_token("=", Color::Punctuation)?;
    writer.space()?;
    writer.write_value(&Literal::Double(-0.0), None)?;
    writer.write_token(";", Color::Punctuation)?;
    writer.new_line()?;

    writer.write_primitive_type("string")?;
    writer.space()?;
    writer.write_identifier("greeting", false, Color::Identifier)?;
    writer.space()?;
    writer.write_token("=", Color::Punctuation)?;
    writer.space()?;
    writer.write_value(&Literal::String("hello, \"world\""), None)?;
    writer.write_token(";", Color::Punctuation)?;
    writer.unindent();
    writer.new_line()?;

    writer.write_token("}", Color::Punctuation)?;
    writer.write_directive("ENDIF", None)?;
    Ok(())
}
