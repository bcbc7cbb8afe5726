//! Rendering of lexical and syntax errors against their source text.
//!
//! Errors carry a 1-based `(line, column)` position; this module converts that into a byte span and
//! attaches the named source so miette can draw the offending line with a label.

use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, Report};

use crate::Error;
use crate::lexer::Position;

/// Build a [`Report`] for `error` with `source` attached under `name`.
///
/// The label points at the offending character. Internal errors carry no position and get no label.
pub fn report(error: &Error, name: &str, source: &str) -> Report {
    let code = match error {
        Error::Lex(_) => "jparse::lex",
        Error::Parse(e) if e.is_syntax() => "jparse::syntax",
        Error::Parse(_) => "jparse::internal",
    };
    let labels: Vec<LabeledSpan> = error
        .position()
        .and_then(|position| offset_of(source, position))
        .map(|offset| LabeledSpan::at(offset..offset + char_len_at(source, offset), error.description()))
        .into_iter()
        .collect();
    let help = match error {
        Error::Parse(e) if !e.is_syntax() => Some("this is a bug in jparse, not in the input"),
        _ => None,
    };

    let report = match help {
        Some(help) => miette::miette!(labels = labels, code = code, help = help, "{error}"),
        None => miette::miette!(labels = labels, code = code, "{error}"),
    };
    report.with_source_code(NamedSource::new(name, source.to_string()))
}

/// Render `error` as plain text (no colors), suitable for logs and snapshot tests.
pub fn render_report(error: &Error, name: &str, source: &str) -> String {
    let report = report(error, name, source);
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &*report).is_err() {
        return error.to_string();
    }
    out
}

/// Byte offset of a 1-based `(line, column)` position, counting columns in characters.
///
/// A position one past the end of a line (or of the source) maps to that end.
pub fn offset_of(source: &str, position: Position) -> Option<usize> {
    if position.line == 0 || position.column == 0 {
        return None;
    }
    let mut line_start = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index + 1 == position.line {
            let column = position.column - 1;
            return match line.char_indices().nth(column) {
                Some((offset, _)) => Some(line_start + offset),
                None if column == line.chars().count() => Some(line_start + line.len()),
                None => None,
            };
        }
        line_start += line.len();
    }
    // End-of-input sits on the line after a trailing newline.
    let lines = source.split_inclusive('\n').count();
    let after_newline = source.is_empty() || source.ends_with('\n');
    (position.column == 1 && after_newline && position.line == lines + 1).then_some(source.len())
}

fn char_len_at(source: &str, offset: usize) -> usize {
    source[offset..].chars().next().map_or(0, char::len_utf8)
}
