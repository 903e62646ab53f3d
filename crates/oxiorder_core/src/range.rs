use oxc_span::Span;

use crate::source::SourceCode;

/// A statement's span grown to cover its attached comments.
///
/// `with_whitespace` additionally covers trailing spaces/tabs and one line
/// terminator, so relocating it carries the statement's own line ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedRange {
    pub with_whitespace: Span,
    pub without_whitespace: Span,
}

pub fn extend_range(source: &dyn SourceCode, span: Span) -> ExtendedRange {
    let text = source.text();
    let line_of = |offset: u32| source.position(offset).line;

    let min_start_line = source.token_before(span).map_or(0, |t| line_of(t.end));
    let max_end_line = source.token_after(span).map_or(u32::MAX, |t| line_of(t.start));
    let end_line = line_of(span.end);
    let mut start_line = line_of(span.start);
    let mut start = span.start;
    let mut end = span.end;

    let hashbang = source.hashbang();
    for comment in source.comments_before(span) {
        if Some(comment) == hashbang
            || line_of(comment.start) <= min_start_line
            || line_of(comment.end) < start_line.saturating_sub(1)
        {
            break;
        }
        start_line = line_of(comment.start);
        start = comment.start;
    }

    for comment in source.comments_after(span) {
        if line_of(comment.end) >= max_end_line || line_of(comment.start) != end_line {
            break;
        }
        end = comment.end;
    }

    let text_end = end;
    let mut ws_end = end as usize;
    // Any whitespace except line terminators, BOM included
    while let Some(c) = text[ws_end..].chars().next()
        && (c.is_whitespace() || c == '\u{feff}')
        && !matches!(c, '\n' | '\r')
    {
        ws_end += c.len_utf8();
    }

    ExtendedRange {
        with_whitespace: Span::new(start, source.after_line_break(ws_end as u32)),
        without_whitespace: Span::new(start, text_end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parser::{parse_source, source_type_for},
        source::ParsedSource,
    };
    use std::path::Path;

    fn parse_ts(text: &str) -> ParsedSource {
        parse_source(text.to_string(), source_type_for(Path::new("input.ts"))).unwrap()
    }

    /// Text covered by the extended range of the `index`-th statement.
    fn extended(text: &str, index: usize) -> (String, String) {
        let src = parse_ts(text);
        let range = extend_range(&src, src.statements()[index].span);
        (
            src.slice(range.with_whitespace).to_string(),
            src.slice(range.without_whitespace).to_string(),
        )
    }

    #[test]
    fn test_bare_statement_takes_its_newline() {
        let (with, without) = extended("1;\nimport 'a';\n2;\n", 1);
        assert_eq!(with, "import 'a';\n");
        assert_eq!(without, "import 'a';");
    }

    #[test]
    fn test_trailing_whitespace_up_to_newline() {
        let (with, _) = extended("1;\nimport 'a';  \t\n2;\n", 1);
        assert_eq!(with, "import 'a';  \t\n");
    }

    #[test]
    fn test_crlf_is_taken_whole() {
        let (with, _) = extended("1;\r\nimport 'a';\r\n2;\r\n", 1);
        assert_eq!(with, "import 'a';\r\n");
    }

    #[test]
    fn test_only_one_newline_is_taken() {
        let (with, _) = extended("import 'a';\n\n1;\n", 0);
        assert_eq!(with, "import 'a';\n");
    }

    #[test]
    fn test_comments_on_same_line_move_with_statement() {
        let text = "1;
/**
 * this moves
 */ /* this too */ import {
  something, // This is very useful
} from 'a'; /* comment */ // inline comment
2;
";
        let (with, without) = extended(text, 1);
        assert_eq!(
            with,
            "/**
 * this moves
 */ /* this too */ import {
  something, // This is very useful
} from 'a'; /* comment */ // inline comment
"
        );
        assert!(without.ends_with("// inline comment"));
    }

    #[test]
    fn test_preceding_comment_block_stops_at_blank_line() {
        let text = "1;
/* this stays */ // this also stays

// this moves
/* this moves too */
import 'a';
// this stays
2;
";
        let (with, _) = extended(text, 1);
        assert_eq!(with, "// this moves\n/* this moves too */\nimport 'a';\n");
    }

    #[test]
    fn test_inline_comment_of_previous_statement_stays() {
        let (with, _) = extended("1; // leave me alone\nimport 'b';\n", 1);
        assert_eq!(with, "import 'b';\n");
    }

    #[test]
    fn test_multiline_comment_after_previous_statement_stays() {
        let text = "1; /**\n * leave me alone\n */ import 'b';\n";
        let (with, _) = extended(text, 1);
        assert_eq!(with, "import 'b';\n");
    }

    #[test]
    fn test_multiline_comment_before_next_statement_stays() {
        let text = "1;\nimport 'a'; /**\n * leave me alone\n */ 2;\n";
        let (with, without) = extended(text, 1);
        assert_eq!(with, "import 'a'; ");
        assert_eq!(without, "import 'a';");
    }

    #[test]
    fn test_trailing_comment_on_last_statement() {
        let (with, _) = extended("1;\nimport 'a'; // last\n", 1);
        assert_eq!(with, "import 'a'; // last\n");
    }

    #[test]
    fn test_comment_on_next_line_is_not_taken() {
        let (with, _) = extended("import 'a';\n// belongs below\nimport 'b';\n", 0);
        assert_eq!(with, "import 'a';\n");
    }

    #[test]
    fn test_range_contains_bare_span() {
        let text = "// lead\nimport 'a'; // trail\n\n/* x */ 1;\nexport {};";
        let src = parse_ts(text);
        for statement in src.statements() {
            let range = extend_range(&src, statement.span);
            assert!(range.with_whitespace.start <= statement.span.start);
            assert!(range.with_whitespace.end >= statement.span.end);
            assert!(range.without_whitespace.end >= statement.span.end);
            assert!(range.without_whitespace.end <= range.with_whitespace.end);
        }
    }

    #[test]
    fn test_hashbang_stays_in_place() {
        let (with, _) = extended("#!/usr/bin/env node\nimport 'a';\n", 0);
        assert_eq!(with, "import 'a';\n");

        let (with, _) = extended("#!/usr/bin/env node\n// lead\nimport 'a';\n", 0);
        assert_eq!(with, "// lead\nimport 'a';\n");
    }

    #[test]
    fn test_first_statement_takes_leading_comment() {
        let (with, _) = extended("// header\nimport 'a';\n", 0);
        assert_eq!(with, "// header\nimport 'a';\n");
    }
}
