//! The view of a parsed file that the ordering rules work against.
//!
//! Rules never touch the oxc AST directly: they see statements, comment spans,
//! neighbouring tokens and a token probe through [`SourceCode`].

use oxc_span::Span;

use crate::{
    tokens::{self, TokenKind},
    types::{Location, Position, Statement},
};

pub trait SourceCode {
    fn text(&self) -> &str;

    /// Top-level statements in document order.
    fn statements(&self) -> &[Statement];

    /// All comment spans in document order.
    fn comments(&self) -> &[Span];

    /// Span of the top-level item holding the last token that ends at or before `span.start`.
    fn token_before(&self, span: Span) -> Option<Span>;

    /// Span of the top-level item holding the first token that starts at or after `span.end`.
    fn token_after(&self, span: Span) -> Option<Span>;

    /// Kind of the `index`-th token inside `span`.
    fn token_at(&self, span: Span, index: usize) -> Option<TokenKind>;

    fn position(&self, offset: u32) -> Position;

    /// Byte offset where the line containing `offset` starts.
    fn line_start(&self, offset: u32) -> u32;

    fn slice(&self, span: Span) -> &str {
        &self.text()[span.start as usize..span.end as usize]
    }

    /// Span of a leading `#!` line, without its line terminator.
    fn hashbang(&self) -> Option<Span> {
        self.comments()
            .first()
            .copied()
            .filter(|c| c.start == 0 && self.slice(*c).starts_with("#!"))
    }

    /// Offset just past the line terminator following `offset`, if one comes right after it.
    fn after_line_break(&self, offset: u32) -> u32 {
        let rest = &self.text()[offset as usize..];
        if rest.starts_with("\r\n") {
            offset + 2
        } else if rest.starts_with('\n') || rest.starts_with('\r') {
            offset + 1
        } else {
            offset
        }
    }

    fn location(&self, span: Span) -> Location {
        Location { start: self.position(span.start), end: self.position(span.end) }
    }

    /// Comments between the previous token and `span`, closest first.
    fn comments_before(&self, span: Span) -> Vec<Span> {
        let lower = self.token_before(span).map_or(0, |t| t.end);
        self.comments()
            .iter()
            .rev()
            .filter(|c| c.end <= span.start && c.start >= lower)
            .copied()
            .collect()
    }

    /// Comments between `span` and the next token, in document order.
    fn comments_after(&self, span: Span) -> Vec<Span> {
        let upper = self.token_after(span).map_or(u32::MAX, |t| t.start);
        self.comments()
            .iter()
            .filter(|c| c.start >= span.end && c.end <= upper)
            .copied()
            .collect()
    }
}

/// Start offsets of every line, for offset to line/column conversion.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i as u32 + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    line_starts.push(i as u32 + 2);
                    i += 1;
                }
                b'\r' => line_starts.push(i as u32 + 1),
                _ => {}
            }
            i += 1;
        }
        Self { line_starts }
    }

    /// 0-based line index of `offset`.
    fn line_index(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    pub fn line_start(&self, offset: u32) -> u32 {
        self.line_starts[self.line_index(offset)]
    }

    pub fn position(&self, text: &str, offset: u32) -> Position {
        let offset = offset.min(text.len() as u32);
        let line = self.line_index(offset);
        let start = self.line_starts[line] as usize;
        let column = text.get(start..offset as usize).map_or(0, |s| s.chars().count());
        Position::new(line as u32 + 1, column as u32 + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// An owned, parsed JS/TS file.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    text: String,
    statements: Vec<Statement>,
    comments: Vec<Span>,
    /// Spans of every top-level item carrying tokens (directives and statements).
    items: Vec<Span>,
    lines: LineIndex,
}

impl ParsedSource {
    pub fn new(text: String, statements: Vec<Statement>, mut comments: Vec<Span>) -> Self {
        comments.sort_by_key(|c| c.start);
        let items = statements.iter().map(|s| s.span).collect();
        let lines = LineIndex::new(&text);
        Self { text, statements, comments, items, lines }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl SourceCode for ParsedSource {
    fn text(&self) -> &str {
        &self.text
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn comments(&self) -> &[Span] {
        &self.comments
    }

    fn token_before(&self, span: Span) -> Option<Span> {
        let idx = self.items.partition_point(|item| item.end <= span.start);
        idx.checked_sub(1).map(|i| self.items[i])
    }

    fn token_after(&self, span: Span) -> Option<Span> {
        let idx = self.items.partition_point(|item| item.start < span.end);
        self.items.get(idx).copied()
    }

    fn token_at(&self, span: Span, index: usize) -> Option<TokenKind> {
        tokens::token_at(&self.text, span.start as usize, span.end as usize, index)
    }

    fn position(&self, offset: u32) -> Position {
        self.lines.position(&self.text, offset)
    }

    fn line_start(&self, offset: u32) -> u32 {
        self.lines.line_start(offset)
    }
}
