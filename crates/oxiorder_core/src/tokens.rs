//! Minimal lookahead over the first few tokens of a statement.
//!
//! The classifier only needs to tell `import 'x'` apart from `import {} from 'x'`,
//! so this scanner understands identifiers, string literals, numbers, templates
//! and single-character punctuators, and skips whitespace and comments.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    String,
    Numeric,
    Template,
    Punctuator,
}

/// Kind of the `index`-th token (0-based) in `text[start..end]`.
pub fn token_at(text: &str, start: usize, end: usize, index: usize) -> Option<TokenKind> {
    let end = end.min(text.len());
    let bytes = text.as_bytes();
    let mut pos = start;
    let mut seen = 0;

    loop {
        pos = skip_trivia(text, pos, end);
        if pos >= end {
            return None;
        }
        let (kind, next) = scan_token(text, bytes, pos, end);
        if seen == index {
            return Some(kind);
        }
        seen += 1;
        pos = next;
    }
}

fn skip_trivia(text: &str, mut pos: usize, end: usize) -> usize {
    while pos < end {
        let rest = &text[pos..end];
        if rest.starts_with("//") {
            pos += rest.find(['\n', '\r']).unwrap_or(rest.len());
        } else if rest.starts_with("/*") {
            pos += rest[2..].find("*/").map_or(rest.len(), |i| i + 4);
        } else if let Some(c) = rest.chars().next()
            && (c.is_whitespace() || c == '\u{feff}')
        {
            pos += c.len_utf8();
        } else {
            break;
        }
    }
    pos
}

fn scan_token(text: &str, bytes: &[u8], pos: usize, end: usize) -> (TokenKind, usize) {
    let first = bytes[pos];
    match first {
        b'\'' | b'"' => (TokenKind::String, scan_quoted(bytes, pos, end, first)),
        b'`' => (TokenKind::Template, scan_quoted(bytes, pos, end, b'`')),
        b'0'..=b'9' => {
            let len = text[pos..end]
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '_'))
                .unwrap_or(end - pos);
            (TokenKind::Numeric, pos + len)
        }
        _ => {
            let c = text[pos..end].chars().next().unwrap_or(' ');
            if is_identifier_start(c) {
                let len = text[pos..end]
                    .find(|c: char| !is_identifier_part(c))
                    .unwrap_or(end - pos);
                (TokenKind::Identifier, pos + len)
            } else {
                (TokenKind::Punctuator, pos + c.len_utf8())
            }
        }
    }
}

fn scan_quoted(bytes: &[u8], pos: usize, end: usize, quote: u8) -> usize {
    let mut i = pos + 1;
    while i < end {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    end
}

fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c == '\\' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'
}
