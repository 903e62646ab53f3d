//! Case- and accent-insensitive string ordering with numeric digit runs.
//!
//! Letters compare by their base letter, so `É`, `é` and `e` are equal.
//! Characters sort as whitespace, then punctuation (in the order below), then
//! digits, then letters. Consecutive digits compare by numeric value, so
//! `file2` sorts before `file10`.

use std::{cmp::Ordering, iter::Peekable};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = base_chars(a);
    let mut right = base_chars(b);

    loop {
        let (l, r) = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => (l, r),
        };

        if l.is_ascii_digit() && r.is_ascii_digit() {
            let ordering = compare_numbers(&take_digits(&mut left), &take_digits(&mut right));
            if ordering != Ordering::Equal {
                return ordering;
            }
            continue;
        }

        let ordering = sort_key(l).cmp(&sort_key(r));
        if ordering != Ordering::Equal {
            return ordering;
        }
        left.next();
        right.next();
    }
}

/// Canonically decomposed characters with combining marks dropped.
fn base_chars(s: &str) -> Peekable<impl Iterator<Item = char> + '_> {
    s.nfd().filter(|c| !is_combining_mark(*c)).peekable()
}

fn sort_key(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        (CharClass::Whitespace, c as u32)
    } else if c.is_ascii_digit() {
        (CharClass::Digit, c as u32)
    } else if c.is_alphanumeric() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (CharClass::Letter, folded as u32)
    } else {
        let rank = PUNCTUATION
            .chars()
            .position(|p| p == c)
            .map_or_else(|| PUNCTUATION.len() as u32 + c as u32, |i| i as u32);
        (CharClass::Punctuation, rank)
    }
}

fn take_digits(chars: &mut Peekable<impl Iterator<Item = char>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
