//! Primitive scanners the grammars build their instructions from.
//!
//! Scanners may consume runes before failing; callers needing atomicity go
//! through an alternation, which rewinds.

use super::class::is_digit;
use super::cursor::Cursor;
use crate::error::{Error, Result};
use std::num::ParseIntError;
use std::str::FromStr;

/// Matches `lit` rune by rune.
///
/// # Errors
/// `Mismatch` at the first divergent rune.
pub fn literal(cur: &mut Cursor, lit: &[char]) -> Result<()> {
    for &want in lit {
        if cur.read() != Some(want) {
            return Err(Error::Mismatch);
        }
    }
    Ok(())
}

/// Collects a digit run.
///
/// `width > 0` demands exactly that many accepted runes. `width == 0` is greedy and
/// stops before the first rejected rune, failing only when nothing was taken.
///
/// # Errors
/// `Mismatch` when the run is short or empty.
pub fn digits(cur: &mut Cursor, width: usize, accept: impl Fn(char) -> bool) -> Result<String> {
    let mut buf = String::with_capacity(width.max(4));
    if width > 0 {
        for _ in 0..width {
            match cur.peek() {
                Some(c) if accept(c) => {
                    cur.read();
                    buf.push(c);
                }
                _ => return Err(Error::Mismatch),
            }
        }
        return Ok(buf);
    }
    buf.push_str(&take_while(cur, 0, accept));
    if buf.is_empty() {
        return Err(Error::Mismatch);
    }
    Ok(buf)
}

/// Greedy run of one to `max` accepted runes.
///
/// # Errors
/// `Mismatch` when the first rune is not accepted.
pub fn take_run(cur: &mut Cursor, max: usize, accept: impl Fn(char) -> bool) -> Result<String> {
    let run = take_while(cur, max, accept);
    if run.is_empty() {
        return Err(Error::Mismatch);
    }
    Ok(run)
}

/// Decimal integer of `width` digits (see [`digits`]).
///
/// Zero digits assign zero: `"00"` yields `0`.
///
/// # Errors
/// `Mismatch` on a short run, `Number` when the value overflows `T`.
pub fn number<T>(cur: &mut Cursor, width: usize) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let run = digits(cur, width, is_digit)?;
    Ok(run.parse::<T>()?)
}

/// Consumes runes while `accept` holds, at most `max` of them (`0` for unbounded).
pub fn take_while(cur: &mut Cursor, max: usize, accept: impl Fn(char) -> bool) -> String {
    let mut buf = String::new();
    let mut taken = 0;
    while max == 0 || taken < max {
        match cur.peek() {
            Some(c) if accept(c) => {
                cur.read();
                buf.push(c);
                taken += 1;
            }
            _ => break,
        }
    }
    buf
}

/// Exactly `len` accepted runes, used for three-letter day and month names.
///
/// # Errors
/// `Mismatch` when fewer than `len` runes are accepted.
pub fn take_exact(cur: &mut Cursor, len: usize, accept: impl Fn(char) -> bool) -> Result<String> {
    let run = take_while(cur, len, accept);
    if run.chars().count() != len {
        return Err(Error::Mismatch);
    }
    Ok(run)
}

pub fn skip_while(cur: &mut Cursor, accept: impl Fn(char) -> bool) {
    while cur.peek().is_some_and(&accept) {
        cur.read();
    }
}

/// Expects `c` as the next rune.
///
/// # Errors
/// `Mismatch` when the next rune differs.
pub fn expect(cur: &mut Cursor, c: char) -> Result<()> {
    if cur.eat(c) { Ok(()) } else { Err(Error::Mismatch) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::class::{is_hex, is_letter};

    #[test]
    fn literal_stops_at_divergence() {
        let mut cur = Cursor::new("abX");
        assert!(literal(&mut cur, &['a', 'b', 'c']).is_err());
        let mut cur = Cursor::new("abc");
        assert!(literal(&mut cur, &['a', 'b']).is_ok());
        assert_eq!(cur.peek(), Some('c'));
    }

    #[test]
    fn fixed_width_needs_every_digit() {
        let mut cur = Cursor::new("202");
        assert!(matches!(digits(&mut cur, 4, is_digit), Err(Error::Mismatch)));
        let mut cur = Cursor::new("20x3");
        assert!(matches!(digits(&mut cur, 4, is_digit), Err(Error::Mismatch)));
        let mut cur = Cursor::new("20231");
        assert_eq!(digits(&mut cur, 4, is_digit).unwrap(), "2023");
        assert_eq!(cur.peek(), Some('1'));
    }

    #[test]
    fn variable_width_leaves_terminator() {
        let mut cur = Cursor::new("1234]");
        assert_eq!(number::<u32>(&mut cur, 0).unwrap(), 1234);
        assert_eq!(cur.peek(), Some(']'));
        let mut cur = Cursor::new("]");
        assert!(matches!(number::<u32>(&mut cur, 0), Err(Error::Mismatch)));
    }

    #[test]
    fn all_zero_digits_assign_zero() {
        let mut cur = Cursor::new("00");
        assert_eq!(number::<u32>(&mut cur, 2).unwrap(), 0);
    }

    #[test]
    fn overflow_is_a_number_error() {
        let mut cur = Cursor::new("99999999999999999999999");
        assert!(matches!(number::<u32>(&mut cur, 0), Err(Error::Number(_))));
    }

    #[test]
    fn bounded_runs() {
        let mut cur = Cursor::new("fe80a");
        assert_eq!(take_run(&mut cur, 4, is_hex).unwrap(), "fe80");
        assert_eq!(cur.peek(), Some('a'));
        let mut cur = Cursor::new("Ja1");
        assert!(take_exact(&mut cur, 3, is_letter).is_err());
    }
}
