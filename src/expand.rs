//! Bracket-notation words: `n[...]` repeats its contents `n` times, and
//! groups may nest, so `1[h2[ol2[a]]]` reads as "holaaolaa".

use crate::error::{PedigreeError, Result};
use std::iter::Peekable;
use std::str::CharIndices;

/// Expands a bracket-notation word.
///
/// A word without brackets is returned unchanged.
pub fn translate(word: &str) -> Result<String> {
    let mut chars = word.char_indices().peekable();
    let expanded = expand_sequence(&mut chars)?;
    match chars.next() {
        None => Ok(expanded),
        Some((pos, _)) => Err(PedigreeError::MalformedPattern(format!(
            "unmatched ']' at position {} in '{}'",
            pos, word
        ))),
    }
}

/// Longest expansion `translate` will build.
pub const MAX_EXPANDED_LEN: usize = 1 << 24;

/// Expands literals and groups up to the end of the word or the first
/// unconsumed `]`.
fn expand_sequence(chars: &mut Peekable<CharIndices<'_>>) -> Result<String> {
    let mut out = String::new();
    while let Some(&(pos, c)) = chars.peek() {
        match c {
            ']' => break,
            '[' => {
                return Err(PedigreeError::MalformedPattern(format!(
                    "'[' at position {} has no repeat count",
                    pos
                )))
            }
            d if d.is_ascii_digit() => {
                let digits = take_digits(chars);
                // Digits not opening a group are plain text.
                match chars.peek() {
                    Some((_, '[')) => {
                        chars.next();
                    }
                    _ => {
                        out.push_str(&digits);
                        continue;
                    }
                }
                let count = digits.parse::<usize>().map_err(|_| {
                    PedigreeError::MalformedPattern(format!(
                        "repeat count at position {} overflows",
                        pos
                    ))
                })?;
                let inner = expand_sequence(chars)?;
                match chars.next() {
                    Some((_, ']')) => {}
                    _ => {
                        return Err(PedigreeError::MalformedPattern(format!(
                            "'[' opened after position {} is never closed",
                            pos
                        )))
                    }
                }
                inner
                    .len()
                    .checked_mul(count)
                    .and_then(|n| n.checked_add(out.len()))
                    .filter(|n| *n <= MAX_EXPANDED_LEN)
                    .ok_or_else(|| {
                        PedigreeError::MalformedPattern(format!(
                            "group at position {} expands past {} bytes",
                            pos, MAX_EXPANDED_LEN
                        ))
                    })?;
                out.push_str(&inner.repeat(count));
            }
            _ => {
                out.push(c);
                chars.next();
            }
        }
    }
    Ok(out)
}

fn take_digits(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    type TestResult = std::result::Result<(), Box<dyn Error>>;

    #[test]
    fn test_single_group() -> TestResult {
        assert_eq!(translate("2[a]")?, "aa");
        Ok(())
    }

    #[test]
    fn test_nested_groups() -> TestResult {
        assert_eq!(translate("1[h2[ol2[a]]]")?, "holaaolaa");
        assert_eq!(translate("2[ad1[io1[s]]]")?, "adiosadios");
        Ok(())
    }

    #[test]
    fn test_deep_nesting() -> TestResult {
        assert_eq!(
            translate("2[c1[u2[i2[d2[a2[d2[o]]]]]]]")?,
            "cuidadoodooadoodoodadoodooadoodooidadoodooadoodoodadoodooadoodoo\
             cuidadoodooadoodoodadoodooadoodooidadoodooadoodoodadoodooadoodoo"
        );
        Ok(())
    }

    #[test]
    fn test_plain_word_is_unchanged() -> TestResult {
        assert_eq!(translate("hola")?, "hola");
        assert_eq!(translate("")?, "");
        Ok(())
    }

    #[test]
    fn test_siblings_and_multi_digit_counts() -> TestResult {
        assert_eq!(translate("a2[b]c3[d]")?, "abbcddd");
        assert_eq!(translate("12[x]")?, "x".repeat(12));
        assert_eq!(translate("0[x]y")?, "y");
        Ok(())
    }

    #[test]
    fn test_digits_outside_groups_are_literal() -> TestResult {
        assert_eq!(translate("h2o")?, "h2o");
        assert_eq!(translate("abc1")?, "abc1");
        assert_eq!(translate("2x3[y]")?, "2xyyy");
        assert_eq!(translate("1[r2d2]")?, "r2d2");
        Ok(())
    }

    #[test]
    fn test_oversized_expansion_is_rejected() {
        let huge = format!("{}[ab]", usize::MAX);
        for word in &[huge.as_str(), "99999[99999[99999[a]]]"] {
            assert!(
                matches!(translate(word), Err(PedigreeError::MalformedPattern(_))),
                "{} should be rejected",
                word
            );
        }
        let limit = format!("{}[a]", MAX_EXPANDED_LEN);
        assert_eq!(translate(&limit).map(|s| s.len()).ok(), Some(MAX_EXPANDED_LEN));
    }

    #[test]
    fn test_malformed_patterns() {
        for word in &["[a]", "2[a", "2[a]]", "a]", "99999999999999999999999[a]"] {
            assert!(
                matches!(translate(word), Err(PedigreeError::MalformedPattern(_))),
                "{} should be rejected",
                word
            );
        }
    }
}
