//! printf-style placeholder substitution for locator patterns.
//!
//! Supported placeholders:
//!
//! - `%s` consumes the next sequential argument.
//! - `%2$s` uses the second argument (1-based). Sequential numbering ignores these.
//! - `%<s` repeats the argument used by the previous placeholder.
//! - `%S`, `%2$S`, `%<S` do the same but upper-case the value.
//! - `%%` is a literal percent sign and `%n` a line break.
//!
//! Every supplied argument must be referenced at least once.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::FormatError;

/// Substitute `args` into `pattern`.
pub fn format_pattern<S: AsRef<str>>(pattern: &str, args: &[S]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut sequential = 0usize;
    let mut previous: Option<usize> = None;
    let mut used = vec![false; args.len()];

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let index = match chars.next() {
            None => return Err(FormatError::DanglingPercent(pattern.to_string())),
            Some('%') => {
                out.push('%');
                continue;
            }
            Some('n') => {
                out.push('\n');
                continue;
            }
            Some('<') => {
                let index = previous
                    .ok_or_else(|| FormatError::NoPreviousArgument(pattern.to_string()))?;
                push_arg(&mut out, pattern, args, index, conversion(&mut chars, pattern)?)?;
                continue;
            }
            Some(d) if d.is_ascii_digit() => explicit_index(d, &mut chars, pattern)?,
            Some(c @ 's') | Some(c @ 'S') => {
                sequential += 1;
                push_arg(&mut out, pattern, args, sequential, c)?;
                used[sequential - 1] = true;
                previous = Some(sequential);
                continue;
            }
            Some(other) => {
                return Err(FormatError::UnknownConversion {
                    conversion: other,
                    pattern: pattern.to_string(),
                })
            }
        };

        push_arg(&mut out, pattern, args, index, conversion(&mut chars, pattern)?)?;
        used[index - 1] = true;
        previous = Some(index);
    }

    if let Some(unused) = used.iter().position(|u| !u) {
        return Err(FormatError::UnusedArgument {
            index: unused + 1,
            supplied: args.len(),
            pattern: pattern.to_string(),
        });
    }
    Ok(out)
}

/// Parse the `2$` part of `%2$s`. The first digit has already been consumed.
fn explicit_index(first: char, chars: &mut Peekable<Chars<'_>>, pattern: &str) -> Result<usize, FormatError> {
    let mut digits = String::new();
    digits.push(first);
    while let Some(d) = chars.peek().copied().filter(|c| c.is_ascii_digit()) {
        digits.push(d);
        chars.next();
    }
    if chars.next_if_eq(&'$').is_none() {
        // Width and precision are not supported.
        return Err(FormatError::UnknownConversion {
            conversion: first,
            pattern: pattern.to_string(),
        });
    }
    // Only digits were collected, so the parse can fail on overflow alone.
    digits.parse().map_err(|_| FormatError::MissingArgument {
        index: usize::MAX,
        pattern: pattern.to_string(),
    })
}

fn conversion(chars: &mut Peekable<Chars<'_>>, pattern: &str) -> Result<char, FormatError> {
    match chars.next() {
        Some(c @ 's') | Some(c @ 'S') => Ok(c),
        Some(other) => Err(FormatError::UnknownConversion {
            conversion: other,
            pattern: pattern.to_string(),
        }),
        None => Err(FormatError::DanglingPercent(pattern.to_string())),
    }
}

fn push_arg<S: AsRef<str>>(
    out: &mut String,
    pattern: &str,
    args: &[S],
    index: usize,
    conversion: char,
) -> Result<(), FormatError> {
    let value = index
        .checked_sub(1)
        .and_then(|i| args.get(i))
        .ok_or_else(|| FormatError::MissingArgument {
            index,
            pattern: pattern.to_string(),
        })?
        .as_ref();
    if conversion == 'S' {
        out.push_str(&value.to_uppercase());
    } else {
        out.push_str(value);
    }
    Ok(())
}
