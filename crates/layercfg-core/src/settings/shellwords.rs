//! Shell-style word splitting for command settings.
//!
//! Rules follow the POSIX shell closely enough for launcher commands:
//!
//! - unquoted whitespace separates words;
//! - `'...'` is taken literally;
//! - `"..."` keeps whitespace, and a backslash inside it only escapes
//!   `$`, `` ` ``, `"`, `\` and newline;
//! - an unquoted backslash escapes the next character;
//! - an unquoted `#` at the start of a word starts a comment.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("text was empty (or contained only whitespace)")]
    Empty,
    #[error("text ended before matching quote was found for {0}")]
    UnterminatedQuote(char),
    #[error("text ended just after a '\\' character")]
    TrailingBackslash,
}

/// Splits `input` into words.
///
/// # Errors
///
/// Fails on unbalanced quotes, a trailing backslash, or input that holds no
/// word at all.
///
/// # Examples
///
/// ```rust
/// use layercfg_core::settings::shellwords::split;
///
/// let argv = split(r#"/usr/bin/dmenu -p "notify: ""#).unwrap();
/// assert_eq!(argv, vec!["/usr/bin/dmenu", "-p", "notify: "]);
/// ```
pub fn split(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '#' if !in_word => {
                // Comment runs to the end of the line.
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some('\n') => {}
                    Some(escaped) => current.push(escaped),
                    None => return Err(TokenizeError::TrailingBackslash),
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('$' | '`' | '"' | '\\')) => current.push(c),
                            Some('\n') => {}
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(TokenizeError::UnterminatedQuote('"')),
                        },
                        Some(c) => current.push(c),
                        None => return Err(TokenizeError::UnterminatedQuote('"')),
                    }
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    if words.is_empty() {
        return Err(TokenizeError::Empty);
    }
    Ok(words)
}
