//! Single-argument format strings for class names (`"alert-{0}"`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("placeholder opened at byte {0} is never closed")]
    Unclosed(usize),

    #[error("unmatched `}}` at byte {0}")]
    UnmatchedClose(usize),

    #[error("placeholder {{{0}}} refers to a missing argument, only {{0}} is available")]
    MissingArgument(usize),

    #[error("placeholder {{{0}}} is not an argument index")]
    InvalidPlaceholder(String),
}

/// Substitutes `value` for every `{0}` (or `{}`) in `format`.
///
/// `{{` and `}}` produce literal braces.
pub fn apply_format(format: &str, value: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(format.len() + value.len());
    let mut chars = format.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, ch)) => name.push(ch),
                        None => return Err(FormatError::Unclosed(at)),
                    }
                }
                let index = if name.is_empty() {
                    0
                } else {
                    name.trim()
                        .parse::<usize>()
                        .map_err(|_| FormatError::InvalidPlaceholder(name.clone()))?
                };
                if index != 0 {
                    return Err(FormatError::MissingArgument(index));
                }
                out.push_str(value);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::UnmatchedClose(at));
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
