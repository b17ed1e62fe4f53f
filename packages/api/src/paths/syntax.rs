//! Strict property-path parsing.
//!
//! The projection pipeline itself is lenient: malformed bracket text passes
//! through [`to_dot_path`](super::to_dot_path) as literal characters and
//! simply fails to resolve. Callers that want malformed paths rejected up
//! front validate with [`parse_property_path`] first.

use thiserror::Error;

/// One typed segment of a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    /// Object member access.
    Key(String),
    /// Array or indexed access. `.N` and `[N]` both parse to this.
    Index(usize),
}

/// Rejection reasons for [`parse_property_path`]. Positions are byte
/// offsets into the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathSyntaxError {
    #[error("unclosed '[' at byte {position}")]
    UnclosedBracket { position: usize },
    #[error("empty brackets at byte {position}")]
    EmptyIndex { position: usize },
    #[error("non-numeric index {found:?} at byte {position}")]
    NonNumericIndex { found: String, position: usize },
    #[error("index {found:?} at byte {position} does not fit in usize")]
    IndexOutOfRange { found: String, position: usize },
    #[error("stray ']' at byte {position}")]
    StrayCloseBracket { position: usize },
    #[error("empty key segment at byte {position}")]
    EmptyKey { position: usize },
    #[error("unexpected {found:?} after ']' at byte {position}")]
    UnexpectedAfterBracket { found: char, position: usize },
}

/// Parse a property path into typed tokens, rejecting malformed syntax.
///
/// Accepts the same surface as the lenient pipeline: identifier segments
/// separated by `.`, bracketed integer indices with optional surrounding
/// whitespace, freely intermixed, and a tolerated leading dot. All-digit
/// dot segments parse as [`PathToken::Index`].
pub fn parse_property_path(path: &str) -> Result<Vec<PathToken>, PathSyntaxError> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut rest = path;
    if let Some(stripped) = rest.strip_prefix('.') {
        rest = stripped;
        offset = 1;
    }
    while !rest.is_empty() {
        if rest.starts_with('[') {
            let close = rest
                .find(']')
                .ok_or(PathSyntaxError::UnclosedBracket { position: offset })?;
            tokens.push(parse_index(&rest[1..close], offset)?);
            offset += close + 1;
            rest = &rest[close + 1..];
            match rest.chars().next() {
                None | Some('[') => {}
                Some('.') => {
                    rest = &rest[1..];
                    offset += 1;
                    if rest.is_empty() {
                        return Err(PathSyntaxError::EmptyKey { position: offset });
                    }
                }
                Some(found) => {
                    return Err(PathSyntaxError::UnexpectedAfterBracket {
                        found,
                        position: offset,
                    });
                }
            }
        } else if rest.starts_with(']') {
            return Err(PathSyntaxError::StrayCloseBracket { position: offset });
        } else if rest.starts_with('.') {
            // only reachable for consecutive dots
            return Err(PathSyntaxError::EmptyKey { position: offset });
        } else {
            let end = rest.find(['.', '[', ']']).unwrap_or(rest.len());
            let segment = &rest[..end];
            if segment.bytes().all(|b| b.is_ascii_digit()) {
                tokens.push(parse_index(segment, offset)?);
            } else {
                tokens.push(PathToken::Key(segment.to_owned()));
            }
            offset += end;
            rest = &rest[end..];
            if let Some(stripped) = rest.strip_prefix('.') {
                rest = stripped;
                offset += 1;
                if rest.is_empty() {
                    return Err(PathSyntaxError::EmptyKey { position: offset });
                }
            }
        }
    }
    Ok(tokens)
}

fn parse_index(body: &str, position: usize) -> Result<PathToken, PathSyntaxError> {
    let digits = body.trim();
    if digits.is_empty() {
        return Err(PathSyntaxError::EmptyIndex { position });
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathSyntaxError::NonNumericIndex {
            found: digits.to_owned(),
            position,
        });
    }
    let index = digits
        .parse::<usize>()
        .map_err(|_| PathSyntaxError::IndexOutOfRange {
            found: digits.to_owned(),
            position,
        })?;
    Ok(PathToken::Index(index))
}
