//! Parsing of textual member lists such as `1, 2, 3` or `{1 2 3}`.

use std::num::ParseIntError;

/// Error type for [`parse_members`]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseMembersError {
    /// A token was not a natural number
    #[error("invalid member `{token}`")]
    InvalidMember {
        /// The offending token
        token: String,
        /// Why it did not parse
        #[source]
        source: ParseIntError,
    },
}

/// Parse a list of natural numbers separated by commas and/or whitespace.
///
/// The list may be wrapped in braces, so the output of `BitSet`'s `Display` parses back
/// as long as it was not truncated.
///
/// # Errors
///
/// [`ParseMembersError::InvalidMember`] for the first token which is not a `usize`.
pub fn parse_members(input: &str) -> Result<Vec<usize>, ParseMembersError> {
    let input = input.trim();
    let input = input
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(input);

    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .map_err(|source| ParseMembersError::InvalidMember {
                    token: token.to_owned(),
                    source,
                })
        })
        .collect()
}
