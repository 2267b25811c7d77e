use std::io;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while encoding, building a code tree, or decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Encoding was asked for a char with no registered code.
    #[error("no code registered for symbol {0:?}")]
    UnknownSymbol(char),

    /// The code for `symbol` runs through an existing leaf, or ends on a node
    /// that is already occupied.
    #[error("code {code} for symbol {symbol:?} collides with an existing code")]
    CodeConflict { symbol: char, code: String },

    /// The bit at `offset` leads to a child that doesn't exist.
    #[error("invalid code: no branch for bit at offset {offset}")]
    InvalidCode { offset: usize },

    /// The input ended part way down the tree.
    #[error("incomplete code: {dangling} trailing bit(s) don't reach a symbol")]
    IncompleteCode { dangling: usize },

    /// A textual code contained something other than '0' and '1'.
    #[error("malformed code: {0:?}")]
    MalformedCode(String),
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_io_error() {
        let e: io::Error = Error::UnknownSymbol('z').into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert_eq!(e.to_string(), "no code registered for symbol 'z'");
    }

    #[test]
    fn messages() {
        let conflict = Error::CodeConflict {
            symbol: 'b',
            code: "01".into(),
        };
        assert_eq!(
            conflict.to_string(),
            "code 01 for symbol 'b' collides with an existing code"
        );
        assert_eq!(
            Error::IncompleteCode { dangling: 2 }.to_string(),
            "incomplete code: 2 trailing bit(s) don't reach a symbol"
        );
    }
}
