//! Bit sequences assigned to symbols.
//!
//! A [`Code`] is just a [`BitVec`]; bits are read and written in order, first
//! bit first. The helpers here convert to and from the usual `"0101"` notation.

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::{Error, Result};

/// An owned, growable sequence of bits.
pub type Code = BitVec;

/// Parse a string of `'0'` and `'1'` chars into a code.
///
/// The empty string is the empty code.
pub fn parse(digits: &str) -> Result<Code> {
    digits
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::MalformedCode(digits.to_owned())),
        })
        .collect()
}

/// Render bits as a string of `'0'` and `'1'`.
pub fn to_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use bitvec::{bitvec, order::Lsb0};
    use test_case::test_case;

    use super::*;

    #[test]
    fn parses_in_order() -> anyhow::Result<()> {
        let code = parse("01011")?;
        assert_eq!(code, bitvec![0, 1, 0, 1, 1]);
        assert_eq!(to_string(&code), "01011");
        Ok(())
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        assert!(parse("")?.is_empty());
        assert_eq!(to_string(&Code::new()), "");
        Ok(())
    }

    #[test_case("012")]
    #[test_case("1 0")]
    #[test_case("abc")]
    fn rejects_other_chars(digits: &str) {
        assert_eq!(parse(digits), Err(Error::MalformedCode(digits.into())));
    }
}
