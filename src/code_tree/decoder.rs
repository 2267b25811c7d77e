use bitvec::slice::BitSlice;
use log::warn;

use super::{CodeTree, Node, Strictness};
use crate::{Error, Result};

/// Where the walk currently stands.
#[derive(Debug, Clone, Copy)]
enum State<'t> {
    AtRoot,
    AtInternal { node: &'t Node, depth: usize },
}

/// Walks a [`CodeTree`] one bit at a time.
///
/// Input may arrive in pieces: the position inside the tree is kept between
/// calls to [`push`](Self::push) and [`feed`](Self::feed). Call
/// [`finish`](Self::finish) once the input is exhausted.
#[derive(Debug, Clone)]
pub struct Decoder<'t> {
    tree: &'t CodeTree,
    state: State<'t>,

    /// Bits consumed so far, for error reporting.
    offset: usize,
}

impl<'t> Decoder<'t> {
    pub fn new(tree: &'t CodeTree) -> Self {
        Self {
            tree,
            state: State::AtRoot,
            offset: 0,
        }
    }

    /// Take one step. Returns the symbol if this bit completes a code.
    pub fn push(&mut self, bit: bool) -> Result<Option<char>> {
        let tree = self.tree;
        let (node, depth) = match self.state {
            State::AtRoot => (&tree.root, 0),
            State::AtInternal { node, depth } => (node, depth),
        };

        let next = node.child(bit).ok_or(Error::InvalidCode {
            offset: self.offset,
        })?;
        self.offset += 1;

        match next.symbol() {
            Some(symbol) => {
                self.state = State::AtRoot;
                Ok(Some(symbol))
            }
            None => {
                self.state = State::AtInternal {
                    node: next,
                    depth: depth + 1,
                };
                Ok(None)
            }
        }
    }

    /// Push every bit of `bits`, appending decoded symbols to `out`.
    pub fn feed(&mut self, bits: &BitSlice, out: &mut String) -> Result<()> {
        for bit in bits.iter().by_vals() {
            if let Some(symbol) = self.push(bit)? {
                out.push(symbol);
            }
        }
        Ok(())
    }

    /// Whether the walk is between codes.
    pub fn is_at_root(&self) -> bool {
        matches!(self.state, State::AtRoot)
    }

    /// Number of bits consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// End of input. Fails if the last code was cut short, unless the tree
    /// is lenient, in which case the trailing bits are dropped.
    pub fn finish(self) -> Result<()> {
        match self.state {
            State::AtRoot => Ok(()),
            State::AtInternal { depth, .. } => match self.tree.strictness {
                Strictness::Strict => Err(Error::IncompleteCode { dangling: depth }),
                Strictness::Lenient => {
                    warn!("dropping {depth} trailing bit(s) that don't reach a symbol");
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{code, CodeBook};

    fn abc() -> CodeTree {
        let book: CodeBook = [('a', "0"), ('b', "10"), ('c', "11")]
            .into_iter()
            .map(|(s, digits)| (s, code::parse(digits).unwrap()))
            .collect();
        CodeTree::from_code_book(&book).unwrap()
    }

    #[test]
    fn step_by_step() -> anyhow::Result<()> {
        let tree = abc();
        let mut decoder = tree.decoder();
        assert!(decoder.is_at_root());

        assert_eq!(decoder.push(true)?, None);
        assert!(!decoder.is_at_root());
        assert_eq!(decoder.push(true)?, Some('c'));
        assert!(decoder.is_at_root());
        assert_eq!(decoder.push(false)?, Some('a'));
        assert_eq!(decoder.offset(), 3);

        decoder.finish()?;
        Ok(())
    }

    #[test]
    fn chunks_split_mid_code() -> anyhow::Result<()> {
        let tree = abc();
        let mut decoder = tree.decoder();
        let mut out = String::new();

        // "bca" is 10 11 0
        decoder.feed(&code::parse("1")?, &mut out)?;
        decoder.feed(&code::parse("01")?, &mut out)?;
        decoder.feed(&code::parse("10")?, &mut out)?;
        decoder.finish()?;

        assert_eq!(out, "bca");
        Ok(())
    }

    #[test]
    fn failed_step_keeps_position() -> anyhow::Result<()> {
        let mut tree = CodeTree::new(Node::empty());
        tree.insert(&code::parse("0")?, 'a')?;
        tree.insert(&code::parse("10")?, 'b')?;

        let mut decoder = tree.decoder();
        assert_eq!(decoder.push(true)?, None);
        assert_eq!(decoder.push(true), Err(Error::InvalidCode { offset: 1 }));
        assert_eq!(decoder.push(false)?, Some('b'));
        Ok(())
    }

    #[test]
    fn unfinished() -> anyhow::Result<()> {
        let tree = abc();
        let mut decoder = tree.decoder();
        decoder.push(true)?;
        assert_eq!(decoder.finish(), Err(Error::IncompleteCode { dangling: 1 }));
        Ok(())
    }
}
