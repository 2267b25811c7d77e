mod decoder;
mod node;

use std::sync::Arc;

use bitvec::slice::BitSlice;
use log::{debug, trace, warn};

pub use self::decoder::Decoder;
pub use self::node::Node;
use crate::{code, CodeBook, Error, Result};

/// A finished tree, shared read-only between any number of decoders.
pub type SharedCodeTree = Arc<CodeTree>;

/// How a [`CodeTree`] treats colliding codes and truncated input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Reject colliding inserts and input that ends mid-code.
    #[default]
    Strict,

    /// Behave like the classic tool: a colliding insert overwrites whatever
    /// is there, and trailing bits that don't reach a symbol are dropped.
    ///
    /// Walking off the tree is still an error.
    Lenient,
}

/// A binary trie mapping codes back to symbols.
///
/// The path from the root to a leaf spells out that leaf's code: a `0` bit
/// goes to the "zero" child, a `1` bit to the "one" child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
    strictness: Strictness,
}

impl CodeTree {
    pub fn new(root: Node) -> Self {
        Self::with_strictness(root, Strictness::default())
    }

    pub fn with_strictness(root: Node, strictness: Strictness) -> Self {
        Self { root, strictness }
    }

    /// Build the tree holding every code in `book`.
    pub fn from_code_book(book: &CodeBook) -> Result<Self> {
        Self::from_code_book_with(book, Strictness::default())
    }

    pub fn from_code_book_with(book: &CodeBook, strictness: Strictness) -> Result<Self> {
        let mut tree = Self::with_strictness(Node::empty(), strictness);
        for (symbol, code) in book {
            tree.insert(code, symbol)?;
        }

        debug!(
            "built {strictness:?} code tree with {} symbols (valid: {})",
            book.len(),
            tree.is_valid()
        );
        Ok(tree)
    }

    /// Add a leaf for `symbol` at the end of the path spelled by `code`.
    ///
    /// When strict, `code` may not be empty, the path may not run through an
    /// existing leaf, nor end on a node that already has children or a
    /// symbol. A rejected insert leaves
    /// the tree as it was: every node it would have to create lies below the
    /// point of conflict.
    pub fn insert(&mut self, code: &BitSlice, symbol: char) -> Result<()> {
        trace!("inserting {symbol:?} at {}", code::to_string(code));

        let strict = self.strictness == Strictness::Strict;
        let conflict = || Error::CodeConflict {
            symbol,
            code: code::to_string(code),
        };

        // A symbol at the root encodes to no bits at all.
        if code.is_empty() {
            if strict {
                return Err(conflict());
            }
            warn!("{symbol:?} has an empty code");
        }

        let mut node = &mut self.root;
        for bit in code.iter().by_vals() {
            if let Some(existing) = node.symbol() {
                if strict {
                    return Err(conflict());
                }
                warn!("code for {symbol:?} runs through the leaf for {existing:?}");
            }
            node = node.child_or_insert(bit);
        }

        if let Some(existing) = node.symbol() {
            if strict {
                return Err(conflict());
            }
            warn!("{symbol:?} overwrites {existing:?}");
        } else if node.has_children() {
            if strict {
                return Err(conflict());
            }
            warn!("{symbol:?} lands on an internal node");
        }

        node.set_symbol(symbol);
        Ok(())
    }

    /// Whether every node is a proper leaf or a proper internal node, and
    /// the root is not a leaf.
    pub fn is_valid(&self) -> bool {
        !self.root.is_leaf() && self.root.is_valid()
    }

    /// Number of symbols in the tree.
    pub fn len(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// A fresh walk starting at the root.
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self)
    }

    /// Turn `bits` back into the text they encode.
    pub fn decode(&self, bits: &BitSlice) -> Result<String> {
        let mut decoder = self.decoder();
        let mut out = String::new();
        decoder.feed(bits, &mut out)?;
        decoder.finish()?;
        Ok(out)
    }

    /// Freeze the tree so it can be handed to several threads.
    pub fn share(self) -> SharedCodeTree {
        Arc::new(self)
    }
}
