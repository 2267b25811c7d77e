//! Huffman code books and the code trees that invert them.
//!
//! A [`CodeBook`] maps each symbol to its code and encodes text with it. A
//! [`CodeTree`] holds the same mapping as a binary trie and decodes bits back
//! into text.
//!
//! ```
//! use huffcode::{code, CodeBook, CodeTree};
//!
//! let mut book = CodeBook::new();
//! book.add_str('a', "0")?;
//! book.add_str('b', "10")?;
//! book.add_str('c', "11")?;
//!
//! let bits = book.encode("abc")?;
//! assert_eq!(code::to_string(&bits), "01011");
//!
//! let tree = CodeTree::from_code_book(&book)?;
//! assert!(tree.is_valid());
//! assert_eq!(tree.decode(&bits)?, "abc");
//! # Ok::<(), huffcode::Error>(())
//! ```

pub mod code;
mod code_book;
mod code_tree;
mod errors;

pub use crate::code::Code;
pub use crate::code_book::{CodeBook, Iter};
pub use crate::code_tree::{CodeTree, Decoder, Node, SharedCodeTree, Strictness};
pub use crate::errors::{Error, Result};
