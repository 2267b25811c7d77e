use std::fmt;

use bitvec::slice::BitSlice;
use log::debug;

use crate::{code, Code, Error, Result};

/// Number of buckets in a fresh book.
const INITIAL_BUCKETS: usize = 7;

/// Grow once `len / buckets` reaches this.
const MAX_LOAD: f64 = 0.75;

/// A symbol table from chars to their codes.
///
/// Entries live in chained buckets keyed by the char's scalar value. Each
/// symbol appears at most once; the first code registered for it wins.
#[derive(Debug, Clone)]
pub struct CodeBook {
    buckets: Vec<Vec<(char, Code)>>,
    len: usize,
}

impl CodeBook {
    pub fn new() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }

    /// A book that starts out with `buckets` chains. Zero is treated as one.
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);

        Self {
            buckets: vec![Vec::new(); buckets],
            len: 0,
        }
    }

    /// Register `code` for `symbol`.
    ///
    /// Returns `false` (and leaves the book untouched) if `symbol` already has
    /// a code.
    pub fn add(&mut self, symbol: char, code: Code) -> bool {
        if self.contains(symbol) {
            return false;
        }

        let i = bucket_index(symbol, self.buckets.len());
        self.buckets[i].push((symbol, code));
        self.len += 1;

        if self.len as f64 / self.buckets.len() as f64 >= MAX_LOAD {
            self.grow();
        }

        true
    }

    /// Like [`add`](Self::add), with the code written as `'0'`/`'1'` digits.
    pub fn add_str(&mut self, symbol: char, digits: &str) -> Result<bool> {
        Ok(self.add(symbol, code::parse(digits)?))
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.lookup(symbol).is_some()
    }

    /// Whether every char of `text` has a code.
    pub fn contains_all(&self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }

    pub fn lookup(&self, symbol: char) -> Option<&Code> {
        let i = bucket_index(symbol, self.buckets.len());
        self.buckets[i]
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code)
    }

    /// Concatenate the codes of each char of `text`, in order.
    pub fn encode(&self, text: &str) -> Result<Code> {
        let mut out = Code::new();
        self.encode_into(text, &mut out)?;
        Ok(out)
    }

    /// Append the encoding of `text` to `out`.
    ///
    /// On error, `out` is left as it was.
    pub fn encode_into(&self, text: &str, out: &mut Code) -> Result<()> {
        let start = out.len();
        for c in text.chars() {
            match self.lookup(c) {
                Some(code) => out.extend_from_bitslice(code.as_bitslice()),
                None => {
                    out.truncate(start);
                    return Err(Error::UnknownSymbol(c));
                }
            }
        }
        Ok(())
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every registered symbol, once each. Order is unspecified.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().map(|(symbol, _)| symbol)
    }

    /// Every `(symbol, code)` pair, in the same order as [`symbols`](Self::symbols).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: [].iter(),
        }
    }

    fn grow(&mut self) {
        let new_len = self.buckets.len() * 2 + 1;
        debug!(
            "growing code book from {} to {new_len} buckets ({} symbols)",
            self.buckets.len(),
            self.len
        );

        let mut buckets = vec![Vec::new(); new_len];
        for (symbol, code) in self.buckets.drain(..).flatten() {
            buckets[bucket_index(symbol, new_len)].push((symbol, code));
        }
        self.buckets = buckets;
    }
}

impl Default for CodeBook {
    fn default() -> Self {
        Self::new()
    }
}

fn bucket_index(symbol: char, buckets: usize) -> usize {
    symbol as usize % buckets
}

/// Iterator over the entries of a [`CodeBook`], bucket by bucket.
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Vec<(char, Code)>>,
    chain: std::slice::Iter<'a, (char, Code)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'a BitSlice);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((symbol, code)) = self.chain.next() {
                return Some((*symbol, code.as_bitslice()));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}

impl<'a> IntoIterator for &'a CodeBook {
    type Item = (char, &'a BitSlice);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<(char, Code)> for CodeBook {
    fn extend<I: IntoIterator<Item = (char, Code)>>(&mut self, entries: I) {
        for (symbol, code) in entries {
            self.add(symbol, code);
        }
    }
}

impl FromIterator<(char, Code)> for CodeBook {
    fn from_iter<I: IntoIterator<Item = (char, Code)>>(entries: I) -> Self {
        let mut book = Self::new();
        book.extend(entries);
        book
    }
}

/// Shows each bucket's chain, e.g. `{|0: |1: a h |...}`.
impl fmt::Display for CodeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{|")?;
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "{i}: ")?;
            for (symbol, _) in chain {
                write!(f, "{symbol} ")?;
            }
            write!(f, "|")?;
        }
        write!(f, "}}")
    }
}
