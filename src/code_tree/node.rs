/// A node of a [`CodeTree`](super::CodeTree).
///
/// A well-formed node is either a leaf (a symbol, no children) or an internal
/// node (two children, no symbol). Nodes with neither are placeholders, which
/// only exist while a tree is being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    symbol: Option<char>,
    zero: Option<Box<Node>>,
    one: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            ..Self::default()
        }
    }

    pub fn internal(zero: Node, one: Node) -> Self {
        Self {
            symbol: None,
            zero: Some(Box::new(zero)),
            one: Some(Box::new(one)),
        }
    }

    /// A placeholder: no symbol, no children.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// The child reached by `bit`: the "one" child if set, else the "zero" child.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        if bit {
            self.one.as_deref()
        } else {
            self.zero.as_deref()
        }
    }

    pub fn set_child(&mut self, bit: bool, child: Node) {
        *self.slot(bit) = Some(Box::new(child));
    }

    /// Anything carrying a symbol counts as a leaf, even with children attached.
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }

    pub fn has_children(&self) -> bool {
        self.zero.is_some() || self.one.is_some()
    }

    /// Check this node and everything under it.
    pub fn is_valid(&self) -> bool {
        match (&self.zero, &self.one) {
            (None, None) => self.symbol.is_some(),
            (Some(zero), Some(one)) => self.symbol.is_none() && zero.is_valid() && one.is_valid(),
            _ => false,
        }
    }

    /// Number of nodes carrying a symbol, this one included.
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(self.symbol.is_some());
        let below = |child: &Option<Box<Node>>| child.as_deref().map_or(0, Node::leaf_count);
        own + below(&self.zero) + below(&self.one)
    }

    pub(super) fn set_symbol(&mut self, symbol: char) {
        self.symbol = Some(symbol);
    }

    /// The child reached by `bit`, creating a placeholder if there is none.
    pub(super) fn child_or_insert(&mut self, bit: bool) -> &mut Node {
        self.slot(bit).get_or_insert_with(Box::default)
    }

    fn slot(&mut self, bit: bool) -> &mut Option<Box<Node>> {
        if bit {
            &mut self.one
        } else {
            &mut self.zero
        }
    }
}
