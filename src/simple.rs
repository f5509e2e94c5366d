use crate::{Node, Tree};
use derive_more::From;
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

/// A minimal owned tree with a label per node.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{distance, SimpleNode, UnitCost};
///
/// let a = SimpleNode::new("f")
///     .with_child(SimpleNode::new("d")
///         .with_child(SimpleNode::new("a"))
///         .with_child(SimpleNode::new("c")
///             .with_child(SimpleNode::new("b"))))
///     .with_child(SimpleNode::new("e"));
///
/// let b = SimpleNode::new("f")
///     .with_child(SimpleNode::new("c")
///         .with_child(SimpleNode::new("d")
///             .with_child(SimpleNode::new("a"))
///             .with_child(SimpleNode::new("b"))))
///     .with_child(SimpleNode::new("e"));
///
/// assert_eq!(distance(&a, &b, UnitCost), 2);
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, From)]
pub struct SimpleNode<L> {
    label: L,
    children: Vec<Self>,
}

impl<L> SimpleNode<L> {
    /// A leaf labeled `label`.
    pub fn new(label: L) -> Self {
        SimpleNode {
            label,
            children: Vec::new(),
        }
    }

    /// Appends `child` as the right-most child and returns `self`.
    pub fn with_child(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    /// Appends `child` as the right-most child.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Iterates over every node breadth-first, starting at `self`.
    pub fn iter(&self) -> Iter<'_, L> {
        Iter {
            queue: VecDeque::from([self]),
        }
    }

    /// Returns the first node labeled `label` in [breadth-first order][Self::iter].
    pub fn get<Q>(&self, label: &Q) -> Option<&Self>
    where
        L: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.iter().find(|n| Borrow::<Q>::borrow(&n.label) == label)
    }

    /// Whether any node in this tree is labeled `label`.
    pub fn contains<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.get(label).is_some()
    }
}

/// A breadth-first iterator over a [SimpleNode] and its descendants.
#[derive(Debug, Clone)]
pub struct Iter<'a, L> {
    queue: VecDeque<&'a SimpleNode<L>>,
}

impl<'a, L> Iterator for Iter<'a, L> {
    type Item = &'a SimpleNode<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(&node.children);
        Some(node)
    }
}

impl<'a, L> IntoIterator for &'a SimpleNode<L> {
    type Item = &'a SimpleNode<L>;
    type IntoIter = Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'n, L: 'n> Node<'n> for SimpleNode<L> {
    type Label = &'n L;

    #[inline]
    fn label(&'n self) -> Self::Label {
        &self.label
    }
}

impl<'t, L: 't> Tree<'t> for SimpleNode<L> {
    type Children = &'t [Self];

    #[inline]
    fn children(&'t self) -> Self::Children {
        &self.children
    }
}

/// Prints one node per line, indented by depth.
impl<L: Display> Display for SimpleNode<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", node.label, indent = 2 * depth)?;
            stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        }

        Ok(())
    }
}
