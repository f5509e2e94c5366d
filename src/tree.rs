/// An abstraction for a generic labeled tree node.
pub trait Node<'n> {
    /// The type of this [Node]'s [label][Node::label].
    ///
    /// Labels are only ever inspected through a [LabelDistance][crate::LabelDistance].
    type Label;

    /// Returns this [Node]'s _label_.
    fn label(&'n self) -> Self::Label;
}

/// An abstraction for a recursive ordered tree.
pub trait Tree<'t>: 't + Node<'t> {
    /// A type that can iterate over this [Tree]'s [children][Tree::children].
    type Children: IntoIterator<Item = &'t Self>;

    /// Returns this [Tree]'s immediate children, left to right.
    ///
    /// The sequence must be the same every time it is requested.
    fn children(&'t self) -> Self::Children;
}

#[cfg(test)]
mod tests {
    use super::*;
    use derive_more::From;
    use proptest::{collection::vec, prelude::*, strategy::LazyJust};
    use test_strategy::proptest;

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, From)]
    pub struct Size {
        depth: usize,
        breadth: usize,
    }

    impl Default for Size {
        fn default() -> Self {
            (3, 3).into()
        }
    }

    fn tree<L: 'static + Arbitrary>(size: Size) -> impl Strategy<Value = MockTree<L>> {
        let depth = size.depth as u32;
        let breadth = size.breadth as u32;
        let size = (breadth.pow(depth + 1) - 1) / (breadth - 1) / 2; // half the maximum number of nodes

        (any::<L>(), LazyJust::new(Vec::new))
            .prop_map_into()
            .prop_recursive(depth, size, breadth, move |inner| {
                (any::<L>(), vec(inner, ..=breadth as usize)).prop_map_into()
            })
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, From)]
    pub(crate) struct MockTree<L> {
        pub(crate) label: L,
        pub(crate) children: Vec<Self>,
    }

    impl<L> MockTree<L> {
        pub(crate) fn count(&self) -> usize {
            let mut stack = vec![self];
            let mut count = 0;
            while let Some(t) = stack.pop() {
                count += 1;
                stack.extend(&t.children);
            }
            count
        }

        /// Returns the `n`-th node in preorder, wrapping around the number of nodes.
        pub(crate) fn nth_mut(&mut self, n: usize) -> &mut Self {
            let n = n % self.count();
            let mut stack = vec![self];
            let mut i = 0;
            loop {
                let t = stack.pop().expect("n is smaller than the number of nodes");
                if i == n {
                    return t;
                }
                i += 1;
                stack.extend(t.children.iter_mut().rev());
            }
        }
    }

    impl<L: 'static + Arbitrary> Arbitrary for MockTree<L> {
        type Parameters = Size;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(size: Size) -> Self::Strategy {
            tree(size).boxed()
        }
    }

    impl<'n, L: 'n> Node<'n> for MockTree<L> {
        type Label = &'n L;
        fn label(&'n self) -> Self::Label {
            &self.label
        }
    }

    impl<'t, L: 't> Tree<'t> for MockTree<L> {
        type Children = &'t [Self];
        fn children(&'t self) -> Self::Children {
            &self.children
        }
    }

    #[proptest]
    fn count_equals_one_plus_sum_of_count_of_children(t: MockTree<()>) {
        let children: usize = t.children().iter().map(MockTree::count).sum();
        assert_eq!(t.count(), 1 + children);
    }

    #[proptest]
    fn the_first_node_in_preorder_is_the_root(t: MockTree<u8>) {
        let mut u = t.clone();
        assert_eq!(u.nth_mut(0), &t);
    }

    #[proptest]
    fn the_last_node_in_preorder_is_a_leaf(t: MockTree<u8>) {
        let mut t = t;
        let n = t.count() - 1;
        assert!(t.nth_mut(n).children.is_empty());
    }
}

#[cfg(test)]
pub(crate) use tests::MockTree;
