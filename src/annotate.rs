use itertools::Itertools;
use tracing::trace;

/// A tree enumerated in postorder, together with the bookkeeping the Zhang-Shasha recurrence
/// relies on.
///
/// Nodes are identified by their _postorder id_, that is their position in [nodes][Self::nodes].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AnnotatedTree<N> {
    nodes: Box<[N]>,
    lmds: Box<[usize]>,
    keyroots: Box<[usize]>,
}

impl<N: Copy> AnnotatedTree<N> {
    /// Annotates the tree rooted at `root`, whose nodes' children are listed by `children`.
    ///
    /// The traversal is iterative, so arbitrarily deep trees are supported.
    pub fn new<C, I>(root: N, mut children: C) -> Self
    where
        C: FnMut(N) -> I,
        I: IntoIterator<Item = N>,
    {
        // Visiting the last child first yields postorder once reversed.
        let mut stack = vec![(root, None)];
        let mut visited = Vec::new();
        let mut parents = Vec::new();

        while let Some((node, parent)) = stack.pop() {
            let id = visited.len();
            let len = stack.len();
            stack.extend(children(node).into_iter().map(|c| (c, Some(id))));
            visited.push((node, stack.len() == len));
            parents.push(parent);
        }

        let mut lmds_by_id = vec![None; visited.len()];
        let mut keyroots = vec![None; visited.len()];
        let mut nodes = Vec::with_capacity(visited.len());
        let mut lmds = Vec::with_capacity(visited.len());

        for (i, (id, &(node, leaf))) in visited.iter().enumerate().rev().enumerate() {
            let lmd = if leaf {
                let mut ancestor = parents[id];
                while let Some(a) = ancestor {
                    if lmds_by_id[a].is_some() {
                        break;
                    }

                    lmds_by_id[a] = Some(i);
                    ancestor = parents[a];
                }

                i
            } else {
                lmds_by_id[id].expect("the left-most leaf precedes its ancestors in postorder")
            };

            nodes.push(node);
            lmds.push(lmd);
            keyroots[lmd] = Some(i);
        }

        let keyroots: Box<[usize]> = keyroots.into_iter().flatten().sorted().collect();

        trace!(nodes = nodes.len(), keyroots = keyroots.len(), "annotated tree");

        AnnotatedTree {
            nodes: nodes.into(),
            lmds: lmds.into(),
            keyroots,
        }
    }

    /// Returns the root, which is always the last node in postorder.
    pub fn root(&self) -> N {
        self.nodes[self.nodes.len() - 1]
    }
}

impl<N> AnnotatedTree<N> {
    /// The nodes in postorder.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// The postorder id of each node's left-most leaf descendant, indexed by postorder id.
    pub fn lmds(&self) -> &[usize] {
        &self.lmds
    }

    /// The keyroots in ascending order.
    ///
    /// A keyroot is the node with the highest postorder id among those sharing the same
    /// left-most leaf descendant.
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }

    /// The number of nodes, which is never zero.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
