use crate::{AnnotatedTree, LabelDistance, Tree};
use itertools::Itertools;
use pathfinding::matrix::Matrix;
use tracing::{debug_span, field::Empty, trace};

struct ZhangShasha<'a, L, D: LabelDistance<L>> {
    a: &'a [usize],
    b: &'a [usize],
    x: &'a [L],
    y: &'a [L],
    deletes: &'a [D::Cost],
    inserts: &'a [D::Cost],
    cost: &'a D,
    treedists: Matrix<D::Cost>,
}

impl<L, D: LabelDistance<L>> ZhangShasha<'_, L, D> {
    /// Computes the distance between the forests bounded by the keyroots `i` and `j`,
    /// recording the distance between every pair of subtrees aligned with both forests.
    fn forestdist(&mut self, i: usize, j: usize) {
        trace!(i, j, "forestdist");

        let (li, lj) = (self.a[i], self.b[j]);

        // Row `r` stands for the forest `li..li + r`, column `c` for `lj..lj + c`.
        let m = i - li + 2;
        let n = j - lj + 2;
        let mut fd = Matrix::new(m, n, D::Cost::default());

        for r in 1..m {
            fd[(r, 0)] = fd[(r - 1, 0)] + self.deletes[li + r - 1];
        }

        for c in 1..n {
            fd[(0, c)] = fd[(0, c - 1)] + self.inserts[lj + c - 1];
        }

        for r in 1..m {
            let x = li + r - 1;
            for c in 1..n {
                let y = lj + c - 1;

                let delete = fd[(r - 1, c)] + self.deletes[x];
                let insert = fd[(r, c - 1)] + self.inserts[y];

                if self.a[x] == li && self.b[y] == lj {
                    let relabel = fd[(r - 1, c - 1)] + self.relabel(x, y);
                    fd[(r, c)] = delete.min(insert).min(relabel);
                    self.treedists[(x, y)] = fd[(r, c)];
                } else {
                    let p = self.a[x] - li;
                    let q = self.b[y] - lj;
                    let replace = fd[(p, q)] + self.treedists[(x, y)];
                    fd[(r, c)] = delete.min(insert).min(replace);
                }
            }
        }
    }

    #[inline]
    fn relabel(&self, x: usize, y: usize) -> D::Cost {
        self.cost.distance(Some(&self.x[x]), Some(&self.y[y]))
    }
}

/// Finds the lowest total cost of insertions, deletions and relabelings that transform
/// the tree rooted at `a` into the tree rooted at `b`.
///
/// Nodes are any copyable handle, such as references or indices into an arena, whose
/// ordered children are listed by `children` and whose labels are read by `label`.
/// Each label is read once per call, and the cost of deleting or inserting each node is
/// computed once per call.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{distance_by, UnitCost};
///
/// // Two trees stored side by side in an arena as (label, children) pairs.
/// let arena = [
///     ("f", vec![1, 4]), ("d", vec![2, 3]), ("a", vec![]), ("b", vec![]), ("e", vec![]),
///     ("f", vec![6, 8]), ("d", vec![7]), ("b", vec![]), ("e", vec![]),
/// ];
///
/// let children = |n: usize| arena[n].1.iter().copied();
/// let label = |n: usize| arena[n].0;
///
/// assert_eq!(distance_by(0, 5, children, label, UnitCost), 1);
/// ```
pub fn distance_by<N, C, I, G, L, D>(
    a: N,
    b: N,
    mut children: C,
    mut label: G,
    cost: D,
) -> D::Cost
where
    N: Copy,
    C: FnMut(N) -> I,
    I: IntoIterator<Item = N>,
    G: FnMut(N) -> L,
    D: LabelDistance<L>,
{
    let span = debug_span!("distance", a = Empty, b = Empty).entered();

    let a = AnnotatedTree::new(a, &mut children);
    let b = AnnotatedTree::new(b, &mut children);

    span.record("a", a.len());
    span.record("b", b.len());

    let x: Box<[L]> = a.nodes().iter().map(|&n| label(n)).collect();
    let y: Box<[L]> = b.nodes().iter().map(|&n| label(n)).collect();

    let deletes: Box<[_]> = x.iter().map(|l| cost.distance(Some(l), None)).collect();
    let inserts: Box<[_]> = y.iter().map(|l| cost.distance(None, Some(l))).collect();

    let mut zs = ZhangShasha {
        a: a.lmds(),
        b: b.lmds(),
        x: &x,
        y: &y,
        deletes: &deletes,
        inserts: &inserts,
        cost: &cost,
        treedists: Matrix::new(a.len(), b.len(), D::Cost::default()),
    };

    for (&i, &j) in a.keyroots().iter().cartesian_product(b.keyroots()) {
        zs.forestdist(i, j);
    }

    zs.treedists[(a.len() - 1, b.len() - 1)]
}

/// Finds the lowest total cost of insertions, deletions and relabelings that transform one
/// [Tree] into the other, given the `cost` of turning one label into another.
pub fn distance<'t, T, D>(a: &'t T, b: &'t T, cost: D) -> D::Cost
where
    T: Tree<'t>,
    D: LabelDistance<T::Label>,
{
    distance_by(a, b, T::children, T::label, cost)
}
