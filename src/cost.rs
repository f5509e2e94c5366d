use arrayvec::ArrayVec;
use derive_more::{Add, From};
use pathfinding::{num_traits::Zero, prelude::*};
use std::ops::Add;

/// The cost of turning one label into another.
///
/// An absent label (`None`) stands for the empty side of an insertion or a deletion, so
/// `distance(Some(x), None)` is the cost of deleting a node labeled `x` and
/// `distance(None, Some(y))` the cost of inserting a node labeled `y`.
///
/// Costs must never be negative, and `distance(Some(x), Some(x))` is expected to be _zero_
/// for the tree distance to behave like a metric.
///
/// Any closure `Fn(Option<&L>, Option<&L>) -> W` is a [LabelDistance].
pub trait LabelDistance<L: ?Sized> {
    /// The type of a cost.
    ///
    /// The default value of this type is assumed to be the additive identity (i.e. _zero_).
    type Cost: Default + Copy + Ord + Add<Output = Self::Cost>;

    /// Returns the cost of relabeling `a` into `b`.
    fn distance(&self, a: Option<&L>, b: Option<&L>) -> Self::Cost;
}

impl<L, W, F> LabelDistance<L> for F
where
    L: ?Sized,
    W: Default + Copy + Ord + Add<Output = W>,
    F: Fn(Option<&L>, Option<&L>) -> W,
{
    type Cost = W;

    #[inline]
    fn distance(&self, a: Option<&L>, b: Option<&L>) -> Self::Cost {
        self(a, b)
    }
}

/// Every edit costs one, except replacing a label by an equal one, which is free.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UnitCost;

impl<L: ?Sized + PartialEq> LabelDistance<L> for UnitCost {
    type Cost = usize;

    #[inline]
    fn distance(&self, a: Option<&L>, b: Option<&L>) -> Self::Cost {
        usize::from(a != b)
    }
}

/// The [Levenshtein distance][levenshtein] between labels seen as strings of characters.
///
/// An absent label is read as the empty string, so inserting or deleting a node costs as much
/// as the number of characters in its label.
///
/// [levenshtein]:  https://en.wikipedia.org/wiki/Levenshtein_distance
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Levenshtein;

impl<L: ?Sized + AsRef<str>> LabelDistance<L> for Levenshtein {
    type Cost = usize;

    fn distance(&self, a: Option<&L>, b: Option<&L>) -> Self::Cost {
        let a: Box<[char]> = a.map_or("", AsRef::as_ref).chars().collect();
        let b: Box<[char]> = b.map_or("", AsRef::as_ref).chars().collect();
        levenshtein(&a, &b)
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, From, Add)]
struct WholeNumber<T>(T);

impl<T: Default + Eq + Add<Output = T>> Zero for WholeNumber<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

fn levenshtein<T: Eq>(a: &[T], b: &[T]) -> usize {
    let (_, WholeNumber(cost)) = astar(
        &(0, 0),
        |&(i, j)| {
            let x = a.get(i);
            let y = b.get(j);

            let mut successors = ArrayVec::<_, 3>::new();

            if x.is_some() {
                successors.push(((i + 1, j), WholeNumber(1)));
            }

            if y.is_some() {
                successors.push(((i, j + 1), WholeNumber(1)));
            }

            if let (Some(x), Some(y)) = (x, y) {
                successors.push(((i + 1, j + 1), WholeNumber(usize::from(x != y))));
            }

            successors
        },
        |&(i, j)| WholeNumber((a.len() - i).abs_diff(b.len() - j)),
        |&p| p == (a.len(), b.len()),
    )
    .expect("the end of both sequences is always reachable");

    cost
}
