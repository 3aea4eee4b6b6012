//! Proximity-ordered selection of nodes around a target address.
//!
//! Candidates are ranked by [`magnitude`] from the target, closest first.
//! Candidates at equal distance are all kept and appear in input order, so
//! the result depends only on the inputs.

use std::iter::FusedIterator;

use alloy_primitives::U256;

use crate::{distance::magnitude, identifier::Identifier, node::Node};

/// Anything with a position on the circle.
pub trait Locate<const N: usize> {
    /// Address used to rank this candidate.
    fn locate(&self) -> Identifier<N>;
}

impl<const N: usize> Locate<N> for Identifier<N> {
    fn locate(&self) -> Identifier<N> {
        *self
    }
}

impl<const N: usize> Locate<N> for Node<N> {
    fn locate(&self) -> Identifier<N> {
        self.as_identifier()
    }
}

impl<const N: usize, T: Locate<N> + ?Sized> Locate<N> for &T {
    fn locate(&self) -> Identifier<N> {
        (**self).locate()
    }
}

/// Candidates in ascending distance from a target.
///
/// Created by [`nearest`].
#[derive(Debug, Clone)]
pub struct Nearest<T> {
    ranked: std::vec::IntoIter<(U256, T)>,
}

impl<T> Nearest<T> {
    /// Yields each remaining candidate together with its distance from the target.
    pub fn with_distance(self) -> impl ExactSizeIterator<Item = (U256, T)> {
        self.ranked
    }
}

impl<T> Iterator for Nearest<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ranked.next().map(|(_, candidate)| candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranked.size_hint()
    }
}

impl<T> ExactSizeIterator for Nearest<T> {}

impl<T> FusedIterator for Nearest<T> {}

/// Orders `candidates` by absolute distance from `target`, closest first.
///
/// Every candidate is yielded exactly once. Ties keep their input order.
pub fn nearest<const N: usize, T, I>(target: &Identifier<N>, candidates: I) -> Nearest<T>
where
    T: Locate<N>,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<(U256, T)> = candidates
        .into_iter()
        .map(|candidate| (magnitude(target, &candidate.locate()), candidate))
        .collect();
    // `sort_by` is stable, which gives the input-order tie break.
    ranked.sort_by(|(a, _), (b, _)| a.cmp(b));

    Nearest {
        ranked: ranked.into_iter(),
    }
}

/// Returns up to `k` candidates closest to `target`, closest first.
pub fn nearest_k<const N: usize, T, I>(target: &Identifier<N>, candidates: I, k: usize) -> Vec<T>
where
    T: Locate<N>,
    I: IntoIterator<Item = T>,
{
    nearest(target, candidates).take(k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    type Id8 = Identifier<8>;

    fn id(s: &str) -> Id8 {
        s.parse().unwrap()
    }

    fn ids(list: &[&str]) -> Vec<Id8> {
        list.iter().map(|s| id(s)).collect()
    }

    #[test]
    fn yields_closest_first() {
        let candidates = ids(&["0000000a", "00000001", "00000005"]);
        let ordered: Vec<_> = nearest(&Id8::ZERO, candidates).collect();
        assert_eq!(ordered, ids(&["00000001", "00000005", "0000000a"]));
    }

    #[test]
    fn distance_is_absolute() {
        let target = id("00000010");
        let candidates = ids(&["00000020", "0000000c", "00000013"]);
        let ordered: Vec<_> = nearest(&target, candidates).collect();
        assert_eq!(ordered, ids(&["00000013", "0000000c", "00000020"]));
    }

    #[test]
    fn ties_are_kept_in_input_order() {
        let target = id("00000010");
        let candidates = ids(&["00000013", "0000000d", "00000010", "00000013"]);

        let ordered: Vec<_> = nearest(&target, candidates).collect();
        assert_eq!(
            ordered,
            ids(&["00000010", "00000013", "0000000d", "00000013"])
        );

        let reversed = ids(&["0000000d", "00000013"]);
        let ordered: Vec<_> = nearest(&target, reversed).collect();
        assert_eq!(ordered, ids(&["0000000d", "00000013"]));
    }

    #[test]
    fn reports_exact_size_and_distances() {
        let target = Id8::ZERO;
        let candidates = ids(&["00000003", "00000002", "00000001"]);
        let iter = nearest(&target, candidates.iter());
        assert_eq!(iter.len(), 3);

        let distances: Vec<_> = iter.with_distance().map(|(d, _)| d).collect();
        assert_eq!(
            distances,
            vec![U256::from(1u8), U256::from(2u8), U256::from(3u8)]
        );
    }

    #[test]
    fn works_over_borrowed_nodes() {
        let nodes: Vec<Node<8>> = ["a", "b", "c", "d"]
            .iter()
            .map(|s| Node::new(*s).unwrap())
            .collect();
        let target = nodes[2].as_identifier();

        let ordered: Vec<&Node<8>> = nearest(&target, &nodes).collect();
        assert_eq!(ordered.len(), nodes.len());
        assert_eq!(ordered[0], &nodes[2]);
    }

    #[test]
    fn nearest_k_truncates() {
        let candidates = ids(&["00000009", "00000001", "00000004", "00000002"]);
        assert_eq!(
            nearest_k(&Id8::ZERO, candidates.clone(), 2),
            ids(&["00000001", "00000002"])
        );
        assert_eq!(nearest_k(&Id8::ZERO, candidates.clone(), 10).len(), 4);
        assert!(nearest_k(&Id8::ZERO, candidates, 0).is_empty());
    }

    #[test]
    fn empty_candidates() {
        let mut iter = nearest(&Id8::ZERO, Vec::<Id8>::new());
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }
}
