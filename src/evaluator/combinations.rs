use crate::hand::{Community, Hand, HoleHand};

/// Number of five-card hands available from two hole cards and five community cards.
pub const HANDS_PER_HOLE: usize = 21;

/// Every way to pick 5 of 7 indices, in lexicographic order.
///
/// Hole cards sit at indices 0 and 1, so hands using both hole cards come first.
pub struct Combinations7Choose5 {
    indices: [usize; 5],
    done: bool,
}

impl Combinations7Choose5 {
    pub fn new() -> Self {
        Self { indices: [0, 1, 2, 3, 4], done: false }
    }
}

impl Default for Combinations7Choose5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Combinations7Choose5 {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // bump the rightmost index that still has room, then pack the rest after it
        let mut i = 4;
        loop {
            if self.indices[i] < 7 - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(HANDS_PER_HOLE))
        }
    }
}

/// Every five-card hand that can be made from `hole` plus `community`.
///
/// The seven cards are indexed hole cards first, then community cards, and the
/// hands come out in lexicographic index order, each sorted by descending rank.
///
/// ```
/// use triple_pocket::evaluator::combinations;
/// use triple_pocket::hand::{Community, HoleHand};
///
/// let hole: HoleHand = "Ad 8s".parse().unwrap();
/// let community: Community = "6s 5h 4h 9s 2s".parse().unwrap();
/// assert_eq!(combinations(&hole, &community).len(), 21);
/// ```
pub fn combinations(hole: &HoleHand, community: &Community) -> Vec<Hand> {
    let [c0, c1, c2, c3, c4] = community.as_array();
    let seven = [hole.first(), hole.second(), c0, c1, c2, c3, c4];
    Combinations7Choose5::new().map(|indices| Hand::new(indices.map(|i| seven[i]))).collect()
}
