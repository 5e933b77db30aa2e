//! Broad phase: enumerate candidate body pairs for the narrow phase.
//!
//! The current strategy is naive all-pairs, O(n²). A spatial index would
//! replace [`candidate_pairs`] without touching the narrow phase or contact
//! resolution. The scene's step and its contact query both enumerate through it.

/// Two body indices with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: usize,
    pub b: usize,
}

/// Iterator over every unordered pair of indices in `0..len`.
///
/// Pairs come out in insertion order: `(0, 1), (0, 2), .., (1, 2), ..`.
/// It holds no borrow of the bodies, so the caller may mutate them between pairs.
#[derive(Debug, Clone)]
pub struct AllPairs {
    len: usize,
    i: usize,
    j: usize,
}

impl AllPairs {
    /// Pairs over a body list of length `len`.
    pub fn new(len: usize) -> Self {
        Self { len, i: 0, j: 1 }
    }
}

impl Iterator for AllPairs {
    type Item = CollisionPair;

    fn next(&mut self) -> Option<CollisionPair> {
        while self.i < self.len {
            if self.j < self.len {
                let pair = CollisionPair { a: self.i, b: self.j };
                self.j += 1;
                return Some(pair);
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

/// Pairs that need a narrow-phase test among `len` bodies.
///
/// `is_static(i)` reports whether body `i` is static. Two static bodies never
/// move, so their pair is skipped. The iterator borrows only what `is_static`
/// captures.
pub fn candidate_pairs<F>(len: usize, is_static: F) -> impl Iterator<Item = CollisionPair>
where
    F: Fn(usize) -> bool,
{
    AllPairs::new(len).filter(move |pair| !(is_static(pair.a) && is_static(pair.b)))
}
