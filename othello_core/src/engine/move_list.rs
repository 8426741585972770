use crate::engine::Move;
use std::ops::Index;

// At most 60 empty cells remain, so every legal move set fits.
const MAX_MOVES: usize = 64;

#[derive(Debug, Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            moves: [Move::default(); MAX_MOVES],
            count: 0,
        }
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        if let Some(slot) = self.moves.get_mut(self.count) {
            *slot = mv;
            self.count += 1;
        } else {
            debug_assert!(false, "MoveList overflow! Max moves: {MAX_MOVES}");
        }
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, index: usize) -> Option<Move> {
        self.as_slice().get(index).copied()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.iter().any(|&m| m == mv)
    }

    pub fn as_slice(&self) -> &[Move] {
        self.moves.get(0..self.count).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Stable, so equal keys keep enumeration order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Move, &Move) -> std::cmp::Ordering,
    {
        if let Some(slice) = self.moves.get_mut(0..self.count) {
            slice.sort_by(compare);
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    /// Out-of-range reads return the first slot instead of panicking.
    fn index(&self, index: usize) -> &Self::Output {
        self.as_slice().get(index).unwrap_or(&self.moves[0])
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::iter::Take<std::array::IntoIter<Move, MAX_MOVES>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::BoardCoordinate;

    #[test]
    fn test_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        for sq in [10, 3, 40] {
            list.push(BoardCoordinate::from_index(sq).unwrap());
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].index(), 3);
        assert_eq!(list.get(3), None);
        let indices: Vec<usize> = list.into_iter().map(BoardCoordinate::index).collect();
        assert_eq!(indices, vec![10, 3, 40]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut list = MoveList::new();
        for sq in [5, 1, 4, 2] {
            list.push(BoardCoordinate::from_index(sq).unwrap());
        }
        // Odd/even buckets; order inside a bucket must not change.
        list.sort_by(|a, b| (a.index() % 2).cmp(&(b.index() % 2)));
        let indices: Vec<usize> = list.iter().map(|m| m.index()).collect();
        assert_eq!(indices, vec![4, 2, 5, 1]);
    }

    #[test]
    fn test_out_of_range_index_does_not_panic() {
        let mut list = MoveList::new();
        list.push(BoardCoordinate::from_index(19).unwrap());
        list.push(BoardCoordinate::from_index(26).unwrap());
        assert_eq!(list[5], list[0]);
        assert_eq!(list[MAX_MOVES + 1].index(), 19);
        assert_eq!(list.get(5), None);
    }
}
