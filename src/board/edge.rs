//! Box edges and per-cell edge sets.
//!
//! Every box on the grid is bounded by four edges. A cell records which of
//! them have been drawn as a 4-bit set, so membership is order-independent
//! and a duplicate draw is simply a no-op on the set.

use serde::Serialize;

/// One side of a box.
///
/// The discriminant is the bit index used by `EdgeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// All edges in generation order.
pub const ALL_EDGES: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

impl Edge {
    /// Returns the edge a neighbouring cell sees for the same physical segment.
    pub const fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
        }
    }

    /// Returns the `(dx, dy)` offset of the cell sharing this edge.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Edge::Top => (0, -1),
            Edge::Right => (1, 0),
            Edge::Bottom => (0, 1),
            Edge::Left => (-1, 0),
        }
    }

    /// Returns the single-character notation for this edge.
    pub const fn notation_char(self) -> char {
        match self {
            Edge::Top => 't',
            Edge::Right => 'r',
            Edge::Bottom => 'b',
            Edge::Left => 'l',
        }
    }

    /// Parses an edge from its single-character notation.
    pub fn from_notation_char(c: char) -> Option<Edge> {
        match c {
            't' => Some(Edge::Top),
            'r' => Some(Edge::Right),
            'b' => Some(Edge::Bottom),
            'l' => Some(Edge::Left),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of drawn edges on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeSet(u8);

impl EdgeSet {
    /// The set with no edges drawn.
    pub const EMPTY: EdgeSet = EdgeSet(0);

    /// The set with all four edges drawn.
    pub const FULL: EdgeSet = EdgeSet(0b1111);

    /// Builds a set from a list of edges. Repeats collapse.
    pub fn from_edges(edges: &[Edge]) -> EdgeSet {
        edges.iter().fold(EdgeSet::EMPTY, |set, &e| set.with(e))
    }

    pub const fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    /// Returns a copy of this set with `edge` added.
    pub const fn with(self, edge: Edge) -> EdgeSet {
        EdgeSet(self.0 | edge.bit())
    }

    /// Adds `edge`, returning false if it was already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        let fresh = !self.contains(edge);
        self.0 |= edge.bit();
        fresh
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL.0
    }

    /// Iterates the contained edges in `ALL_EDGES` order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        ALL_EDGES.into_iter().filter(move |&e| self.contains(e))
    }

    /// Iterates the edges not yet drawn, in `ALL_EDGES` order.
    pub fn missing(self) -> impl Iterator<Item = Edge> {
        ALL_EDGES.into_iter().filter(move |&e| !self.contains(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for e in ALL_EDGES {
            assert_eq!(e.opposite().opposite(), e);
            assert_ne!(e.opposite(), e);
        }
    }

    #[test]
    fn notation_roundtrip() {
        for e in ALL_EDGES {
            assert_eq!(Edge::from_notation_char(e.notation_char()), Some(e));
        }
        assert_eq!(Edge::from_notation_char('x'), None);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = EdgeSet::EMPTY;
        assert!(set.insert(Edge::Left));
        assert!(!set.insert(Edge::Left));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Edge::Left));
        assert!(!set.contains(Edge::Top));
    }

    #[test]
    fn order_does_not_matter() {
        let a = EdgeSet::from_edges(&[Edge::Bottom, Edge::Top]);
        let b = EdgeSet::from_edges(&[Edge::Top, Edge::Bottom, Edge::Top]);
        assert_eq!(a, b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![Edge::Top, Edge::Bottom]);
        assert_eq!(a.missing().collect::<Vec<_>>(), vec![Edge::Right, Edge::Left]);
    }

    #[test]
    fn full_set() {
        assert!(EdgeSet::from_edges(&ALL_EDGES).is_full());
        assert_eq!(EdgeSet::FULL.len(), 4);
        assert!(EdgeSet::EMPTY.is_empty());
        assert!(!EdgeSet::from_edges(&[Edge::Top, Edge::Right, Edge::Bottom]).is_full());
    }
}
