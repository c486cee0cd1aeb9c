//! Ordered vertex walks, the currency of the path-fusion reduction.

use petgraph::graph::NodeIndex;

/// An ordered walk through the molecular graph.
///
/// A path always has at least two vertices; its endpoints are its first
/// and last elements. Vertices are compared by index, so two paths built
/// over the same molecule can be intersected and joined without touching
/// the molecule itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<NodeIndex>,
}

impl Path {
    /// The two-vertex path covering a single bond.
    pub fn from_edge(u: NodeIndex, v: NodeIndex) -> Self {
        Self { vertices: vec![u, v] }
    }

    pub fn first(&self) -> NodeIndex {
        self.vertices[0]
    }

    pub fn last(&self) -> NodeIndex {
        self.vertices[self.vertices.len() - 1]
    }

    /// The number of vertices on the path, multiplicity included.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[NodeIndex] {
        &self.vertices
    }

    /// Whether `v` is one of this path's endpoints.
    pub fn touches(&self, v: NodeIndex) -> bool {
        self.first() == v || self.last() == v
    }

    /// Whether the path returns to its starting vertex.
    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }

    /// Reverse the walk in place; endpoints swap, the walk stays the same.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// The number of vertices the two paths share, counting each shared
    /// vertex once per occurrence. Plain pairwise comparison: paths are
    /// short and the count doubles as a multiplicity signal, which a set
    /// intersection would lose.
    pub fn intersection_size(&self, other: &Path) -> usize {
        self.vertices
            .iter()
            .filter(|v| other.vertices.contains(v))
            .count()
    }

    /// Join two paths that share the endpoint `at` into one longer walk:
    /// `self` oriented so `at` comes last, `other` so `at` comes first,
    /// with the duplicate `at` dropped. The result's endpoints are the two
    /// remaining original endpoints.
    pub fn join(&self, other: &Path, at: NodeIndex) -> Path {
        let mut left = self.clone();
        if left.first() == at {
            left.reverse();
        }
        let mut right = other.clone();
        if right.last() == at {
            right.reverse();
        }
        left.vertices.extend_from_slice(&right.vertices[1..]);
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn path(ix: &[usize]) -> Path {
        Path {
            vertices: ix.iter().map(|&i| n(i)).collect(),
        }
    }

    #[test]
    fn join_orients_both_sides() {
        // 1-0 and 0-2 share vertex 0; all four orientations must yield the
        // same walk up to direction.
        let joined = path(&[1, 0]).join(&path(&[0, 2]), n(0));
        assert_eq!(joined.vertices(), &[n(1), n(0), n(2)]);

        let joined = path(&[0, 1]).join(&path(&[2, 0]), n(0));
        assert_eq!(joined.vertices(), &[n(1), n(0), n(2)]);
    }

    #[test]
    fn join_keeps_interior_vertices() {
        let joined = path(&[3, 4, 0]).join(&path(&[0, 5, 6]), n(0));
        assert_eq!(joined.vertices(), &[n(3), n(4), n(0), n(5), n(6)]);
        assert_eq!(joined.first(), n(3));
        assert_eq!(joined.last(), n(6));
    }

    #[test]
    fn join_can_close_a_walk() {
        let joined = path(&[1, 2, 0]).join(&path(&[0, 1]), n(0));
        assert!(joined.is_closed());
        assert_eq!(joined.len(), 4);
    }

    #[test]
    fn intersection_counts_occurrences() {
        assert_eq!(path(&[0, 1, 2]).intersection_size(&path(&[2, 3, 4])), 1);
        assert_eq!(path(&[0, 1, 2]).intersection_size(&path(&[2, 3, 0])), 2);
        assert_eq!(path(&[0, 1, 2]).intersection_size(&path(&[3, 4, 5])), 0);
        // a closed walk shares its repeated endpoint twice
        assert_eq!(path(&[0, 1, 0]).intersection_size(&path(&[0, 2])), 2);
    }

    #[test]
    fn reverse_swaps_endpoints() {
        let mut p = path(&[0, 1, 2]);
        p.reverse();
        assert_eq!(p.first(), n(2));
        assert_eq!(p.last(), n(0));
    }
}
