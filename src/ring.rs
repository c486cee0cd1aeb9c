//! Rings and the sets a search collects them into.

use std::collections::HashSet;

use bit_set::BitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::molecule::Molecule;

/// A closed walk of at least three distinct atoms.
///
/// Atoms are stored in cyclic order; the bond list pairs consecutive atoms
/// plus the closing bond between the last and first. A ring's identity is
/// its edge set — rotation and direction of the stored order carry no
/// meaning.
#[derive(Debug, Clone)]
pub struct Ring {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
}

impl Ring {
    /// Build a ring from atoms in cyclic order, deriving the bond list
    /// from `mol`. Returns `None` if fewer than three atoms are given or
    /// if any consecutive pair (the closing pair included) is not bonded.
    pub fn from_cycle(atoms: Vec<NodeIndex>, mol: &Molecule) -> Option<Self> {
        if atoms.len() < 3 {
            return None;
        }
        let mut bonds = Vec::with_capacity(atoms.len());
        for i in 0..atoms.len() {
            let j = (i + 1) % atoms.len();
            bonds.push(mol.bond_between(atoms[i], atoms[j])?);
        }
        Some(Self { atoms, bonds })
    }

    /// The number of atoms in the ring.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Member atoms, in cyclic order.
    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    /// Member bonds; `bonds()[i]` joins `atoms()[i]` and `atoms()[i + 1]`,
    /// wrapping at the end.
    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    /// The rotation- and direction-independent identity of this ring.
    pub fn edge_key(&self) -> BitSet {
        BitSet::from_iter(self.bonds.iter().map(|e| e.index()))
    }

    /// The set of member atom indices.
    pub fn atom_key(&self) -> BitSet {
        BitSet::from_iter(self.atoms.iter().map(|v| v.index()))
    }
}

/// The unordered collection of rings a search produces.
///
/// Insertion deduplicates on the ring's edge key, so a ring reachable
/// through several reduction orders is stored exactly once.
#[derive(Debug, Clone, Default)]
pub struct RingSet {
    rings: Vec<Ring>,
    seen: HashSet<BitSet>,
}

impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `ring`, returning whether it was not already present.
    pub fn add(&mut self, ring: Ring) -> bool {
        if self.seen.insert(ring.edge_key()) {
            self.rings.push(ring);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, ring: &Ring) -> bool {
        self.seen.contains(&ring.edge_key())
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.rings.iter()
    }

    /// Absorb every ring of `other`, deduplicating as usual.
    pub fn extend(&mut self, other: RingSet) {
        for ring in other.rings {
            self.add(ring);
        }
    }

    /// Every atom that belongs to at least one ring of the set.
    pub fn atoms(&self) -> BitSet {
        let mut atoms = BitSet::new();
        for ring in &self.rings {
            atoms.union_with(&ring.atom_key());
        }
        atoms
    }
}

impl<'a> IntoIterator for &'a RingSet {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn cycle_needs_all_bonds() {
        let mol = templates::benzene();
        let ring = Ring::from_cycle((0..6).map(n).collect(), &mol);
        assert_eq!(ring.map(|r| r.len()), Some(6));
        // 2 and 0 are not bonded, so the closing bond is missing
        assert!(Ring::from_cycle(vec![n(0), n(1), n(2)], &mol).is_none());
        assert!(Ring::from_cycle(vec![n(0), n(1)], &mol).is_none());
    }

    #[test]
    fn rotated_and_reversed_rings_are_equal() {
        let mol = templates::benzene();
        let a = Ring::from_cycle((0..6).map(n).collect(), &mol).unwrap();
        let b = Ring::from_cycle(vec![n(3), n(2), n(1), n(0), n(5), n(4)], &mol).unwrap();

        let mut set = RingSet::new();
        assert!(set.add(a));
        assert!(!set.add(b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ring_atoms_union() {
        let mol = templates::naphthalene();
        let mut set = RingSet::new();
        set.add(Ring::from_cycle((0..6).map(n).collect(), &mol).unwrap());
        assert_eq!(set.atoms().len(), 6);
    }
}
