//! Grouping discovered rings into connected ring systems.
//!
//! Two rings are connected when they share at least one atom (sharing a
//! bond implies sharing its two atoms). The partitioner is independent of
//! how the rings were found; it only looks at their index sets.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::{
    molecule::Molecule,
    ring::{Ring, RingSet},
};

/// Partition `rings` into maximal groups of transitively connected rings
/// (fused, bridged or spiro systems). Isolated rings come back as
/// singleton partitions; an empty input yields no partitions.
pub fn partition_rings(rings: &RingSet) -> Vec<RingSet> {
    let mut remaining: Vec<Ring> = rings.iter().cloned().collect();
    let mut partitions = Vec::new();

    while !remaining.is_empty() {
        let seed = remaining.swap_remove(0);
        let mut system_atoms = seed.atom_key();
        let mut system = RingSet::new();
        system.add(seed);

        // Connectivity walk: absorb anything touching the growing system
        // until it stops growing.
        loop {
            let mut grew = false;
            let mut i = 0;
            while i < remaining.len() {
                if system_atoms.is_disjoint(&remaining[i].atom_key()) {
                    i += 1;
                } else {
                    let ring = remaining.swap_remove(i);
                    system_atoms.union_with(&ring.atom_key());
                    system.add(ring);
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }
        partitions.push(system);
    }
    partitions
}

/// Flatten a ring set into one plain graph: the union of every member atom
/// and bond of `rings`, with atoms and bonds shared between rings included
/// once. Atom and bond weights are copied from `mol`, the molecule the
/// rings were found in.
pub fn ring_set_to_molecule(mol: &Molecule, rings: &RingSet) -> Molecule {
    let mut flat = Molecule::new();
    let mut atom_map: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut seen_bonds: HashSet<EdgeIndex> = HashSet::new();

    for ring in rings {
        for &a in ring.atoms() {
            if let Some(&atom) = mol.atom(a) {
                atom_map.entry(a).or_insert_with(|| flat.add_atom(atom));
            }
        }
        for &e in ring.bonds() {
            if !seen_bonds.insert(e) {
                continue;
            }
            if let (Some((u, v)), Some(&bond)) = (mol.bond_endpoints(e), mol.bond(e)) {
                flat.add_bond(atom_map[&u], atom_map[&v], bond);
            }
        }
    }
    flat
}

/// The rings of `rings` directly sharing an atom with `ring`, the ring
/// itself excluded.
pub fn connected_rings<'a>(rings: &'a RingSet, ring: &Ring) -> Vec<&'a Ring> {
    let key = ring.edge_key();
    let atoms = ring.atom_key();
    rings
        .iter()
        .filter(|other| other.edge_key() != key && !atoms.is_disjoint(&other.atom_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hanser::AllRingsFinder, templates};

    fn ring_of(mol: &Molecule, ix: &[usize]) -> Ring {
        let atoms: Vec<NodeIndex> = ix.iter().map(|&i| NodeIndex::new(i)).collect();
        Ring::from_cycle(atoms, mol).expect("fixture ring")
    }

    #[test]
    fn fused_pair_and_isolated_ring_make_two_partitions() {
        let mol = templates::naphthalene_with_detached_benzene();
        let mut rings = RingSet::new();
        // the two fused six-rings of the naphthalene half...
        rings.add(ring_of(&mol, &[0, 1, 2, 3, 4, 5]));
        rings.add(ring_of(&mol, &[0, 5, 6, 7, 8, 9]));
        // ...and the detached benzene
        rings.add(ring_of(&mol, &[10, 11, 12, 13, 14, 15]));

        let partitions = partition_rings(&rings);
        assert_eq!(partitions.len(), 2);
        let mut counts: Vec<usize> = partitions.iter().map(|p| p.len()).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn spiro_rings_share_an_atom_and_group_together() {
        let rings = AllRingsFinder::new()
            .find_all_rings(&templates::spiro_4_4())
            .unwrap();
        assert_eq!(partition_rings(&rings).len(), 1);
    }

    #[test]
    fn empty_set_has_no_partitions() {
        assert!(partition_rings(&RingSet::new()).is_empty());
    }

    #[test]
    fn every_ring_lands_in_exactly_one_partition() {
        let rings = AllRingsFinder::new()
            .find_all_rings(&templates::naphthalene_with_detached_benzene())
            .unwrap();
        let partitions = partition_rings(&rings);
        let total: usize = partitions.iter().map(|p| p.len()).sum();
        assert_eq!(total, rings.len());
    }

    #[test]
    fn flatten_deduplicates_shared_structure() {
        let mol = templates::naphthalene();
        let rings = AllRingsFinder::new().find_all_rings(&mol).unwrap();
        let flat = ring_set_to_molecule(&mol, &rings);
        assert_eq!(flat.atom_count(), 10);
        assert_eq!(flat.bond_count(), 11);
    }

    #[test]
    fn connected_rings_sees_the_fused_partner() {
        let mol = templates::naphthalene();
        let a = ring_of(&mol, &[0, 1, 2, 3, 4, 5]);
        let b = ring_of(&mol, &[0, 5, 6, 7, 8, 9]);
        let mut rings = RingSet::new();
        rings.add(a.clone());
        rings.add(b);
        assert_eq!(connected_rings(&rings, &a).len(), 1);
    }
}
