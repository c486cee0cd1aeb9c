//! Reduction of a molecule to its cyclic subgraph.
//!
//! Exhaustive ring search only ever runs on isolated ring systems. This
//! module finds the edges that lie on some cycle (everything except
//! bridges), discards the rest, and splits what remains into connected
//! components — one per ring system.

use std::collections::HashSet;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::molecule::Molecule;

/// The connected components of the cyclic subgraph of `mol`, each returned
/// as the sorted vertex set of one isolated ring system. Acyclic molecules
/// produce no components.
pub fn cyclic_components(mol: &Molecule) -> Vec<Vec<NodeIndex>> {
    let bridges = bridges(mol);
    let n = mol.atom_count();

    // Adjacency over ring bonds only.
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in mol.bonds() {
        if bridges.contains(&e) {
            continue;
        }
        if let Some((u, v)) = mol.bond_endpoints(e) {
            adj[u.index()].push(v.index());
            adj[v.index()].push(u.index());
        }
    }

    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for start in 0..n {
        if visited[start] || adj[start].is_empty() {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(v) = stack.pop() {
            component.push(NodeIndex::new(v));
            for &w in &adj[v] {
                if !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

/// All bridge edges of `mol`: the bonds on no cycle. Iterative Tarjan
/// lowlink so that long chain molecules cannot overflow the call stack.
pub fn bridges(mol: &Molecule) -> HashSet<EdgeIndex> {
    let n = mol.atom_count();
    let mut nbrs: Vec<Vec<(usize, EdgeIndex)>> = vec![Vec::new(); n];
    for e in mol.bonds() {
        if let Some((u, v)) = mol.bond_endpoints(e) {
            nbrs[u.index()].push((v.index(), e));
            nbrs[v.index()].push((u.index(), e));
        }
    }

    let mut disc = vec![usize::MAX; n];
    let mut low = vec![usize::MAX; n];
    let mut bridges = HashSet::new();
    let mut timer = 0;

    for root in 0..n {
        if disc[root] != usize::MAX {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;

        // frames: (vertex, edge we arrived by, next neighbor offset)
        let mut stack: Vec<(usize, Option<EdgeIndex>, usize)> = vec![(root, None, 0)];
        while let Some(&(v, _, i)) = stack.last() {
            if i < nbrs[v].len() {
                stack.last_mut().expect("frame just read").2 += 1;
                let (w, e) = nbrs[v][i];
                let arrival = stack.last().and_then(|f| f.1);
                if Some(e) == arrival {
                    continue;
                }
                if disc[w] == usize::MAX {
                    disc[w] = timer;
                    low[w] = timer;
                    timer += 1;
                    stack.push((w, Some(e), 0));
                } else {
                    low[v] = low[v].min(disc[w]);
                }
            } else {
                let (v, arrival, _) = stack.pop().expect("frame just read");
                if let Some(&(parent, _, _)) = stack.last() {
                    low[parent] = low[parent].min(low[v]);
                    if low[v] > disc[parent] {
                        if let Some(e) = arrival {
                            bridges.insert(e);
                        }
                    }
                }
            }
        }
    }
    bridges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    #[test]
    fn chain_is_all_bridges() {
        let mut mol = Molecule::new();
        let a: Vec<_> = (0..4)
            .map(|_| {
                mol.add_atom(crate::molecule::Atom::new(
                    crate::molecule::Element::Carbon,
                ))
            })
            .collect();
        for w in a.windows(2) {
            mol.add_bond(w[0], w[1], crate::molecule::Bond::Single);
        }
        assert_eq!(bridges(&mol).len(), 3);
        assert!(cyclic_components(&mol).is_empty());
    }

    #[test]
    fn ring_has_no_bridges() {
        let mol = templates::benzene();
        assert!(bridges(&mol).is_empty());
        let components = cyclic_components(&mol);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 6);
    }

    #[test]
    fn biphenyl_splits_into_two_systems() {
        let mol = templates::biphenyl();
        assert_eq!(bridges(&mol).len(), 1);
        let components = cyclic_components(&mol);
        assert_eq!(components.len(), 2);
        assert!(components.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn substituents_fall_away() {
        let mol = templates::ethyl_cyclopentane();
        let components = cyclic_components(&mol);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 5);
    }

    #[test]
    fn fused_system_stays_whole() {
        let components = cyclic_components(&templates::naphthalene());
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 10);
    }
}
