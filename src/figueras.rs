//! Legacy smallest-set-of-smallest-rings perception, after Figueras (1996).
//!
//! The graph is trimmed until nothing cyclic remains: acyclic branches are
//! pruned outright, and each low-degree vertex contributes the smallest
//! ring through it, found by a breadth-first search in which every vertex
//! carries its full path from the root. One bond is broken per discovered
//! ring so the same cycle is never harvested twice. The newer path-fusion
//! finder supersedes this algorithm but does not subsume it: this one
//! returns a minimal ring basis, not every ring.

use std::collections::VecDeque;

use log::debug;
use petgraph::graph::NodeIndex;

use crate::{
    error::Error,
    graph::WorkingGraph,
    molecule::Molecule,
    ring::{Ring, RingSet},
};

/// Finds a smallest set of smallest rings by iterative trimming.
#[derive(Debug, Copy, Clone, Default)]
pub struct SssrFinder;

impl SssrFinder {
    pub fn new() -> Self {
        Self
    }

    /// Find a smallest set of smallest rings covering `mol`.
    ///
    /// The search trims a private working copy; the input molecule is
    /// never modified, so repeated calls on the same molecule start from
    /// the same state. Acyclic molecules yield an empty set.
    pub fn find_sssr(&self, mol: &Molecule) -> Result<RingSet, Error> {
        if mol.is_malformed() {
            return Err(Error::MalformedGraph(
                "self-loop or parallel bond in molecule",
            ));
        }

        let mut graph = WorkingGraph::new(mol);
        let mut sssr = RingSet::new();
        // A degree-three step deletes one bond transiently; the next
        // degree-two pass puts it back.
        let mut broken_bond: Option<(NodeIndex, NodeIndex)> = None;

        loop {
            // One trimming pass: the minimum nonzero degree decides what
            // happens, and the degree-two vertices form the working set.
            let mut smallest: Option<(usize, NodeIndex)> = None;
            let mut degree_two: Vec<NodeIndex> = Vec::new();
            for v in graph.vertices() {
                let d = graph.degree(v);
                if d == 2 {
                    degree_two.push(v);
                }
                if d > 0 && smallest.is_none_or(|(sd, _)| d < sd) {
                    smallest = Some((d, v));
                }
            }
            // Every vertex trimmed to degree zero: done.
            let Some((degree, vertex)) = smallest else {
                break;
            };

            match degree {
                1 => {
                    // Pure branch pruning; no ring involved.
                    graph.strip_edges(vertex);
                }
                2 => {
                    let mut remembered: Vec<NodeIndex> = Vec::new();
                    for &root in &degree_two {
                        if let Some(ring) = shortest_ring(&graph, root, mol) {
                            if sssr.add(ring) {
                                remembered.push(root);
                            }
                        }
                    }
                    // No root produced a new ring: break a bond anyway so
                    // the trimming always advances.
                    if remembered.is_empty() {
                        remembered.push(degree_two[0]);
                    }
                    for &root in &remembered {
                        break_bond(&mut graph, root);
                    }
                    if let Some((u, v)) = broken_bond.take() {
                        graph.add_edge(u, v);
                    }
                }
                _ => {
                    if let Some(ring) = shortest_ring(&graph, vertex, mol) {
                        let (u, v) = check_edges(&ring, &mut graph, mol);
                        sssr.add(ring);
                        graph.remove_edge(u, v);
                        broken_bond = Some((u, v));
                    } else {
                        // The minimum vertex sits on no remaining cycle;
                        // drop one of its bonds to keep trimming moving.
                        break_bond(&mut graph, vertex);
                    }
                }
            }
        }

        debug!("sssr: {} rings", sssr.len());
        Ok(sssr)
    }
}

/// The smallest ring through `root` in the working graph, or `None` if
/// `root` is on no remaining cycle.
///
/// Breadth-first expansion in which every vertex carries the full path
/// taken to reach it. When the frontier meets a vertex that already has a
/// path and the two paths share only the root, their union closes the
/// smallest ring through the root — BFS explores in distance order, so the
/// first closure found is minimal.
fn shortest_ring(graph: &WorkingGraph, root: NodeIndex, mol: &Molecule) -> Option<Ring> {
    let mut paths: Vec<Option<Vec<NodeIndex>>> = vec![None; mol.atom_count()];
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    paths[root.index()] = Some(vec![root]);
    for &u in graph.neighbors(root) {
        paths[u.index()] = Some(vec![root, u]);
        queue.push_back(u);
    }

    while let Some(node) = queue.pop_front() {
        let Some(node_path) = paths[node.index()].clone() else {
            continue;
        };
        let came_from = node_path[node_path.len() - 2];
        for &m in graph.neighbors(node) {
            if m == came_from {
                continue;
            }
            match &paths[m.index()] {
                None => {
                    let mut extended = node_path.clone();
                    extended.push(m);
                    paths[m.index()] = Some(extended);
                    queue.push_back(m);
                }
                Some(other) => {
                    let shared = node_path.iter().filter(|v| other.contains(v)).count();
                    if shared == 1 {
                        // Walk out along one path and home along the other.
                        let mut atoms = node_path;
                        atoms.extend(other[1..].iter().rev());
                        return Ring::from_cycle(atoms, mol);
                    }
                }
            }
        }
    }
    None
}

/// Break one bond at `vertex` (the one to its lowest-indexed neighbor).
fn break_bond(graph: &mut WorkingGraph, vertex: NodeIndex) {
    if let Some(&u) = graph.neighbors(vertex).first() {
        graph.remove_edge(vertex, u);
    }
}

/// Choose which bond of `ring` to delete: for each bond, probe the larger
/// of the two alternative rings its removal leaves behind, and pick the
/// bond minimizing that worst case. The working graph is returned to its
/// original state before the choice is reported.
fn check_edges(
    ring: &Ring,
    graph: &mut WorkingGraph,
    mol: &Molecule,
) -> (NodeIndex, NodeIndex) {
    let atoms = ring.atoms();
    let mut best: Option<(usize, (NodeIndex, NodeIndex))> = None;
    for i in 0..atoms.len() {
        let u = atoms[i];
        let v = atoms[(i + 1) % atoms.len()];
        graph.remove_edge(u, v);
        let through_u = shortest_ring(graph, u, mol).map_or(0, |r| r.len());
        let through_v = shortest_ring(graph, v, mol).map_or(0, |r| r.len());
        graph.add_edge(u, v);
        let worst = through_u.max(through_v);
        if best.is_none_or(|(w, _)| worst < w) {
            best = Some((worst, (u, v)));
        }
    }
    best.map(|(_, bond)| bond)
        .expect("a ring has at least three bonds")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    fn sizes(rings: &RingSet) -> Vec<usize> {
        let mut sizes: Vec<usize> = rings.iter().map(|r| r.len()).collect();
        sizes.sort_unstable();
        sizes
    }

    #[test]
    fn single_ring() {
        let sssr = SssrFinder::new()
            .find_sssr(&templates::benzene())
            .unwrap();
        assert_eq!(sizes(&sssr), vec![6]);
    }

    #[test]
    fn fused_bicyclic_keeps_only_the_small_rings() {
        let sssr = SssrFinder::new()
            .find_sssr(&templates::naphthalene())
            .unwrap();
        assert_eq!(sizes(&sssr), vec![6, 6]);
    }

    #[test]
    fn five_seven_system() {
        let sssr = SssrFinder::new().find_sssr(&templates::azulene()).unwrap();
        assert_eq!(sizes(&sssr), vec![5, 7]);
    }

    #[test]
    fn bridged_bicyclic_yields_the_two_small_rings() {
        let sssr = SssrFinder::new()
            .find_sssr(&templates::norbornane())
            .unwrap();
        assert_eq!(sizes(&sssr), vec![5, 5]);
    }

    #[test]
    fn shortest_ring_finds_a_triangle() {
        let mut m = Molecule::new();
        let a: Vec<NodeIndex> = (0..3)
            .map(|_| {
                m.add_atom(crate::molecule::Atom::new(
                    crate::molecule::Element::Carbon,
                ))
            })
            .collect();
        m.add_bond(a[0], a[1], crate::molecule::Bond::Single);
        m.add_bond(a[1], a[2], crate::molecule::Bond::Single);
        m.add_bond(a[2], a[0], crate::molecule::Bond::Single);
        let g = WorkingGraph::new(&m);
        let ring = shortest_ring(&g, a[0], &m).unwrap();
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn shortest_ring_prefers_the_small_cycle() {
        // a degree-2 vertex on the five-ring of azulene sees the 5 before
        // the 7 or the 10
        let mol = templates::azulene();
        let g = WorkingGraph::new(&mol);
        let ring = shortest_ring(&g, NodeIndex::new(1), &mol).unwrap();
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn no_ring_through_acyclic_vertex() {
        let mol = templates::ethyl_cyclopentane();
        let g = WorkingGraph::new(&mol);
        assert!(shortest_ring(&g, NodeIndex::new(6), &mol).is_none());
    }

    #[test]
    fn repeated_runs_start_from_a_fresh_copy() {
        let mol = templates::naphthalene();
        let finder = SssrFinder::new();
        let first = finder.find_sssr(&mol).unwrap();
        let second = finder.find_sssr(&mol).unwrap();
        assert_eq!(sizes(&first), sizes(&second));
    }

    #[test]
    fn degenerate_inputs_yield_nothing() {
        let finder = SssrFinder::new();
        assert!(finder.find_sssr(&Molecule::new()).unwrap().is_empty());

        let mut single = Molecule::new();
        single.add_atom(crate::molecule::Atom::new(
            crate::molecule::Element::Carbon,
        ));
        assert!(finder.find_sssr(&single).unwrap().is_empty());
    }
}
