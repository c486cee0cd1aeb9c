//! Disposable working copies of the molecular graph.
//!
//! Both finders consume their input by deleting vertices and bonds as the
//! search progresses. They do so on a private adjacency copy built here, so
//! the caller's molecule is never modified. Neighbor lists are kept sorted
//! and vertices are visited in index order, which makes every search
//! deterministic for a given input.

use petgraph::graph::NodeIndex;

use crate::molecule::Molecule;

pub(crate) struct WorkingGraph {
    adj: Vec<Vec<NodeIndex>>,
    member: Vec<bool>,
}

impl WorkingGraph {
    /// A working copy of the whole molecule.
    pub fn new(mol: &Molecule) -> Self {
        Self::restricted(mol, mol.atoms())
    }

    /// A working copy of the subgraph induced by `vertices`.
    pub fn restricted(mol: &Molecule, vertices: impl IntoIterator<Item = NodeIndex>) -> Self {
        let n = mol.atom_count();
        let mut member = vec![false; n];
        for v in vertices {
            member[v.index()] = true;
        }
        let mut adj: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
        for e in mol.bonds() {
            if let Some((u, v)) = mol.bond_endpoints(e) {
                if member[u.index()] && member[v.index()] {
                    adj[u.index()].push(v);
                    adj[v.index()].push(u);
                }
            }
        }
        for list in &mut adj {
            list.sort_unstable();
        }
        Self { adj, member }
    }

    /// Iterate over the vertices of the copy, in index order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.member
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| NodeIndex::new(i))
    }

    pub fn degree(&self, v: NodeIndex) -> usize {
        self.adj[v.index()].len()
    }

    pub fn neighbors(&self, v: NodeIndex) -> &[NodeIndex] {
        &self.adj[v.index()]
    }

    /// The vertex of minimum nonzero degree, lowest index on ties, or
    /// `None` once the copy has no edges left.
    pub fn min_degree_vertex(&self) -> Option<NodeIndex> {
        let mut best: Option<(usize, NodeIndex)> = None;
        for v in self.vertices() {
            let d = self.degree(v);
            if d > 0 && best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, v));
            }
        }
        best.map(|(_, v)| v)
    }

    /// Delete `v` together with all its incident edges.
    pub fn remove_vertex(&mut self, v: NodeIndex) {
        self.strip_edges(v);
        self.member[v.index()] = false;
    }

    /// Delete all edges incident to `v`; the vertex itself stays.
    pub fn strip_edges(&mut self, v: NodeIndex) {
        let neighbors = std::mem::take(&mut self.adj[v.index()]);
        for u in neighbors {
            self.adj[u.index()].retain(|w| *w != v);
        }
    }

    /// Delete the edge between `u` and `v`. Returns whether it was present.
    pub fn remove_edge(&mut self, u: NodeIndex, v: NodeIndex) -> bool {
        let Ok(pos) = self.adj[u.index()].binary_search(&v) else {
            return false;
        };
        self.adj[u.index()].remove(pos);
        if let Ok(pos) = self.adj[v.index()].binary_search(&u) {
            self.adj[v.index()].remove(pos);
        }
        true
    }

    /// Put back an edge previously deleted with [`Self::remove_edge`].
    pub fn add_edge(&mut self, u: NodeIndex, v: NodeIndex) {
        let list = &mut self.adj[u.index()];
        if let Err(pos) = list.binary_search(&v) {
            list.insert(pos, v);
        }
        let list = &mut self.adj[v.index()];
        if let Err(pos) = list.binary_search(&u) {
            list.insert(pos, u);
        }
    }
}
