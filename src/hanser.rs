//! Exhaustive ring enumeration by iterative path fusion.
//!
//! After Hanser, Jauffret and Kaufmann (1996): the molecular graph becomes
//! a path graph holding one two-vertex path per bond, then shrinks one
//! vertex at a time. Fusing the paths that meet at the removed vertex grows
//! longer walks; a walk that closes on itself is a ring. The reduction
//! enumerates every ring of the system, at the price of a path population
//! that can explode on dense topologies — the [`Threshold`] presets bound
//! that growth, and an optional maximum ring size prunes walks that could
//! only ever close into oversized rings.

use clap::ValueEnum;
use log::{debug, trace};
use petgraph::graph::NodeIndex;

use crate::{
    error::Error,
    graph::WorkingGraph,
    molecule::Molecule,
    path::Path,
    ring::{Ring, RingSet},
    spanning,
};

/// Path-graph growth bounds calibrated on PubChem compounds.
///
/// Each preset is the maximum number of live paths allowed to meet at the
/// vertex selected for removal; the name records the fraction of the
/// reference corpus whose ring search completes under that bound. Denser
/// ring systems abort with [`Error::SearchAborted`] instead of running
/// effectively forever.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Threshold {
    /// Completes 95.0% of the reference corpus.
    PubChem95,
    /// Completes 96.0% of the reference corpus.
    PubChem96,
    /// Completes 97.0% of the reference corpus.
    PubChem97,
    /// Completes 99.0% of the reference corpus.
    PubChem99,
    /// Completes 99.4% of the reference corpus.
    PubChem994,
    /// Completes 99.6% of the reference corpus.
    PubChem996,
    /// Completes 99.7% of the reference corpus.
    PubChem997,
    /// Completes 99.8% of the reference corpus.
    PubChem998,
    /// Completes 99.9% of the reference corpus.
    PubChem999,
    /// No bound; pathological ring systems may not terminate in
    /// reasonable time.
    None,
}

impl Threshold {
    pub(crate) fn max_degree(self) -> usize {
        match self {
            Threshold::PubChem95 => 72,
            Threshold::PubChem96 => 84,
            Threshold::PubChem97 => 126,
            Threshold::PubChem99 => 254,
            Threshold::PubChem994 => 330,
            Threshold::PubChem996 => 402,
            Threshold::PubChem997 => 648,
            Threshold::PubChem998 => 1182,
            Threshold::PubChem999 => 3090,
            Threshold::None => usize::MAX,
        }
    }
}

/// Finds every ring of a molecule, optionally up to a maximum size.
///
/// The threshold is fixed at construction for the lifetime of the finder;
/// there is no runtime reconfiguration. Searches never modify the input
/// molecule, and a finder holds no state between calls.
#[derive(Debug, Copy, Clone)]
pub struct AllRingsFinder {
    threshold: Threshold,
}

impl Default for AllRingsFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl AllRingsFinder {
    /// A finder with the default threshold, [`Threshold::PubChem99`].
    pub fn new() -> Self {
        Self::using_threshold(Threshold::PubChem99)
    }

    /// A finder that aborts once a reduction step exceeds `threshold`.
    pub fn using_threshold(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Find all rings of `mol`, of any size.
    ///
    /// The molecule is first reduced to its cyclic subgraph and split into
    /// isolated ring systems; the per-system results are unioned into one
    /// ring set. Acyclic molecules yield an empty set.
    pub fn find_all_rings(&self, mol: &Molecule) -> Result<RingSet, Error> {
        self.find_all_rings_bounded(mol, None)
    }

    /// Like [`Self::find_all_rings`], but rings with more than
    /// `max_ring_size` atoms are discarded rather than explored.
    pub fn find_all_rings_bounded(
        &self,
        mol: &Molecule,
        max_ring_size: Option<usize>,
    ) -> Result<RingSet, Error> {
        check_structure(mol)?;
        let mut rings = RingSet::new();
        for system in spanning::cyclic_components(mol) {
            self.search(mol, &system, max_ring_size, &mut rings)?;
        }
        Ok(rings)
    }

    /// Find all rings of a subgraph that is already one connected, cyclic
    /// ring system: no pendant branches, no bridges, one component.
    /// Callers with a whole molecule want [`Self::find_all_rings`], which
    /// performs that reduction itself.
    pub fn find_all_rings_in_isolated_ring_system(
        &self,
        mol: &Molecule,
    ) -> Result<RingSet, Error> {
        self.find_all_rings_in_isolated_ring_system_bounded(mol, None)
    }

    /// The size-bounded variant of
    /// [`Self::find_all_rings_in_isolated_ring_system`].
    pub fn find_all_rings_in_isolated_ring_system_bounded(
        &self,
        mol: &Molecule,
        max_ring_size: Option<usize>,
    ) -> Result<RingSet, Error> {
        check_structure(mol)?;
        let system: Vec<NodeIndex> = mol.atoms().collect();
        let mut rings = RingSet::new();
        self.search(mol, &system, max_ring_size, &mut rings)?;
        Ok(rings)
    }

    /// One full reduction over one isolated ring system.
    fn search(
        &self,
        mol: &Molecule,
        system: &[NodeIndex],
        max_ring_size: Option<usize>,
        rings: &mut RingSet,
    ) -> Result<(), Error> {
        let mut graph = WorkingGraph::restricted(mol, system.iter().copied());

        // The initial path graph: one two-vertex path per bond.
        let mut paths: Vec<Path> = Vec::new();
        for &u in system {
            for &v in graph.neighbors(u) {
                if u < v {
                    paths.push(Path::from_edge(u, v));
                }
            }
        }
        debug!(
            "reducing ring system: {} vertices, {} initial paths",
            system.len(),
            paths.len()
        );

        while let Some(vertex) = graph.min_degree_vertex() {
            self.remove(vertex, &mut graph, &mut paths, max_ring_size, rings, mol)?;
            if paths.is_empty() {
                break;
            }
        }
        Ok(())
    }

    /// Remove `vertex` from the reduction: fuse the path pairs meeting
    /// there, harvest the fusions that closed into rings, then delete the
    /// vertex and its edges from the working graph. All scratch state is
    /// local to the step.
    fn remove(
        &self,
        vertex: NodeIndex,
        graph: &mut WorkingGraph,
        paths: &mut Vec<Path>,
        max_ring_size: Option<usize>,
        rings: &mut RingSet,
        mol: &Molecule,
    ) -> Result<(), Error> {
        let touching: Vec<usize> = paths
            .iter()
            .enumerate()
            .filter(|(_, p)| p.touches(vertex))
            .map(|(i, _)| i)
            .collect();

        // The next step fuses every unordered pair of these paths. Densely
        // fused systems grow this count combinatorially; past the threshold
        // the search is hopeless and aborts.
        if touching.len() > self.threshold.max_degree() {
            return Err(Error::SearchAborted {
                degree: touching.len(),
                max: self.threshold.max_degree(),
            });
        }

        let max_len = max_ring_size.map(|m| m + 1);
        let mut consumed = vec![false; paths.len()];
        let mut new_paths: Vec<Path> = Vec::new();
        let mut potential_rings: Vec<Path> = Vec::new();

        for (a, &i) in touching.iter().enumerate() {
            for &j in &touching[a + 1..] {
                let shared = paths[i].intersection_size(&paths[j]);
                // Sharing three or more vertices, the fusion could never be
                // a simple path or ring; those pairs stay untouched.
                if shared > 2 {
                    continue;
                }
                let fused = paths[i].join(&paths[j], vertex);
                if max_len.is_none_or(|m| fused.len() <= m) {
                    if shared == 1 {
                        new_paths.push(fused);
                    } else {
                        potential_rings.push(fused);
                    }
                }
                consumed[i] = true;
                consumed[j] = true;
            }
        }

        let mut idx = 0;
        paths.retain(|_| {
            let keep = !consumed[idx];
            idx += 1;
            keep
        });
        paths.append(&mut new_paths);

        // A fusion at intersection size two closed into a ring only if the
        // two shared vertices were both endpoints.
        for p in potential_rings {
            if p.is_closed() && p.len() > 3 {
                let mut atoms = p.vertices().to_vec();
                atoms.pop();
                let ring = Ring::from_cycle(atoms, mol)
                    .expect("fused paths only ever walk along bonds");
                rings.add(ring);
            }
        }

        graph.remove_vertex(vertex);
        trace!(
            "removed vertex {}: {} live paths, {} rings so far",
            vertex.index(),
            paths.len(),
            rings.len()
        );
        Ok(())
    }
}

fn check_structure(mol: &Molecule) -> Result<(), Error> {
    if mol.is_malformed() {
        return Err(Error::MalformedGraph(
            "self-loop or parallel bond in molecule",
        ));
    }
    Ok(())
}
