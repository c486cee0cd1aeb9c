//! Programmatic molecule fixtures.
//!
//! Ring perception is exercised against a fixed family of well-understood
//! topologies, built in code. Carbon skeletons are enough: the finders
//! never look at elements or bond orders.

use petgraph::graph::NodeIndex;

use crate::molecule::{Atom, Bond, Element, Molecule};

fn carbons(mol: &mut Molecule, n: usize) -> Vec<NodeIndex> {
    (0..n)
        .map(|_| mol.add_atom(Atom::new(Element::Carbon)))
        .collect()
}

fn bond_chain(mol: &mut Molecule, atoms: &[NodeIndex], pairs: &[(usize, usize)]) {
    for &(u, v) in pairs {
        mol.add_bond(atoms[u], atoms[v], Bond::Single);
    }
}

/// Benzene: one six-ring, alternating single and double bonds.
pub fn benzene() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 6);
    for i in 0..6 {
        let order = if i % 2 == 0 { Bond::Double } else { Bond::Single };
        mol.add_bond(a[i], a[(i + 1) % 6], order);
    }
    mol
}

/// Naphthalene skeleton: two six-rings fused on the 0-5 bond.
pub fn naphthalene() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 10);
    bond_chain(
        &mut mol,
        &a,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 0),
        ],
    );
    mol
}

/// Anthracene skeleton: three linearly fused six-rings.
pub fn anthracene() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 14);
    bond_chain(
        &mut mol,
        &a,
        &[
            // first ring
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            // second ring, fused on 3-4
            (3, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 4),
            // third ring, fused on 7-8
            (7, 10),
            (10, 11),
            (11, 12),
            (12, 13),
            (13, 8),
        ],
    );
    mol
}

/// Azulene skeleton: a five-ring and a seven-ring fused on the 0-4 bond.
pub fn azulene() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 10);
    bond_chain(
        &mut mol,
        &a,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 0),
        ],
    );
    mol
}

/// Biphenyl skeleton: two six-rings joined by one rotatable bond. The
/// connecting bond is a bridge, so the two rings are separate ring
/// systems.
pub fn biphenyl() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 12);
    for i in 0..6 {
        mol.add_bond(a[i], a[(i + 1) % 6], Bond::Single);
        mol.add_bond(a[6 + i], a[6 + (i + 1) % 6], Bond::Single);
    }
    mol.add_bond(a[0], a[6], Bond::Single);
    mol
}

/// Spiro[4.4]nonane: two five-rings sharing the single spiro atom 0.
pub fn spiro_4_4() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 9);
    bond_chain(
        &mut mol,
        &a,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 0),
        ],
    );
    mol
}

/// Norbornane (bicyclo[2.2.1]heptane): bridgeheads 0 and 3 joined by
/// bridges of two, two and one atoms.
pub fn norbornane() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 7);
    bond_chain(
        &mut mol,
        &a,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (0, 4),
            (4, 5),
            (5, 3),
            (0, 6),
            (6, 3),
        ],
    );
    mol
}

/// Cubane skeleton: the cube graph. Eight atoms, twelve bonds, every atom
/// on three four-rings.
pub fn cubane() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 8);
    for i in 0..4 {
        mol.add_bond(a[i], a[(i + 1) % 4], Bond::Single);
        mol.add_bond(a[4 + i], a[4 + (i + 1) % 4], Bond::Single);
        mol.add_bond(a[i], a[4 + i], Bond::Single);
    }
    mol
}

/// 1-ethylcyclopentane: a five-ring with a two-atom substituent chain.
pub fn ethyl_cyclopentane() -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, 7);
    bond_chain(
        &mut mol,
        &a,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 5),
            (5, 6),
        ],
    );
    mol
}

/// A naphthalene and a completely detached benzene in one container: two
/// ring systems with no path between them.
pub fn naphthalene_with_detached_benzene() -> Molecule {
    let mut mol = naphthalene();
    let b = carbons(&mut mol, 6);
    for i in 0..6 {
        mol.add_bond(b[i], b[(i + 1) % 6], Bond::Single);
    }
    mol
}

/// A `rows` x `cols` wall of edge-fused four-rings (a rectangular grid
/// graph). Atom `(r, c)` has index `r * (cols + 1) + c`.
pub fn square_grid(rows: usize, cols: usize) -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, (rows + 1) * (cols + 1));
    let at = |r: usize, c: usize| a[r * (cols + 1) + c];
    for r in 0..=rows {
        for c in 0..=cols {
            if c < cols {
                mol.add_bond(at(r, c), at(r, c + 1), Bond::Single);
            }
            if r < rows {
                mol.add_bond(at(r, c), at(r + 1, c), Bond::Single);
            }
        }
    }
    mol
}

/// The complete graph on `n` carbons. No molecule looks like this; nothing
/// stresses the path-graph threshold harder.
pub fn complete(n: usize) -> Molecule {
    let mut mol = Molecule::new();
    let a = carbons(&mut mol, n);
    for i in 0..n {
        for j in (i + 1)..n {
            mol.add_bond(a[i], a[j], Bond::Single);
        }
    }
    mol
}
