//! Graph-theoretic representation of a molecule.
//!
//! A [`Molecule`] is an undirected [`petgraph`] graph with [`Atom`]s as
//! nodes and [`Bond`]s as edges. Node and edge indices are stable for the
//! lifetime of the molecule and are the identities every ring-perception
//! algorithm in this crate works with: paths, rings and ring systems are
//! all sets or sequences of these integer indices.

use std::{collections::HashSet, fmt::Display, str::FromStr};

use petgraph::{
    graph::{EdgeIndex, Graph, NodeIndex},
    Undirected,
};

pub(crate) type Index = u32;
pub(crate) type MGraph = Graph<Atom, Bond, Undirected, Index>;

/// Thrown by [`Element::from_str`] if the string is not a known element
/// symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseElementError;

macro_rules! periodic_table {
    ( $(($element:ident, $number:literal, $symbol:literal),)* ) => {
        /// A chemical element, identified by atomic number.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Element {
            $( $element, )*
        }

        impl Element {
            /// The element's atomic number.
            pub fn atomic_number(&self) -> u8 {
                match self {
                    $( Element::$element => $number, )*
                }
            }

            /// The element's symbol as written in chemical formulae.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $( Element::$element => $symbol, )*
                }
            }
        }

        impl Display for Element {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }

        impl FromStr for Element {
            type Err = ParseElementError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $symbol => Ok(Element::$element), )*
                    _ => Err(ParseElementError),
                }
            }
        }
    };
}

periodic_table!(
    (Hydrogen, 1, "H"),
    (Helium, 2, "He"),
    (Lithium, 3, "Li"),
    (Beryllium, 4, "Be"),
    (Boron, 5, "B"),
    (Carbon, 6, "C"),
    (Nitrogen, 7, "N"),
    (Oxygen, 8, "O"),
    (Fluorine, 9, "F"),
    (Neon, 10, "Ne"),
    (Sodium, 11, "Na"),
    (Magnesium, 12, "Mg"),
    (Aluminum, 13, "Al"),
    (Silicon, 14, "Si"),
    (Phosphorus, 15, "P"),
    (Sulfur, 16, "S"),
    (Chlorine, 17, "Cl"),
    (Argon, 18, "Ar"),
    (Potassium, 19, "K"),
    (Calcium, 20, "Ca"),
    (Scandium, 21, "Sc"),
    (Titanium, 22, "Ti"),
    (Vanadium, 23, "V"),
    (Chromium, 24, "Cr"),
    (Manganese, 25, "Mn"),
    (Iron, 26, "Fe"),
    (Cobalt, 27, "Co"),
    (Nickel, 28, "Ni"),
    (Copper, 29, "Cu"),
    (Zinc, 30, "Zn"),
    (Gallium, 31, "Ga"),
    (Germanium, 32, "Ge"),
    (Arsenic, 33, "As"),
    (Selenium, 34, "Se"),
    (Bromine, 35, "Br"),
    (Krypton, 36, "Kr"),
    (Rubidium, 37, "Rb"),
    (Strontium, 38, "Sr"),
    (Yttrium, 39, "Y"),
    (Zirconium, 40, "Zr"),
    (Niobium, 41, "Nb"),
    (Molybdenum, 42, "Mo"),
    (Technetium, 43, "Tc"),
    (Ruthenium, 44, "Ru"),
    (Rhodium, 45, "Rh"),
    (Palladium, 46, "Pd"),
    (Silver, 47, "Ag"),
    (Cadmium, 48, "Cd"),
    (Indium, 49, "In"),
    (Tin, 50, "Sn"),
    (Antimony, 51, "Sb"),
    (Tellurium, 52, "Te"),
    (Iodine, 53, "I"),
    (Xenon, 54, "Xe"),
    (Cesium, 55, "Cs"),
    (Barium, 56, "Ba"),
    (Lanthanum, 57, "La"),
    (Cerium, 58, "Ce"),
    (Praseodymium, 59, "Pr"),
    (Neodymium, 60, "Nd"),
    (Promethium, 61, "Pm"),
    (Samarium, 62, "Sm"),
    (Europium, 63, "Eu"),
    (Gadolinium, 64, "Gd"),
    (Terbium, 65, "Tb"),
    (Dysprosium, 66, "Dy"),
    (Holmium, 67, "Ho"),
    (Erbium, 68, "Er"),
    (Thulium, 69, "Tm"),
    (Ytterbium, 70, "Yb"),
    (Lutetium, 71, "Lu"),
    (Hafnium, 72, "Hf"),
    (Tantalum, 73, "Ta"),
    (Wolfram, 74, "W"),
    (Rhenium, 75, "Re"),
    (Osmium, 76, "Os"),
    (Iridium, 77, "Ir"),
    (Platinum, 78, "Pt"),
    (Gold, 79, "Au"),
    (Mercury, 80, "Hg"),
    (Thallium, 81, "Tl"),
    (Lead, 82, "Pb"),
    (Bismuth, 83, "Bi"),
    (Polonium, 84, "Po"),
    (Astatine, 85, "At"),
    (Radon, 86, "Rn"),
    (Francium, 87, "Fr"),
    (Radium, 88, "Ra"),
    (Actinium, 89, "Ac"),
    (Thorium, 90, "Th"),
    (Protactinium, 91, "Pa"),
    (Uranium, 92, "U"),
    (Neptunium, 93, "Np"),
    (Plutonium, 94, "Pu"),
    (Americium, 95, "Am"),
    (Curium, 96, "Cm"),
    (Berkelium, 97, "Bk"),
    (Californium, 98, "Cf"),
    (Einsteinium, 99, "Es"),
    (Fermium, 100, "Fm"),
    (Mendelevium, 101, "Md"),
    (Nobelium, 102, "No"),
    (Lawrencium, 103, "Lr"),
    (Rutherfordium, 104, "Rf"),
    (Dubnium, 105, "Db"),
    (Seaborgium, 106, "Sg"),
    (Bohrium, 107, "Bh"),
    (Hassium, 108, "Hs"),
    (Meitnerium, 109, "Mt"),
    (Darmstadtium, 110, "Ds"),
    (Roentgenium, 111, "Rg"),
    (Copernicium, 112, "Cn"),
    (Nihonium, 113, "Nh"),
    (Flerovium, 114, "Fl"),
    (Moscovium, 115, "Mc"),
    (Livermorium, 116, "Lv"),
    (Tennessine, 117, "Ts"),
    (Oganesson, 118, "Og"),
);

/// The nodes of a [`Molecule`] graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    element: Element,
}

impl Atom {
    /// Construct an [`Atom`] of type `element`.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Return this [`Atom`]'s element.
    pub fn element(&self) -> Element {
        self.element
    }
}

/// The edges of a [`Molecule`] graph.
///
/// Aromatic rings are represented by alternating single and double bonds
/// rather than a dedicated aromatic bond type; ring perception treats all
/// bond orders alike.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bond {
    Single,
    Double,
    Triple,
}

/// A simple, loopless graph with [`Atom`]s as nodes and [`Bond`]s as edges.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    graph: MGraph,
}

impl Molecule {
    /// An empty molecule.
    pub fn new() -> Self {
        Self {
            graph: MGraph::default(),
        }
    }

    /// Add an atom, returning its stable index.
    pub fn add_atom(&mut self, atom: Atom) -> NodeIndex {
        self.graph.add_node(atom)
    }

    /// Add a bond between two atoms, returning its stable index.
    pub fn add_bond(&mut self, u: NodeIndex, v: NodeIndex, bond: Bond) -> EdgeIndex {
        self.graph.add_edge(u, v, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all atom indices.
    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Iterate over all bond indices.
    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    /// Iterate over the atoms bonded to `v`.
    pub fn neighbors(&self, v: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(v)
    }

    /// The number of bonds incident to `v`.
    pub fn degree_of(&self, v: NodeIndex) -> usize {
        self.graph.neighbors(v).count()
    }

    /// The bond joining `u` and `v`, if there is one.
    pub fn bond_between(&self, u: NodeIndex, v: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(u, v)
    }

    /// The two atoms a bond joins.
    pub fn bond_endpoints(&self, e: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(e)
    }

    pub fn atom(&self, v: NodeIndex) -> Option<&Atom> {
        self.graph.node_weight(v)
    }

    pub fn bond(&self, e: EdgeIndex) -> Option<&Bond> {
        self.graph.edge_weight(e)
    }

    /// Return `true` iff this molecule contains self-loops or multiple
    /// bonds between any pair of atoms. Such graphs violate the structural
    /// contract of every finder in this crate.
    pub fn is_malformed(&self) -> bool {
        let mut seen = HashSet::new();
        !self.graph.edge_indices().all(|ix| {
            self.graph.edge_endpoints(ix).is_some_and(|(src, dst)| {
                let key = if src <= dst { (src, dst) } else { (dst, src) };
                src != dst && seen.insert(key)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_to_string() {
        assert!(Element::Hydrogen.to_string() == "H")
    }

    #[test]
    fn element_from_string() {
        assert!(str::parse("H") == Ok(Element::Hydrogen));
        assert!(str::parse::<Element>("Foo").is_err());
    }

    #[test]
    fn atomic_numbers() {
        assert_eq!(Element::Carbon.atomic_number(), 6);
        assert_eq!(Element::Oganesson.atomic_number(), 118);
    }

    #[test]
    fn malformed_detects_parallel_bond() {
        let mut m = Molecule::new();
        let u = m.add_atom(Atom::new(Element::Carbon));
        let v = m.add_atom(Atom::new(Element::Carbon));
        m.add_bond(u, v, Bond::Single);
        assert!(!m.is_malformed());
        m.add_bond(v, u, Bond::Single);
        assert!(m.is_malformed());
    }

    #[test]
    fn malformed_detects_self_loop() {
        let mut m = Molecule::new();
        let u = m.add_atom(Atom::new(Element::Carbon));
        m.add_bond(u, u, Bond::Single);
        assert!(m.is_malformed());
    }
}
