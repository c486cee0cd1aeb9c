// Molecule definition, graph queries
pub mod molecule;

// Rings and ring sets
pub mod ring;

// Ordered vertex walks for path fusion
pub mod path;

// Disposable working copies of the graph
mod graph;

// Cyclic-subgraph reduction, ring-system splitting
pub mod spanning;

// The hard bit: exhaustive ring enumeration
pub mod hanser;

// Legacy smallest-set-of-smallest-rings finder
pub mod figueras;

// Grouping rings into connected ring systems
pub mod partition;

// Programmatic molecule fixtures
pub mod templates;

// Error taxonomy
pub mod error;
