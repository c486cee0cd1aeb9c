use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};

use ringsearch::{
    figueras::SssrFinder,
    hanser::{AllRingsFinder, Threshold},
    molecule::{Atom, Bond, Element, Molecule},
    partition, templates,
};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Finder {
    /// Every ring, by path fusion.
    All,
    /// A smallest set of smallest rings, by the legacy trimming algorithm.
    Sssr,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Fixture {
    Benzene,
    Naphthalene,
    Anthracene,
    Azulene,
    Biphenyl,
    Spiro,
    Norbornane,
    Cubane,
    EthylCyclopentane,
    Grid5x10,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Built-in molecule to search.
    #[arg(long, value_enum, conflicts_with = "edges")]
    fixture: Option<Fixture>,

    /// Explicit bond list over implicit carbons, e.g. "0-1,1-2,2-0".
    #[arg(long)]
    edges: Option<String>,

    #[arg(short, long, value_enum, default_value = "all")]
    finder: Finder,

    /// Discard rings with more atoms than this.
    #[arg(long)]
    max_ring_size: Option<usize>,

    /// Path-graph growth bound for the exhaustive finder.
    #[arg(long, value_enum, default_value = "pub-chem99")]
    threshold: Threshold,

    /// Also report the connected ring systems of the result.
    #[arg(long)]
    partition: bool,
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;
    let cli = Cli::parse();

    let molecule = match (cli.fixture, &cli.edges) {
        (Some(fixture), _) => build_fixture(fixture),
        (None, Some(list)) => parse_edges(list)?,
        (None, None) => bail!("one of --fixture or --edges is required"),
    };

    let rings = match cli.finder {
        Finder::All => AllRingsFinder::using_threshold(cli.threshold)
            .find_all_rings_bounded(&molecule, cli.max_ring_size)
            .context("exhaustive ring search failed")?,
        Finder::Sssr => SssrFinder::new()
            .find_sssr(&molecule)
            .context("sssr search failed")?,
    };

    let mut sizes: Vec<usize> = rings.iter().map(|r| r.len()).collect();
    sizes.sort_unstable();
    println!("{} rings {sizes:?}", rings.len());

    if cli.partition {
        for (i, system) in partition::partition_rings(&rings).iter().enumerate() {
            let mut sizes: Vec<usize> = system.iter().map(|r| r.len()).collect();
            sizes.sort_unstable();
            println!("system {i}: {} rings {sizes:?}", system.len());
        }
    }
    Ok(())
}

fn build_fixture(fixture: Fixture) -> Molecule {
    match fixture {
        Fixture::Benzene => templates::benzene(),
        Fixture::Naphthalene => templates::naphthalene(),
        Fixture::Anthracene => templates::anthracene(),
        Fixture::Azulene => templates::azulene(),
        Fixture::Biphenyl => templates::biphenyl(),
        Fixture::Spiro => templates::spiro_4_4(),
        Fixture::Norbornane => templates::norbornane(),
        Fixture::Cubane => templates::cubane(),
        Fixture::EthylCyclopentane => templates::ethyl_cyclopentane(),
        Fixture::Grid5x10 => templates::square_grid(5, 10),
    }
}

fn parse_edges(list: &str) -> Result<Molecule> {
    let mut pairs = Vec::new();
    let mut max_index = 0usize;
    for part in list.split(',') {
        let (u, v) = part
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("bad edge `{part}`, expected `u-v`"))?;
        let u: usize = u.parse().with_context(|| format!("bad vertex in `{part}`"))?;
        let v: usize = v.parse().with_context(|| format!("bad vertex in `{part}`"))?;
        max_index = max_index.max(u).max(v);
        pairs.push((u, v));
    }

    let mut mol = Molecule::new();
    let atoms: Vec<_> = (0..=max_index)
        .map(|_| mol.add_atom(Atom::new(Element::Carbon)))
        .collect();
    for (u, v) in pairs {
        mol.add_bond(atoms[u], atoms[v], Bond::Single);
    }
    Ok(mol)
}
