// Encode the points.json test cases as an ABI encoded uint[] for the Solidity tests
// Run: cargo run --release --bin gen_points_abi
//
// Prints a single line. The elements should be read sequentially: the x
// coordinate of P, the y coordinate of P, then Q, then expected, then the
// next test case. One test case asserts P + Q = expected; a case without
// `expected` uses Q in its place and asserts nothing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr};
use scribe_tck_vectors::{
    abi, flatten, logging::setup_tracing_with_log_level, report, vectors, DEFAULT_VECTORS_PATH,
};
use tracing::{info, Level};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// ABI encoded uint[] as 0x prefixed hex
    Abi,
    /// Affine coordinates as a YAML document
    Yaml,
}

#[derive(Parser)]
#[command(about = "Encode secp256k1 point vectors for the Solidity tests")]
struct Args {
    /// Vector file to read
    #[arg(env = "POINTS_VECTORS", default_value = DEFAULT_VECTORS_PATH)]
    vectors: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Abi)]
    format: Format,

    /// Print the flattened coordinates in decimal, one per line
    #[arg(long, conflicts_with = "format")]
    debug: bool,
}

fn main() -> Result<()> {
    setup_tracing_with_log_level(Level::WARN);
    let args = Args::parse();

    let file = vectors::load(&args.vectors)
        .wrap_err_with(|| format!("loading {}", args.vectors.display()))?;
    let cases = scribe_tck_vectors::normalize(&file).wrap_err("decoding points")?;

    let out = if args.debug {
        flatten::flatten(&cases)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        match args.format {
            Format::Abi => abi::to_hex(&abi::encode_uint_array(&flatten::flatten(&cases))),
            Format::Yaml => report::to_yaml(&cases)?,
        }
    };
    info!(cases = cases.len(), "encoded point vectors");

    println!("{out}");
    Ok(())
}
