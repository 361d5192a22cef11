// Reference secp256k1 and Schnorr operations for the Solidity tests
// Run: cargo run --release --bin ecc_ref -- secp256k1 scalarMultiplication <scalar> [--debug]
//      cargo run --release --bin ecc_ref -- secp256k1 pointAddition <x1> <y1> <x2> <y2> ... [--debug]
//      cargo run --release --bin ecc_ref -- schnorr sign <private key> <message hash>

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use num_bigint::BigUint;
use scribe_tck_vectors::{
    logging::setup_tracing_with_log_level,
    point::scalar_base_mul,
    reference::{point_addition, schnorr_sign},
    Affine,
};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "scribe-ecc-ref", about = "Scribe elliptic curve reference implementation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Elliptic curve operations on secp256k1
    Secp256k1 {
        #[command(subcommand)]
        op: Secp256k1Op,
    },
    /// Schnorr signature operations
    Schnorr {
        #[command(subcommand)]
        op: SchnorrOp,
    },
}

#[derive(Subcommand)]
enum Secp256k1Op {
    /// Compute [scalar]G
    #[command(name = "scalarMultiplication", alias = "scalar-multiplication")]
    ScalarMultiplication {
        /// Scalar in base 10, reduced modulo the group order
        scalar: BigUint,

        /// Print coordinates in decimal
        #[arg(long)]
        debug: bool,
    },
    /// Sum a list of points given as x, y pairs
    #[command(name = "pointAddition", alias = "point-addition")]
    PointAddition {
        /// Coordinates in base 10; (0, 0) is the point at infinity
        #[arg(required = true)]
        coordinates: Vec<BigUint>,

        /// Print coordinates in decimal
        #[arg(long)]
        debug: bool,
    },
}

#[derive(Subcommand)]
enum SchnorrOp {
    /// BIP-340 sign a message hash
    Sign {
        /// Private key in base 10
        private_key: BigUint,
        /// Message hash in base 16
        message_hash: String,
    },
}

/// Without `debug` the coordinates are two concatenated 64 digit hex words,
/// which Solidity decodes as `uint[2]`.
fn format_point(point: &Affine, debug: bool) -> String {
    if debug {
        format!("x: {}\ny: {}", point.x, point.y)
    } else {
        let (x, y) = point.to_be_words();
        format!("{}{}", hex::encode(x), hex::encode(y))
    }
}

fn run(command: Command) -> Result<String> {
    let out = match command {
        Command::Secp256k1 {
            op: Secp256k1Op::ScalarMultiplication { scalar, debug },
        } => {
            debug!(%scalar, "scalar multiplication");
            format_point(&scalar_base_mul(&scalar), debug)
        }
        Command::Secp256k1 {
            op: Secp256k1Op::PointAddition { coordinates, debug },
        } => {
            debug!(points = coordinates.len() / 2, "point addition");
            let sum = point_addition(&coordinates).wrap_err("point addition")?;
            format_point(&sum, debug)
        }
        Command::Schnorr {
            op: SchnorrOp::Sign {
                private_key,
                message_hash,
            },
        } => {
            let signature = schnorr_sign(&private_key, &message_hash).wrap_err("schnorr sign")?;
            hex::encode(signature)
        }
    };
    Ok(out)
}

fn main() -> Result<()> {
    setup_tracing_with_log_level(Level::WARN);
    println!("{}", run(Cli::parse().command)?);
    Ok(())
}
