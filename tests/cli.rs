use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
    str::FromStr,
};

use alloy_primitives::U256;
use scribe_tck_vectors::{encode_points_file, flattened, vectors};

const GEN_POINTS_ABI: &str = env!("CARGO_BIN_EXE_gen_points_abi");
const ECC_REF: &str = env!("CARGO_BIN_EXE_ecc_ref");

fn repo_vectors() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test/vectors/points.json")
}

fn gen_points_abi(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(GEN_POINTS_ABI);
    cmd.current_dir(dir).args(args).env_remove("POINTS_VECTORS");
    cmd
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn copy_fixture(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::copy(repo_vectors(), &path).unwrap();
    path
}

#[test]
fn default_path_prints_one_line() {
    let output = gen_points_abi(Path::new(env!("CARGO_MANIFEST_DIR")), &[])
        .output()
        .unwrap();
    assert!(output.status.success());

    let expected = encode_points_file(repo_vectors()).unwrap();
    assert_eq!(stdout(&output), format!("{expected}\n"));
}

#[test]
fn positional_path_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = copy_fixture(dir.path(), "other.json");

    let output = gen_points_abi(dir.path(), &[path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{}\n", encode_points_file(&path).unwrap())
    );
}

#[test]
fn env_var_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = copy_fixture(dir.path(), "from_env.json");

    let output = gen_points_abi(dir.path(), &[])
        .env("POINTS_VECTORS", &path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{}\n", encode_points_file(&path).unwrap())
    );
}

#[test]
fn missing_default_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = gen_points_abi(dir.path(), &[]).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn bad_point_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"vectors": [{"P": "02", "Q": "02"}]}"#).unwrap();

    let output = gen_points_abi(dir.path(), &[path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn yaml_format() {
    let output = gen_points_abi(
        Path::new(env!("CARGO_MANIFEST_DIR")),
        &["--format", "yaml"],
    )
    .output()
    .unwrap();
    assert!(output.status.success());

    let doc: serde_yaml::Value = serde_yaml::from_str(stdout(&output)).unwrap();
    let cases = doc["test_vectors"].as_sequence().unwrap();
    let file = vectors::load(repo_vectors()).unwrap();
    assert_eq!(cases.len(), file.vectors.len());
    assert_eq!(doc["algorithm"].as_str(), Some("secp256k1"));
    assert_eq!(cases.last().unwrap()["asserts_sum"].as_bool(), Some(false));
}

#[test]
fn debug_prints_decimal_words() {
    let output = gen_points_abi(Path::new(env!("CARGO_MANIFEST_DIR")), &["--debug"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let words: Vec<U256> = stdout(&output)
        .lines()
        .map(|line| U256::from_str(line).unwrap())
        .collect();
    let expected = flattened(&vectors::load(repo_vectors()).unwrap()).unwrap();
    assert_eq!(words, expected);
}

#[test]
fn debug_conflicts_with_format() {
    let output = gen_points_abi(
        Path::new(env!("CARGO_MANIFEST_DIR")),
        &["--debug", "--format", "abi"],
    )
    .output()
    .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn ecc_ref_scalar_multiplication() {
    let output = Command::new(ECC_REF)
        .args(["secp256k1", "scalarMultiplication", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5\
         1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a\n"
    );
}

#[test]
fn ecc_ref_rejects_odd_coordinates() {
    let output = Command::new(ECC_REF)
        .args(["secp256k1", "pointAddition", "1", "2", "3"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
