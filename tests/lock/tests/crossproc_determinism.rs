//! Cross-process determinism: the `solve_fixture` binary must print identical
//! output under different environments. Each process seeds its `HashMap`s
//! differently, so this also checks that no search outcome depends on hash
//! iteration order.

use std::path::Path;
use std::process::Command;

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let scratch = tempfile::tempdir().unwrap();

    let baseline = run_variant(manifest_dir, &[]);
    assert!(baseline.contains("crossing.astar.manhattan: outcome=solved actions=5"));
    assert!(baseline.contains("corridor.bfts.manhattan: outcome=solved actions=3"));
    assert!(baseline.contains("digest=sha256:"));

    for (dir, overrides) in [
        (scratch.path(), &[][..]),
        (manifest_dir, &[("LC_ALL", "C")][..]),
        (scratch.path(), &[("LANG", "en_US.UTF-8"), ("RUST_LOG", "trace")][..]),
    ] {
        let other = run_variant(dir, overrides);
        assert_eq!(baseline, other, "output differs for overrides {overrides:?}");
    }
}
