use std::process::Command;

const SHORT_HASH_LEN: usize = 12;

fn main() {
    println!("cargo::rerun-if-changed=../../.git/HEAD");
    println!("cargo::rerun-if-changed=../../.git/refs/heads/");
    println!("cargo::rerun-if-env-changed=ZYNTRO_COMMIT_HASH");

    let commit_hash = std::env::var("ZYNTRO_COMMIT_HASH")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(git_head)
        .map(|hash| hash.chars().take(SHORT_HASH_LEN).collect::<String>())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo::rustc-env=ZYNTRO_COMMIT_HASH={}", commit_hash);
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
