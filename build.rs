use std::process::Command;

fn main() {
    // Reported by GET /api/health
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", chrono::Utc::now().to_rfc3339());

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());

    if let Some(hash) = hash {
        println!("cargo:rustc-env=GIT_HASH={hash}");
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
}
