use std::process::Command;

fn main() {
    let version = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| {
            let tag = String::from_utf8_lossy(&o.stdout).trim().to_string();
            (!tag.is_empty()).then(|| tag.strip_prefix('v').unwrap_or(&tag).to_string())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into());

    println!("cargo:rustc-env=GIT_VERSION={version}");
}
