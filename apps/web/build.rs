use std::process::Command;

/// Variables read with `option_env!` by the app configuration.
const CONFIG_VARS: [&str; 3] = ["ROSTER_API_BASE_URL", "ROSTER_STORAGE_KEY", "ROSTER_LOG_LEVEL"];

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let sha = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    let dirty = git(&["status", "--porcelain"]).is_some();
    let sha = if dirty && sha != "unknown" {
        format!("{sha}-dirty")
    } else {
        sha
    };

    println!("cargo:rustc-env=ROSTER_WEB_GIT_SHA={sha}");
}
