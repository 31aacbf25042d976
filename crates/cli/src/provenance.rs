use serde_json::{json, Value};
use std::process::Command;

/// Provenance block: crate versions and the git commit the binary was built from.
pub fn report_doc() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "cli_version": env!("CARGO_PKG_VERSION"),
        "geomath_version": geomath::VERSION,
        "float_eps": geomath::cfg::EPS,
    })
}

/// Commit the binary reports: `GIT_COMMIT` at run time, then at build time,
/// then `git rev-parse HEAD`; `"unknown"` outside a checkout.
pub fn current_git_rev() -> String {
    let runtime = std::env::var("GIT_COMMIT").ok();
    let build_time = option_env!("GIT_COMMIT").map(str::to_owned);
    runtime
        .into_iter()
        .chain(build_time)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}
