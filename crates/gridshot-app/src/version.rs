//! Build/version helpers.

/// Returns a combined version string: `pkg_version (git_hash)`.
///
/// The git hash is embedded at build time; when the build ran outside a git
/// checkout it is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}
