//! The version command.

/// Build-time identification, printed by the version command.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    /// Collect identification from the build environment.
    ///
    /// The commit and date come from the GIT_COMMIT and BUILD_DATE
    /// compile-time variables when the build sets them.
    pub fn from_build_env() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("GIT_COMMIT").unwrap_or("none"),
            build_date: option_env!("BUILD_DATE").unwrap_or("unknown"),
        }
    }
}

pub(super) fn execute(info: &BuildInfo) {
    println!("MCP Server");
    println!("  Version:    {}", info.version);
    println!("  Commit:     {}", info.commit);
    println!("  Build Date: {}", info.build_date);
}
