/// Build metadata captured by `build.rs`
#[derive(Debug, Clone, Copy)]
pub struct Version {
    build_profile: &'static str,
    version: &'static str,
}

impl Version {
    pub fn new() -> Self {
        Self {
            build_profile: env!("BUILD_PROFILE"),
            version: env!("REPO_VERSION"),
        }
    }

    pub fn build_profile(&self) -> &str {
        self.build_profile
    }

    pub fn version(&self) -> &str {
        self.version
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new()
    }
}

pub fn report_version() {
    let version = Version::new();

    tracing::debug!(
        build_profile = ?version.build_profile(),
        version = ?version.version(),
        "calc starting up"
    );
}
