//! Capture of live `runReport` bodies as offline test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes response bodies as `{endpoint}_{property}.json`, the naming the
/// offline tests load fixtures by.
#[derive(Debug, Clone)]
pub(crate) struct Recorder {
    dir: PathBuf,
}

impl Recorder {
    /// Active only when `GA_RECORD=1`; `GA_FIXDIR` overrides `tests/fixtures`.
    pub(crate) fn from_env() -> Option<Self> {
        if env::var("GA_RECORD").ok().as_deref() != Some("1") {
            return None;
        }
        let dir = env::var_os("GA_FIXDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"));
        Some(Self::in_dir(dir))
    }

    pub(crate) fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn fixture_path(&self, endpoint: &str, property: &str) -> PathBuf {
        self.dir.join(format!("{endpoint}_{property}.json"))
    }

    /// Stores `body`, replacing an earlier recording of the same report.
    pub(crate) fn record(&self, endpoint: &str, property: &str, body: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.fixture_path(endpoint, property);
        fs::write(&path, body)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "recorded fixture");

        Ok(path)
    }
}
