use component_ws::prelude::*;
use std::path::{Path, PathBuf};

/// Mock RequestReader for testing
///
/// Serves a fixed document and remembers the paths it was asked for.
#[derive(Default, Clone)]
pub struct MockRequestReader {
    content: String,
    should_fail: bool,
    pub requested_paths: std::sync::Arc<std::sync::Mutex<Vec<PathBuf>>>,
}

#[allow(dead_code)]
impl MockRequestReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl RequestReader for MockRequestReader {
    fn read_request(&self, path: &Path) -> Result<String> {
        self.requested_paths
            .lock()
            .unwrap()
            .push(path.to_path_buf());

        if self.should_fail {
            anyhow::bail!("Mock request reader failure");
        }
        Ok(self.content.clone())
    }
}
