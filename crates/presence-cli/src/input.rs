//! Reading JSON documents from a file or stdin

use std::io::Read;
use std::path::{Path, PathBuf};

use presence_common::{AppError, AppResult};
use tracing::debug;

/// Where a document comes from: a path, or stdin for `None` and `-`
#[derive(Debug, Clone, Default)]
pub struct InputSource(Option<PathBuf>);

impl InputSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self(path.filter(|p| p.as_os_str() != "-"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.0.as_deref()
    }

    pub fn is_stdin(&self) -> bool {
        self.0.is_none()
    }

    /// Read and parse the document; `stdin` is only touched for the stdin source
    pub fn read_json(&self, stdin: &mut dyn Read) -> AppResult<serde_json::Value> {
        let text = match self.path() {
            Some(path) => {
                debug!(path = %path.display(), "Reading input file");
                std::fs::read_to_string(path)?
            }
            None => {
                debug!("Reading input from stdin");
                let mut buf = String::new();
                stdin.read_to_string(&mut buf)?;
                buf
            }
        };

        serde_json::from_str(&text).map_err(|e| AppError::invalid_input(format!("not valid JSON: {e}")))
    }
}
