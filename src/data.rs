use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure at the document-fetch boundary. Either kind is terminal for the
/// render pass that triggered it: the caller logs it and shows the generic
/// fallback, never a partial result.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {name}: {source}")]
    Transport {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory holding the site's JSON documents. Documents are re-read on
/// every page load; there is no caching layer.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataDir { root: root.into() }
    }

    pub async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        let path = self.root.join(name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| LoadError::Transport {
                name: name.to_string(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            name: name.to_string(),
            source,
        })
    }
}
