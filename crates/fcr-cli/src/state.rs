//! Loading and saving the JSON state file.
//!
//! The state file is a JSON array of objects, each carrying `apiVersion`
//! and `kind`. A missing file is an empty store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use fcr_store::InMemoryClient;

use crate::error::CliError;

pub fn load(path: &Path) -> Result<InMemoryClient, CliError> {
    let client = InMemoryClient::new(fcr_api::scheme()?);
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no state file, starting empty");
            return Ok(client);
        }
        Err(source) => {
            return Err(CliError::ReadState {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let objects: Vec<Value> =
        serde_json::from_str(&text).map_err(|source| CliError::ParseState {
            path: path.to_path_buf(),
            source,
        })?;
    let count = objects.len();
    for object in objects {
        client.seed(object)?;
    }
    debug!(path = %path.display(), count, "loaded state");
    Ok(client)
}

/// Writes the snapshot to a temporary file next to `path`, then renames it
/// over `path`.
pub fn save(path: &Path, client: &InMemoryClient) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(&client.snapshot())?;
    let write_err = |source: std::io::Error| CliError::WriteState {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    debug!(path = %path.display(), count = client.len(), "saved state");
    Ok(())
}
