//! Binary snapshots of a `HeteroGraph` for fast reloading.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{HeteroError, Result};
use crate::store::HeteroGraph;

/// Bumped whenever the graph encoding changes.
///
/// A snapshot is the bincode `u32` version followed by the bincode graph, so
/// the version can be read without knowing the body layout.
pub const SNAPSHOT_VERSION: u32 = 1;

impl HeteroGraph {
    /// Write a bincode snapshot to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &SNAPSHOT_VERSION)?;
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), "Saved graph snapshot");
        Ok(())
    }

    /// Read a snapshot written by [`HeteroGraph::save`].
    ///
    /// The body is only decoded when the version matches.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let version: u32 = bincode::deserialize_from(&mut reader)?;
        if version != SNAPSHOT_VERSION {
            return Err(HeteroError::SnapshotVersion(version));
        }
        Ok(bincode::deserialize_from(&mut reader)?)
    }
}
