//! In-memory gallery of saved circles with a JSON snapshot on disk.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::model::CircleConfig;
use crate::foundation::error::{CircleError, CircleResult};

pub const DEFAULT_CIRCLE_NAME: &str = "Unnamed Circle";

/// One saved circle: the configuration that produced it plus its encoded image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleRecord {
    pub id: u64,
    pub name: String,
    pub config: CircleConfig,
    /// PNG bytes as rendered when the record was saved; may be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_png: Vec<u8>,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

/// Saved circles keyed by id. Ids are never reused within one gallery.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemGallery {
    next_id: u64,
    circles: BTreeMap<u64, CircleRecord>,
}

impl MemGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `config` and store a new record. Blank names become [`DEFAULT_CIRCLE_NAME`].
    pub fn save(
        &mut self,
        name: Option<&str>,
        config: CircleConfig,
        image_png: Vec<u8>,
        created_at_ms: u64,
    ) -> CircleResult<&CircleRecord> {
        config.validate()?;
        self.next_id += 1;
        let id = self.next_id;
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_CIRCLE_NAME)
            .to_string();
        tracing::debug!(id, %name, "saved circle");
        let record = CircleRecord {
            id,
            name,
            config,
            image_png,
            created_at_ms,
        };
        Ok(self.circles.entry(id).or_insert(record))
    }

    /// Every record, newest first. Records saved in the same millisecond keep save order reversed.
    pub fn all(&self) -> Vec<&CircleRecord> {
        let mut out: Vec<&CircleRecord> = self.circles.values().collect();
        out.sort_by(|a, b| {
            b.created_at_ms
                .cmp(&a.created_at_ms)
                .then_with(|| b.id.cmp(&a.id))
        });
        out
    }

    pub fn get(&self, id: u64) -> Option<&CircleRecord> {
        self.circles.get(&id)
    }

    /// Remove a record; `false` if it did not exist.
    pub fn delete(&mut self, id: u64) -> bool {
        self.circles.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.circles.clear();
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Read a snapshot written by [`MemGallery::save_to`]. A missing file is an empty gallery.
    pub fn load(path: impl AsRef<Path>) -> CircleResult<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => {
                return Err(CircleError::Other(anyhow::anyhow!(
                    "failed to read gallery '{}': {e}",
                    path.display()
                )));
            }
        };
        let gallery: Self = serde_json::from_str(&text)
            .map_err(|e| CircleError::serde(format!("gallery '{}': {e}", path.display())))?;
        Ok(gallery.repaired())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> CircleResult<()> {
        let path = path.as_ref();
        let text =
            serde_json::to_string_pretty(self).map_err(|e| CircleError::serde(e.to_string()))?;
        std::fs::write(path, text).map_err(|e| {
            CircleError::Other(anyhow::anyhow!(
                "failed to write gallery '{}': {e}",
                path.display()
            ))
        })
    }

    // Hand-edited snapshots may carry a stale counter.
    fn repaired(mut self) -> Self {
        let max_id = self.circles.keys().next_back().copied().unwrap_or(0);
        self.next_id = self.next_id.max(max_id);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/store.rs"]
mod tests;
