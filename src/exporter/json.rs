// file: src/exporter/json.rs
// description: json export of normalized listings with a run manifest

use crate::error::{LensError, Result};
use crate::models::NormalizedListing;
use crate::pipeline::{BatchItem, EXPORT_SUFFIX, MANIFEST_FILE};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportedListing<'a> {
    pub source: String,
    pub content_hash: String,
    #[serde(flatten)]
    pub listing: &'a NormalizedListing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_documents: usize,
    pub files: Vec<String>,
    pub average_score: f64,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| LensError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir, pretty })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `<relative stem>.normalized.json`, mirroring the source's
    /// location under `root` so equal stems in different folders don't clash.
    pub fn export_listing(
        &self,
        root: &Path,
        source: &Path,
        listing: &NormalizedListing,
    ) -> Result<String> {
        let relative = source.strip_prefix(root).unwrap_or(source);
        let stem = relative
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "listing".to_string());
        let relative_out = relative
            .parent()
            .unwrap_or(Path::new(""))
            .join(format!("{}{}", stem, EXPORT_SUFFIX));

        let target = self.output_dir.join(&relative_out);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let exported = ExportedListing {
            source: relative.to_string_lossy().replace('\\', "/"),
            content_hash: compute_hash(listing)?,
            listing,
        };

        self.write_json(&target, &exported)?;
        debug!("Exported {}", target.display());

        Ok(relative_out.to_string_lossy().replace('\\', "/"))
    }

    pub fn export_all(&self, root: &Path, items: &[BatchItem]) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let mut files = Vec::with_capacity(items.len());
        for item in items {
            files.push(self.export_listing(root, &item.path, &item.listing)?);
        }

        let average_score = if items.is_empty() {
            0.0
        } else {
            items.iter().map(|i| i.listing.score as f64).sum::<f64>() / items.len() as f64
        };

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_documents: files.len(),
            files,
            average_score,
        };

        self.write_json(&self.output_dir.join(MANIFEST_FILE), &manifest)?;

        info!(
            "Export complete: {} documents exported",
            manifest.total_documents
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let body = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        fs::write(path, body).map_err(|source| LensError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn compute_hash(listing: &NormalizedListing) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(listing)?);
    Ok(format!("{:x}", hasher.finalize()))
}
