//! Calculation storage API.
//!
//! One pretty-printed JSON document per calculation, named after its id.

use crate::types::{CalculationId, SavedCalculation};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Clone, Debug)]
pub struct CalculationStore {
    root_dir: PathBuf,
}

impl CalculationStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        if !root_dir.is_dir() {
            return Err(ResultsError::InvalidPath {
                message: format!("{} is not a directory", root_dir.display()),
            });
        }
        Ok(Self { root_dir })
    }

    /// Store kept next to a request file, in `.heatbed/calculations`.
    pub fn for_request_file(request_path: &Path) -> ResultsResult<Self> {
        let dir = request_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "request path has no parent directory".to_string(),
            })?;
        Self::new(dir.join(".heatbed").join("calculations"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn record_path(&self, id: &CalculationId) -> PathBuf {
        self.root_dir.join(format!("{id}.json"))
    }

    pub fn contains(&self, id: &CalculationId) -> bool {
        self.record_path(id).exists()
    }

    /// Write a calculation, replacing any record with the same id.
    pub fn save(&self, calculation: &SavedCalculation) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(calculation)?;
        fs::write(self.record_path(&calculation.id), json)?;
        Ok(())
    }

    pub fn get(&self, id: &CalculationId) -> ResultsResult<Option<SavedCalculation>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn load(&self, id: &CalculationId) -> ResultsResult<SavedCalculation> {
        self.get(id)?
            .ok_or(ResultsError::CalculationNotFound { id: *id })
    }

    /// All stored calculations, newest first.
    ///
    /// Files that do not parse as a calculation are skipped.
    pub fn list(&self) -> ResultsResult<Vec<SavedCalculation>> {
        let mut calculations = Vec::new();

        if !self.root_dir.exists() {
            return Ok(calculations);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let parsed = fs::read_to_string(&path)
                .map_err(ResultsError::from)
                .and_then(|c| serde_json::from_str::<SavedCalculation>(&c).map_err(Into::into));
            match parsed {
                Ok(calculation) => calculations.push(calculation),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }

        calculations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(calculations)
    }

    /// Remove a calculation. Returns whether a record was present.
    pub fn delete(&self, id: &CalculationId) -> ResultsResult<bool> {
        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
