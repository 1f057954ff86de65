//! Request file loading and saving.

use std::path::Path;

use hx_engine::CalculationRequest;

use crate::error::{AppError, AppResult};

/// On-disk encoding of a request file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Yaml,
    Json,
}

impl RequestFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a request from YAML or JSON. Missing fields take their defaults.
pub fn load_request(path: &Path) -> AppResult<CalculationRequest> {
    let format = RequestFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::RequestFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let request = match format {
        RequestFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Serialization(format!("Failed to parse request YAML: {}", e)))?,
        RequestFormat::Json => serde_json::from_str(&content)
            .map_err(|e| AppError::Serialization(format!("Failed to parse request JSON: {}", e)))?,
    };

    Ok(request)
}

pub fn save_request(path: &Path, request: &CalculationRequest) -> AppResult<()> {
    let content = match RequestFormat::from_path(path)? {
        RequestFormat::Yaml => serde_yaml::to_string(request)
            .map_err(|e| AppError::Serialization(format!("Failed to serialize request: {}", e)))?,
        RequestFormat::Json => serde_json::to_string_pretty(request)
            .map_err(|e| AppError::Serialization(format!("Failed to serialize request: {}", e)))?,
    };

    std::fs::write(path, content).map_err(|e| AppError::RequestFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            RequestFormat::from_path(Path::new("bed.yaml")).unwrap(),
            RequestFormat::Yaml
        );
        assert_eq!(
            RequestFormat::from_path(Path::new("bed.YML")).unwrap(),
            RequestFormat::Yaml
        );
        assert_eq!(
            RequestFormat::from_path(Path::new("bed.json")).unwrap(),
            RequestFormat::Json
        );
        assert!(matches!(
            RequestFormat::from_path(Path::new("bed.toml")),
            Err(AppError::UnsupportedFormat { .. })
        ));
        assert!(RequestFormat::from_path(Path::new("bed")).is_err());
    }
}
