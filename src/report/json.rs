use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{inventory_view, GradleProject};

/// Per-project model export.
pub const MODEL_FILE: &str = "gradle-model.json";
/// Flat deduplicated inventory export.
pub const INVENTORY_FILE: &str = "il-deps.json";

/// Write both JSON exports into `out_dir`, creating it if needed.
///
/// Returns the paths written, model first.
pub fn write(projects: &[GradleProject], out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let model_path = out_dir.join(MODEL_FILE);
    let model = serde_json::to_string_pretty(projects)?;
    fs::write(&model_path, model)
        .with_context(|| format!("writing {}", model_path.display()))?;

    let inventory_path = out_dir.join(INVENTORY_FILE);
    let inventory = serde_json::to_string_pretty(&inventory_view(projects))?;
    fs::write(&inventory_path, inventory)
        .with_context(|| format!("writing {}", inventory_path.display()))?;

    Ok((model_path, inventory_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradleDependency, ProjectId};
    use tempfile::TempDir;

    fn sample_project() -> GradleProject {
        GradleProject {
            id: ProjectId {
                group: Some("org.example".into()),
                name: None,
                version: Some("1.0".into()),
            },
            path: PathBuf::from("module/build.gradle"),
            dependencies: vec![GradleDependency::new(
                Some("junit".into()),
                Some("junit".into()),
                Some("4.13.2".into()),
            )],
        }
    }

    #[test]
    fn test_write_creates_both_files() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("results");
        let (model, inventory) = write(&[sample_project()], &out).unwrap();
        assert!(model.exists());
        assert!(inventory.exists());
    }

    #[test]
    fn test_model_json_shape() {
        let tmp = TempDir::new().unwrap();
        let (model, _) = write(&[sample_project()], tmp.path()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(model).unwrap()).unwrap();

        assert_eq!(value[0]["id"]["group"], "org.example");
        assert_eq!(value[0]["id"]["name"], serde_json::Value::Null);
        assert_eq!(value[0]["path"], "module/build.gradle");
        assert_eq!(value[0]["dependencies"][0]["scope"], "implementation");
    }

    #[test]
    fn test_inventory_json_shape() {
        let tmp = TempDir::new().unwrap();
        let (_, inventory) = write(&[sample_project()], tmp.path()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(inventory).unwrap()).unwrap();

        assert_eq!(value[0]["name"], "junit:junit");
        assert_eq!(value[0]["version"], "4.13.2");
        assert_eq!(value[0]["provider"], "gradle");
    }
}
