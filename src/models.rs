use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

/// Configuration label applied to every extracted dependency.
///
/// The declaring call's name (`implementation`, `api`, `testImplementation`,
/// ...) is matched structurally but never copied into the record.
pub const DEFAULT_SCOPE: &str = "implementation";

/// One declared external-library coordinate, as written in a `dependencies`
/// block. Fields absent from the declaration stay `None` rather than being
/// guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradleDependency {
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub scope: String,
}

impl GradleDependency {
    pub fn new(group: Option<String>, name: Option<String>, version: Option<String>) -> Self {
        GradleDependency {
            group,
            name,
            version,
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Flatten to the downstream inventory shape (`group:name` + version).
    pub fn to_inventory(&self) -> InventoryDependency {
        InventoryDependency {
            name: format!(
                "{}:{}",
                self.group.as_deref().unwrap_or(""),
                self.name.as_deref().unwrap_or("")
            ),
            version: self.version.clone(),
            provider: "gradle".to_string(),
        }
    }
}

/// Project-level coordinates collected from attribute accesses.
///
/// Identity is defined by `(group, name)` only — two ids that differ just in
/// `version` compare equal.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectId {
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl PartialEq for ProjectId {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.name == other.name
    }
}

impl Eq for ProjectId {}

impl std::hash::Hash for ProjectId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.name.hash(state);
    }
}

/// Per-file extraction result: one per successfully parsed, non-blank build
/// script. Never mutated after assembly.
#[derive(Debug, Clone, Serialize)]
pub struct GradleProject {
    pub id: ProjectId,
    #[serde(serialize_with = "serialize_path")]
    pub path: PathBuf,
    pub dependencies: Vec<GradleDependency>,
}

fn serialize_path<S>(path: &PathBuf, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&path.display().to_string())
}

/// Flat dependency view for inventory tooling (`il-deps.json`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InventoryDependency {
    pub name: String,
    pub version: Option<String>,
    pub provider: String,
}

/// Collect the distinct flat dependencies across all projects, first
/// occurrence first.
pub fn inventory_view(projects: &[GradleProject]) -> Vec<InventoryDependency> {
    let mut seen: HashSet<InventoryDependency> = HashSet::new();
    let mut out = Vec::new();

    for project in projects {
        for dep in &project.dependencies {
            let flat = dep.to_inventory();
            if seen.insert(flat.clone()) {
                out.push(flat);
            }
        }
    }

    out
}
