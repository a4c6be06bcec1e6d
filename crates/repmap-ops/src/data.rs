//! Static data on disk: the catalog documents and the per-state maps.

use std::path::{Path, PathBuf};

use repmap_core::{Catalog, StateInfo, DISTRICT_TO_REP_FILE, STATE_OPTIONS_FILE};
use tracing::{debug, info};

use crate::error::{OpsError, OpsResult};

fn read_data_file(dir: &Path, name: &str) -> OpsResult<String> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(OpsError::DataFileMissing { path });
    }
    Ok(std::fs::read_to_string(&path)?)
}

/// Load both catalog documents from `dir`. Either one missing or malformed
/// fails the whole load.
pub fn load_catalog(dir: &Path) -> OpsResult<Catalog> {
    let state_options = read_data_file(dir, STATE_OPTIONS_FILE)?;
    let district_to_rep = read_data_file(dir, DISTRICT_TO_REP_FILE)?;
    let catalog = Catalog::from_json(&state_options, &district_to_rep)?;
    info!(
        dir = %dir.display(),
        states = catalog.options.state_count(),
        reps = catalog.options.rep_count(),
        districts = catalog.districts.len(),
        "catalog_loaded"
    );
    Ok(catalog)
}

/// Directory of `{state-key}.svg` map files.
#[derive(Debug, Clone)]
pub struct MapLibrary {
    dir: PathBuf,
}

impl MapLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a requested file name to a path inside the library.
    ///
    /// Only names of the form `[a-z-]+.svg` are accepted, which keeps lookups
    /// inside the directory.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let stem = file_name.strip_suffix(".svg")?;
        let valid = !stem.is_empty() && stem.chars().all(|c| c.is_ascii_lowercase() || c == '-');
        if !valid {
            debug!(file_name, "map_library: rejected file name");
            return None;
        }
        Some(self.dir.join(file_name))
    }

    /// Read a map, `Ok(None)` when it does not exist.
    pub async fn read(&self, file_name: &str) -> OpsResult<Option<String>> {
        let Some(path) = self.resolve(file_name) else {
            return Ok(None);
        };
        match tokio::fs::read_to_string(&path).await {
            Ok(markup) => Ok(Some(markup)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// States that have no map file.
    pub fn missing_states(&self) -> Vec<&'static StateInfo> {
        StateInfo::sorted()
            .into_iter()
            .filter(|state| !self.dir.join(state.svg_file_name()).is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &Path) {
        std::fs::write(dir.join(STATE_OPTIONS_FILE), r#"{"CA": ["Rep A", "Rep B"]}"#).unwrap();
        std::fs::write(dir.join(DISTRICT_TO_REP_FILE), r#"{"CA05": "Rep A"}"#).unwrap();
    }

    #[test]
    fn test_load_catalog() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path());
        let catalog = load_catalog(temp.path()).unwrap();
        assert_eq!(catalog.options.reps_for("CA"), ["Rep A", "Rep B"]);
        assert_eq!(catalog.districts.rep_for("CA05"), Some("Rep A"));
    }

    #[test]
    fn test_missing_document_fails_whole_load() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path());
        std::fs::remove_file(temp.path().join(DISTRICT_TO_REP_FILE)).unwrap();
        let err = load_catalog(temp.path()).unwrap_err();
        assert!(matches!(err, OpsError::DataFileMissing { .. }));
    }

    #[test]
    fn test_malformed_document() {
        let temp = TempDir::new().unwrap();
        write_catalog(temp.path());
        std::fs::write(temp.path().join(STATE_OPTIONS_FILE), "[").unwrap();
        let err = load_catalog(temp.path()).unwrap_err();
        assert!(matches!(err, OpsError::Catalog(_)));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let library = MapLibrary::new("/maps");
        assert_eq!(
            library.resolve("new-york.svg"),
            Some(PathBuf::from("/maps/new-york.svg"))
        );
        assert_eq!(library.resolve("../secret.svg"), None);
        assert_eq!(library.resolve("Texas.svg"), None);
        assert_eq!(library.resolve("texas.json"), None);
        assert_eq!(library.resolve(".svg"), None);
    }

    #[tokio::test]
    async fn test_read_and_missing_states() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("california.svg"), "<svg/>").unwrap();
        let library = MapLibrary::new(temp.path());

        assert_eq!(
            library.read("california.svg").await.unwrap().as_deref(),
            Some("<svg/>")
        );
        assert_eq!(library.read("texas.svg").await.unwrap(), None);

        let missing = library.missing_states();
        assert_eq!(missing.len(), 49);
        assert!(missing.iter().all(|s| s.abbr != "CA"));
    }
}
