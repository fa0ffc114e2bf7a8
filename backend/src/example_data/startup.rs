//! Startup seeding orchestration.
//!
//! Sample devices are inserted only into an empty collection; a collection
//! that already holds documents is treated as initialised and left alone.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::DeviceEntry;
use crate::domain::ports::{DocumentStore, DocumentStoreError};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing failed.
    #[error("registry parse error: {0}")]
    RegistryParse(#[from] serde_json::Error),
    /// The document store rejected a read or insert.
    #[error("example data seeding error: {0}")]
    Store(#[from] DocumentStoreError),
}

/// Sample devices loaded from the registry file.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRegistry {
    /// Devices inserted, in order, into an empty collection.
    pub devices: Vec<DeviceEntry>,
}

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Seeding is switched off.
    Disabled,
    /// The collection already held documents.
    AlreadyInitialised { existing: usize },
    /// Sample devices were inserted.
    Applied { inserted: usize },
}

/// Apply example data on startup when enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use device_list::domain::DeviceEntry;
/// use device_list::example_data::{ExampleDataSettings, SeedOutcome, seed_example_data_on_startup};
/// use device_list::outbound::persistence::InMemoryDocumentStore;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryDocumentStore::<DeviceEntry>::default();
/// let outcome = seed_example_data_on_startup(&ExampleDataSettings::disabled(), &store).await?;
/// assert_eq!(outcome, SeedOutcome::Disabled);
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    store: &dyn DocumentStore<DeviceEntry>,
) -> Result<SeedOutcome, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(SeedOutcome::Disabled);
    }

    let existing = store.find_all().await?.len();
    if existing > 0 {
        info!(existing, "collection already initialised; skipping example data");
        return Ok(SeedOutcome::AlreadyInitialised { existing });
    }

    let registry_path = settings.registry_path();
    let registry = load_registry(&registry_path)?;
    for device in &registry.devices {
        store.create(&device.id, device).await?;
    }

    let inserted = registry.devices.len();
    info!(inserted, path = %registry_path.display(), "example data seeding applied");
    Ok(SeedOutcome::Applied { inserted })
}

/// Read and parse a device registry file.
pub fn load_registry(path: &Path) -> Result<DeviceRegistry, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let payload = dir.read(Path::new(file_name)).map_err(read_error)?;
    Ok(serde_json::from_slice(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::InMemoryDocumentStore;
    use rstest::{fixture, rstest};
    use std::io::Write;

    #[fixture]
    fn enabled() -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: true,
            registry_path: None,
        }
    }

    #[rstest]
    fn bundled_registry_holds_sample_devices() {
        let registry =
            load_registry(&ExampleDataSettings::disabled().registry_path()).expect("registry");
        let ids: Vec<_> = registry.devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["x321ab3", "c421fu6"]);
        assert_eq!(registry.devices[0].log_list.len(), 3);
        assert!(registry.devices[1].log_list.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_empty_collection(enabled: ExampleDataSettings) {
        let store = InMemoryDocumentStore::<DeviceEntry>::default();

        let outcome = seed_example_data_on_startup(&enabled, &store)
            .await
            .expect("seeding succeeds");

        assert_eq!(outcome, SeedOutcome::Applied { inserted: 2 });
        let crp = store.find_by_id("x321ab3").await.expect("seeded device");
        assert_eq!(crp.device_id, "1-crp");
    }

    #[rstest]
    #[tokio::test]
    async fn skips_initialised_collection(enabled: ExampleDataSettings) {
        let existing = DeviceEntry {
            id: "existing".to_owned(),
            ..DeviceEntry::default()
        };
        let store = InMemoryDocumentStore::with_documents([("existing".to_owned(), existing)]);

        let outcome = seed_example_data_on_startup(&enabled, &store)
            .await
            .expect("seeding succeeds");

        assert_eq!(outcome, SeedOutcome::AlreadyInitialised { existing: 1 });
        assert!(store.find_by_id("x321ab3").await.is_err());
    }

    #[rstest]
    fn malformed_registry_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{\"devices\": 1}").expect("write registry");

        let error = load_registry(file.path()).expect_err("parse fails");
        assert!(matches!(error, StartupSeedingError::RegistryParse(_)));
    }

    #[rstest]
    fn missing_registry_is_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = load_registry(&dir.path().join("absent.json")).expect_err("read fails");
        assert!(matches!(error, StartupSeedingError::RegistryRead { .. }));
    }
}
