// crates/infra/src/artifact_store.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use log::{debug, warn};
use price_clean_ports::{ArtifactDraft, ArtifactStore, HashValue, Hasher, PublishedArtifact};
use price_clean_shared_kernel::{
    ArtifactKind, ArtifactName, ArtifactReference, InfrastructureError, Result,
};
use serde::{Deserialize, Serialize};

use crate::{
    hashing::Xxh3Hasher,
    persistence::{FileReader, FileWriter},
};

const MANIFEST_VERSION: u32 = 1;
pub const MANIFEST_FILE: &str = "manifest.json";
const LOCK_FILE: &str = ".lock";
const DATA_DIR: &str = "data";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Manifest {
    version: u32,
    name: ArtifactName,
    kind: ArtifactKind,
    description: String,
    file_name: String,
    size: u64,
    digest: HashValue,
    created_at: DateTime<Utc>,
}

/// Directory-backed store: `<root>/<name>/manifest.json` plus the stored file under `data/`.
///
/// Each name holds only its latest content; publishing again replaces it.
pub struct LocalArtifactStore {
    root: PathBuf,
    hasher: Box<dyn Hasher>,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_hasher(root, Box::new(Xxh3Hasher))
    }

    pub fn with_hasher(root: impl Into<PathBuf>, hasher: Box<dyn Hasher>) -> Self {
        Self { root: root.into(), hasher }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Publish an arbitrary local file, e.g. to seed raw input data.
    pub fn import(
        &self,
        file: &Path,
        name: ArtifactName,
        kind: ArtifactKind,
        description: impl Into<String>,
    ) -> Result<PublishedArtifact> {
        self.publish(&ArtifactDraft { name, kind, description: description.into(), file: file.to_path_buf() })
    }

    fn artifact_dir(&self, name: &ArtifactName) -> PathBuf {
        self.root.join(name.as_str())
    }

    fn data_dir(&self, name: &ArtifactName) -> PathBuf {
        self.artifact_dir(name).join(DATA_DIR)
    }

    fn read_manifest(&self, reference: &ArtifactReference) -> Result<Manifest> {
        let path = self.artifact_dir(&reference.name).join(MANIFEST_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(InfrastructureError::ArtifactNotFound {
                    reference: reference.to_string(),
                    reason: format!("no artifact with this name in {}", self.root.display()),
                }
                .into());
            }
            Err(source) => return Err(InfrastructureError::FileRead { path, source }.into()),
        };
        let manifest: Manifest = serde_json::from_str(&contents)?;
        if manifest.version != MANIFEST_VERSION {
            warn!("manifest {} has version {}, expected {MANIFEST_VERSION}", path.display(), manifest.version);
        }
        Ok(manifest)
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn resolve(&self, reference: &ArtifactReference) -> Result<PathBuf> {
        if !reference.is_latest() {
            return Err(InfrastructureError::ArtifactNotFound {
                reference: reference.to_string(),
                reason: "only the latest content of an artifact is kept".into(),
            }
            .into());
        }

        let manifest = self.read_manifest(reference)?;
        let path = self.data_dir(&reference.name).join(&manifest.file_name);
        if !path.is_file() {
            return Err(InfrastructureError::ArtifactNotFound {
                reference: reference.to_string(),
                reason: format!("manifest points at missing file {}", path.display()),
            }
            .into());
        }
        debug!("resolved {reference} -> {} (digest {})", path.display(), manifest.digest);
        Ok(path)
    }

    fn publish(&self, draft: &ArtifactDraft) -> Result<PublishedArtifact> {
        let name = draft.name.as_str();
        let data = FileReader::read_to_end(&draft.file).map_err(|err| {
            InfrastructureError::publish(name, format!("cannot read {}", draft.file.display()), err)
        })?;
        let digest = self.hasher.hash_bytes(&data)?;
        let file_name = draft
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());

        let dir = self.artifact_dir(&draft.name);
        let data_dir = self.data_dir(&draft.name);
        fs::create_dir_all(&data_dir).map_err(|err| {
            InfrastructureError::publish(name, format!("cannot create {}", data_dir.display()), err)
        })?;

        // Exclusive lock so concurrent publishers of one name do not interleave.
        let lock_path = dir.join(LOCK_FILE);
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|err| InfrastructureError::publish(name, "cannot open lock file", err))?;
        lock_file
            .lock_exclusive()
            .map_err(|err| InfrastructureError::publish(name, "cannot lock artifact", err))?;

        let previous = self.read_manifest(&ArtifactReference { name: draft.name.clone(), alias: None }).ok();

        let stored = data_dir.join(&file_name);
        FileWriter::atomic_write(&stored, &data).map_err(|err| {
            InfrastructureError::publish(name, format!("cannot write {}", stored.display()), err)
        })?;

        let manifest = Manifest {
            version: MANIFEST_VERSION,
            name: draft.name.clone(),
            kind: draft.kind.clone(),
            description: draft.description.clone(),
            file_name: file_name.clone(),
            size: data.len() as u64,
            digest,
            created_at: Utc::now(),
        };
        let manifest_bytes = serde_json::to_vec_pretty(&manifest)?;
        FileWriter::atomic_write(dir.join(MANIFEST_FILE), &manifest_bytes)
            .map_err(|err| InfrastructureError::publish(name, "cannot write manifest", err))?;

        if let Some(previous) = previous
            && previous.file_name != file_name
        {
            let _ = fs::remove_file(data_dir.join(&previous.file_name));
        }

        let _ = lock_file.unlock();
        debug!("published {name} ({} bytes, digest {digest}) to {}", manifest.size, stored.display());

        Ok(PublishedArtifact {
            name: manifest.name,
            kind: manifest.kind,
            description: manifest.description,
            path: stored,
            size: manifest.size,
            digest,
            created_at: manifest.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, LocalArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("store"));
        (dir, store)
    }

    fn name(s: &str) -> ArtifactName {
        ArtifactName::parse(s).unwrap()
    }

    #[test]
    fn publish_then_resolve_returns_stored_copy() {
        let (dir, store) = store();
        let source = dir.path().join("sample.csv");
        fs::write(&source, "id,price\n1,10\n").unwrap();

        let published = store.import(&source, name("sample.csv"), ArtifactKind::new("raw_data"), "raw").unwrap();
        assert_eq!(published.size, 14);

        for reference in ["sample.csv", "sample.csv:latest"] {
            let resolved = store.resolve(&ArtifactReference::parse(reference).unwrap()).unwrap();
            assert_eq!(resolved, published.path);
            assert_eq!(fs::read_to_string(resolved).unwrap(), "id,price\n1,10\n");
        }
    }

    #[test]
    fn unknown_name_and_pinned_alias_are_not_found() {
        let (dir, store) = store();
        let source = dir.path().join("sample.csv");
        fs::write(&source, "id\n").unwrap();
        store.import(&source, name("sample.csv"), ArtifactKind::new("raw_data"), "").unwrap();

        for reference in ["other.csv", "sample.csv:v0"] {
            let err = store.resolve(&ArtifactReference::parse(reference).unwrap()).unwrap_err();
            assert!(err.is_not_found(), "{reference}: {err}");
        }
    }

    #[test]
    fn publishing_missing_file_is_publish_error() {
        let (dir, store) = store();
        let err = store
            .import(&dir.path().join("absent.csv"), name("out"), ArtifactKind::new("clean_sample"), "")
            .unwrap_err();
        assert!(err.is_publish_error());
    }

    #[test]
    fn republishing_replaces_content_and_stale_file() {
        let (dir, store) = store();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        fs::write(&first, "v\n1\n").unwrap();
        fs::write(&second, "v\n2\n").unwrap();

        let old = store.import(&first, name("data"), ArtifactKind::new("raw_data"), "").unwrap();
        let new = store.import(&second, name("data"), ArtifactKind::new("raw_data"), "").unwrap();

        assert_ne!(old.digest, new.digest);
        assert!(!old.path.exists());
        let resolved = store.resolve(&ArtifactReference::parse("data").unwrap()).unwrap();
        assert_eq!(fs::read_to_string(resolved).unwrap(), "v\n2\n");
    }

    #[test]
    fn reserved_file_names_do_not_clobber_the_manifest() {
        let (dir, store) = store();
        for (file, artifact) in [("manifest.json", "raw"), (".lock", "locked")] {
            let source = dir.path().join("in").join(file);
            fs::create_dir_all(source.parent().unwrap()).unwrap();
            fs::write(&source, "id,price\n1,10\n").unwrap();

            let published = store.import(&source, name(artifact), ArtifactKind::new("raw_data"), "").unwrap();
            let resolved = store.resolve(&ArtifactReference::parse(artifact).unwrap()).unwrap();

            assert_eq!(resolved, published.path);
            assert_eq!(fs::read_to_string(&resolved).unwrap(), "id,price\n1,10\n");
            let manifest = fs::read_to_string(store.root().join(artifact).join(MANIFEST_FILE)).unwrap();
            assert!(manifest.contains("\"version\": 1"), "{manifest}");
        }
    }

    #[test]
    fn missing_stored_file_is_not_found() {
        let (dir, store) = store();
        let source = dir.path().join("x.csv");
        fs::write(&source, "v\n").unwrap();
        let published = store.import(&source, name("x"), ArtifactKind::new("raw_data"), "").unwrap();
        fs::remove_file(&published.path).unwrap();

        let err = store.resolve(&ArtifactReference::parse("x").unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }
}
