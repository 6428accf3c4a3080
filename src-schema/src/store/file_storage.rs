// FICHIER : src-schema/src/store/file_storage.rs

//! Stockage fichier du MetadataStore : un document JSON par famille de
//! portée ({data_root}/post.json, term.json, site.json), chacun étant un
//! dictionnaire clé → texte brut. Écriture atomique (fichier temporaire
//! puis rename).

use super::{MetadataStore, Scope, ScopeKind};
use crate::utils::data::Map;
use crate::utils::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

// --- CONFIGURATION ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaStoreConfig {
    pub data_root: PathBuf,
}

impl SchemaStoreConfig {
    pub fn new(data_root: PathBuf) -> Self {
        Self { data_root }
    }

    /// Fichier des enregistrements d'une famille : {data_root}/{famille}.json
    pub fn records_path(&self, kind: ScopeKind) -> PathBuf {
        self.data_root.join(format!("{}.json", kind.as_str()))
    }
}

// --- STORE FICHIER ---

#[derive(Debug, Clone)]
pub struct FileStore {
    config: SchemaStoreConfig,
}

impl FileStore {
    pub fn new(config: SchemaStoreConfig) -> Self {
        Self { config }
    }

    fn read_records(&self, kind: ScopeKind) -> Result<Map<String, Value>> {
        let path = self.config.records_path(kind);
        if !path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&path)?;
        let records: Map<String, Value> = crate::utils::json::parse(&content)?;
        Ok(records)
    }

    fn write_records(&self, kind: ScopeKind, records: &Map<String, Value>) -> Result<()> {
        if !self.config.data_root.exists() {
            fs::create_dir_all(&self.config.data_root)?;
        }
        let path = self.config.records_path(kind);
        let content = crate::utils::json::stringify_pretty(records)?;
        atomic_write(&path, content.as_bytes())?;
        Ok(())
    }
}

impl MetadataStore for FileStore {
    fn get(&self, scope: &Scope) -> Result<Option<String>> {
        let records = self.read_records(scope.kind())?;
        Ok(records
            .get(&scope.record_key())
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()))
    }

    fn set(&self, scope: &Scope, value: Option<&str>) -> Result<()> {
        let mut records = self.read_records(scope.kind())?;
        let key = scope.record_key();

        match value {
            Some(v) => {
                records.insert(key, Value::String(v.to_string()));
            }
            None => {
                records.remove(&key);
            }
        }

        self.write_records(scope.kind(), &records)?;
        debug!(scope = ?scope, "Enregistrement Schema persisté");
        Ok(())
    }
}

/// Écrit `data` dans `path` via un fichier temporaire voisin puis rename.
/// Le rename est atomique sur un même système de fichiers.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
