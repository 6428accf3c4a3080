// FICHIER : src-schema/src/store/memory.rs

//! Implémentation mémoire du MetadataStore. Sert de référence pour les tests
//! et d'adaptateur par défaut pour un hôte embarqué.

use super::{MetadataStore, Scope};
use crate::utils::prelude::*;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Scope, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for MemoryStore {
    fn get(&self, scope: &Scope) -> Result<Option<String>> {
        // Un verrou empoisonné se lit comme "aucune valeur"
        Ok(self
            .records
            .read()
            .ok()
            .and_then(|map| map.get(scope).cloned()))
    }

    fn set(&self, scope: &Scope, value: Option<&str>) -> Result<()> {
        let mut map = self
            .records
            .write()
            .map_err(|_| AppError::Config("Verrou du store mémoire empoisonné".to_string()))?;

        match value {
            Some(v) => {
                map.insert(scope.clone(), v.to_string());
            }
            None => {
                map.remove(scope);
            }
        }
        Ok(())
    }
}
