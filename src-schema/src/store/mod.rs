// FICHIER : src-schema/src/store/mod.rs

//! Adaptateur de stockage des métadonnées : une valeur texte par portée.
//! Sémantique clé/valeur pure, dernier écrivain gagnant. Aucune logique de
//! validation ici, uniquement la persistance.

pub mod file_storage;
pub mod memory;

use crate::utils::prelude::*;

/// Portée d'un enregistrement Schema : la clé de stockage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Un contenu individuel (article, page...), identifié par son id.
    Post(u64),
    /// Un terme de taxonomie (catégorie, étiquette...), identifié par son id.
    Term(u64),
    /// Le site dans son ensemble (singleton).
    Site,
}

/// Famille de portée, sans identifiant. Sert au routage des fichiers de
/// stockage et à la restriction des jetons suggérés dans l'éditeur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Post,
    Term,
    Site,
}

impl Scope {
    pub fn kind(&self) -> ScopeKind {
        match self {
            Scope::Post(_) => ScopeKind::Post,
            Scope::Term(_) => ScopeKind::Term,
            Scope::Site => ScopeKind::Site,
        }
    }

    /// Clé de l'enregistrement au sein de sa famille.
    pub fn record_key(&self) -> String {
        match self {
            Scope::Post(id) | Scope::Term(id) => id.to_string(),
            Scope::Site => "site".to_string(),
        }
    }
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Post => "post",
            ScopeKind::Term => "term",
            ScopeKind::Site => "site",
        }
    }
}

/// Contrat get/set de l'hôte. `set(.., None)` efface l'enregistrement :
/// c'est l'unique chemin de suppression.
pub trait MetadataStore {
    fn get(&self, scope: &Scope) -> Result<Option<String>>;
    fn set(&self, scope: &Scope, value: Option<&str>) -> Result<()>;
}
