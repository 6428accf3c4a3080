// FICHIER : src-schema/src/utils/error.rs

use std::io;

// --- RE-EXPORTS ANYHOW (Pour la flexibilité des outils CLI) ---
// On expose les outils flexibles pour les binaires finaux
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

// --- GESTION D'ERREUR STRICTE ---

/// Type de résultat standard pour la bibliothèque.
/// Utilise notre AppError unifiée au lieu d'une erreur générique.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs de l'application.
/// Elle dérive `thiserror::Error` pour faciliter la conversion automatique.
///
/// Les trois premières variantes couvrent le pipeline de rendu ; elles sont
/// toutes absorbées en "aucune sortie" côté visiteur.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("JSON malformé : {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Aucune donnée Schema enregistrée pour ce contexte")]
    EmptyOrMissingRecord,

    #[error("Contexte de requête non pris en charge : {0}")]
    UnsupportedScope(String),

    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),
}

// Helpers pour convertir des erreurs string en AppError
// Permet de faire : return Err("Mon erreur".into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Config(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Config(s.to_string())
    }
}
