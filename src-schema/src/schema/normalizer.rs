// FICHIER : src-schema/src/schema/normalizer.rs

//! Normalisation JSON : le cœur du pipeline accepter / normaliser / émettre.
//!
//! Deux chemins volontairement asymétriques :
//! - À l'enregistrement, rien n'est validé : un brouillon invalide est
//!   conservé tel quel pour que l'auteur puisse revenir le corriger.
//! - Au rendu, tout est validé : la page publique n'émet jamais de contenu
//!   cassé.

use crate::utils::json;
use crate::utils::prelude::*;

/// Gabarit par défaut : valeur présentée dans un éditeur vierge, et sentinelle
/// comparée à l'enregistrement pour stocker "rien" plutôt que le défaut.
pub const DEFAULT_TEMPLATE: &str = r#"[ { "@context": "http://schema.org" } ]"#;

/// Met en forme un texte JSON pour l'affichage dans l'éditeur.
/// Si le parsing échoue, le texte revient inchangé : l'auteur doit pouvoir
/// voir et corriger sa saisie malformée.
pub fn format_for_edit(raw: &str) -> String {
    match json::parse::<Value>(raw) {
        Ok(value) => json::stringify_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Vrai ssi `raw` et le gabarit par défaut parsent tous deux et sont
/// structurellement égaux. Les différences d'espacement ne comptent pas.
pub fn is_default(raw: &str) -> bool {
    match (
        json::parse::<Value>(raw),
        json::parse::<Value>(DEFAULT_TEMPLATE),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Calcule la valeur à persister. `None` signifie "ne rien stocker" :
/// saisie vide ou équivalente au gabarit par défaut. Sinon le texte est
/// rendu tel quel, sans validation.
pub fn presave(raw: &str) -> Option<String> {
    if raw.trim().is_empty() || is_default(raw) {
        return None;
    }
    Some(raw.to_string())
}

/// Parse `raw` et renvoie sa forme canonique (compacte, ordre des clés
/// conservé), prête à être embarquée dans une balise script.
/// C'est la fonction du chemin de rendu, jamais celle de l'enregistrement.
pub fn validate_and_canonicalize(raw: &str) -> Result<String> {
    let value: Value = json::parse(raw)?;
    json::stringify(&value)
}

// ============================================================================
// TESTS
// ============================================================================
