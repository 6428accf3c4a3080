// FICHIER : src-schema/src/editor/mod.rs

//! Champ d'édition du Schema : un champ texte multi-lignes façon éditeur de
//! code, composé avec le normaliseur JSON. Le chemin d'enregistrement ne
//! valide jamais ; il ne fait que replier la saisie vide ou égale au gabarit
//! par défaut en "ne rien stocker".

use crate::schema::normalizer;
use crate::schema::tokens;
use crate::store::{MetadataStore, Scope, ScopeKind};
use crate::utils::prelude::*;
use std::collections::HashMap;

/// Nom de champ (et clé de métadonnée) commun à toutes les portées.
pub const FIELD_NAME: &str = "custom_item_schema";

/// Modèle de présentation d'un champ : ce que l'hôte doit afficher.
/// Aucun rendu HTML ici, uniquement les données du formulaire.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldElement {
    pub name: String,
    /// Type de contenu pour l'éditeur de code de l'hôte.
    pub content_type: String,
    /// Valeur pré-remplie, déjà mise en forme pour l'édition.
    pub value: String,
    pub attributes: HashMap<String, String>,
    /// Aide de saisie : jetons de formatage suggérés, en HTML.
    pub description: Option<String>,
}

/// Surface générique d'un champ éditable : rendre, puis calculer la valeur
/// à persister depuis la soumission. Composition plutôt qu'héritage.
pub trait EditableField {
    fn render(&self, stored: Option<&str>) -> FieldElement;
    fn presave(&self, submitted: &str) -> Option<String>;
}

// --- CHAMP SCHEMA ---

#[derive(Debug, Clone)]
pub struct SchemaEditorField {
    scope_kind: ScopeKind,
    default_value: String,
}

impl SchemaEditorField {
    pub fn new(scope_kind: ScopeKind) -> Self {
        Self {
            scope_kind,
            default_value: normalizer::DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Paragraphe d'aide listant les jetons adaptés à la portée du champ.
    fn description(&self) -> String {
        let tags = tokens::suggested_for(self.scope_kind)
            .iter()
            .map(|t| format!("<code>{}</code>", t.as_str()))
            .collect::<Vec<_>>()
            .join(" ");

        // L'italique passe mal avec tous ces <code> : style normal forcé
        format!(
            "<p style=\"font-style: normal;\">Jetons de formatage disponibles : {}</p>",
            tags
        )
    }
}

impl EditableField for SchemaEditorField {
    fn render(&self, stored: Option<&str>) -> FieldElement {
        // Une valeur absente signifie qu'on a volontairement stocké "rien".
        // On présente quand même le gabarit pour amorcer l'édition.
        let value = match stored {
            Some(raw) if !raw.trim().is_empty() => normalizer::format_for_edit(raw),
            _ => self.default_value.clone(),
        };

        let mut attributes = HashMap::new();
        attributes.insert("style".to_string(), "width: 100%; height: 400px".to_string());

        FieldElement {
            name: FIELD_NAME.to_string(),
            content_type: "application/ld+json".to_string(),
            value,
            attributes,
            description: Some(self.description()),
        }
    }

    fn presave(&self, submitted: &str) -> Option<String> {
        normalizer::presave(submitted)
    }
}

/// Chemin d'enregistrement complet : calcule la valeur à persister puis
/// l'écrit (y compris `None`, qui efface) via l'adaptateur de stockage.
pub fn save(
    store: &dyn MetadataStore,
    field: &dyn EditableField,
    scope: &Scope,
    submitted: &str,
) -> Result<()> {
    let value = field.presave(submitted);
    store.set(scope, value.as_deref())?;
    debug!(scope = ?scope, stored = value.is_some(), "Saisie de l'éditeur traitée");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_render_empty_presents_default_template() {
        let field = SchemaEditorField::new(ScopeKind::Post);

        let element = field.render(None);
        assert_eq!(element.value, normalizer::DEFAULT_TEMPLATE);
        assert_eq!(element.name, FIELD_NAME);
        assert_eq!(element.content_type, "application/ld+json");
    }

    #[test]
    fn test_render_formats_stored_value() {
        let field = SchemaEditorField::new(ScopeKind::Post);

        let element = field.render(Some(r#"{"@type":"WebSite"}"#));
        // Mise en forme pretty pour l'édition
        assert!(element.value.contains('\n'));
        assert!(element.value.contains("\"@type\""));
    }

    #[test]
    fn test_render_leaves_malformed_stored_value_visible() {
        let field = SchemaEditorField::new(ScopeKind::Term);

        let element = field.render(Some("{\"@context\":\""));
        assert_eq!(element.value, "{\"@context\":\"");
    }

    #[test]
    fn test_description_depends_on_scope() {
        let post_field = SchemaEditorField::new(ScopeKind::Post);
        let site_field = SchemaEditorField::new(ScopeKind::Site);

        let post_help = post_field.render(None).description.unwrap();
        let site_help = site_field.render(None).description.unwrap();

        assert!(post_help.contains("<code>#title#</code>"));
        assert!(site_help.contains("<code>#site_name#</code>"));
        assert!(!site_help.contains("#title#"));
    }

    #[test]
    fn test_save_clears_on_default_submission() {
        let store = MemoryStore::new();
        let field = SchemaEditorField::new(ScopeKind::Post);
        let scope = Scope::Post(1);

        // Un enregistrement existe, puis l'auteur re-soumet le gabarit
        store.set(&scope, Some(r#"{"@type":"WebSite"}"#)).unwrap();
        save(&store, &field, &scope, normalizer::DEFAULT_TEMPLATE).unwrap();

        assert_eq!(store.get(&scope).unwrap(), None);
    }

    #[test]
    fn test_save_stores_malformed_draft() {
        let store = MemoryStore::new();
        let field = SchemaEditorField::new(ScopeKind::Post);
        let scope = Scope::Post(1);

        save(&store, &field, &scope, "{\"@context\":\"").unwrap();
        assert_eq!(
            store.get(&scope).unwrap().as_deref(),
            Some("{\"@context\":\"")
        );
    }
}
