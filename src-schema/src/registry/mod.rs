// FICHIER : src-schema/src/registry/mod.rs

//! Enregistrement des champs auprès de l'hôte : à l'initialisation, on
//! énumère les portées configurées et on produit une liste statique
//! (portée, champ). Aucun état global : la liste se reconstruit à chaque
//! initialisation.

use crate::editor::SchemaEditorField;
use crate::store::ScopeKind;

// --- CONFIGURATION DES PORTÉES ACTIVÉES ---

/// Types de contenu et taxonomies couverts par le champ Schema.
/// Les deux listes par défaut correspondent aux ensembles publics de l'hôte
/// et sont surchargeables indépendamment via les filtres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub post_types: Vec<String>,
    pub taxonomies: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            post_types: vec!["post".to_string(), "page".to_string()],
            taxonomies: vec!["category".to_string(), "post_tag".to_string()],
        }
    }
}

impl PluginConfig {
    pub fn new(post_types: Vec<String>, taxonomies: Vec<String>) -> Self {
        Self {
            post_types,
            taxonomies,
        }
    }

    /// Filtre de surcharge des types de contenu activés.
    pub fn with_post_types_filter(mut self, f: impl FnOnce(Vec<String>) -> Vec<String>) -> Self {
        self.post_types = f(std::mem::take(&mut self.post_types));
        self
    }

    /// Filtre de surcharge des taxonomies activées.
    pub fn with_taxonomies_filter(mut self, f: impl FnOnce(Vec<String>) -> Vec<String>) -> Self {
        self.taxonomies = f(std::mem::take(&mut self.taxonomies));
        self
    }

    pub fn is_post_type_enabled(&self, post_type: &str) -> bool {
        self.post_types.iter().any(|t| t == post_type)
    }

    pub fn is_taxonomy_enabled(&self, taxonomy: &str) -> bool {
        self.taxonomies.iter().any(|t| t == taxonomy)
    }
}

// --- LISTE D'ENREGISTREMENT ---

/// Une entrée à inscrire dans le registre d'extensions de l'hôte.
#[derive(Debug, Clone)]
pub struct FieldRegistration {
    pub scope_kind: ScopeKind,
    /// Type de contenu ou taxonomie visé ; `None` pour le champ site.
    pub object_type: Option<String>,
    /// Libellé de la boîte d'édition présentée à l'administrateur.
    pub label: String,
    pub field: SchemaEditorField,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub registrations: Vec<FieldRegistration>,
}

impl Registry {
    /// Construit la liste complète : un champ par type de contenu activé,
    /// un par taxonomie activée, plus le champ site ("Schéma de la page
    /// d'accueil").
    pub fn build(config: &PluginConfig) -> Self {
        let mut registrations = Vec::new();

        for post_type in &config.post_types {
            registrations.push(FieldRegistration {
                scope_kind: ScopeKind::Post,
                object_type: Some(post_type.clone()),
                label: "Éditeur de Schéma".to_string(),
                field: SchemaEditorField::new(ScopeKind::Post),
            });
        }

        for taxonomy in &config.taxonomies {
            registrations.push(FieldRegistration {
                scope_kind: ScopeKind::Term,
                object_type: Some(taxonomy.clone()),
                label: "Éditeur de Schéma".to_string(),
                field: SchemaEditorField::new(ScopeKind::Term),
            });
        }

        registrations.push(FieldRegistration {
            scope_kind: ScopeKind::Site,
            object_type: None,
            label: "Schéma de la page d'accueil".to_string(),
            field: SchemaEditorField::new(ScopeKind::Site),
        });

        Self { registrations }
    }

    pub fn for_kind(&self, kind: ScopeKind) -> impl Iterator<Item = &FieldRegistration> {
        self.registrations
            .iter()
            .filter(move |r| r.scope_kind == kind)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_full_registry() {
        let registry = Registry::build(&PluginConfig::default());

        // 2 types de contenu + 2 taxonomies + le champ site
        assert_eq!(registry.registrations.len(), 5);
        assert_eq!(registry.for_kind(ScopeKind::Post).count(), 2);
        assert_eq!(registry.for_kind(ScopeKind::Term).count(), 2);
        assert_eq!(registry.for_kind(ScopeKind::Site).count(), 1);
    }

    #[test]
    fn test_site_registration_has_no_object_type() {
        let registry = Registry::build(&PluginConfig::default());
        let site = registry.for_kind(ScopeKind::Site).next().unwrap();

        assert_eq!(site.object_type, None);
        assert_eq!(site.label, "Schéma de la page d'accueil");
    }

    #[test]
    fn test_filters_override_enabled_sets() {
        let config = PluginConfig::default()
            .with_post_types_filter(|mut types| {
                types.push("recette".to_string());
                types
            })
            .with_taxonomies_filter(|_| vec![]);

        assert!(config.is_post_type_enabled("recette"));
        assert!(!config.is_taxonomy_enabled("category"));

        let registry = Registry::build(&config);
        assert_eq!(registry.for_kind(ScopeKind::Post).count(), 3);
        assert_eq!(registry.for_kind(ScopeKind::Term).count(), 0);
    }
}
