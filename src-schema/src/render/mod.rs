// FICHIER : src-schema/src/render/mod.rs

//! Rendu du bloc Schema dans l'en-tête du document. Trois issues possibles
//! par requête : un bloc script complet, ou rien. Jamais de sortie
//! partielle, jamais d'erreur remontée au visiteur.

use crate::registry::PluginConfig;
use crate::schema::formatter::SchemaFormatter;
use crate::schema::normalizer;
use crate::store::{MetadataStore, Scope};
use crate::utils::prelude::*;

/// Contexte résolu de la requête courante, fourni par l'hôte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    /// Affichage d'un contenu individuel.
    Singular { post_id: u64, post_type: String },
    /// Archive d'un terme de taxonomie.
    TermArchive { term_id: u64, taxonomy: String },
    /// Page d'accueil du site.
    Home,
    /// Tout autre contexte (recherche, flux, 404...).
    Other,
}

pub struct Renderer<'a> {
    store: &'a dyn MetadataStore,
    config: PluginConfig,
    formatter: Option<Box<dyn SchemaFormatter>>,
}

impl<'a> Renderer<'a> {
    pub fn new(store: &'a dyn MetadataStore, config: PluginConfig) -> Self {
        Self {
            store,
            config,
            formatter: None,
        }
    }

    /// Branche le collaborateur d'expansion des jetons. Sans lui, le texte
    /// enregistré traverse le pipeline inchangé.
    pub fn with_formatter(mut self, formatter: Box<dyn SchemaFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Produit le bloc d'en-tête pour la requête courante, ou une chaîne
    /// vide. Toutes les défaillances (portée hors champ, enregistrement
    /// absent, JSON malformé) dégradent en silence.
    pub fn render_head(&self, ctx: &RequestContext) -> String {
        match self.try_render(ctx) {
            Ok(block) => block,
            Err(err) => {
                debug!(context = ?ctx, raison = %err, "Bloc Schema non émis");
                String::new()
            }
        }
    }

    /// Sélectionne l'unique enregistrement considéré pour cette requête,
    /// dans l'ordre contenu > terme > site.
    fn resolve_scope(&self, ctx: &RequestContext) -> Result<Scope> {
        match ctx {
            RequestContext::Singular { post_id, post_type } => {
                if self.config.is_post_type_enabled(post_type) {
                    Ok(Scope::Post(*post_id))
                } else {
                    Err(AppError::UnsupportedScope(format!(
                        "type de contenu non activé : {post_type}"
                    )))
                }
            }
            RequestContext::TermArchive { term_id, taxonomy } => {
                if self.config.is_taxonomy_enabled(taxonomy) {
                    Ok(Scope::Term(*term_id))
                } else {
                    Err(AppError::UnsupportedScope(format!(
                        "taxonomie non activée : {taxonomy}"
                    )))
                }
            }
            RequestContext::Home => Ok(Scope::Site),
            RequestContext::Other => {
                Err(AppError::UnsupportedScope("contexte hors champ".to_string()))
            }
        }
    }

    fn try_render(&self, ctx: &RequestContext) -> Result<String> {
        let scope = self.resolve_scope(ctx)?;

        let raw = self
            .store
            .get(&scope)?
            .filter(|s| !s.trim().is_empty())
            .ok_or(AppError::EmptyOrMissingRecord)?;

        // Substitution exactement une fois, sur le texte enregistré,
        // juste avant validation.
        let text = match &self.formatter {
            Some(f) => f.format(&raw),
            None => raw,
        };

        let canonical = normalizer::validate_and_canonicalize(&text)?;
        Ok(head_block(&canonical))
    }
}

/// Bloc émis tel quel dans l'en-tête du document.
fn head_block(canonical_json: &str) -> String {
    format!(
        "\n<!-- Custom item schema. -->\n<script type=\"application/ld+json\">{}</script>\n<!-- End custom item schema. -->\n",
        canonical_json
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::MetadataStore;

    fn renderer(store: &MemoryStore) -> Renderer<'_> {
        Renderer::new(store, PluginConfig::default())
    }

    fn singular(post_id: u64) -> RequestContext {
        RequestContext::Singular {
            post_id,
            post_type: "post".to_string(),
        }
    }

    #[test]
    fn test_valid_record_emits_script_block() {
        let store = MemoryStore::new();
        store
            .set(
                &Scope::Post(1),
                Some(r#"{"@context":"http://schema.org/","@type":"WebSite"}"#),
            )
            .unwrap();

        let out = renderer(&store).render_head(&singular(1));

        assert!(out.contains("<!-- Custom item schema. -->"));
        assert!(out.contains("<script type=\"application/ld+json\">"));
        assert!(out.contains(r#"{"@context":"http://schema.org/","@type":"WebSite"}"#));
        assert!(out.contains("<!-- End custom item schema. -->"));
    }

    #[test]
    fn test_malformed_record_emits_nothing() {
        let store = MemoryStore::new();
        store.set(&Scope::Post(1), Some("{\"@context\":\"")).unwrap();

        assert_eq!(renderer(&store).render_head(&singular(1)), "");
    }

    #[test]
    fn test_missing_record_emits_nothing() {
        let store = MemoryStore::new();
        assert_eq!(renderer(&store).render_head(&singular(1)), "");
    }

    #[test]
    fn test_disabled_post_type_emits_nothing() {
        let store = MemoryStore::new();
        store.set(&Scope::Post(1), Some("{}")).unwrap();

        let ctx = RequestContext::Singular {
            post_id: 1,
            post_type: "produit".to_string(),
        };
        assert_eq!(renderer(&store).render_head(&ctx), "");
    }

    #[test]
    fn test_other_context_emits_nothing() {
        let store = MemoryStore::new();
        store.set(&Scope::Site, Some("{}")).unwrap();

        assert_eq!(renderer(&store).render_head(&RequestContext::Other), "");
    }

    #[test]
    fn test_scope_resolution_priority() {
        // Chaque contexte ne considère que son propre enregistrement
        let store = MemoryStore::new();
        store.set(&Scope::Site, Some(r#"{"@type":"WebSite"}"#)).unwrap();

        // La requête singulière ne lit jamais le schéma du site
        assert_eq!(renderer(&store).render_head(&singular(1)), "");
        // La page d'accueil, si
        assert!(renderer(&store)
            .render_head(&RequestContext::Home)
            .contains(r#"{"@type":"WebSite"}"#));
    }
}
