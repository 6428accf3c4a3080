// FICHIER : src-schema/src/schema/formatter.rs

//! Substitution des jetons de formatage dans le texte enregistré.
//!
//! Le pipeline n'impose que le contrat `SchemaFormatter` : le texte brut est
//! transformé exactement une fois, juste avant validation, jamais avant
//! stockage. `TokenFormatter` en est l'implémentation de référence, adossée
//! aux jetons `#...#` reconnus.

use crate::schema::tokens::PlaceholderToken;
use crate::utils::json;
use crate::utils::prelude::*;
use crate::utils::Regex;
use chrono::{DateTime, Utc};
use regex::Captures;
use std::sync::OnceLock;

/// Contrat du collaborateur d'expansion. En son absence, le texte enregistré
/// traverse le pipeline inchangé.
pub trait SchemaFormatter {
    fn format(&self, text: &str) -> String;
}

// --- DONNÉES DE RÉSOLUTION ---

/// Valeurs du site, disponibles dans toutes les portées.
#[derive(Debug, Clone, Default)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
}

/// Valeurs propres à un contenu individuel. Tous les champs sont optionnels :
/// un jeton sans valeur résolue reste tel quel dans le texte.
#[derive(Debug, Clone, Default)]
pub struct ItemInfo {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub date_published: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub thumbnail_url: Option<String>,
}

impl ItemInfo {
    /// Projette les champs renseignés en objet JSON partiel.
    /// Les dates sortent en ISO 8601, les listes jointes par ", ".
    fn to_values(&self) -> Value {
        let mut map = json::Map::new();

        let mut put = |key: &str, val: Option<String>| {
            if let Some(v) = val {
                map.insert(key.to_string(), Value::String(v));
            }
        };

        put("title", self.title.clone());
        put("excerpt", self.excerpt.clone());
        put("date_published", self.date_published.map(|d| d.to_rfc3339()));
        put("date_modified", self.date_modified.map(|d| d.to_rfc3339()));
        put("author", self.author.clone());
        put(
            "categories",
            (!self.categories.is_empty()).then(|| self.categories.join(", ")),
        );
        put("tags", (!self.tags.is_empty()).then(|| self.tags.join(", ")));
        put("thumbnail_url", self.thumbnail_url.clone());

        Value::Object(map)
    }
}

// --- FORMATTER DE RÉFÉRENCE ---

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"#([a-z_]+)#").expect("motif de jeton valide"))
}

#[derive(Debug, Clone)]
pub struct TokenFormatter {
    values: json::Map<String, Value>,
}

impl TokenFormatter {
    pub fn new(site: &SiteInfo) -> Self {
        let mut values = json::Map::new();
        values.insert(
            "site_name".to_string(),
            Value::String(site.name.clone()),
        );
        values.insert(
            "site_description".to_string(),
            Value::String(site.description.clone()),
        );
        Self { values }
    }

    /// Superpose les valeurs d'un contenu individuel sur celles du site.
    pub fn with_item(self, item: &ItemInfo) -> Self {
        let mut base = Value::Object(self.values);
        json::merge(&mut base, item.to_values());

        let values = match base {
            Value::Object(map) => map,
            _ => json::Map::new(),
        };
        Self { values }
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }
}

impl SchemaFormatter for TokenFormatter {
    fn format(&self, text: &str) -> String {
        token_pattern()
            .replace_all(text, |caps: &Captures| {
                let key = &caps[1];
                match PlaceholderToken::from_key(key).and_then(|t| self.resolve(t.key())) {
                    // La valeur remplace le jeton à l'intérieur d'un document
                    // qui sera parsé en JSON : échappement chaîne JSON.
                    Some(value) => escape_json_fragment(value),
                    // Jeton inconnu ou sans valeur : on ne touche à rien,
                    // le parse aval tranchera.
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Échappe `s` comme contenu de chaîne JSON (guillemets, antislashs,
/// caractères de contrôle), sans les guillemets d'encadrement.
fn escape_json_fragment(s: &str) -> String {
    let quoted = Value::String(s.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

// ============================================================================
// TESTS
// ============================================================================
