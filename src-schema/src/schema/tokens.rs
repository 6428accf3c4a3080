// FICHIER : src-schema/src/schema/tokens.rs

//! Jetons de formatage reconnus dans le texte enregistré, de la forme
//! `#nom_du_jeton#`. L'ensemble complet n'a de sens que pour un contenu
//! individuel ; les portées terme et site n'offrent que les jetons du site.

use crate::store::ScopeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderToken {
    SiteName,
    SiteDescription,
    Title,
    Excerpt,
    DatePublished,
    DateModified,
    Author,
    Categories,
    Tags,
    ThumbnailUrl,
}

impl PlaceholderToken {
    /// Forme textuelle du jeton, dièses compris.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderToken::SiteName => "#site_name#",
            PlaceholderToken::SiteDescription => "#site_description#",
            PlaceholderToken::Title => "#title#",
            PlaceholderToken::Excerpt => "#excerpt#",
            PlaceholderToken::DatePublished => "#date_published#",
            PlaceholderToken::DateModified => "#date_modified#",
            PlaceholderToken::Author => "#author#",
            PlaceholderToken::Categories => "#categories#",
            PlaceholderToken::Tags => "#tags#",
            PlaceholderToken::ThumbnailUrl => "#thumbnail_url#",
        }
    }

    /// Nom du jeton sans les dièses : la clé de résolution.
    pub fn key(&self) -> &'static str {
        let s = self.as_str();
        &s[1..s.len() - 1]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.key() == key)
    }

    pub fn all() -> &'static [PlaceholderToken] {
        &[
            PlaceholderToken::SiteName,
            PlaceholderToken::SiteDescription,
            PlaceholderToken::Title,
            PlaceholderToken::Excerpt,
            PlaceholderToken::DatePublished,
            PlaceholderToken::DateModified,
            PlaceholderToken::Author,
            PlaceholderToken::Categories,
            PlaceholderToken::Tags,
            PlaceholderToken::ThumbnailUrl,
        ]
    }
}

/// Jetons proposés en aide de saisie pour une portée d'édition donnée.
/// Seule la portée contenu dispose des données par élément.
pub fn suggested_for(kind: ScopeKind) -> Vec<PlaceholderToken> {
    let mut tokens = vec![
        PlaceholderToken::SiteName,
        PlaceholderToken::SiteDescription,
    ];

    if kind == ScopeKind::Post {
        tokens.extend([
            PlaceholderToken::Title,
            PlaceholderToken::Excerpt,
            PlaceholderToken::DatePublished,
            PlaceholderToken::DateModified,
            PlaceholderToken::Author,
            PlaceholderToken::Categories,
            PlaceholderToken::Tags,
            PlaceholderToken::ThumbnailUrl,
        ]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_strips_hashes() {
        assert_eq!(PlaceholderToken::SiteName.key(), "site_name");
        assert_eq!(PlaceholderToken::ThumbnailUrl.key(), "thumbnail_url");
    }

    #[test]
    fn test_from_key_roundtrip() {
        for token in PlaceholderToken::all() {
            assert_eq!(PlaceholderToken::from_key(token.key()), Some(*token));
        }
        assert_eq!(PlaceholderToken::from_key("inconnu"), None);
    }

    #[test]
    fn test_suggestions_are_scope_restricted() {
        let site = suggested_for(ScopeKind::Site);
        assert_eq!(
            site,
            vec![
                PlaceholderToken::SiteName,
                PlaceholderToken::SiteDescription
            ]
        );

        // Même ensemble réduit pour les termes
        assert_eq!(suggested_for(ScopeKind::Term), site);

        // Ensemble complet pour les contenus
        let post = suggested_for(ScopeKind::Post);
        assert_eq!(post.len(), PlaceholderToken::all().len());
        assert!(post.contains(&PlaceholderToken::DatePublished));
    }
}
