// FICHIER : src-schema/src/utils/logger.rs

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

/// Initialise le logger console (format compact, filtre via RUST_LOG).
/// Le pipeline de rendu n'exige aucun log ; tout passe en `debug`.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let registry = fmt()
            .compact()
            .with_target(false)
            .with_env_filter(env_filter);

        if registry.try_init().is_err() {
            tracing::warn!(
                "⚠️ [Logger] Tentative de ré-initialisation ignorée (Global subscriber déjà actif)."
            );
        }
    });
}
