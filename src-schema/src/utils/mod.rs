// FICHIER : src-schema/src/utils/mod.rs

// =========================================================================
//  UTILS - Foundation Layer
// =========================================================================

pub mod error;
pub mod json;
pub mod logger;

// --- FAÇADES SÉMANTIQUES ---

/// **Core Foundation** : Types de base et Erreurs.
pub mod core {
    pub use super::error::{AnyResult, AppError, Result};
}

/// **Data Abstraction** : Manipulation JSON.
pub mod data {
    pub use super::json::{json, merge, parse, stringify, stringify_pretty, Map, Value};
    pub use serde::{Deserialize, Serialize};
    pub use std::collections::HashMap;
}

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::core::{AppError, Result};
    pub use super::data::{json, Deserialize, Serialize, Value};
    pub use tracing::{debug, error, info, warn};
}

// --- EXPORTS DIRECTS ---
// Requis par les modules métier (store, render, editor)

pub use error::{AppError, Result};
pub use logger::init_logging;

pub use regex::Regex;
