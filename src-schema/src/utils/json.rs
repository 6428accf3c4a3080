// FICHIER : src-schema/src/utils/json.rs

use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
pub use serde_json::{json, Map, Value};

/// Parse une chaîne JSON en un type T.
/// L'ordre des clés est conservé tel quel (feature `preserve_order`).
pub fn parse<T: DeserializeOwned>(s: &str) -> Result<T> {
    let val = serde_json::from_str(s)?;
    Ok(val)
}

/// Convertit un type T en chaîne JSON compacte (forme canonique).
pub fn stringify<T: Serialize>(v: &T) -> Result<String> {
    let s = serde_json::to_string(v)?;
    Ok(s)
}

/// Convertit un type T en chaîne JSON formatée (pretty).
pub fn stringify_pretty<T: Serialize>(v: &T) -> Result<String> {
    let s = serde_json::to_string_pretty(v)?;
    Ok(s)
}

/// Fusionne récursivement deux objets JSON (Deep Merge).
/// L'objet `b` écrase les valeurs de `a` en cas de conflit.
pub fn merge(a: &mut Value, b: Value) {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            for (k, v) in b {
                merge(a.entry(k).or_insert(Value::Null), v);
            }
        }
        (a, b) => *a = b,
    }
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::prelude::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Record {
        id: u64,
        kind: String,
    }

    #[test]
    fn test_parse_success() {
        let raw = r#"{"id": 1, "kind": "post"}"#;
        let rec: Record = parse(raw).unwrap();
        assert_eq!(rec.id, 1);
    }

    #[test]
    fn test_parse_error_is_malformed_json() {
        let bad_raw = r#"{"id": "#;
        let res: Result<Value> = parse(bad_raw);

        assert!(matches!(res, Err(AppError::MalformedJson(_))));
    }

    #[test]
    fn test_stringify_preserves_key_order() {
        // La feature preserve_order garantit une re-sérialisation stable
        let raw = r#"{"z": 1, "a": 2, "m": 3}"#;
        let val: Value = parse(raw).unwrap();
        assert_eq!(stringify(&val).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_deep_merge() {
        let mut base = json!({ "site": { "name": "Demo", "lang": "fr" }, "title": "A" });
        let update = json!({ "site": { "name": "Prod" }, "title": "B" });

        merge(&mut base, update);

        assert_eq!(base["site"]["name"], "Prod");
        assert_eq!(base["site"]["lang"], "fr");
        assert_eq!(base["title"], "B");
    }
}
