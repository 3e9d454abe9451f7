/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use chrono::{DateTime, Utc};
use serde::Deserialize;

// Parses strings that may be "" or null and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

// Default for client-computed instants absent from the wire
pub fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "from_empty_str_to_none")]
        value: Option<String>,
    }

    #[test]
    fn empty_null_and_missing_become_none() {
        let empty: Probe = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(empty.value, None);

        let null: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, None);

        let missing: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.value, None);

        let set: Probe = serde_json::from_str(r#"{"value": "x"}"#).unwrap();
        assert_eq!(set.value.as_deref(), Some("x"));
    }
}
