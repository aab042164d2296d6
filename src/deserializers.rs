//! Lenient integer fields: browser forms post numbers as strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: serde::de::Error>(self) -> Result<Option<i64>, E> {
        match self {
            IntOrString::Int(n) => Ok(Some(n)),
            IntOrString::Str(s) if s.trim().is_empty() => Ok(None),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::custom(format!("wrong value {s}, can not parse to i64"))),
        }
    }
}

/// Accepts `3`, `"3"`, `null`, `""` (the last two as `None`).
pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(v) => v.into_i64(),
        None => Ok(None),
    }
}

/// Like [`lenient_opt_i64`] but the value must be present.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?
        .into_i64::<D::Error>()?
        .ok_or_else(|| serde::de::Error::custom("expected an integer, got an empty string"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug)]
    struct Opt {
        #[serde(default, deserialize_with = "lenient_opt_i64")]
        n: Option<i64>,
    }

    #[derive(Deserialize, Debug)]
    struct Req {
        #[serde(deserialize_with = "lenient_i64")]
        n: i64,
    }

    #[test]
    fn test_optional_forms() {
        let parse = |v| serde_json::from_value::<Opt>(v).unwrap().n;
        assert_eq!(parse(json!({"n": 4})), Some(4));
        assert_eq!(parse(json!({"n": "4"})), Some(4));
        assert_eq!(parse(json!({"n": " 7 "})), Some(7));
        assert_eq!(parse(json!({"n": null})), None);
        assert_eq!(parse(json!({"n": ""})), None);
        assert_eq!(parse(json!({})), None);
    }

    #[test]
    fn test_optional_rejects_garbage() {
        assert!(serde_json::from_value::<Opt>(json!({"n": "four"})).is_err());
        assert!(serde_json::from_value::<Opt>(json!({"n": [1]})).is_err());
    }

    #[test]
    fn test_required_forms() {
        assert_eq!(serde_json::from_value::<Req>(json!({"n": 0})).unwrap().n, 0);
        assert_eq!(serde_json::from_value::<Req>(json!({"n": "12"})).unwrap().n, 12);
        assert!(serde_json::from_value::<Req>(json!({"n": ""})).is_err());
        assert!(serde_json::from_value::<Req>(json!({"n": null})).is_err());
        assert!(serde_json::from_value::<Req>(json!({})).is_err());
    }
}
