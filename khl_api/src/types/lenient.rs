//! The platform reports some flags as `0`/`1` and others as `true`/`false`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrInt {
    Bool(bool),
    Int(i64),
}

pub(crate) fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => b,
        BoolOrInt::Int(i) => i != 0,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "super::bool_from_int")]
        on: bool,
    }

    #[test]
    fn accepts_both_forms() {
        for (json, expected) in [
            (r#"{"on":1}"#, true),
            (r#"{"on":0}"#, false),
            (r#"{"on":true}"#, true),
            (r#"{"on":false}"#, false),
        ] {
            let flag: Flag = serde_json::from_str(json).unwrap();
            assert_eq!(flag.on, expected, "{json}");
        }
        assert!(serde_json::from_str::<Flag>(r#"{"on":"yes"}"#).is_err());
    }
}
