use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::deserialize_number_from_string;

// the frontend sends ids both as numbers and as strings ("3"), so accept either
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LooseI64(#[serde(deserialize_with = "deserialize_number_from_string")] pub i64);

/// `null` and a missing field both mean "no value"; anything else has to be a number.
pub fn deserialize_optional_loose_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseI64>::deserialize(deserializer)?;
    Ok(value.map(|v| v.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_optional_loose_i64")]
        category: Option<i64>,
        #[serde(default)]
        ids: Vec<LooseI64>,
    }

    #[test]
    fn numbers_and_numeric_strings() {
        let body: Body = serde_json::from_str(r#"{"category": "4", "ids": [1, "2", 3]}"#).unwrap();
        assert_eq!(body.category, Some(4));
        assert_eq!(body.ids, vec![LooseI64(1), LooseI64(2), LooseI64(3)]);
    }

    #[test]
    fn missing_and_null_are_none() {
        let body: Body = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.category, None);
        let body: Body = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert_eq!(body.category, None);
    }

    #[test]
    fn words_are_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"category": "bad word"}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"ids": ["x"]}"#).is_err());
    }
}
