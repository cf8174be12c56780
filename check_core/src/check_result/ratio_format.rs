//! JSON has no infinity, so infinite ratios are written as the string
//! `"inf"`. Reading accepts plain numbers or `"inf"`/`"infinity"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

const INFINITY_TOKEN: &str = "inf";

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if *v == f64::INFINITY => serializer.serialize_some(INFINITY_TOKEN),
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<RawNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawNumber::Number(v)) => Ok(Some(v)),
        Some(RawNumber::Text(text)) => parse_text(&text).map(Some).map_err(D::Error::custom),
    }
}

fn parse_text(text: &str) -> Result<f64, String> {
    match text.trim().to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" | "+infinity" => Ok(f64::INFINITY),
        other => other
            .parse::<f64>()
            .map_err(|_| format!("expected a number or \"{INFINITY_TOKEN}\", got \"{text}\"")),
    }
}
