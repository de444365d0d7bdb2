//! Wire shape of the analysis endpoint's JSON body.
//!
//! Every field is optional and decoded leniently: a successful payload with
//! missing or oddly typed fields degrades to placeholders instead of failing.

use serde::Deserialize;
use serde_json::Value;

pub const SUCCESS_STATUS: &str = "success";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("response body is not a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub provider_used: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub profile: Profile,
    #[serde(default, deserialize_with = "lenient::object")]
    pub advice: Advice,
    #[serde(default, deserialize_with = "lenient::list")]
    pub jobs: Vec<JobListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub years_of_experience: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub education: Education,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub technical_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Advice {
    #[serde(default, deserialize_with = "lenient::strings")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub improvement_areas: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub actionable_tips: Vec<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub career_advice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct JobListing {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub match_score: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub salary_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub requirements: Vec<String>,
}

impl AnalysisResponse {
    /// Interprets a decoded JSON body. Only non-object bodies are rejected.
    pub fn from_json(value: Value) -> Result<Self, PayloadError> {
        if !value.is_object() {
            return Err(PayloadError::NotAnObject);
        }
        // Every field is defaulted and decoded from a `Value`, so an object
        // always fits.
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    /// Server-supplied error text, or the generic fallback.
    pub fn failure_message(&self) -> &str {
        self.error.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::{Number, Value};

    /// Scalar text; empty strings, nulls and containers read as absent.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(scalar_text(Value::deserialize(deserializer)?))
    }

    /// Like [`text`], but `false` and numeric zero also read as absent, for
    /// fields the page replaces with a placeholder when falsy.
    pub fn truthy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(false) => Ok(None),
            Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
            value => Ok(scalar_text(value)),
        }
    }

    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items.into_iter().filter_map(scalar_text).collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// Sequence of records; entries that are not records are skipped.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
            _ => Ok(T::default()),
        }
    }

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number_text(&number)),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Integral floats print without a fractional part (`5.0` as `5`).
    fn number_text(number: &Number) -> String {
        match number.as_f64() {
            Some(float) if number.is_f64() => float.to_string(),
            _ => number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AnalysisResponse, PayloadError};

    #[test]
    fn non_object_body_is_rejected() {
        assert_eq!(
            AnalysisResponse::from_json(json!(["success"])),
            Err(PayloadError::NotAnObject)
        );
        assert_eq!(
            AnalysisResponse::from_json(json!("success")),
            Err(PayloadError::NotAnObject)
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let response = AnalysisResponse::from_json(json!({"status": "success"})).unwrap();
        assert!(response.is_success());
        assert_eq!(response.profile, Default::default());
        assert_eq!(response.advice, Default::default());
        assert!(response.jobs.is_empty());
    }

    #[test]
    fn mistyped_fields_degrade_instead_of_failing() {
        let response = AnalysisResponse::from_json(json!({
            "status": "success",
            "profile": {
                "years_of_experience": 0,
                "experience_level": {"nested": true},
                "education": "BSc",
                "technical_skills": ["Rust", 7, null, {"x": 1}, ""]
            },
            "advice": null,
            "jobs": [{"title": "Engineer at Acme", "match_score": 91.5}, "junk", 3]
        }))
        .unwrap();

        assert_eq!(response.profile.years_of_experience, None);
        assert_eq!(response.profile.experience_level, None);
        assert_eq!(response.profile.education.field, None);
        assert_eq!(response.profile.technical_skills, vec!["Rust", "7"]);
        assert_eq!(response.jobs.len(), 1);
        assert_eq!(response.jobs[0].match_score.as_deref(), Some("91.5"));
    }

    #[test]
    fn falsy_values_read_as_absent_where_the_page_substitutes() {
        let response = AnalysisResponse::from_json(json!({
            "status": "error",
            "error": false,
            "profile": {"years_of_experience": 0.0, "experience_level": 0},
            "advice": {"career_advice": false, "strengths": [false, 0]}
        }))
        .unwrap();

        assert_eq!(response.failure_message(), "Unknown error");
        assert_eq!(response.profile.years_of_experience, None);
        assert_eq!(response.profile.experience_level, None);
        assert_eq!(response.advice.career_advice, None);
        assert_eq!(response.advice.strengths, vec!["false", "0"]);
    }

    #[test]
    fn status_must_be_exactly_success() {
        for status in [json!("Success"), json!("success "), json!(true), json!(null)] {
            let response = AnalysisResponse::from_json(json!({ "status": status })).unwrap();
            assert!(!response.is_success());
        }
    }

    #[test]
    fn failure_message_falls_back_when_error_missing_or_empty() {
        let response =
            AnalysisResponse::from_json(json!({"status": "failed", "error": "bad file"})).unwrap();
        assert_eq!(response.failure_message(), "bad file");

        let response =
            AnalysisResponse::from_json(json!({"status": "failed", "error": ""})).unwrap();
        assert_eq!(response.failure_message(), "Unknown error");
    }
}
