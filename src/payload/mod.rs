mod verdict;

pub use verdict::parse_status;

use crate::error::PayloadError;
use serde_json::Value;

/// Validated top-level review API response. Items stay as raw JSON: only the
/// first one of a non-empty list is ever inspected, and that inspection
/// belongs to the formatter.
#[derive(Debug, Clone)]
pub struct ReviewResponse {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

/// Narrow a raw JSON body to [`ReviewResponse`]. Pure shape check, no item
/// inspection.
pub fn validate(value: &Value) -> Result<ReviewResponse, PayloadError> {
    let object = value
        .as_object()
        .ok_or_else(|| PayloadError::Shape("response is not a JSON object".into()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(PayloadError::MissingKey("homeworks"))?;
    let current_date = object
        .get("current_date")
        .ok_or(PayloadError::MissingKey("current_date"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| PayloadError::Shape("'homeworks' is not a list".into()))?;
    let current_date = current_date
        .as_i64()
        .ok_or_else(|| PayloadError::Shape("'current_date' is not an integer timestamp".into()))?;

    Ok(ReviewResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_response() {
        let body = json!({
            "homeworks": [{"status": "approved", "homework_name": "HW1"}],
            "current_date": 1_682_365_739,
        });

        let response = validate(&body).unwrap();
        assert_eq!(response.homeworks.len(), 1);
        assert_eq!(response.current_date, 1_682_365_739);
    }

    #[test]
    fn accepts_empty_homework_list() {
        let body = json!({"homeworks": [], "current_date": 1000});

        let response = validate(&body).unwrap();
        assert!(response.homeworks.is_empty());
    }

    #[test]
    fn rejects_non_object_response() {
        let err = validate(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, PayloadError::Shape(_)));
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let err = validate(&json!({"current_date": 1000})).unwrap_err();
        assert!(matches!(err, PayloadError::MissingKey("homeworks")));
    }

    #[test]
    fn rejects_missing_current_date_key() {
        let err = validate(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, PayloadError::MissingKey("current_date")));
    }

    #[test]
    fn rejects_homeworks_of_wrong_type() {
        let body = json!({"homeworks": "not a list", "current_date": 1000});

        let err = validate(&body).unwrap_err();
        assert!(matches!(err, PayloadError::Shape(_)));
    }

    #[test]
    fn rejects_non_integer_current_date() {
        let body = json!({"homeworks": [], "current_date": "soon"});

        let err = validate(&body).unwrap_err();
        assert!(matches!(err, PayloadError::Shape(_)));
    }

    #[test]
    fn does_not_inspect_items() {
        // Garbage items pass validation; the formatter owns item checks.
        let body = json!({"homeworks": [42, "junk"], "current_date": 1000});

        assert!(validate(&body).is_ok());
    }
}
