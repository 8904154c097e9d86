//! JSON serialization for engine results.

use serde::Serialize;

/// Serialize any engine result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's own result types).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize any engine result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's own result types).
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gof::GofResult;
    use crate::types::{Distribution, GofTest};

    fn make_result() -> GofResult {
        GofResult {
            test: GofTest::KolmogorovSmirnov,
            distribution: Distribution::Normal,
            statistic: 0.08,
            p_value: 0.54,
            critical_value: Some(0.136),
            degrees_of_freedom: None,
            sample_size: 100,
            significance_level: 0.05,
            is_reject: false,
        }
    }

    #[test]
    fn compact_json_carries_tags_and_fields() {
        let json = to_json(&make_result()).unwrap();
        assert!(json.contains("\"test\":\"kolmogorov-smirnov\""));
        assert!(json.contains("\"distribution\":\"normal\""));
        assert!(json.contains("\"p_value\":0.54"));
        assert!(json.contains("\"is_reject\":false"));
    }

    #[test]
    fn pretty_json_is_multiline() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("statistic"));
    }

    #[test]
    fn result_round_trips() {
        let original = make_result();
        let json = to_json(&original).unwrap();
        let back: GofResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.test, original.test);
        assert_eq!(back.p_value, original.p_value);
        assert_eq!(back.critical_value, original.critical_value);
    }
}
