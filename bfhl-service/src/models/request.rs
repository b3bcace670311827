//! The `/bfhl` request model.

use serde_json::Value;
use service_core::error::AppError;

/// The single operation carried by a `/bfhl` request body.
///
/// The body is an open JSON map; exactly one recognized key must be present.
/// [`BfhlRequest::from_body`] rejects everything else before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum BfhlRequest {
    Fibonacci(u64),
    Prime(Vec<i64>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    Ai(String),
}

impl BfhlRequest {
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::Validation("Exactly one key is required".to_string()))?;

        let mut entries = map.iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(AppError::Validation(
                    "Exactly one key is required".to_string(),
                ))
            }
        };

        match key.as_str() {
            "fibonacci" => {
                let count = value
                    .as_u64()
                    .ok_or_else(|| AppError::Operation("Invalid fibonacci input".to_string()))?;
                Ok(BfhlRequest::Fibonacci(count))
            }
            "prime" => {
                let items = value
                    .as_array()
                    .ok_or_else(|| AppError::Operation("Prime input must be array".to_string()))?;
                // Non-integer elements never reach the filter.
                let numbers = items.iter().filter_map(Value::as_i64).collect();
                Ok(BfhlRequest::Prime(numbers))
            }
            "lcm" => Ok(BfhlRequest::Lcm(integer_elements(value, "Invalid LCM input")?)),
            "hcf" => Ok(BfhlRequest::Hcf(integer_elements(value, "Invalid HCF input")?)),
            "AI" => {
                let question = value
                    .as_str()
                    .ok_or_else(|| AppError::Operation("AI input must be string".to_string()))?;
                Ok(BfhlRequest::Ai(question.to_string()))
            }
            _ => Err(AppError::Validation("Invalid key".to_string())),
        }
    }
}

/// Requires a non-empty array of integers; any other shape yields `message`.
fn integer_elements(value: &Value, message: &str) -> Result<Vec<i64>, AppError> {
    let items = value
        .as_array()
        .ok_or_else(|| AppError::Operation(message.to_string()))?;

    if items.is_empty() {
        return Err(AppError::Operation(message.to_string()));
    }

    items
        .iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| AppError::Operation(message.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_err(body: Value) -> String {
        BfhlRequest::from_body(&body)
            .expect_err("expected parse failure")
            .to_string()
    }

    #[test]
    fn parses_each_operation() {
        assert_eq!(
            BfhlRequest::from_body(&json!({"fibonacci": 5})).unwrap(),
            BfhlRequest::Fibonacci(5)
        );
        assert_eq!(
            BfhlRequest::from_body(&json!({"prime": [1, 2, 3]})).unwrap(),
            BfhlRequest::Prime(vec![1, 2, 3])
        );
        assert_eq!(
            BfhlRequest::from_body(&json!({"lcm": [4, 6]})).unwrap(),
            BfhlRequest::Lcm(vec![4, 6])
        );
        assert_eq!(
            BfhlRequest::from_body(&json!({"hcf": [12, 18]})).unwrap(),
            BfhlRequest::Hcf(vec![12, 18])
        );
        assert_eq!(
            BfhlRequest::from_body(&json!({"AI": "capital of France?"})).unwrap(),
            BfhlRequest::Ai("capital of France?".to_string())
        );
    }

    #[test]
    fn rejects_zero_and_multiple_keys() {
        assert_eq!(parse_err(json!({})), "Exactly one key is required");
        assert_eq!(
            parse_err(json!({"fibonacci": 5, "prime": [2]})),
            "Exactly one key is required"
        );
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert_eq!(parse_err(json!([1, 2, 3])), "Exactly one key is required");
        assert_eq!(parse_err(json!("fibonacci")), "Exactly one key is required");
    }

    #[test]
    fn rejects_unrecognized_key() {
        assert_eq!(parse_err(json!({"factorial": 5})), "Invalid key");
        // Operation keys are case-sensitive.
        assert_eq!(parse_err(json!({"ai": "question"})), "Invalid key");
    }

    #[test]
    fn rejects_bad_fibonacci_values() {
        assert_eq!(parse_err(json!({"fibonacci": -1})), "Invalid fibonacci input");
        assert_eq!(parse_err(json!({"fibonacci": 2.5})), "Invalid fibonacci input");
        assert_eq!(parse_err(json!({"fibonacci": "5"})), "Invalid fibonacci input");
    }

    #[test]
    fn prime_drops_non_integer_elements() {
        assert_eq!(
            BfhlRequest::from_body(&json!({"prime": [2, "three", 4.5, 5]})).unwrap(),
            BfhlRequest::Prime(vec![2, 5])
        );
    }

    #[test]
    fn rejects_bad_prime_shapes() {
        assert_eq!(parse_err(json!({"prime": 7})), "Prime input must be array");
    }

    #[test]
    fn rejects_bad_fold_inputs() {
        assert_eq!(parse_err(json!({"lcm": []})), "Invalid LCM input");
        assert_eq!(parse_err(json!({"lcm": "4,6"})), "Invalid LCM input");
        assert_eq!(parse_err(json!({"lcm": [4, 6.5]})), "Invalid LCM input");
        assert_eq!(parse_err(json!({"hcf": []})), "Invalid HCF input");
        assert_eq!(parse_err(json!({"hcf": [12, null]})), "Invalid HCF input");
    }

    #[test]
    fn rejects_non_string_ai_values() {
        assert_eq!(parse_err(json!({"AI": 42})), "AI input must be string");
        assert_eq!(parse_err(json!({"AI": ["question"]})), "AI input must be string");
    }
}
