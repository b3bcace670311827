use crate::models::BfhlRequest;
use crate::services::operations;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use service_core::error::AppError;

/// Result payload of a successful `/bfhl` call.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OperationResult {
    Sequence(Vec<u64>),
    Primes(Vec<i64>),
    Number(i64),
    Word(String),
}

#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub official_email: String,
    pub data: OperationResult,
}

/// Dispatch the single recognized key of the request body to its operation.
#[tracing::instrument(skip(state, body))]
pub async fn bfhl(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<BfhlResponse>, AppError> {
    let request = BfhlRequest::from_body(&body)?;

    let data = match request {
        BfhlRequest::Fibonacci(count) => {
            OperationResult::Sequence(operations::fibonacci(count)?)
        }
        BfhlRequest::Prime(numbers) => {
            OperationResult::Primes(operations::filter_primes(&numbers))
        }
        BfhlRequest::Lcm(numbers) => OperationResult::Number(operations::fold_lcm(&numbers)?),
        BfhlRequest::Hcf(numbers) => OperationResult::Number(operations::fold_hcf(&numbers)?),
        BfhlRequest::Ai(question) => {
            OperationResult::Word(state.provider.answer_one_word(&question).await?)
        }
    };

    Ok(Json(BfhlResponse {
        is_success: true,
        official_email: state.official_email.clone(),
        data,
    }))
}
