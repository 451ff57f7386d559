use contracts::usecases::sales_query::{QueryModel, QueryRequest, QueryResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fixed user-facing message for any non-2xx status; the body is not inspected
const FETCH_FAILED: &str = "Failed to fetch response";

/// Send a question to the endpoint selected by `model` and extract the answer.
///
/// Transport failures surface their own message; HTTP-level failures collapse
/// into the fixed message regardless of status code.
pub async fn post_query(model: QueryModel, question: &str) -> Result<String, String> {
    let url = format!("{}{}", api_base(), model.endpoint_path());
    let payload = QueryRequest {
        question: question.to_string(),
    };

    let response = Request::post(&url)
        .json(&payload)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(FETCH_FAILED.to_string());
    }

    let data: QueryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.result)
}
