use serde::{Deserialize, Serialize};

/// Success body returned by both query endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Answer text; Markdown for the in-house model, plain text for PandasAI
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_success_body() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"result":"| Month | Sales |"}"#).unwrap();
        assert_eq!(response.result, "| Month | Sales |");
    }

    #[test]
    fn test_missing_result_field_is_an_error() {
        assert!(serde_json::from_str::<QueryResponse>(r#"{"answer":"42"}"#).is_err());
    }
}
