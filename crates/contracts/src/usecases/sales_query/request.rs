use serde::{Deserialize, Serialize};

/// Request body for both query endpoints
///
/// Created once per form submission and consumed by the dispatcher.
/// The form guarantees `question` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Natural-language question about the sales data
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let request = QueryRequest {
            question: "total sales in March".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"question":"total sales in March"}"#);
    }
}
