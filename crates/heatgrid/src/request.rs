use serde::{Deserialize, Serialize};

use crate::{error::ResizeError, resizer::GridResizer};

/// A resize request as sent by a rendering client.
///
/// ```json
/// {"data": [[0, 10], [10, 0]], "size_x": 4, "size_y": 4, "max_value": 9}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeRequest {
    /// The coarse grid, row by row.
    pub data: Vec<Vec<f64>>,
    /// Requested output width.
    pub size_x: usize,
    /// Requested output height.
    pub size_y: usize,
    /// Highest output level.
    pub max_value: i64,
}

impl ResizeRequest {
    /// Run the request with the default resizer configuration.
    pub fn execute(&self) -> Result<Vec<Vec<i64>>, ResizeError> {
        GridResizer::default().execute(self)
    }
}

/// The answer to a [`ResizeRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResizeResponse {
    /// The resized grid of levels.
    Ok {
        /// Output levels, row by row.
        data: Vec<Vec<i64>>,
    },
    /// The request was rejected.
    Error {
        /// Error category, see [`ResizeError::kind`].
        kind: String,
        /// Human readable description.
        message: String,
    },
}

impl From<Result<Vec<Vec<i64>>, ResizeError>> for ResizeResponse {
    fn from(result: Result<Vec<Vec<i64>>, ResizeError>) -> Self {
        match result {
            Ok(data) => ResizeResponse::Ok { data },
            Err(err) => ResizeResponse::Error {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let request: ResizeRequest = serde_json::from_str(
            r#"{"data": [[0, 10], [10, 0]], "size_x": 4, "size_y": 4, "max_value": 9}"#,
        )?;
        assert_eq!(request.data, vec![vec![0.0, 10.0], vec![10.0, 0.0]]);

        let response = ResizeResponse::from(request.execute());
        let json = serde_json::to_value(&response)?;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"].as_array().map(|rows| rows.len()), Some(4));
        Ok(())
    }

    #[test]
    fn test_response_error() -> Result<(), serde_json::Error> {
        let request = ResizeRequest {
            data: vec![vec![1.0, 1.0], vec![1.0, 1.0]],
            size_x: 4,
            size_y: 4,
            max_value: 9,
        };

        let response = ResizeResponse::from(request.execute());
        let json = serde_json::to_value(&response)?;
        assert_eq!(json["status"], "error");
        assert_eq!(json["kind"], "DegenerateRange");
        Ok(())
    }
}
