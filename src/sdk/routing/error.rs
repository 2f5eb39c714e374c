use serde::Deserialize;
use thiserror::Error;

// Error envelope Bing returns alongside a non-success status
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BingErrorPayload {
    pub status_code: u16,
    pub status_description: String,
    #[serde(default)]
    pub error_details: Vec<String>,
}

impl BingErrorPayload {
    /// Flattens the envelope into a single line suitable for logs.
    pub fn message(&self) -> String {
        if self.error_details.is_empty() {
            self.status_description.clone()
        } else {
            format!("{}: {}", self.status_description, self.error_details.join("; "))
        }
    }
}

/// Failures of the outbound route request.
#[derive(Error, Debug)]
pub enum RoutingError {
    // The service answered with its structured error envelope
    #[error("API Error (Status {status}): {message}")]
    ApiError { status: u16, message: String },

    // A fallback for when the error body isn't the expected envelope
    #[error("Unstructured API Error (Status {status}): {body}")]
    RawApiError { status: u16, body: String },

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid routing base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl RoutingError {
    /// HTTP status reported by the service, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            RoutingError::ApiError { status, .. } | RoutingError::RawApiError { status, .. } => {
                Some(*status)
            }
            RoutingError::RequestError(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The response body did not have the shape of a route.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse route response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Route response contains no resource sets")]
    NoResourceSets,

    #[error("First resource set contains no resources")]
    NoResources,

    #[error("Expected exactly one route leg, found {0}")]
    RouteLegCount(usize),
}
