use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::predictor::PredictError;
use crate::server::routes::PredictionResponse;

/// Failed prediction, rendered in the same body shape as a success.
#[derive(Debug)]
pub enum ApiError {
    Prediction(PredictError),
    /// The request body could not be read as a form submission
    Rejected { status: StatusCode, message: String },
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        Self::Prediction(err)
    }
}

impl ApiError {
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Prediction(PredictError::Normalize(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Prediction(PredictError::Estimate(_) | PredictError::Empty) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Rejected { status, .. } => *status,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Prediction(err) => err.to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        tracing::warn!(error = %message, status = %status, "Prediction failed");

        let body = PredictionResponse {
            prediction: format!("Error during prediction: {}", message),
        };
        (status, Json(body)).into_response()
    }
}
