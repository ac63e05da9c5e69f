use axum::{
    async_trait,
    extract::{Extension, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use car_data_prep::RawRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Form fields posted by the prediction page. Absent fields read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PredictForm {
    pub manufactor: String,
    #[serde(rename = "Year")]
    pub year: String,
    pub model: String,
    #[serde(rename = "Hand")]
    pub hand: String,
    #[serde(rename = "Gear")]
    pub gear: String,
    #[serde(rename = "capacity_Engine")]
    pub capacity_engine: String,
    #[serde(rename = "Engine_type")]
    pub engine_type: String,
    #[serde(rename = "Prev_ownership")]
    pub prev_ownership: String,
    #[serde(rename = "Curr_ownership")]
    pub curr_ownership: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Km")]
    pub km: String,
    #[serde(rename = "Test")]
    pub test: String,
}

fn number(text: &str) -> Option<f64> {
    text.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

impl From<PredictForm> for RawRecord {
    fn from(form: PredictForm) -> Self {
        RawRecord {
            manufacturer: Some(form.manufactor),
            year: number(&form.year),
            model: Some(form.model),
            hand: number(&form.hand),
            gear: Some(form.gear),
            capacity_engine: Some(form.capacity_engine),
            engine_type: Some(form.engine_type),
            prev_ownership: Some(form.prev_ownership),
            curr_ownership: Some(form.curr_ownership),
            description: Some(form.description),
            km: Some(form.km),
            test: Some(form.test),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

/// A prediction form posted either url-encoded or as `multipart/form-data`
/// (what a browser `FormData` body sends).
pub struct PredictSubmission(pub PredictForm);

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

fn rejected(rejection: impl IntoResponse + std::fmt::Display) -> ApiError {
    let message = rejection.to_string();
    ApiError::rejected(rejection.into_response().status(), message)
}

#[async_trait]
impl<S> FromRequest<S> for PredictSubmission
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Form(form) = Form::<PredictForm>::from_request(req, state)
                .await
                .map_err(rejected)?;
            return Ok(Self(form));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(rejected)?;
        let mut fields = Map::new();
        while let Some(field) = multipart.next_field().await.map_err(rejected)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field.text().await.map_err(rejected)?;
            fields.insert(name, Value::String(value));
        }

        let form = serde_json::from_value(Value::Object(fields)).map_err(|err| {
            ApiError::rejected(StatusCode::BAD_REQUEST, err.to_string())
        })?;
        Ok(Self(form))
    }
}

/// Predict the price of the submitted listing
pub async fn predict_handler(
    Extension(predictor): Extension<AppState>,
    PredictSubmission(form): PredictSubmission,
) -> Result<Json<PredictionResponse>, ApiError> {
    let price = predictor.predict(form.into())?;

    Ok(Json(PredictionResponse {
        prediction: format!("Predicted Price: {:.2}", price),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_parse_or_go_missing() {
        let form = PredictForm {
            year: " 2018 ".to_string(),
            hand: "שתיים".to_string(),
            ..Default::default()
        };

        let raw = RawRecord::from(form);

        assert_eq!(raw.year, Some(2018.0));
        assert_eq!(raw.hand, None);
    }

    #[test]
    fn text_fields_pass_through_untrimmed() {
        let form = PredictForm {
            km: "1,000".to_string(),
            capacity_engine: String::new(),
            ..Default::default()
        };

        let raw = RawRecord::from(form);

        assert_eq!(raw.km.as_deref(), Some("1,000"));
        assert_eq!(raw.capacity_engine.as_deref(), Some(""));
        assert_eq!(raw.price, None);
    }
}
