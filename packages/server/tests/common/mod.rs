#![allow(dead_code)]

// Common test utilities

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
    Router,
};
use car_data_prep::{CarDataPrep, PrepConfig, RawRecord};
use price_model::{train, TrainOptions};
use server_core::{server::build_app, PricePredictor};

pub const REFERENCE_YEAR: i32 = 2024;

const MAKES: [(&str, &str); 3] = [("טויוטה", "קורולה"), ("מאזדה", "3"), ("קיה", "פיקנטו")];

fn training_listings() -> Vec<RawRecord> {
    (0..45)
        .map(|i| {
            let (manufacturer, model) = MAKES[i % MAKES.len()];
            let year = 2010 + (i * 5 % 13) as i32;
            let age = f64::from(REFERENCE_YEAR - year);
            let km = 13_000.0 * age + ((i * 1_913) % 15_000) as f64;

            RawRecord {
                manufacturer: Some(manufacturer.to_string()),
                model: Some(model.to_string()),
                year: Some(f64::from(year)),
                hand: Some(1.0 + (i % 3) as f64),
                gear: Some("אוטומטית".to_string()),
                capacity_engine: Some((1400 + (i % 4) * 200).to_string()),
                engine_type: Some("בנזין".to_string()),
                prev_ownership: Some("פרטית".to_string()),
                curr_ownership: Some("פרטית".to_string()),
                km: Some(format!("{km}")),
                test: Some("01/06/2025".to_string()),
                price: Some(140_000.0 - 6_500.0 * age - 0.12 * km),
                ..Default::default()
            }
        })
        .collect()
}

pub fn predictor() -> PricePredictor {
    let config = PrepConfig::default().with_reference_year(REFERENCE_YEAR);
    let (records, stats) = CarDataPrep::new(config.clone())
        .fit_transform(training_listings())
        .unwrap();
    let options = TrainOptions {
        folds: 0,
        ..Default::default()
    };
    let artifact = train(&records, stats, &options).unwrap();
    PricePredictor::new(artifact, config)
}

pub fn app() -> Router {
    build_app(Arc::new(predictor()))
}

/// A fully filled-in form submission.
pub fn full_form() -> Vec<(&'static str, String)> {
    [
        ("manufactor", "טויוטה"),
        ("Year", "2018"),
        ("model", "קורולה"),
        ("Hand", "2"),
        ("Gear", "אוטומטית"),
        ("capacity_Engine", "1600"),
        ("Engine_type", "בנזין"),
        ("Prev_ownership", "פרטית"),
        ("Curr_ownership", "פרטית"),
        ("Description", "רכב שמור"),
        ("Km", "90,000"),
        ("Test", "01/01/2025"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect()
}

/// Replace one field of a form.
pub fn with_field(
    mut form: Vec<(&'static str, String)>,
    key: &str,
    value: &str,
) -> Vec<(&'static str, String)> {
    for field in form.iter_mut().filter(|(k, _)| *k == key) {
        field.1 = value.to_string();
    }
    form
}

pub fn predict_request(form: &[(&str, String)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(form).unwrap();

    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// The same form sent the way a browser `FormData` body is.
pub fn multipart_request(form: &[(&str, String)]) -> Request<Body> {
    const BOUNDARY: &str = "----car-price-form";
    let mut body = String::new();
    for (name, value) in form {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
