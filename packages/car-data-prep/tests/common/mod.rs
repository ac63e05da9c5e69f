// Common test fixtures

use car_data_prep::{CarDataPrep, OdometerPolicy, PrepConfig, RawRecord};

pub const REFERENCE_YEAR: i32 = 2024;

pub fn prep() -> CarDataPrep {
    CarDataPrep::new(PrepConfig::default().with_reference_year(REFERENCE_YEAR))
}

pub fn prep_with(policy: OdometerPolicy) -> CarDataPrep {
    CarDataPrep::new(
        PrepConfig::default()
            .with_reference_year(REFERENCE_YEAR)
            .with_odometer_policy(policy),
    )
}

/// A complete, well-formed listing.
pub fn listing(manufacturer: &str, model: &str, year: f64, hand: f64, km: &str) -> RawRecord {
    RawRecord {
        manufacturer: Some(manufacturer.to_string()),
        model: Some(model.to_string()),
        year: Some(year),
        hand: Some(hand),
        gear: Some("אוטומטית".to_string()),
        capacity_engine: Some("1600".to_string()),
        engine_type: Some("בנזין".to_string()),
        prev_ownership: Some("פרטית".to_string()),
        curr_ownership: Some("פרטית".to_string()),
        km: Some(km.to_string()),
        price: Some(80_000.0),
        test: Some("01/01/2025".to_string()),
        ..Default::default()
    }
}

/// A small but varied training batch.
pub fn training_batch() -> Vec<RawRecord> {
    let mut batch = vec![
        listing("טויוטה", "קורולה", 2018.0, 2.0, "90,000"),
        listing("טויוטה", "יאריס", 2014.0, 3.0, "150,000"),
        listing("מאזדה", "3", 2016.0, 2.0, "110000"),
        listing("מאזדה", "CX-5", 2020.0, 1.0, "45,000"),
        listing("יונדאי", "i30", 2012.0, 4.0, "180,000"),
        listing("יונדאי", "טוסון", 2019.0, 1.0, "60,000"),
        listing("קיה", "פיקנטו", 2017.0, 2.0, "85,000"),
        listing("קיה", "ספורטאז'", 2015.0, 3.0, "130,000"),
    ];
    batch[2].gear = Some("ידנית".to_string());
    batch[4].gear = Some("ידנית".to_string());
    batch[4].capacity_engine = Some("2000".to_string());
    batch[5].engine_type = Some("דיזל".to_string());
    batch[3].capacity_engine = Some("2500".to_string());
    batch[7].capacity_engine = Some("1400".to_string());
    batch
}
