// Synthetic listings with a known price structure

use car_data_prep::{CarDataPrep, FeatureStats, NormalizedRecord, PrepConfig, RawRecord};

pub const REFERENCE_YEAR: i32 = 2024;

const MAKES: [(&str, &str, f64); 4] = [
    ("טויוטה", "קורולה", 20_000.0),
    ("מאזדה", "3", 10_000.0),
    ("קיה", "פיקנטו", 0.0),
    ("יונדאי", "i30", 5_000.0),
];

/// Price rises with year and falls with mileage, plus a per-make premium.
pub fn synthetic_listings(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            let (manufacturer, model, premium) = MAKES[i % MAKES.len()];
            let year = 2008 + (i * 7 % 15) as i32;
            let age = f64::from(REFERENCE_YEAR - year);
            let km = 12_000.0 * age + ((i * 3_731) % 20_000) as f64;
            let hand = 1.0 + (i % 4) as f64;
            let price = 150_000.0 - 7_000.0 * age - 0.1 * km + premium;

            RawRecord {
                manufacturer: Some(manufacturer.to_string()),
                model: Some(model.to_string()),
                year: Some(f64::from(year)),
                hand: Some(hand),
                gear: Some(if i % 3 == 0 { "ידנית" } else { "אוטומטית" }.to_string()),
                capacity_engine: Some((1400 + (i % 5) * 200).to_string()),
                engine_type: Some("בנזין".to_string()),
                prev_ownership: Some("פרטית".to_string()),
                curr_ownership: Some("פרטית".to_string()),
                km: Some(format!("{km}")),
                price: Some(price),
                ..Default::default()
            }
        })
        .collect()
}

pub fn prep() -> CarDataPrep {
    CarDataPrep::new(PrepConfig::default().with_reference_year(REFERENCE_YEAR))
}

pub fn prepared(n: usize) -> (Vec<NormalizedRecord>, FeatureStats) {
    prep().fit_transform(synthetic_listings(n)).unwrap()
}
