// Used-car price prediction - service core
//
// Loads a trained model artifact, normalizes form submissions with the
// statistics frozen at training time, and serves predictions over HTTP.

pub mod config;
pub mod predictor;
pub mod server;

pub use config::*;
pub use predictor::*;
