pub mod categories;
pub mod config;
pub mod normalized;
pub mod raw;
pub mod stats;

pub use categories::*;
pub use config::*;
pub use normalized::*;
pub use raw::RawRecord;
pub use stats::*;
