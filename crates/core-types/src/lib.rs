pub mod series;
pub mod window;

// Re-export the core types to provide a clean public API.
pub use series::{PricePoint, PriceSeries};
pub use window::{SeasonResult, SeasonWindow};
