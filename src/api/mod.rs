pub mod client;
pub mod types;

pub use client::TravelApiClient;
pub use types::{Category, TravelImage, TravelItem};
