//! Venue adapters

pub mod bybit;

pub use bybit::BybitPositionAdapter;
