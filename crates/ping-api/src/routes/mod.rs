pub mod metrics;
pub mod ping;
