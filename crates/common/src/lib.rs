//! Shared types for the ping service.
//!
//! - [`PingPayload`]: the JSON body returned by the health-check responder
//! - [`Clock`]: the time source the responder reads, with a system and a fixed implementation

pub mod clock;
pub mod payload;

pub use clock::{Clock, FixedClock, SystemClock};
pub use payload::PingPayload;
