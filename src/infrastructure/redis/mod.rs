//! Redis integration
//!
//! - `RedisPublisher`: sender that publishes composed notifications on a channel

mod publisher;

pub use publisher::{OutboundEnvelope, RedisPublisher};
