//! Recyclable message-envelope pools for AMQP client hot paths.
//!
//! The publish and delivery paths churn through one envelope record per
//! message; the pools in this crate reuse those records instead of
//! allocating and discarding them. Release resets every field, so an
//! acquired envelope never exposes a previous message's data, and
//! acquire/release move owned values, so a released envelope cannot be
//! touched or released again. See [`pool::EnvelopePool`] for the
//! lifecycle contract.

pub mod ack;
pub mod envelope;
pub mod error;
pub mod pool;
pub mod types;

pub use ack::Acknowledger;
pub use envelope::{BasicPublish, Delivery, Properties, Publishing};
pub use error::{Error, Result};
pub use pool::{EnvelopePool, EnvelopePools, PoolStats, Pooled, Reset};
pub use types::{FieldTable, FieldValue};
