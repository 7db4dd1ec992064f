//! Envelope recycling for the hot publish and delivery paths.
//!
//! This module provides lock-free pools of reusable envelope records,
//! avoiding a heap allocation per message under sustained throughput.

mod envelope;

pub use envelope::{
    EnvelopePool, EnvelopePools, PoolStats, Pooled, Reset, DEFAULT_POOL_CAPACITY,
};
