//! Acknowledgement capability for received messages.
//!
//! The channel layer implements [`Acknowledger`] and attaches it to each
//! delivery it dispatches. The envelope subsystem only carries the handle;
//! it never acks on its own.

use crate::error::Result;

/// Capability to settle deliveries on their originating channel.
///
/// Implementations are shared across deliveries via `Arc`, so all methods
/// take `&self`. The `delivery_tag` identifies which delivery to settle;
/// tags are scoped to the channel that assigned them.
pub trait Acknowledger: Send + Sync {
    /// Acknowledge the tagged delivery. With `multiple`, acknowledges all
    /// deliveries up to and including the tag.
    fn ack(&self, delivery_tag: u64, multiple: bool) -> Result<()>;

    /// Negatively acknowledge the tagged delivery, optionally requeueing it.
    fn nack(&self, delivery_tag: u64, multiple: bool, requeue: bool) -> Result<()>;

    /// Reject the tagged delivery, optionally requeueing it.
    fn reject(&self, delivery_tag: u64, requeue: bool) -> Result<()>;
}
