//! The three pooled envelope kinds and their shared property block.
//!
//! Each kind implements [`Reset`](crate::pool::Reset) so the pools can
//! restore instances to a clean slate on release.

mod delivery;
mod properties;
mod publish_frame;
mod publishing;

pub use delivery::Delivery;
pub use properties::{Properties, DELIVERY_MODE_PERSISTENT, DELIVERY_MODE_TRANSIENT};
pub use publish_frame::BasicPublish;
pub use publishing::Publishing;

use bytes::BytesMut;

/// Largest body backing storage a reset keeps alive.
///
/// Bodies above this are replaced with an unallocated buffer so a single
/// oversized message cannot pin its allocation in the pool.
pub(crate) const MAX_RETAINED_BODY_CAPACITY: usize = 64 * 1024;

/// Reset a body to the canonical empty form: zero length, never absent.
///
/// Clears in place to keep the allocation for the next occupant; drops
/// the backing storage entirely above the retention ceiling. Never
/// allocates (`BytesMut::new` is unallocated until first write).
#[inline]
pub(crate) fn reset_body(body: &mut BytesMut) {
    if body.capacity() > MAX_RETAINED_BODY_CAPACITY {
        *body = BytesMut::new();
    } else {
        body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_body_keeps_small_capacity() {
        let mut body = BytesMut::with_capacity(1024);
        body.extend_from_slice(b"payload");
        reset_body(&mut body);
        assert!(body.is_empty());
        assert!(body.capacity() >= 1024);
    }

    #[test]
    fn test_reset_body_drops_oversized_capacity() {
        let mut body = BytesMut::with_capacity(MAX_RETAINED_BODY_CAPACITY + 1);
        body.extend_from_slice(&[0u8; 128]);
        reset_body(&mut body);
        assert!(body.is_empty());
        assert!(body.capacity() <= MAX_RETAINED_BODY_CAPACITY);
    }
}
