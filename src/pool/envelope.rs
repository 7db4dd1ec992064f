use crossbeam::queue::ArrayQueue;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::envelope::{BasicPublish, Delivery, Publishing};

/// Default retained instances per envelope kind.
pub const DEFAULT_POOL_CAPACITY: usize = 256;

/// Restore an instance to its zero-valued state, field by field.
///
/// The pool invokes this on release, so every instance coming out of
/// `acquire` is indistinguishable from a freshly constructed one. An
/// implementation must clear every field, is total, and must not
/// allocate.
pub trait Reset {
    fn reset(&mut self);
}

/// Lock-free pool of reusable envelope instances for one kind.
///
/// `acquire` hands out an owned, zero-valued instance; `release` resets
/// it and retains it for the next acquire. Both are synchronous,
/// bounded-time, and never block on other callers: the retention store
/// is a fixed-capacity lock-free queue, and an empty pool falls back to
/// fresh construction while a full pool drops the released instance.
///
/// Ownership is the lifecycle discipline. A caller that released an
/// instance no longer has it (`release` consumes the value), so the
/// use-after-release and double-release hazards of handle-based pool
/// designs cannot be expressed. Which retained instance an `acquire`
/// returns under contention is unspecified.
pub struct EnvelopePool<T> {
    /// Retained instances, all reset.
    slots: ArrayQueue<T>,
    /// Acquires served from the pool.
    hits: AtomicUsize,
    /// Acquires that fell back to fresh construction.
    misses: AtomicUsize,
    /// Releases retained in the pool.
    returns: AtomicUsize,
    /// Releases dropped because the pool was full.
    drops: AtomicUsize,
}

impl<T: Reset + Default> EnvelopePool<T> {
    /// Create a pool with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }

    /// Create a pool retaining at most `capacity` instances.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: ArrayQueue::new(capacity),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            returns: AtomicUsize::new(0),
            drops: AtomicUsize::new(0),
        }
    }

    /// Get a zero-valued instance, recycled or freshly constructed.
    #[inline]
    pub fn acquire(&self) -> T {
        // Instances are reset on release, so a pooled one is ready as-is.
        if let Some(envelope) = self.slots.pop() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            envelope
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            T::default()
        }
    }

    /// Get a zero-valued instance wrapped in a guard that releases it
    /// back to this pool on drop.
    #[inline]
    pub fn acquire_scoped(&self) -> Pooled<'_, T> {
        Pooled {
            envelope: Some(self.acquire()),
            pool: self,
        }
    }

    /// Reset an instance and retain it for a later acquire.
    ///
    /// Resetting here rather than in `acquire` keeps the clean-slate
    /// guarantee independent of whether the next acquire hits or
    /// misses. If the pool is full the instance is dropped.
    #[inline]
    pub fn release(&self, mut envelope: T) {
        envelope.reset();

        if self.slots.push(envelope).is_ok() {
            self.returns.fetch_add(1, Ordering::Relaxed);
        } else {
            self.drops.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get pool statistics.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            size: self.slots.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            returns: self.returns.load(Ordering::Relaxed),
            drops: self.drops.load(Ordering::Relaxed),
        }
    }

    /// Current number of retained instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no instances are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of retained instances.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T: Reset + Default> Default for EnvelopePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool statistics for monitoring.
#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    /// Instances currently retained.
    pub size: usize,
    /// Acquires served from the pool.
    pub hits: usize,
    /// Acquires that constructed a fresh instance.
    pub misses: usize,
    /// Releases retained in the pool.
    pub returns: usize,
    /// Releases dropped when the pool was full.
    pub drops: usize,
}

impl PoolStats {
    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// RAII guard that releases its envelope back to the pool on drop.
pub struct Pooled<'p, T: Reset + Default> {
    envelope: Option<T>,
    pool: &'p EnvelopePool<T>,
}

impl<T: Reset + Default> Pooled<'_, T> {
    /// Take the envelope out of the guard, preventing release on drop.
    pub fn take(mut self) -> T {
        self.envelope.take().expect("guard already taken")
    }
}

impl<T: Reset + Default> std::ops::Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.envelope.as_ref().expect("guard already taken")
    }
}

impl<T: Reset + Default> std::ops::DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.envelope.as_mut().expect("guard already taken")
    }
}

impl<T: Reset + Default> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(envelope) = self.envelope.take() {
            self.pool.release(envelope);
        }
    }
}

/// The three envelope pools of one client instance.
///
/// Constructed once at client start and passed by reference to the
/// publish API, the frame encoder, and the delivery-dispatch path. The
/// pools hold no external resources, so there is no teardown.
pub struct EnvelopePools {
    /// Outgoing messages populated by application code.
    pub publishing: EnvelopePool<Publishing>,
    /// Wire publish frames built by the encoder.
    pub publish_frames: EnvelopePool<BasicPublish>,
    /// Received messages handed to application callbacks.
    pub deliveries: EnvelopePool<Delivery>,
}

impl EnvelopePools {
    /// Create all three pools with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }

    /// Create all three pools retaining at most `capacity` instances each.
    pub fn with_capacity(capacity: usize) -> Self {
        tracing::debug!(capacity, "envelope pools initialized");
        Self {
            publishing: EnvelopePool::with_capacity(capacity),
            publish_frames: EnvelopePool::with_capacity(capacity),
            deliveries: EnvelopePool::with_capacity(capacity),
        }
    }

    /// Get a zero-valued outgoing message.
    #[inline]
    pub fn acquire_publishing(&self) -> Publishing {
        self.publishing.acquire()
    }

    /// Recycle an outgoing message once the encoder is done with it.
    #[inline]
    pub fn release_publishing(&self, publishing: Publishing) {
        self.publishing.release(publishing)
    }

    /// Get a zero-valued wire publish frame.
    #[inline]
    pub fn acquire_publish_frame(&self) -> BasicPublish {
        self.publish_frames.acquire()
    }

    /// Recycle a wire publish frame once serialized.
    #[inline]
    pub fn release_publish_frame(&self, frame: BasicPublish) {
        self.publish_frames.release(frame)
    }

    /// Get a zero-valued delivery for the dispatch path to populate.
    #[inline]
    pub fn acquire_delivery(&self) -> Delivery {
        self.deliveries.acquire()
    }

    /// Recycle a delivery once the application callback returns.
    #[inline]
    pub fn release_delivery(&self, delivery: Delivery) {
        self.deliveries.release(delivery)
    }
}

impl Default for EnvelopePools {
    fn default() -> Self {
        Self::new()
    }
}
