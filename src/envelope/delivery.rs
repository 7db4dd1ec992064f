use bytes::BytesMut;
use std::fmt;
use std::sync::Arc;

use crate::ack::Acknowledger;
use crate::envelope::{reset_body, Properties};
use crate::error::{Error, Result};
use crate::pool::Reset;

/// Received message handed to application callbacks.
///
/// The delivery-dispatch path populates one per incoming basic.deliver
/// and releases it back to its pool once the callback returns. The
/// attached acknowledgement handle settles this delivery on the channel
/// that produced it; reset always detaches the handle so a recycled
/// instance can never settle a previous occupant's delivery.
#[derive(Default)]
pub struct Delivery {
    /// Handle to settle this delivery, absent until dispatch attaches it
    pub acknowledger: Option<Arc<dyn Acknowledger>>,
    /// Message properties
    pub properties: Properties,
    /// Tag of the consumer this delivery was for
    pub consumer_tag: String,
    /// Remaining messages in the queue, when the broker reports it
    pub message_count: u32,
    /// Channel-scoped tag identifying this delivery
    pub delivery_tag: u64,
    /// True if this message was delivered before
    pub redelivered: bool,
    /// Exchange the message was originally published to
    pub exchange: String,
    /// Routing key the message was originally published with
    pub routing_key: String,
    /// Opaque message payload
    pub body: BytesMut,
}

impl Delivery {
    /// Acknowledge this delivery. With `multiple`, acknowledges all
    /// outstanding deliveries up to and including this one.
    pub fn ack(&self, multiple: bool) -> Result<()> {
        self.acknowledger()?.ack(self.delivery_tag, multiple)
    }

    /// Negatively acknowledge this delivery, optionally requeueing it.
    pub fn nack(&self, multiple: bool, requeue: bool) -> Result<()> {
        self.acknowledger()?
            .nack(self.delivery_tag, multiple, requeue)
    }

    /// Reject this delivery, optionally requeueing it.
    pub fn reject(&self, requeue: bool) -> Result<()> {
        self.acknowledger()?.reject(self.delivery_tag, requeue)
    }

    #[inline]
    fn acknowledger(&self) -> Result<&Arc<dyn Acknowledger>> {
        self.acknowledger.as_ref().ok_or(Error::NoAcknowledger)
    }
}

impl Reset for Delivery {
    fn reset(&mut self) {
        self.acknowledger = None;
        self.properties.reset();
        self.consumer_tag.clear();
        self.message_count = 0;
        self.delivery_tag = 0;
        self.redelivered = false;
        self.exchange.clear();
        self.routing_key.clear();
        reset_body(&mut self.body);
    }
}

impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delivery")
            .field("acknowledger", &self.acknowledger.is_some())
            .field("properties", &self.properties)
            .field("consumer_tag", &self.consumer_tag)
            .field("message_count", &self.message_count)
            .field("delivery_tag", &self.delivery_tag)
            .field("redelivered", &self.redelivered)
            .field("exchange", &self.exchange)
            .field("routing_key", &self.routing_key)
            .field("body", &format_args!("{} bytes", self.body.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records every settle call for assertion.
    #[derive(Default)]
    struct RecordingAcknowledger {
        calls: Mutex<Vec<(String, u64)>>,
    }

    impl Acknowledger for RecordingAcknowledger {
        fn ack(&self, delivery_tag: u64, _multiple: bool) -> Result<()> {
            self.calls.lock().push(("ack".into(), delivery_tag));
            Ok(())
        }

        fn nack(&self, delivery_tag: u64, _multiple: bool, _requeue: bool) -> Result<()> {
            self.calls.lock().push(("nack".into(), delivery_tag));
            Ok(())
        }

        fn reject(&self, delivery_tag: u64, _requeue: bool) -> Result<()> {
            self.calls.lock().push(("reject".into(), delivery_tag));
            Ok(())
        }
    }

    #[test]
    fn test_ack_uses_own_delivery_tag() {
        let recorder = Arc::new(RecordingAcknowledger::default());
        let delivery = Delivery {
            acknowledger: Some(recorder.clone()),
            delivery_tag: 42,
            ..Delivery::default()
        };

        delivery.ack(false).unwrap();
        delivery.nack(false, true).unwrap();
        delivery.reject(false).unwrap();

        let calls = recorder.calls.lock();
        assert_eq!(
            *calls,
            vec![
                ("ack".to_string(), 42),
                ("nack".to_string(), 42),
                ("reject".to_string(), 42)
            ]
        );
    }

    #[test]
    fn test_ack_without_handle_fails() {
        let delivery = Delivery::default();
        assert!(matches!(delivery.ack(false), Err(Error::NoAcknowledger)));
        assert!(matches!(
            delivery.nack(false, false),
            Err(Error::NoAcknowledger)
        ));
        assert!(matches!(delivery.reject(true), Err(Error::NoAcknowledger)));
    }

    #[test]
    fn test_reset_detaches_acknowledger() {
        let recorder = Arc::new(RecordingAcknowledger::default());
        let mut delivery = Delivery {
            acknowledger: Some(recorder),
            consumer_tag: "ctag-1".into(),
            message_count: 7,
            delivery_tag: 42,
            redelivered: true,
            exchange: "orders".into(),
            routing_key: "order.created".into(),
            ..Delivery::default()
        };
        delivery.body.extend_from_slice(b"payload");

        delivery.reset();

        assert!(delivery.acknowledger.is_none());
        assert!(delivery.consumer_tag.is_empty());
        assert_eq!(delivery.message_count, 0);
        assert_eq!(delivery.delivery_tag, 0);
        assert!(!delivery.redelivered);
        assert!(delivery.exchange.is_empty());
        assert!(delivery.routing_key.is_empty());
        assert!(delivery.body.is_empty());
        assert!(matches!(delivery.ack(false), Err(Error::NoAcknowledger)));
    }
}
