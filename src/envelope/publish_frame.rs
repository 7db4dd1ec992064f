use bytes::BytesMut;

use crate::envelope::{reset_body, Properties};
use crate::pool::Reset;

/// Wire-level publish frame.
///
/// Built internally when the publish API translates a
/// [`Publishing`](crate::envelope::Publishing) into protocol frames:
/// routing fields for the basic.publish method plus the property block
/// and body for the content frames that follow it.
#[derive(Debug, Default)]
pub struct BasicPublish {
    /// Destination exchange name
    pub exchange: String,
    /// Routing key within the exchange
    pub routing_key: String,
    /// Return the message if it cannot be routed
    pub mandatory: bool,
    /// Return the message if it cannot be delivered immediately
    pub immediate: bool,
    /// Message properties
    pub properties: Properties,
    /// Opaque message payload
    pub body: BytesMut,
}

impl Reset for BasicPublish {
    fn reset(&mut self) {
        self.exchange.clear();
        self.routing_key.clear();
        self.mandatory = false;
        self.immediate = false;
        self.properties.reset();
        reset_body(&mut self.body);
    }
}
