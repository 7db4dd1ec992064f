use std::time::SystemTime;

use crate::pool::Reset;
use crate::types::FieldTable;

/// Content is not persisted to disk by the broker.
pub const DELIVERY_MODE_TRANSIENT: u8 = 1;

/// Content survives broker restarts (for durable queues).
pub const DELIVERY_MODE_PERSISTENT: u8 = 2;

/// Message properties shared by all envelope kinds.
///
/// The same property block travels client-side on a publishing, inside a
/// wire publish frame, and back out on a delivery, so it is one type
/// rather than three copies of thirteen fields.
///
/// `headers: None` and `Some(empty table)` are distinct states and the
/// wire encoder may serialize them differently; reset always restores
/// the `None` form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    /// Application headers
    pub headers: Option<FieldTable>,
    /// MIME content type
    pub content_type: String,
    /// MIME content encoding
    pub content_encoding: String,
    /// Transient (1) or persistent (2)
    pub delivery_mode: u8,
    /// Priority 0..=9
    pub priority: u8,
    /// Application correlation identifier
    pub correlation_id: String,
    /// Address to reply to
    pub reply_to: String,
    /// Message expiration
    pub expiration: String,
    /// Application message identifier
    pub message_id: String,
    /// Message publish time
    pub timestamp: Option<SystemTime>,
    /// Application message type name
    pub kind: String,
    /// Creating user id, validated by the broker
    pub user_id: String,
    /// Creating application id
    pub app_id: String,
}

impl Reset for Properties {
    fn reset(&mut self) {
        self.headers = None;
        self.content_type.clear();
        self.content_encoding.clear();
        self.delivery_mode = 0;
        self.priority = 0;
        self.correlation_id.clear();
        self.reply_to.clear();
        self.expiration.clear();
        self.message_id.clear();
        self.timestamp = None;
        self.kind.clear();
        self.user_id.clear();
        self.app_id.clear();
    }
}
