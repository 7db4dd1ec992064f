use bytes::BytesMut;

use crate::envelope::{reset_body, Properties};
use crate::pool::Reset;

/// Client-facing outgoing message.
///
/// Application code populates properties and body, hands the publishing
/// to the publish API, and the encoder releases it once serialized.
/// Obtain instances from an [`EnvelopePool`](crate::pool::EnvelopePool)
/// on the hot path; `Publishing::default()` works everywhere else.
#[derive(Debug, Default)]
pub struct Publishing {
    /// Message properties
    pub properties: Properties,
    /// Opaque message payload
    pub body: BytesMut,
}

impl Reset for Publishing {
    fn reset(&mut self) {
        self.properties.reset();
        reset_body(&mut self.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldTable;

    #[test]
    fn test_reset_clears_properties_and_body() {
        let mut publishing = Publishing::default();
        let mut headers = FieldTable::new();
        headers.insert("k", "v");
        publishing.properties.headers = Some(headers);
        publishing.properties.correlation_id.push_str("corr-9");
        publishing.body.extend_from_slice(&[0x01]);

        publishing.reset();

        assert!(publishing.properties.headers.is_none());
        assert!(publishing.properties.correlation_id.is_empty());
        assert!(publishing.body.is_empty());
    }

    #[test]
    fn test_default_is_zero_valued() {
        let publishing = Publishing::default();
        assert_eq!(publishing.properties, Properties::default());
        assert_eq!(publishing.body.len(), 0);
    }
}
