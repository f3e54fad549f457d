use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

/// Image attached to a receipt upload, either already encoded by the caller
/// (e.g. a data URL) or raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiptImage {
    Text(String),
    Binary(Vec<u8>),
}

impl ReceiptImage {
    /// The string sent on the wire. Raw bytes are base64 encoded.
    pub fn to_wire(&self) -> String {
        match self {
            ReceiptImage::Text(text) => text.clone(),
            ReceiptImage::Binary(bytes) => STANDARD.encode(bytes),
        }
    }
}

impl Serialize for ReceiptImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}
