use serde::{Deserialize, Serialize};

/// Envelope wrapping every UEX list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}
