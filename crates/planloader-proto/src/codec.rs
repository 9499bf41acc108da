//! Typed encode/decode pairs for prost messages.
//!
//! Binary is the canonical protobuf wire format. JSON goes through the serde
//! derives added at build time and uses snake_case field names.

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload of {size} bytes exceeds limit of {limit}")]
    TooLarge { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Upper bound on a single decoded payload (64 MiB).
pub const MAX_MESSAGE_BYTES: usize = 64 * 1024 * 1024;

/// Serialize a message to protobuf binary.
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decode a message from protobuf binary.
///
/// An empty buffer decodes to the default message, as in every protobuf
/// runtime.
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    if bytes.len() > MAX_MESSAGE_BYTES {
        return Err(CodecError::TooLarge {
            size: bytes.len(),
            limit: MAX_MESSAGE_BYTES,
        });
    }
    Ok(M::decode(bytes)?)
}

pub fn to_json<M: Serialize>(message: &M) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}

pub fn to_json_pretty<M: Serialize>(message: &M) -> Result<String> {
    Ok(serde_json::to_string_pretty(message)?)
}

/// Parse a message from JSON. Missing fields take their proto3 defaults.
pub fn from_json<M: DeserializeOwned>(json: &str) -> Result<M> {
    Ok(serde_json::from_str(json)?)
}
