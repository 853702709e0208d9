//! Base64 decoding for inline artifact payloads and data URIs.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{AppError, Result};

/// Decode an inline artifact payload. Accepts plain base64 (the
/// `imageBase64Data` form) and data URIs with a
/// "data:image/png;base64," prefix (the `imageDataURI` form).
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let payload = match encoded.rsplit_once(',') {
        Some((_, tail)) => tail,
        None => encoded,
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::Decode(format!("Invalid base64 data: {}", e)))
}

/// Encode binary data to a base64 string.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Serde adapter storing `Option<Vec<u8>>` as base64 text instead of a
/// JSON byte array, keeping stored galleries compact.
pub mod opt_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(data) => serializer.serialize_some(&super::encode(data)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        match encoded {
            Some(text) => super::decode(&text)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_inline_artifact_payload_decodes() {
        let decoded = decode(&encode(&PNG_HEADER)).unwrap();
        assert_eq!(decoded, PNG_HEADER);
    }

    #[test]
    fn test_image_data_uri_prefix_is_stripped() {
        let uri = format!("data:image/png;base64,{}", encode(&PNG_HEADER));
        assert_eq!(decode(&uri).unwrap(), PNG_HEADER);
    }

    #[test]
    fn test_malformed_payload_maps_to_decode_error() {
        let err = decode("data:image/png;base64,@@@not-base64@@@").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn test_opt_bytes_stores_bytes_as_text() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Image {
            #[serde(default, with = "super::opt_bytes")]
            data: Option<Vec<u8>>,
        }

        let stored = serde_json::to_value(Image {
            data: Some(PNG_HEADER.to_vec()),
        })
        .unwrap();
        assert!(stored["data"].is_string());

        let back: Image = serde_json::from_value(stored).unwrap();
        assert_eq!(back.data.as_deref(), Some(PNG_HEADER.as_slice()));

        let absent: Image = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(absent.data.is_none());
    }
}
