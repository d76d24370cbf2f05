/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic primitives used by generated model crates.

pub mod instant;

pub use crate::instant::Instant;

/// Binary data.
///
/// The bytes are opaque to the model layer; no encoding is applied until the value
/// is serialized.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(input: T) -> Self {
        Blob {
            inner: input.into(),
        }
    }

    /// Consumes the blob and returns the raw bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob::new(bytes)
    }
}

#[cfg(feature = "serde-serialize")]
mod blob_ser {
    use crate::Blob;
    use serde::{Serialize, Serializer};

    impl Serialize for Blob {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if serializer.is_human_readable() {
                serializer.serialize_str(&base64::encode(&self.inner))
            } else {
                serializer.serialize_bytes(&self.inner)
            }
        }
    }
}

#[cfg(feature = "serde-deserialize")]
mod blob_de {
    use crate::Blob;
    use serde::de::{self, Deserializer, Visitor};
    use serde::Deserialize;
    use std::fmt;

    struct BlobVisitor;

    impl<'de> Visitor<'de> for BlobVisitor {
        type Value = Blob;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a base64 encoded string or a byte buffer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            base64::decode(v).map(Blob::new).map_err(E::custom)
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Ok(Blob::new(v))
        }

        fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
            Ok(Blob::new(v))
        }
    }

    impl<'de> Deserialize<'de> for Blob {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(BlobVisitor)
            } else {
                deserializer.deserialize_byte_buf(BlobVisitor)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Blob, Instant};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn blob_exposes_bytes() {
        let blob = Blob::new("hello");
        assert_eq!(blob.as_ref(), b"hello");
        assert_eq!(blob.clone(), Blob::from(b"hello".to_vec()));
        assert_eq!(blob.into_inner(), b"hello".to_vec());
    }

    #[cfg(all(feature = "serde-serialize", feature = "serde-deserialize"))]
    #[test]
    fn blob_serde_uses_base64_for_text_formats() {
        let blob = Blob::new(vec![0u8, 159, 146, 150]);
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"AJ+Slg==\"");
        let parsed: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, blob);
    }
}
