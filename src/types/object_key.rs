//! Object key generation

use std::fmt;

use uuid::Uuid;

const EXTENSION: &str = "jpg";

/// Unique S3 object key, generated once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Generates a fresh random key: `{uuid-v4}.jpg`
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{}.{EXTENSION}", Uuid::new_v4()))
    }

    /// The key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_key_is_uuid_with_jpg_extension() {
        let key = ObjectKey::generate();
        let (stem, extension) = key.as_str().split_once('.').unwrap();

        assert!(Uuid::parse_str(stem).is_ok());
        assert_eq!(extension, "jpg");
    }

    #[test]
    fn generated_keys_are_unique() {
        let first = ObjectKey::generate();
        let second = ObjectKey::generate();
        assert_ne!(first, second);
    }
}
