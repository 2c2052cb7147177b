//! S3-based photo storage operations
mod error;

use std::sync::Arc;

use aws_sdk_s3::{
    error::SdkError, primitives::ByteStream, types::ObjectCannedAcl, Client as S3Client,
};
use tracing::debug;

use crate::types::ObjectKey;

pub use error::{BucketError, BucketResult};

/// Photo storage client for S3 operations
pub struct MediaStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    public_base_url: String,
}

impl MediaStorage {
    /// Creates a new media storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for photo storage
    /// * `public_base_url` - Base URL under which objects are publicly reachable
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        public_base_url: String,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            public_base_url,
        }
    }

    /// Uploads photo bytes under the given key with public-read visibility
    ///
    /// # Errors
    ///
    /// Returns `BucketError::UpstreamError` for 5xx responses
    /// Returns `BucketError::S3Error` for other S3 service errors
    /// Returns `BucketError::AwsError` for SDK-level failures
    pub async fn upload_photo(&self, key: &ObjectKey, bytes: Vec<u8>) -> BucketResult<()> {
        debug!(
            "Uploading {} bytes to bucket {} under key {}",
            bytes.len(),
            self.bucket_name,
            key
        );

        let result = self
            .s3_client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key.as_str())
            .body(ByteStream::from(bytes))
            .content_type(mime::IMAGE_JPEG.as_ref())
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() >= 500 =>
            {
                Err(BucketError::UpstreamError(format!("{service_err:?}")))
            }
            Err(e) => Err(BucketError::from(e)),
        }
    }

    /// Deterministic public URL of an object, no network involved
    #[must_use]
    pub fn public_url(&self, key: &ObjectKey) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::{config::Region, Config};

    fn test_storage() -> MediaStorage {
        let config = Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        MediaStorage::new(
            Arc::new(S3Client::from_conf(config)),
            "photos".to_string(),
            "https://photos.s3.amazonaws.com".to_string(),
        )
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let storage = test_storage();
        let key = ObjectKey::generate();

        let url = storage.public_url(&key);
        assert_eq!(
            url,
            format!("https://photos.s3.amazonaws.com/{}", key.as_str())
        );
        assert!(url.ends_with(".jpg"));
    }
}
