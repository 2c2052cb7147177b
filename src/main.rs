use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error};
use tracing_subscriber::{fmt, EnvFilter};

use photo_upload_lambda::{handlers, media_storage::MediaStorage, types::Environment};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env();

    // JSON log format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let bucket_name = environment.s3_bucket();
    let public_base_url = environment.public_bucket_url(&bucket_name);
    let media_storage = MediaStorage::new(s3_client, bucket_name, public_base_url);

    run(service_fn(|event| {
        handlers::upload_photo(event, &media_storage)
    }))
    .await
}
