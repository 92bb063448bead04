use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::{
    error::{ProvideErrorMetadata, SdkError},
    operation::put_object::PutObjectError,
    primitives::ByteStream,
};

use domain::{
    repositories::storage::SongStorageClient, value_objects::storage::StorageBucket,
};

use super::s3::{S3Config, build_s3_client};

#[derive(Debug, Clone)]
pub struct SupabaseStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub song_bucket: String,
    pub image_bucket: String,
}

pub struct SupabaseStorageClient {
    client: aws_sdk_s3::Client,
    song_bucket: String,
    image_bucket: String,
}

impl SupabaseStorageClient {
    pub async fn new(config: SupabaseStorageConfig) -> Result<Self> {
        let client = build_s3_client(&S3Config::new(
            config.endpoint,
            config.region,
            config.access_key,
            config.secret_key,
        ))
        .await
        .context("failed to build Supabase s3 client")?;

        Ok(Self {
            client,
            song_bucket: config.song_bucket,
            image_bucket: config.image_bucket,
        })
    }

    fn bucket_name(&self, bucket: StorageBucket) -> &str {
        match bucket {
            StorageBucket::Songs => &self.song_bucket,
            StorageBucket::Images => &self.image_bucket,
        }
    }
}

/// Supabase Storage S3-compatible API reference:
/// https://supabase.com/docs/guides/storage/s3/compatibility
#[async_trait]
impl SongStorageClient for SupabaseStorageClient {
    async fn upload_object(
        &self,
        bucket: StorageBucket,
        object_key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let bucket_name = self.bucket_name(bucket);
        let body = ByteStream::from(bytes);

        self.client
            .put_object()
            .bucket(bucket_name)
            .key(object_key)
            .body(body)
            .content_type(content_type)
            .cache_control("max-age=3600")
            // Write-once: an existing key fails with 412 instead of being
            // overwritten.
            .if_none_match("*")
            .send()
            .await
            .map_err(|err| map_put_object_error(err, bucket_name, object_key))?;

        Ok(object_key.to_string())
    }
}

fn map_put_object_error(
    err: SdkError<PutObjectError>,
    bucket: &str,
    object_key: &str,
) -> anyhow::Error {
    if let SdkError::ServiceError(service_err) = &err {
        let raw = service_err.raw();
        let status = raw.status().as_u16();
        let code = service_err.err().code().unwrap_or("unknown");
        let message = service_err.err().message().unwrap_or_default();
        let body = raw
            .body()
            .bytes()
            .map(|b| String::from_utf8_lossy(b).trim().to_owned())
            .filter(|b| !b.is_empty())
            .unwrap_or_default();

        let mut detail = format!(
            "failed to upload object to Supabase Storage (status {}, code {})",
            status, code
        );

        if !message.is_empty() {
            detail.push_str(&format!(": {}", message));
        }

        detail.push_str(&format!(" [bucket={}, key={}]", bucket, object_key));

        if !body.is_empty() {
            // Keep a short preview of the response body for debugging.
            let preview = body.chars().take(512).collect::<String>();
            detail.push_str(&format!("; body={}", preview));
        }

        return anyhow::anyhow!(detail);
    }

    anyhow::Error::new(err).context("failed to upload object to Supabase Storage")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn load_supabase_config_from_env() -> SupabaseStorageConfig {
        dotenvy::dotenv().ok();

        let endpoint = std::env::var("SUPABASE_S3_ENDPOINT").unwrap_or_else(|_| {
            let project_url =
                std::env::var("SUPABASE_PROJECT_URL").expect("SUPABASE_PROJECT_URL is required");
            format!("{}/storage/v1/s3", project_url.trim_end_matches('/'))
        });

        SupabaseStorageConfig {
            endpoint,
            region: std::env::var("SUPABASE_S3_REGION").expect("SUPABASE_S3_REGION is required"),
            access_key: std::env::var("SUPABASE_S3_ACCESS_KEY_ID")
                .expect("SUPABASE_S3_ACCESS_KEY_ID is required"),
            secret_key: std::env::var("SUPABASE_S3_SECRET_ACCESS_KEY")
                .expect("SUPABASE_S3_SECRET_ACCESS_KEY is required"),
            song_bucket: std::env::var("SUPABASE_SONG_BUCKET").unwrap_or_else(|_| "songs".into()),
            image_bucket: std::env::var("SUPABASE_IMAGE_BUCKET")
                .unwrap_or_else(|_| "images".into()),
        }
    }

    // Manual check: export the Supabase S3 credentials, then run:
    // cargo test -p infra supabase_storage::tests::upload_rejects_existing_key -- --ignored --nocapture
    #[tokio::test]
    #[ignore = "hits real Supabase Storage and needs credentials"]
    async fn upload_rejects_existing_key() -> Result<()> {
        let client = SupabaseStorageClient::new(load_supabase_config_from_env()).await?;
        let object_key = format!("image-write-once-check-{}", Uuid::new_v4());

        let stored_path = client
            .upload_object(
                StorageBucket::Images,
                &object_key,
                vec![0xFF, 0xD8, 0xFF],
                "image/jpeg",
            )
            .await?;
        assert_eq!(stored_path, object_key);

        let second = client
            .upload_object(
                StorageBucket::Images,
                &object_key,
                vec![0xFF, 0xD8, 0xFF],
                "image/jpeg",
            )
            .await;
        assert!(second.is_err(), "second upload to the same key must fail");

        Ok(())
    }
}
