use crate::error::{ReaderError, Result};
use crate::s3::{self, S3ObjOps};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::types::RequestPayer;
use aws_sdk_s3::Client;
use log::debug;

pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_profile(profile_name: &str) -> Self {
        let client = s3::client_from_profile(profile_name).await;
        Self { client }
    }

    pub async fn from_env() -> Self {
        let client = s3::client_from_env().await;
        Self { client }
    }
}

impl S3ObjOps for Provider {
    async fn get_object(
        self: &Self,
        bucket: &str,
        key: &str,
        request_pays: bool,
    ) -> Result<Vec<u8>> {
        debug!("GetObject s3://{bucket}/{key} (requester pays: {request_pays})");
        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .set_request_payer(request_pays.then_some(RequestPayer::Requester))
            .send()
            .await
            .map_err(|err| classify_error(err, bucket, key))?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|err| ReaderError::Store {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: err.to_string(),
            })?
            .to_vec();
        Ok(data)
    }
}

fn classify_error<R>(err: SdkError<GetObjectError, R>, bucket: &str, key: &str) -> ReaderError
where
    R: std::fmt::Debug,
{
    let code = err.as_service_error().and_then(|service| {
        if service.is_no_such_key() {
            Some("NoSuchKey")
        } else {
            service.code()
        }
    });
    classify_code(code, bucket, key, || DisplayErrorContext(&err).to_string())
}

fn classify_code(
    code: Option<&str>,
    bucket: &str,
    key: &str,
    message: impl FnOnce() -> String,
) -> ReaderError {
    let bucket = bucket.to_string();
    let key = key.to_string();
    match code {
        Some("NoSuchKey" | "NotFound" | "NoSuchBucket") => ReaderError::ObjectNotFound { bucket, key },
        Some("AccessDenied" | "Forbidden" | "AllAccessDisabled") => {
            ReaderError::AccessDenied { bucket, key }
        }
        _ => ReaderError::Store {
            bucket,
            key,
            message: message(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_codes() {
        let err = classify_code(Some("NoSuchKey"), "b", "k", || unreachable!());
        assert!(matches!(err, ReaderError::ObjectNotFound { .. }));

        let err = classify_code(Some("AccessDenied"), "b", "k", || unreachable!());
        assert!(matches!(err, ReaderError::AccessDenied { .. }));

        let err = classify_code(Some("SlowDown"), "b", "k", || "slow down".to_string());
        assert_eq!(err.to_string(), "Error fetching s3://b/k: slow down");

        let err = classify_code(None, "b", "k", || "dispatch failure".to_string());
        assert!(matches!(err, ReaderError::Store { .. }));
    }
}
