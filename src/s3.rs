//! Utility functions for creating s3 clients and fetching objects
use crate::error::Result;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;

/// Region hosting the `sentinel-s1-l1c` bucket.
pub const DEFAULT_REGION: &str = "eu-central-1";

pub async fn client_from_profile(profile_name: &str) -> Client {
    let base_config = aws_config::from_env()
        .profile_name(profile_name)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&base_config)
        .region(Region::new(DEFAULT_REGION))
        .force_path_style(true)
        .build();

    Client::from_conf(s3_config)
}

/// Client using the default credential chain (environment, shared config, IMDS).
/// Requester-pays buckets cannot be read anonymously.
pub async fn client_from_env() -> Client {
    let base_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(DEFAULT_REGION))
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&base_config)
        .force_path_style(true)
        .build();

    Client::from_conf(s3_config)
}

pub trait S3ObjOps {
    /// Read the whole object into memory. With `request_pays` set, transfer
    /// costs are billed to the caller's account.
    async fn get_object(self: &Self, bucket: &str, key: &str, request_pays: bool)
        -> Result<Vec<u8>>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::S3ObjOps;
    use crate::error::{ReaderError, Result};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store recording every request it serves.
    #[derive(Default)]
    pub struct MemoryStore {
        objects: HashMap<(String, String), Vec<u8>>,
        denied: Vec<(String, String)>,
        pub requests: RefCell<Vec<(String, String, bool)>>,
    }

    impl MemoryStore {
        pub fn with_object(mut self, bucket: &str, key: &str, body: &[u8]) -> Self {
            self.objects
                .insert((bucket.to_string(), key.to_string()), body.to_vec());
            self
        }

        pub fn with_denied(mut self, bucket: &str, key: &str) -> Self {
            self.denied.push((bucket.to_string(), key.to_string()));
            self
        }
    }

    impl S3ObjOps for MemoryStore {
        async fn get_object(
            self: &Self,
            bucket: &str,
            key: &str,
            request_pays: bool,
        ) -> Result<Vec<u8>> {
            self.requests
                .borrow_mut()
                .push((bucket.to_string(), key.to_string(), request_pays));

            let id = (bucket.to_string(), key.to_string());
            if self.denied.contains(&id) {
                return Err(ReaderError::AccessDenied {
                    bucket: id.0,
                    key: id.1,
                });
            }
            self.objects
                .get(&id)
                .cloned()
                .ok_or(ReaderError::ObjectNotFound {
                    bucket: id.0,
                    key: id.1,
                })
        }
    }
}
