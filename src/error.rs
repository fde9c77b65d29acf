use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Could not match {0}")]
    MalformedSceneId(String),

    #[error("Object not found: s3://{bucket}/{key}")]
    ObjectNotFound { bucket: String, key: String },

    #[error("Access denied: s3://{bucket}/{key}")]
    AccessDenied { bucket: String, key: String },

    #[error("Error fetching s3://{bucket}/{key}: {message}")]
    Store {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Unable to parse productInfo.json")]
    MetadataParse(#[from] serde_json::Error),

    #[error("productInfo.json has no 'footprint' field")]
    MissingFootprint,

    #[error("Invalid footprint geometry: {0}")]
    InvalidFootprint(String),

    #[error("{0} is not valid")]
    InvalidAssetName(String),

    #[error("Invalid object key segment: {0:?}")]
    InvalidPathSegment(String),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
