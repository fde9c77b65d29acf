#![allow(async_fn_in_trait)]
pub mod asset;
pub mod config;
mod error;
pub mod geometry;
pub mod object_key;
pub mod provider;
pub mod reader;
pub mod s3;
pub mod scene_id;
pub mod sentinel1;

pub use error::{ReaderError, Result};
pub use reader::{CogReader, RasterReader, ReaderOptions};
pub use sentinel1::{S1L1CReader, Scene};
