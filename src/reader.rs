//! Boundary with the downstream raster readers that open resolved asset urls
use anyhow::{anyhow, Result};
use serde_json::{Map, Value};
use url::Url;

/// Free-form options handed to the raster reader untouched.
pub type ReaderOptions = Map<String, Value>;

/// Something that can open a raster from an object-store url.
pub trait RasterReader: Sized {
    fn open(url: &str, options: &ReaderOptions) -> Result<Self>;
}

/// Default reader for cloud-optimized GeoTIFFs. Pixel access is left to the
/// raster library that consumes the url and options.
#[derive(Debug, Clone, PartialEq)]
pub struct CogReader {
    pub url: Url,
    pub options: ReaderOptions,
}

impl RasterReader for CogReader {
    fn open(url: &str, options: &ReaderOptions) -> Result<Self> {
        let url = Url::parse(url)?;
        if url.scheme() != "s3" {
            return Err(anyhow!("Unsupported scheme for COG reader: {}", url.scheme()));
        }
        Ok(Self {
            url,
            options: options.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_cog() {
        let mut options = ReaderOptions::new();
        options.insert("nodata".to_string(), json!(0));
        let reader = CogReader::open("s3://bucket/a/b.tiff", &options).unwrap();
        assert_eq!(reader.url.host_str(), Some("bucket"));
        assert_eq!(reader.url.path(), "/a/b.tiff");
        assert_eq!(reader.options, options);
    }

    #[test]
    fn test_open_cog_rejects_other_schemes() {
        assert!(CogReader::open("https://bucket/a.tiff", &ReaderOptions::new()).is_err());
        assert!(CogReader::open("not a url", &ReaderOptions::new()).is_err());
    }
}
