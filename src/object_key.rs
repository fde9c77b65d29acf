use crate::error::{ReaderError, Result};

/// An object-store key assembled from individually validated segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectKey {
    segments: Vec<String>,
}

impl ObjectKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, segment: &str) -> Result<Self> {
        validate_segment(segment)?;
        self.segments.push(segment.to_string());
        Ok(self)
    }

    pub fn join(mut self, other: &ObjectKey) -> Self {
        self.segments.extend(other.segments.iter().cloned());
        self
    }

    pub fn as_string(&self) -> String {
        self.segments.join("/")
    }

    pub fn to_url(&self, scheme: &str, bucket: &str) -> String {
        format!("{}://{}/{}", scheme, bucket, self.as_string())
    }
}

fn validate_segment(segment: &str) -> Result<()> {
    let invalid = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control());
    if invalid {
        return Err(ReaderError::InvalidPathSegment(segment.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key() {
        let key = ObjectKey::new()
            .push("GRD")
            .and_then(|k| k.push("2018"))
            .and_then(|k| k.push("productInfo.json"))
            .unwrap();
        assert_eq!(key.as_string(), "GRD/2018/productInfo.json");
        assert_eq!(
            key.to_url("s3", "bucket"),
            "s3://bucket/GRD/2018/productInfo.json"
        );
    }

    #[test]
    fn test_join() {
        let prefix = ObjectKey::new().push("a").unwrap();
        let key = ObjectKey::new().push("b").unwrap().join(&prefix);
        assert_eq!(key.as_string(), "b/a");
    }

    #[test]
    fn test_rejects_traversal_and_separators() {
        for segment in ["", ".", "..", "a/b", "a\\b", "a\nb", "../etc"] {
            let result = ObjectKey::new().push(segment);
            assert!(
                matches!(result, Err(ReaderError::InvalidPathSegment(ref s)) if s == segment),
                "segment {segment:?} should be rejected"
            );
        }
    }
}
