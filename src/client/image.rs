use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub data_url: String,
}

impl ImageAttachment {
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self {
            data_url: format!("data:{mime};base64,{}", BASE64.encode(bytes)),
        }
    }

    /// Read a file and encode it. The MIME type is guessed from the
    /// extension; no size or type checks are applied.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Ok(Self::from_bytes(&bytes, mime.essence_str()))
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
    }
}
