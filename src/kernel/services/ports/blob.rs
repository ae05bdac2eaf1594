use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decoded binary content plus its full mime type (`image/png`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Blob {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn from_base64(payload: &str, mime_subtype: &str) -> Result<Self, base64::DecodeError> {
        let bytes = STANDARD.decode(payload)?;
        Ok(Self::new(bytes, format!("image/{mime_subtype}")))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Issues transient URIs for blobs so the surface can dereference them by name.
pub trait BlobStore {
    fn create_object_url(&self, blob: Blob) -> String;

    fn resolve(&self, url: &str) -> Option<Blob>;

    fn revoke_object_url(&self, url: &str) -> bool;
}
