use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("image is empty")]
    Empty,

    #[error("unrecognized image format")]
    UnrecognizedFormat,

    #[error("embedded image would be {size} bytes, limit is {max}")]
    TooLarge { size: usize, max: usize },
}

/// Inline `data:` URL form of an uploaded image, ready to be stored as a project's image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage(String);

impl EmbeddedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Sniffs the format from the header bytes and encodes the image as a data URL.
/// `max_encoded_bytes` bounds the length of the resulting URL, prefix included.
pub fn embed(bytes: &[u8], max_encoded_bytes: usize) -> Result<EmbeddedImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    let format = image::guess_format(bytes).map_err(|_| ImageError::UnrecognizedFormat)?;
    let prefix = format!("data:{};base64,", format.to_mime_type());

    let size = prefix.len() + bytes.len().div_ceil(3) * 4;
    if size > max_encoded_bytes {
        return Err(ImageError::TooLarge {
            size,
            max: max_encoded_bytes,
        });
    }

    let mut url = prefix;
    STANDARD.encode_string(bytes, &mut url);
    Ok(EmbeddedImage(url))
}

/// Holds a caller-supplied image reference to the same cap as an upload when it is an
/// inline `data:` URL. Remote URLs are not inspected.
pub fn check_reference(url: &str, max_encoded_bytes: usize) -> Result<(), ImageError> {
    if url.starts_with("data:") && url.len() > max_encoded_bytes {
        return Err(ImageError::TooLarge {
            size: url.len(),
            max: max_encoded_bytes,
        });
    }
    Ok(())
}
