use base64::Engine;

use crate::domain::error::FeedError;

/// Encodes image bytes as a `data:<mime>;base64,` URL, the form posts keep
/// their attachment in.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> Result<String, FeedError> {
    if !mime.starts_with("image/") {
        return Err(FeedError::Validation(format!("{} is not an image", mime)));
    }

    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}
