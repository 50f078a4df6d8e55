use std::path::Path;

use anyhow::Context;
use golden_core::image_data_url;

/// Reads an image file into a `data:` URL, the form the feed stores images in.
pub fn encode_image(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    image_data_url(mime.essence_str(), &bytes)
        .with_context(|| format!("cannot attach {}", path.display()))
}
