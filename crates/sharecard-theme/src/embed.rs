//! Display-reference helpers: data-URL embedding and QR generation.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};
use qrcode::QrCode;
use qrcode::render::svg;
use sharecard_post::ImageRef;

/// Resolve any [`ImageRef`] into a display reference.
///
/// URLs pass through verbatim; raw forms become `data:` URLs usable in
/// markup without a fetch. A missing file embeds as an empty string rather
/// than failing.
pub async fn web_embed_image(image: &ImageRef) -> String {
    match image {
        ImageRef::Url(url) => url.clone(),
        ImageRef::Bytes(bytes) => png_data_url(bytes),
        ImageRef::Buffer(buffer) => png_data_url(buffer),
        ImageRef::Path(path) => embed_file_as_data_url(path).await,
    }
}

/// Read an image file and return it as a base64 `data:` URL, or an empty
/// string when the file is absent.
pub async fn embed_file_as_data_url(path: &Path) -> String {
    match tokio::fs::read(path).await {
        Ok(bytes) => png_data_url(&bytes),
        Err(_) => String::new(),
    }
}

/// Read an SVG file and return it as a base64 `data:` URL, or an empty
/// string when the file is absent.
pub async fn embed_svg_as_data_url(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(content.as_bytes())
        ),
        Err(_) => String::new(),
    }
}

/// Generate a QR code for `text` and return it as an embedded SVG data URL.
/// `back_color` sets the light modules.
pub fn convert_to_qr(text: &str, back_color: (u8, u8, u8)) -> anyhow::Result<String> {
    let code = QrCode::new(text.as_bytes())?;
    let light = format!("#{:02X}{:02X}{:02X}", back_color.0, back_color.1, back_color.2);
    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color(light.as_str()))
        .build();
    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image.as_bytes())
    ))
}

fn png_data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}
