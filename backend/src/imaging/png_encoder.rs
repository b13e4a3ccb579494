use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::ImageFormat;
use std::io::Cursor;

pub const PNG_MEDIA_TYPE: &str = "image/png";

/// A chart re-encoded as PNG and ready to embed in a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedChart {
    pub data: String,
    pub width: u32,
    pub height: u32,
    pub png_len: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Could not decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Could not re-encode image as PNG: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Image worker failed: {0}")]
    Worker(String),
}

/// Decodes any supported raster format and re-encodes it as base64 PNG.
pub fn encode_chart_png(bytes: &[u8]) -> Result<EncodedChart, ImageError> {
    let image = image::load_from_memory(bytes).map_err(ImageError::Decode)?;

    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(ImageError::Encode)?;
    let png = png.into_inner();

    Ok(EncodedChart {
        data: STANDARD.encode(&png),
        width: image.width(),
        height: image.height(),
        png_len: png.len(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    pub(crate) fn sample_chart(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
        let chart = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, 0x80])
        });
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(chart)
            .write_to(&mut out, format)
            .unwrap();
        out.into_inner()
    }

    fn decode_base64_png(data: &str) -> DynamicImage {
        let png = STANDARD.decode(data).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
        image::load_from_memory(&png).unwrap()
    }

    #[test]
    fn png_keeps_pixel_dimensions() {
        let encoded = encode_chart_png(&sample_chart(ImageFormat::Png, 64, 48)).unwrap();
        assert_eq!((encoded.width, encoded.height), (64, 48));

        let decoded = decode_base64_png(&encoded.data);
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn jpeg_is_re_encoded_as_png_with_same_dimensions() {
        let encoded = encode_chart_png(&sample_chart(ImageFormat::Jpeg, 37, 21)).unwrap();

        let decoded = decode_base64_png(&encoded.data);
        assert_eq!((decoded.width(), decoded.height()), (37, 21));
        assert!(encoded.png_len > 0);
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = encode_chart_png(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let mut bytes = sample_chart(ImageFormat::Png, 16, 16);
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(
            encode_chart_png(&bytes),
            Err(ImageError::Decode(_))
        ));
    }
}
