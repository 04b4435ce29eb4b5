//! Image Loader: decode PNG resources into normalized tensors.
//!
//! Accepts either a file path or any open byte stream (used for archive
//! entries). Only 8-bit grayscale and RGB PNGs are accepted; anything else
//! is a [`Error::Decode`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::tensor::ImageTensor;

/// Load an image file into a normalized channel-first tensor.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Decode`]
/// if it is not a supported PNG.
pub fn load_image(path: &Path) -> Result<ImageTensor> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(BufReader::new(file), &path.display().to_string())
}

/// Decode a PNG byte stream into a normalized channel-first tensor.
///
/// `resource` names the stream for error messages (a file path or an
/// archive entry reference).
///
/// # Errors
///
/// Returns [`Error::Decode`] if the stream is not a valid 8-bit grayscale
/// or RGB PNG.
pub fn decode_image<R: Read>(mut reader: R, resource: &str) -> Result<ImageTensor> {
    let decode_err = |reason: String| Error::Decode {
        resource: resource.to_string(),
        reason,
    };

    // `png` 0.18 requires `BufRead + Seek`, which archive entry readers do
    // not provide; buffer the stream so any `Read` stays accepted.
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| decode_err(format!("reading PNG stream: {e}")))?;
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder
        .read_info()
        .map_err(|e| decode_err(format!("reading PNG header: {e}")))?;

    let info = reader.info();
    let width = info.width as usize;
    let height = info.height as usize;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != png::BitDepth::Eight {
        return Err(decode_err(format!(
            "unsupported bit depth: {bit_depth:?} (expected 8-bit)"
        )));
    }
    let channels = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::Rgb => 3,
        other => {
            return Err(decode_err(format!("unsupported PNG color type: {other:?}")));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| decode_err("PNG output buffer size unavailable".to_string()))?;
    let mut buf = vec![0u8; buf_size];
    reader
        .next_frame(&mut buf)
        .map_err(|e| decode_err(format!("reading PNG pixel data: {e}")))?;

    Ok(ImageTensor::from_interleaved_u8(
        &buf[..channels * height * width],
        channels,
        height,
        width,
    ))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Encode 8-bit samples as a PNG in memory. Test fixture helper shared
    /// with the archive and eval tests.
    pub(crate) fn encode_png(samples: &[u8], channels: usize, height: usize, width: usize) -> Vec<u8> {
        assert_eq!(samples.len(), channels * height * width);
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width as u32, height as u32);
            encoder.set_color(match channels {
                1 => png::ColorType::Grayscale,
                3 => png::ColorType::Rgb,
                _ => unreachable!("fixtures are grayscale or RGB"),
            });
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(samples).unwrap();
        }
        out
    }

    #[test]
    fn decodes_rgb_png() {
        // 2x2 solid red
        let samples = [255u8, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0];
        let data = encode_png(&samples, 3, 2, 2);

        let t = decode_image(&data[..], "test.png").unwrap();
        assert_eq!(t.shape(), (3, 2, 2));
        assert_eq!(t.channel(0), &[1.0; 4]);
        assert_eq!(t.channel(1), &[0.0; 4]);
        assert_eq!(t.channel(2), &[0.0; 4]);
    }

    #[test]
    fn decodes_grayscale_png() {
        let samples = [0u8, 85, 170, 255];
        let data = encode_png(&samples, 1, 2, 2);

        let t = decode_image(&data[..], "gray.png").unwrap();
        assert_eq!(t.shape(), (1, 2, 2));
        for (v, &s) in t.channel(0).iter().zip(&samples) {
            assert_eq!((v * 255.0).round() as u8, s);
        }
    }

    #[test]
    fn round_trips_exact_samples() {
        let samples: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        let data = encode_png(&samples, 3, 4, 4);

        let t = decode_image(&data[..], "ramp.png").unwrap();
        assert!(t.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
        // CHW back to HWC recovers the original integer samples
        for y in 0..4 {
            for x in 0..4 {
                for c in 0..3 {
                    let v = t.channel(c)[y * 4 + x];
                    assert_eq!((v * 255.0).round() as u8, samples[(y * 4 + x) * 3 + c]);
                }
            }
        }
    }

    #[test]
    fn rejects_invalid_bytes() {
        let err = decode_image(&b"not a png"[..], "bogus").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn rejects_rgba_png() {
        let samples = [255u8, 0, 0, 255];
        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, 1, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&samples).unwrap();
        }

        let err = decode_image(&data[..], "rgba.png").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_image(Path::new("/nonexistent/missing.png")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
