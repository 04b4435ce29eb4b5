//! Quality metrics for comparing ground-truth and submitted images.
//!
//! Supported metrics:
//!
//! - **PSNR**: Peak Signal-to-Noise Ratio (higher is better, infinite for
//!   identical images).
//! - **SSIM**: Structural Similarity in `[-1.0, 1.0]` (1.0 = identical),
//!   see [`ssim`].
//!
//! All functions are pure: they take two tensors and return a value or an
//! error, with no process-wide state.

pub mod ssim;

pub use ssim::calculate_ssim;

use crate::error::{Error, Result};
use crate::tensor::ImageTensor;

pub(crate) fn check_shapes(reference: &ImageTensor, test: &ImageTensor) -> Result<()> {
    if !reference.same_shape(test) {
        return Err(Error::DimensionMismatch {
            expected: reference.shape(),
            actual: test.shape(),
        });
    }
    Ok(())
}

/// Mean squared per-element difference across all channel/height/width
/// positions.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if shapes differ and
/// [`Error::DegenerateComparison`] for empty tensors.
pub fn mean_squared_error(reference: &ImageTensor, test: &ImageTensor) -> Result<f64> {
    check_shapes(reference, test)?;
    if reference.is_empty() {
        return Err(Error::DegenerateComparison {
            metric: "MSE".to_string(),
            reason: "empty tensors".to_string(),
        });
    }

    let mut sum = 0.0_f64;
    for (r, t) in reference.as_slice().iter().zip(test.as_slice()) {
        let diff = f64::from(*r) - f64::from(*t);
        sum += diff * diff;
    }
    Ok(sum / reference.len() as f64)
}

/// Calculate PSNR between two normalized tensors.
///
/// Tensors hold values in `[0.0, 1.0]`, so the peak signal value is 1.0 and
/// PSNR is `10 * log10(1 / MSE)` in decibels. Identical inputs (MSE = 0)
/// yield `f64::INFINITY` rather than an error, matching the usual
/// metric-library convention.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if shapes differ and
/// [`Error::DegenerateComparison`] for empty tensors.
pub fn calculate_psnr(reference: &ImageTensor, test: &ImageTensor) -> Result<f64> {
    let mse = mean_squared_error(reference, test)?;
    if mse == 0.0 {
        Ok(f64::INFINITY)
    } else {
        Ok(10.0 * (1.0 / mse).log10())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(channels: usize, height: usize, width: usize, level: u8) -> ImageTensor {
        ImageTensor::from_interleaved_u8(
            &vec![level; channels * height * width],
            channels,
            height,
            width,
        )
    }

    #[test]
    fn psnr_identical_is_infinite() {
        let t = uniform(3, 8, 8, 128);
        let psnr = calculate_psnr(&t, &t).unwrap();
        assert!(psnr.is_infinite());
    }

    #[test]
    fn psnr_constant_offset() {
        let reference = uniform(3, 16, 16, 100);
        let test = uniform(3, 16, 16, 110);
        let psnr = calculate_psnr(&reference, &test).unwrap();
        // Constant difference of 10/255: 10 * log10(255^2 / 100) ~= 28.13 dB
        assert!(psnr > 28.0);
        assert!(psnr < 29.0);
    }

    #[test]
    fn psnr_finite_and_nonnegative_for_distinct_images() {
        let a = uniform(1, 4, 4, 0);
        let b = uniform(1, 4, 4, 255);
        let psnr = calculate_psnr(&a, &b).unwrap();
        assert!(psnr.is_finite());
        assert!(psnr >= 0.0);
    }

    #[test]
    fn mse_shape_mismatch_errors() {
        let a = uniform(3, 4, 4, 50);
        let b = uniform(1, 4, 4, 50);
        let err = mean_squared_error(&a, &b).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn mse_empty_is_degenerate() {
        let a = ImageTensor::from_interleaved_u8(&[], 1, 0, 0);
        let err = mean_squared_error(&a, &a.clone()).unwrap_err();
        assert!(matches!(err, Error::DegenerateComparison { .. }));
    }
}
