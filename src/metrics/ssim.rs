//! SSIM (Structural Similarity) metric calculation.
//!
//! Classic windowed SSIM over normalized tensors: a uniform square window
//! slides over every valid position of each channel plane, the local SSIM
//! statistic is averaged over positions, and channel scores are averaged
//! into the final value. Scores lie in `[-1.0, 1.0]` with 1.0 for
//! identical images.

use crate::error::{Error, Result};
use crate::metrics::check_shapes;
use crate::tensor::ImageTensor;

/// Default window side length; clamped down for images smaller than this.
const WINDOW: usize = 7;

/// Stabilization constants for a dynamic range of 1.0 (K1 = 0.01,
/// K2 = 0.03).
const C1: f64 = 0.01 * 0.01;
const C2: f64 = 0.03 * 0.03;

/// Calculate SSIM between two normalized tensors.
///
/// Computed per channel with the channel axis first, then averaged over
/// channels. The window is 7x7, clamped to the smaller image dimension and
/// forced odd so small images still score. Variances use the unbiased
/// estimator, as the reference metric library does.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if shapes differ and
/// [`Error::DegenerateComparison`] for empty tensors.
pub fn calculate_ssim(reference: &ImageTensor, test: &ImageTensor) -> Result<f64> {
    check_shapes(reference, test)?;

    if reference.is_empty() {
        return Err(Error::DegenerateComparison {
            metric: "SSIM".to_string(),
            reason: "empty tensors".to_string(),
        });
    }

    let (channels, height, width) = reference.shape();
    let mut win = WINDOW.min(height).min(width);
    if win % 2 == 0 {
        win -= 1;
    }

    let mut total = 0.0;
    for c in 0..channels {
        total += ssim_plane(reference.channel(c), test.channel(c), width, height, win);
    }
    Ok(total / channels as f64)
}

/// Mean local SSIM over all valid window positions of one channel plane.
fn ssim_plane(x: &[f32], y: &[f32], width: usize, height: usize, win: usize) -> f64 {
    let n = (win * win) as f64;
    // Unbiased sample (co)variance; a 1x1 window has zero deviations anyway.
    let norm = if win > 1 { 1.0 / (n - 1.0) } else { 1.0 };

    let mut total = 0.0;
    let mut count = 0usize;
    for wy in 0..=(height - win) {
        for wx in 0..=(width - win) {
            let mut sum_x = 0.0_f64;
            let mut sum_y = 0.0_f64;
            for dy in 0..win {
                let row = (wy + dy) * width + wx;
                for dx in 0..win {
                    sum_x += f64::from(x[row + dx]);
                    sum_y += f64::from(y[row + dx]);
                }
            }
            let mean_x = sum_x / n;
            let mean_y = sum_y / n;

            let mut var_x = 0.0_f64;
            let mut var_y = 0.0_f64;
            let mut cov = 0.0_f64;
            for dy in 0..win {
                let row = (wy + dy) * width + wx;
                for dx in 0..win {
                    let dxv = f64::from(x[row + dx]) - mean_x;
                    let dyv = f64::from(y[row + dx]) - mean_y;
                    var_x += dxv * dxv;
                    var_y += dyv * dyv;
                    cov += dxv * dyv;
                }
            }
            var_x *= norm;
            var_y *= norm;
            cov *= norm;

            let luminance = 2.0 * mean_x * mean_y + C1;
            let contrast = 2.0 * cov + C2;
            let denom = (mean_x * mean_x + mean_y * mean_y + C1) * (var_x + var_y + C2);
            total += luminance * contrast / denom;
            count += 1;
        }
    }
    total / count as f64
}
