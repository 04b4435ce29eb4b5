//! Channel-first image tensors.
//!
//! Decoded images are held as [`ImageTensor`]: a flat `f32` buffer in
//! channel-major order (channel, height, width) with all values scaled to
//! `[0.0, 1.0]`. Grayscale sources get a single channel, RGB sources three.

/// A decoded image as a channel-first float tensor.
///
/// Layout: `data[c * height * width + y * width + x]`. Values are in
/// `[0.0, 1.0]` (8-bit samples divided by 255). Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    channels: usize,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Build a tensor from interleaved 8-bit samples in (height, width,
    /// channel) order, as produced by image decoders.
    ///
    /// For `channels == 1` the samples are taken as-is under a single
    /// channel axis; otherwise the trailing channel axis is transposed to
    /// the front. Samples are scaled by 1/255 into `[0.0, 1.0]`.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len() != channels * height * width`.
    #[must_use]
    pub fn from_interleaved_u8(
        samples: &[u8],
        channels: usize,
        height: usize,
        width: usize,
    ) -> Self {
        assert_eq!(samples.len(), channels * height * width);

        let plane = height * width;
        let mut data = vec![0.0_f32; samples.len()];
        if channels == 1 {
            for (dst, &s) in data.iter_mut().zip(samples) {
                *dst = f32::from(s) / 255.0;
            }
        } else {
            // HWC -> CHW
            for y in 0..height {
                for x in 0..width {
                    for c in 0..channels {
                        let s = samples[(y * width + x) * channels + c];
                        data[c * plane + y * width + x] = f32::from(s) / 255.0;
                    }
                }
            }
        }

        Self {
            channels,
            height,
            width,
            data,
        }
    }

    /// Number of channels (1 for grayscale, 3 for RGB).
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Shape as (channels, height, width).
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.channels, self.height, self.width)
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat view over all elements in channel-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// View of a single channel plane in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `c >= self.channels()`.
    #[must_use]
    pub fn channel(&self, c: usize) -> &[f32] {
        assert!(c < self.channels);
        let plane = self.height * self.width;
        &self.data[c * plane..(c + 1) * plane]
    }

    /// Whether two tensors have identical shape.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}
