//! # submission-eval
//!
//! Benchmark submission scoring library.
//!
//! The hosting platform invokes [`evaluate`] once per submission with the
//! ground-truth annotation path, the submitted ZIP archive and a phase
//! codename; this crate decodes the images, computes quality metrics
//! (PSNR, SSIM) and returns the platform's structured score report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use submission_eval::evaluate;
//!
//! let report = evaluate(
//!     Path::new("ground_truth/annotations.json"),
//!     Path::new("uploads/submission.zip"),
//!     "ex1",
//!     None,
//! )?;
//! println!("{}", report.to_json()?);
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`tensor`]: Channel-first normalized image tensors
//! - [`loader`]: PNG decoding into tensors
//! - [`archive`]: Submission-archive entry resolution
//! - [`metrics`]: Quality metrics (PSNR, SSIM)
//! - [`eval`]: Phase strategies and score reports

pub mod archive;
pub mod error;
pub mod eval;
pub mod loader;
pub mod metrics;
pub mod tensor;

// Re-export commonly used types
pub use archive::extract_images;
pub use error::{Error, Result};
pub use eval::{
    evaluate, phase_for,
    report::{ResultReport, ScoreRecord},
    ConstantScorePhase, PhaseStrategy, PixelFidelityPhase, SubmissionMetadata,
    PRIVATE_IMAGE, PUBLIC_IMAGE,
};
pub use loader::{decode_image, load_image};
pub use metrics::{calculate_psnr, calculate_ssim, mean_squared_error};
pub use tensor::ImageTensor;
