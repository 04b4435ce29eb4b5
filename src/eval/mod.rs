//! Submission scoring: phase strategies and the `evaluate` entry point.
//!
//! The hosting platform calls [`evaluate`] once per submission with the
//! annotation-file path, the submitted archive path and a phase codename.
//! Each recognized phase is a [`PhaseStrategy`] implementation; adding a
//! phase means adding a strategy and registering it in [`phase_for`]
//! without touching the existing ones. Unrecognized codenames fail fast
//! with [`Error::UnknownPhase`].

pub mod report;

use std::path::Path;

use crate::archive::extract_images;
use crate::error::{Error, Result};
use crate::eval::report::{ResultReport, ScoreRecord};
use crate::loader::load_image;
use crate::metrics::{calculate_psnr, calculate_ssim};
use crate::tensor::ImageTensor;

/// Expected base filename of the public-subset image.
pub const PUBLIC_IMAGE: &str = "public.png";
/// Expected base filename of the private-subset image.
pub const PRIVATE_IMAGE: &str = "private.png";

/// Opaque submission metadata passed through by the hosting platform.
///
/// Consumed only by the platform's notification hooks; scoring ignores it.
pub type SubmissionMetadata = serde_json::Value;

/// Scoring logic for one evaluation phase.
pub trait PhaseStrategy {
    /// Codename the platform uses to select this phase.
    fn codename(&self) -> &'static str;

    /// Score one submission against the ground truth for this phase.
    ///
    /// `test_annotation_file` locates the ground-truth directory (its
    /// parent); `user_submission_file` is the submitted archive.
    fn score(
        &self,
        test_annotation_file: &Path,
        user_submission_file: &Path,
    ) -> Result<ResultReport>;
}

/// Resolve a phase codename to its scoring strategy.
///
/// # Errors
///
/// Returns [`Error::UnknownPhase`] for codenames outside the recognized
/// set.
pub fn phase_for(codename: &str) -> Result<Box<dyn PhaseStrategy>> {
    match codename {
        "ex1" => Ok(Box::new(PixelFidelityPhase)),
        "ex2" => Ok(Box::new(ConstantScorePhase)),
        other => Err(Error::UnknownPhase(other.to_string())),
    }
}

/// Score a submission for a phase and return the structured report.
///
/// This is the platform's invocation contract: paths to the annotation
/// file and the submitted archive, the phase codename, and an opaque
/// metadata bag that scoring passes through unused.
///
/// # Errors
///
/// Every failure (unreadable resource, invalid image or archive, missing
/// submission entry, degenerate metric input, unknown phase) is fatal to
/// the call and propagates to the platform; there is no partial-success
/// report.
pub fn evaluate(
    test_annotation_file: &Path,
    user_submission_file: &Path,
    phase_codename: &str,
    _metadata: Option<&SubmissionMetadata>,
) -> Result<ResultReport> {
    phase_for(phase_codename)?.score(test_annotation_file, user_submission_file)
}

/// Phase `ex1`: PSNR/SSIM pixel-fidelity scoring of `public.png` and
/// `private.png` against the ground truth beside the annotation file.
pub struct PixelFidelityPhase;

impl PixelFidelityPhase {
    fn score_subset(
        &self,
        subset: &str,
        ground_truth: &ImageTensor,
        submitted: Option<ImageTensor>,
        entry_name: &str,
    ) -> Result<ScoreRecord> {
        let submitted = submitted.ok_or_else(|| Error::MissingSubmissionFile {
            phase: self.codename().to_string(),
            subset: subset.to_string(),
            name: entry_name.to_string(),
        })?;

        let psnr = calculate_psnr(ground_truth, &submitted)?;
        let ssim = calculate_ssim(ground_truth, &submitted)?;
        Ok(ScoreRecord::new()
            .with("PSNR", psnr)
            .with("SSIM", ssim)
            .with("Total", ssim * psnr))
    }
}

impl PhaseStrategy for PixelFidelityPhase {
    fn codename(&self) -> &'static str {
        "ex1"
    }

    fn score(
        &self,
        test_annotation_file: &Path,
        user_submission_file: &Path,
    ) -> Result<ResultReport> {
        let gt_dir = test_annotation_file
            .parent()
            .unwrap_or_else(|| Path::new(""));
        let gt_public = load_image(&gt_dir.join(PUBLIC_IMAGE))?;
        let gt_private = load_image(&gt_dir.join(PRIVATE_IMAGE))?;

        let mut submitted =
            extract_images(user_submission_file, &[PUBLIC_IMAGE, PRIVATE_IMAGE])?;

        let public = self.score_subset(
            "public",
            &gt_public,
            submitted.remove(PUBLIC_IMAGE),
            PUBLIC_IMAGE,
        )?;
        let private = self.score_subset(
            "private",
            &gt_private,
            submitted.remove(PRIVATE_IMAGE),
            PRIVATE_IMAGE,
        )?;

        Ok(ResultReport::from_subsets(self.codename(), public, private))
    }
}

/// Phase `ex2`: a static placeholder phase that scores every submission
/// `{Accuracy: 0.5}` on both subsets without touching the inputs.
pub struct ConstantScorePhase;

impl PhaseStrategy for ConstantScorePhase {
    fn codename(&self) -> &'static str {
        "ex2"
    }

    fn score(&self, _annotation: &Path, _submission: &Path) -> Result<ResultReport> {
        let record = ScoreRecord::new().with("Accuracy", 0.5);
        Ok(ResultReport::from_subsets(
            self.codename(),
            record.clone(),
            record,
        ))
    }
}
