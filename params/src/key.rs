use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// One variant per parameter. The string form is the key looked up in a
/// parameter source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ParamKey {
    WorkingDir,
    ImgDescriptor,
    Nkeypoints,
    PubDebugInfo,
    LcDelayKfs,
    MatchRatio,
    MinInliers,
    OptimEveryKfs,
    BlendExp,
    BlendSeams,
    KfMinInliers,
    KfOverlap,
    MaxReprojError,
    Batch,
    BatchImagesDir,
}

impl ParamKey {
    /// Human readable label used in the audit log.
    pub fn label(self) -> &'static str {
        match self {
            ParamKey::WorkingDir => "Working directory",
            ParamKey::ImgDescriptor => "Image description",
            ParamKey::Nkeypoints => "Number of features",
            ParamKey::PubDebugInfo => "Publish debug info",
            ParamKey::LcDelayKfs => "LC delay buffer size",
            ParamKey::MatchRatio => "NNDR",
            ParamKey::MinInliers => "Minimum number of inliers for LC",
            ParamKey::OptimEveryKfs => "Optimizer after every KFs",
            ParamKey::BlendExp => "Exposure compensator in blending",
            ParamKey::BlendSeams => "Seam finding in blending",
            ParamKey::KfMinInliers => "Minimum number of inliers for KF",
            ParamKey::KfOverlap => "Minimum overlap for KF",
            ParamKey::MaxReprojError => "Maximum reprojection error when computing homographies",
            ParamKey::Batch => "Batch processing",
            ParamKey::BatchImagesDir => "Batch processing image directory",
        }
    }
}
