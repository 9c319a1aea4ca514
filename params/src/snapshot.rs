use log::info;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::defaults;
use crate::key::ParamKey;
use crate::source::{lookup, ParamSource, ParamValue};

/// Every tunable of the mosaicking pipeline at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    /// Root directory for run artifacts. Always ends with one separator.
    pub working_dir: String,
    /// Feature descriptor algorithm tag.
    pub img_descriptor: String,
    /// Target feature count per image.
    pub nkeypoints: i32,
    pub pub_debug_info: bool,
    /// Keyframes to wait before searching for loop closures.
    pub lc_delay_kfs: i32,
    /// Nearest-neighbor distance ratio threshold.
    pub match_ratio: f64,
    /// Minimum geometric inliers to accept a loop closure.
    pub min_inliers: i32,
    /// Run the optimizer every this many keyframes.
    pub optim_every_kfs: i32,
    pub blend_exp: bool,
    pub blend_seams: bool,
    /// Minimum inliers to accept a new keyframe.
    pub kf_min_inliers: i32,
    /// Minimum overlap fraction to accept a new keyframe.
    pub kf_overlap: f64,
    /// Reprojection error ceiling for homography acceptance.
    pub max_reproj_error: f64,
    /// Process a directory of images instead of a live stream.
    pub batch: bool,
    pub batch_images_dir: String,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            working_dir: normalize_dir(defaults::WORKING_DIR),
            img_descriptor: defaults::IMG_DESCRIPTOR.to_string(),
            nkeypoints: defaults::NKEYPOINTS,
            pub_debug_info: defaults::PUB_DEBUG_INFO,
            lc_delay_kfs: defaults::LC_DELAY_KFS,
            match_ratio: defaults::MATCH_RATIO,
            min_inliers: defaults::MIN_INLIERS,
            optim_every_kfs: defaults::OPTIM_EVERY_KFS,
            blend_exp: defaults::BLEND_EXP,
            blend_seams: defaults::BLEND_SEAMS,
            kf_min_inliers: defaults::KF_MIN_INLIERS,
            kf_overlap: defaults::KF_OVERLAP,
            max_reproj_error: defaults::MAX_REPROJ_ERROR,
            batch: defaults::BATCH,
            batch_images_dir: defaults::BATCH_IMAGES_DIR.to_string(),
        }
    }
}

impl ParameterSnapshot {
    /// Reads every key from `source`, substituting the compiled-in default
    /// for absent or wrong-typed keys.
    pub fn from_source<S: ParamSource + ?Sized>(source: &S) -> Self {
        let working_dir: String = param(source, ParamKey::WorkingDir, defaults::WORKING_DIR);

        Self {
            working_dir: normalize_dir(&working_dir),
            img_descriptor: param(source, ParamKey::ImgDescriptor, defaults::IMG_DESCRIPTOR),
            nkeypoints: param(source, ParamKey::Nkeypoints, defaults::NKEYPOINTS),
            pub_debug_info: param(source, ParamKey::PubDebugInfo, defaults::PUB_DEBUG_INFO),
            lc_delay_kfs: param(source, ParamKey::LcDelayKfs, defaults::LC_DELAY_KFS),
            match_ratio: param(source, ParamKey::MatchRatio, defaults::MATCH_RATIO),
            min_inliers: param(source, ParamKey::MinInliers, defaults::MIN_INLIERS),
            optim_every_kfs: param(source, ParamKey::OptimEveryKfs, defaults::OPTIM_EVERY_KFS),
            blend_exp: param(source, ParamKey::BlendExp, defaults::BLEND_EXP),
            blend_seams: param(source, ParamKey::BlendSeams, defaults::BLEND_SEAMS),
            kf_min_inliers: param(source, ParamKey::KfMinInliers, defaults::KF_MIN_INLIERS),
            kf_overlap: param(source, ParamKey::KfOverlap, defaults::KF_OVERLAP),
            max_reproj_error: param(source, ParamKey::MaxReprojError, defaults::MAX_REPROJ_ERROR),
            batch: param(source, ParamKey::Batch, defaults::BATCH),
            batch_images_dir: param(source, ParamKey::BatchImagesDir, defaults::BATCH_IMAGES_DIR),
        }
    }

    /// Parses a complete snapshot. Every field must be present.
    pub fn from_yaml(text: &str) -> crate::Result<Self> {
        let snapshot: Self = serde_yml::from_str(text)?;
        Ok(snapshot.normalized())
    }

    pub fn to_yaml(&self) -> crate::Result<String> {
        Ok(serde_yml::to_string(self)?)
    }

    pub fn normalized(mut self) -> Self {
        self.working_dir = normalize_dir(&self.working_dir);
        self
    }

    pub fn field(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::WorkingDir => self.working_dir.as_str().into(),
            ParamKey::ImgDescriptor => self.img_descriptor.as_str().into(),
            ParamKey::Nkeypoints => self.nkeypoints.into(),
            ParamKey::PubDebugInfo => self.pub_debug_info.into(),
            ParamKey::LcDelayKfs => self.lc_delay_kfs.into(),
            ParamKey::MatchRatio => self.match_ratio.into(),
            ParamKey::MinInliers => self.min_inliers.into(),
            ParamKey::OptimEveryKfs => self.optim_every_kfs.into(),
            ParamKey::BlendExp => self.blend_exp.into(),
            ParamKey::BlendSeams => self.blend_seams.into(),
            ParamKey::KfMinInliers => self.kf_min_inliers.into(),
            ParamKey::KfOverlap => self.kf_overlap.into(),
            ParamKey::MaxReprojError => self.max_reproj_error.into(),
            ParamKey::Batch => self.batch.into(),
            ParamKey::BatchImagesDir => self.batch_images_dir.as_str().into(),
        }
    }

    /// One line per field, in key order, as written to the audit log.
    /// Booleans read 1/0.
    pub fn audit_records(&self) -> Vec<String> {
        ParamKey::iter()
            .map(|key| match self.field(key) {
                ParamValue::Bool(value) => format!("{}: {}", key.label(), u8::from(value)),
                value => format!("{}: {}", key.label(), value),
            })
            .collect()
    }

    /// Emits one record per field with the value in effect.
    pub fn log_fields(&self) {
        for record in self.audit_records() {
            info!("[Params] {}", record);
        }
    }
}

fn param<S, T, D>(source: &S, key: ParamKey, default: D) -> T
where
    S: ParamSource + ?Sized,
    T: crate::source::FromParamValue,
    D: Into<T>,
{
    lookup(source, key.as_ref(), default.into())
}

/// Ensures `dir` ends with exactly one separator. An empty directory means
/// the current directory.
pub fn normalize_dir(dir: &str) -> String {
    if dir.is_empty() {
        return defaults::CURRENT_DIR.to_string();
    }

    let trimmed = dir.trim_end_matches(defaults::SEPARATOR);
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    normalized.push_str(trimmed);
    normalized.push(defaults::SEPARATOR);
    normalized
}
