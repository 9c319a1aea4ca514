//! Compiled-in values used when a key is absent from the parameter source.

/// Separator appended to `working_dir`.
pub const SEPARATOR: char = '/';
/// What an empty `working_dir` normalizes to.
pub const CURRENT_DIR: &str = "./";

pub const WORKING_DIR: &str = "";
pub const IMG_DESCRIPTOR: &str = "FAST_LDB";
pub const NKEYPOINTS: i32 = 3000;
pub const PUB_DEBUG_INFO: bool = false;
pub const LC_DELAY_KFS: i32 = 5;
pub const MATCH_RATIO: f64 = 0.8;
pub const MIN_INLIERS: i32 = 200;
pub const OPTIM_EVERY_KFS: i32 = 15;
pub const BLEND_EXP: bool = false;
pub const BLEND_SEAMS: bool = false;
pub const KF_MIN_INLIERS: i32 = 550;
pub const KF_OVERLAP: f64 = 0.4;
pub const MAX_REPROJ_ERROR: f64 = 3.0;
pub const BATCH: bool = false;
pub const BATCH_IMAGES_DIR: &str = "";
