mod loader_tests;

use crate::ParameterSnapshot;

/// A snapshot where every field differs from the defaults.
pub(crate) fn tuned_snapshot() -> ParameterSnapshot {
    ParameterSnapshot {
        working_dir: "/data/run2".to_string(),
        img_descriptor: "ORB".to_string(),
        nkeypoints: 1500,
        pub_debug_info: true,
        lc_delay_kfs: 8,
        match_ratio: 0.9,
        min_inliers: 120,
        optim_every_kfs: 10,
        blend_exp: true,
        blend_seams: true,
        kf_min_inliers: 400,
        kf_overlap: 0.5,
        max_reproj_error: 2.5,
        batch: true,
        batch_images_dir: "/data/images".to_string(),
    }
}
