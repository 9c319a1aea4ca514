use strum::IntoEnumIterator;

use super::audit_log::{captured, setup_capture_logging};
use crate::{MapSource, ParamKey, ParameterSnapshot, ParameterStore, StoreState, YamlSource};

#[test]
fn absent_keys_take_defaults() {
    setup_capture_logging();

    let store = ParameterStore::new();
    let published = store.load(&MapSource::new());

    assert_eq!(published.state, StoreState::Loaded);
    assert_eq!(published.params, ParameterSnapshot::default());
    for key in ParamKey::iter() {
        assert_eq!(
            published.params.field(key),
            ParameterSnapshot::default().field(key),
            "{} should default",
            key
        );
    }
}

#[test]
fn missing_nkeypoints_defaults_to_3000() {
    let source = MapSource::new()
        .with("working_dir", "/data/run1")
        .with("match_ratio", 0.7);

    let store = ParameterStore::new();
    store.load(&source);

    assert_eq!(store.nkeypoints(), 3000);
    assert_eq!(store.match_ratio(), 0.7);
}

#[test]
fn working_dir_gets_trailing_separator() {
    let store = ParameterStore::new();

    store.load(&MapSource::new().with("working_dir", "/data/run1"));
    assert_eq!(store.working_dir(), "/data/run1/");

    store.load(&MapSource::new().with("working_dir", "/data/run1/"));
    assert_eq!(store.working_dir(), "/data/run1/");
}

#[test]
fn empty_working_dir_loads_as_current_dir() {
    let store = ParameterStore::new();

    store.load(&MapSource::new().with("working_dir", ""));
    assert_eq!(store.working_dir(), "./");

    store.load(&MapSource::new());
    assert_eq!(store.working_dir(), "./");
}

#[test]
fn batch_images_dir_is_not_normalized() {
    let store = ParameterStore::new();
    store.load(&MapSource::new().with("batch_images_dir", "/data/images"));

    assert_eq!(store.batch_images_dir(), "/data/images");
}

#[test]
fn every_key_is_read() {
    let source = MapSource::new()
        .with("working_dir", "/data/run2")
        .with("img_descriptor", "ORB")
        .with("nkeypoints", 1500)
        .with("pub_debug_info", true)
        .with("lc_delay_kfs", 8)
        .with("match_ratio", 0.9)
        .with("min_inliers", 120)
        .with("optim_every_kfs", 10)
        .with("blend_exp", true)
        .with("blend_seams", true)
        .with("kf_min_inliers", 400)
        .with("kf_overlap", 0.5)
        .with("max_reproj_error", 2.5)
        .with("batch", true)
        .with("batch_images_dir", "/data/images");

    let store = ParameterStore::new();
    let published = store.load(&source);

    let mut expected = super::tuned_snapshot();
    expected.working_dir = "/data/run2/".to_string();
    assert_eq!(published.params, expected);
}

#[test]
fn wrong_typed_keys_fall_back_to_defaults() {
    let source = MapSource::new()
        .with("nkeypoints", "lots")
        .with("blend_exp", 1)
        .with("img_descriptor", 7);

    let store = ParameterStore::new();
    store.load(&source);

    assert_eq!(store.nkeypoints(), 3000);
    assert!(!store.blend_exp());
    assert_eq!(store.img_descriptor(), "FAST_LDB");
}

#[test]
fn out_of_range_values_are_kept() {
    let source = MapSource::new()
        .with("nkeypoints", -5)
        .with("match_ratio", 1.7);

    let store = ParameterStore::new();
    store.load(&source);

    assert_eq!(store.nkeypoints(), -5);
    assert_eq!(store.match_ratio(), 1.7);
    assert_eq!(store.log_range_warnings(), 2);
    assert_eq!(store.nkeypoints(), -5);
}

#[test]
fn load_is_idempotent() {
    let source = MapSource::new()
        .with("working_dir", "/data/run1")
        .with("kf_overlap", 0.6);

    let store = ParameterStore::new();
    let first = store.load(&source);
    let second = store.load(&source);

    assert_eq!(first, second);
}

#[test]
fn loads_from_yaml_file() {
    let path = std::env::temp_dir().join(format!(
        "mosaic_params_loader_{}.yaml",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "mosaic:\n  working_dir: /data/yaml\n  nkeypoints: 2500\n  max_reproj_error: 4\n  batch: true\n",
    )
    .unwrap();

    let source = YamlSource::from_file(&path)
        .unwrap()
        .with_namespace("mosaic")
        .unwrap();
    std::fs::remove_file(&path).unwrap();

    let store = ParameterStore::new();
    store.load(&source);

    assert_eq!(store.working_dir(), "/data/yaml/");
    assert_eq!(store.nkeypoints(), 2500);
    assert_eq!(store.max_reproj_error(), 4.0);
    assert!(store.batch());
    assert_eq!(store.kf_min_inliers(), 550);
}

#[test]
fn load_audits_every_field_after_normalization() {
    setup_capture_logging();

    let store = ParameterStore::new();
    let published = store.load(&MapSource::new().with("working_dir", "/data/audit_load"));

    let records = published.params.audit_records();
    assert_eq!(records.len(), 15);
    assert_eq!(records[0], "Working directory: /data/audit_load/");

    let logged = captured("Working directory: /data/audit_load");
    assert_eq!(logged, vec!["[Params] Working directory: /data/audit_load/"]);
}

#[test]
fn audit_records_follow_loaded_values() {
    let store = ParameterStore::new();
    let published = store.load(&MapSource::new().with("working_dir", "/data/run1"));

    let records = published.params.audit_records();
    let keys: Vec<ParamKey> = ParamKey::iter().collect();
    assert_eq!(records.len(), keys.len());
    for (record, key) in records.iter().zip(keys) {
        assert!(record.starts_with(key.label()));
    }
    assert_eq!(records[0], "Working directory: /data/run1/");
}
