use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};

use common::SnapshotCell;
use log::{info, warn};
use strum_macros::Display;

use crate::snapshot::ParameterSnapshot;
use crate::source::ParamSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreState {
    Defaulted,
    Loaded,
    Reconfigured,
}

/// A snapshot as published by the store, with how and when it got there.
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    pub params: ParameterSnapshot,
    pub state: StoreState,
    /// Caller-supplied reconfiguration version; 0 for defaults and loads.
    pub version: u32,
}

impl Default for Published {
    fn default() -> Self {
        Self {
            params: ParameterSnapshot::default(),
            state: StoreState::Defaulted,
            version: 0,
        }
    }
}

/// Owns the current parameter snapshot.
///
/// Create one at startup and hand out `Arc<ParameterStore>`, or use the
/// process-wide [`ParameterStore::instance`]. Readers never block writers;
/// a write replaces the whole snapshot at once.
#[derive(Debug, Default)]
pub struct ParameterStore {
    current: SnapshotCell<Published>,
    shut_down: AtomicBool,
}

static INSTANCE: LazyLock<ParameterStore> = LazyLock::new(ParameterStore::new);

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store, created with defaults on first access.
    pub fn instance() -> &'static ParameterStore {
        &INSTANCE
    }

    /// The current snapshot. Read several fields from one snapshot when
    /// they must agree with each other.
    pub fn snapshot(&self) -> Arc<Published> {
        self.current.load()
    }

    pub fn state(&self) -> StoreState {
        self.current.load().state
    }

    pub fn version(&self) -> u32 {
        self.current.load().version
    }

    /// Populates the store from `source`. Absent or wrong-typed keys take
    /// their defaults. Never fails.
    pub fn load<S: ParamSource + ?Sized>(&self, source: &S) -> Arc<Published> {
        self.warn_if_shut_down("load");

        let params = ParameterSnapshot::from_source(source);

        // Audit inside the writer lock so records of racing writers never
        // interleave and the last block matches the published snapshot.
        self.current.update(|_| {
            params.log_fields();

            Published {
                params,
                state: StoreState::Loaded,
                version: 0,
            }
        })
    }

    /// Replaces every parameter with `update`. `version` only orders the
    /// audit log; the last call wins regardless of its version.
    pub fn reconfigure(&self, update: ParameterSnapshot, version: u32) -> Arc<Published> {
        self.warn_if_shut_down("reconfigure");

        let params = update.normalized();

        self.current.update(|prev| {
            info!("[Params] Resetting parameters (version {}) ...", version);
            if prev.state == StoreState::Reconfigured && version <= prev.version {
                warn!(
                    "[Params] Reconfiguration version {} does not follow {}",
                    version, prev.version
                );
            }

            params.log_fields();
            info!("[Params] Done");

            Published {
                params,
                state: StoreState::Reconfigured,
                version,
            }
        })
    }

    /// Emits a warning for every value outside its intended range.
    /// Returns how many were found.
    pub fn log_range_warnings(&self) -> usize {
        let warnings = self.current.load().params.range_warnings();
        for warning in &warnings {
            warn!("[Params] {}", warning);
        }
        warnings.len()
    }

    /// Marks the end of the store's useful life. Later writes still apply
    /// but are reported.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }

        let current = self.current.load();
        info!(
            "[Params] Shutting down with {} parameters, version {}",
            current.state, current.version
        );
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    fn warn_if_shut_down(&self, operation: &str) {
        if self.is_shut_down() {
            warn!("[Params] {} called after shutdown", operation);
        }
    }
}

macro_rules! copy_accessors {
    ($($name:ident: $ty:ty),* $(,)?) => {
        impl ParameterStore {
            $(
                pub fn $name(&self) -> $ty {
                    self.current.load().params.$name
                }
            )*
        }
    };
}

macro_rules! string_accessors {
    ($($name:ident),* $(,)?) => {
        impl ParameterStore {
            $(
                pub fn $name(&self) -> String {
                    self.current.load().params.$name.clone()
                }
            )*
        }
    };
}

string_accessors!(working_dir, img_descriptor, batch_images_dir);

copy_accessors!(
    nkeypoints: i32,
    pub_debug_info: bool,
    lc_delay_kfs: i32,
    match_ratio: f64,
    min_inliers: i32,
    optim_every_kfs: i32,
    blend_exp: bool,
    blend_seams: bool,
    kf_min_inliers: i32,
    kf_overlap: f64,
    max_reproj_error: f64,
    batch: bool,
);
