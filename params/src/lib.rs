//! The parameter set shared by every stage of the mosaicking pipeline.
//!
//! A [`ParameterStore`] holds one published [`ParameterSnapshot`]. It starts
//! from compiled-in defaults, is populated once from a [`ParamSource`] with
//! [`ParameterStore::load`], and may then be replaced any number of times with
//! [`ParameterStore::reconfigure`]. Readers always observe a complete snapshot.

pub mod defaults;
pub mod error;
pub mod key;
pub mod listener;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod validate;

pub use error::{ParamsError, Result};
pub use key::ParamKey;
pub use listener::{ReconfigureEvent, ReconfigureListener, ReconfigureMessage};
pub use snapshot::{normalize_dir, ParameterSnapshot};
pub use source::{FromParamValue, MapSource, ParamSource, ParamValue, YamlSource};
pub use store::{ParameterStore, Published, StoreState};
pub use validate::RangeWarning;

#[cfg(test)]
mod tests;
