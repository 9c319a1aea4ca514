//! Opt-in range checks. Loading and reconfiguring never run these; values
//! outside their intended range are reported, never changed.

use std::fmt;

use crate::key::ParamKey;
use crate::snapshot::ParameterSnapshot;
use crate::source::ParamValue;

#[derive(Debug, Clone, PartialEq)]
pub struct RangeWarning {
    pub key: ParamKey,
    pub value: ParamValue,
    pub expected: &'static str,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the intended range {}",
            self.key, self.value, self.expected
        )
    }
}

const COUNT_KEYS: [ParamKey; 5] = [
    ParamKey::Nkeypoints,
    ParamKey::LcDelayKfs,
    ParamKey::MinInliers,
    ParamKey::OptimEveryKfs,
    ParamKey::KfMinInliers,
];

impl ParameterSnapshot {
    pub fn range_warnings(&self) -> Vec<RangeWarning> {
        let mut warnings = Vec::new();

        for key in COUNT_KEYS {
            if let ParamValue::Int(count) = self.field(key) {
                if count < 0 {
                    warnings.push(RangeWarning {
                        key,
                        value: ParamValue::Int(count),
                        expected: ">= 0",
                    });
                }
            }
        }

        if !(self.match_ratio > 0.0 && self.match_ratio <= 1.0) {
            warnings.push(RangeWarning {
                key: ParamKey::MatchRatio,
                value: self.match_ratio.into(),
                expected: "(0, 1]",
            });
        }

        if !(0.0..=1.0).contains(&self.kf_overlap) {
            warnings.push(RangeWarning {
                key: ParamKey::KfOverlap,
                value: self.kf_overlap.into(),
                expected: "[0, 1]",
            });
        }

        if !(self.max_reproj_error.is_finite() && self.max_reproj_error >= 0.0) {
            warnings.push(RangeWarning {
                key: ParamKey::MaxReprojError,
                value: self.max_reproj_error.into(),
                expected: ">= 0, finite",
            });
        }

        warnings
    }
}
