use serde::{Deserialize, Serialize};

use crate::batch::{BatchOptions, DEFAULT_PARALLEL_THRESHOLD};
use crate::error::SamplerError;
use crate::layout::Order;

/// Settings shared by the batch entry points, persisted as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    pub order: Order,
    pub validate: bool,
    pub parallel_threshold: usize,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            order: Order::C,
            validate: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SamplerSettings {
    pub fn from_json(json: &str) -> Result<Self, SamplerError> {
        serde_json::from_str(json).map_err(|e| SamplerError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SamplerError> {
        serde_json::to_string(self).map_err(|e| SamplerError::InvalidConfig(e.to_string()))
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_every_field() {
        let settings = SamplerSettings {
            order: Order::F,
            validate: true,
            parallel_threshold: 17,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(json, r#"{"order":"F","validate":true,"parallel_threshold":17}"#);
        assert_eq!(SamplerSettings::from_json(&json), Ok(settings));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = SamplerSettings::from_json(r#"{"validate":true}"#).unwrap();
        assert_eq!(settings.order, Order::C);
        assert_eq!(settings.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(settings.validate);
        assert_eq!(settings.batch_options().parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn unknown_order_is_rejected() {
        let err = SamplerSettings::from_json(r#"{"order":"K"}"#);
        assert!(matches!(err, Err(SamplerError::InvalidConfig(_))), "{err:?}");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            SamplerSettings::from_json("{order: C}"),
            Err(SamplerError::InvalidConfig(_))
        ));
    }
}
