//! Encoder settings loaded from JSON.
//!
//! ```json
//! { "history_planes": 8, "fill_empty_history": "fen_only" }
//! ```
//!
//! Missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::PositionHistory;
use crate::nn::encoding::{self, encode_position_for_nn, FillEmptyHistory};
use crate::nn::layout::MOVE_HISTORY;
use crate::nn::plane::InputPlanes;

/// Errors that can occur while loading an encoder config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How positions are turned into network input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Plies of history to encode, at most 8.
    pub history_planes: usize,
    pub fill_empty_history: FillEmptyHistory,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            history_planes: MOVE_HISTORY,
            fill_empty_history: FillEmptyHistory::FenOnly,
        }
    }
}

impl EncoderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config file. A `history_planes` above 8 is kept as written
    /// and reported on stderr; encoding clamps it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        if config.history_planes > MOVE_HISTORY {
            eprintln!(
                "info string history_planes {} in {} exceeds {}, clamping",
                config.history_planes,
                path.display(),
                MOVE_HISTORY
            );
        }
        Ok(config)
    }

    pub fn encode(&self, history: &PositionHistory) -> InputPlanes {
        encode_position_for_nn(history, self.history_planes, self.fill_empty_history)
    }

    pub fn encode_batch(&self, histories: &[PositionHistory]) -> Vec<InputPlanes> {
        encoding::encode_batch(histories, self.history_planes, self.fill_empty_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::layout::{HistorySlot, PLANES_PER_BOARD};

    #[test]
    fn defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.history_planes, 8);
        assert_eq!(config.fill_empty_history, FillEmptyHistory::FenOnly);
        assert_eq!(EncoderConfig::from_json("{}").unwrap(), config);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = EncoderConfig::from_json(r#"{"fill_empty_history": "always"}"#).unwrap();
        assert_eq!(config.history_planes, 8);
        assert_eq!(config.fill_empty_history, FillEmptyHistory::Always);

        let config = EncoderConfig::from_json(r#"{"history_planes": 1}"#).unwrap();
        assert_eq!(config.history_planes, 1);
        assert_eq!(config.fill_empty_history, FillEmptyHistory::FenOnly);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = EncoderConfig::from_json(r#"{"fill_empty_history": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        let err = EncoderConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EncoderConfig::load(Path::new("/nonexistent/encoder.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir()
            .join(format!("chessplanes-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"history_planes": 12, "fill_empty_history": "no"}"#).unwrap();
        let config = EncoderConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.history_planes, 12);
        assert_eq!(config.fill_empty_history, FillEmptyHistory::No);

        // Encoding clamps to eight groups regardless.
        let planes = config.encode(&PositionHistory::startpos());
        assert_eq!(planes.len(), 112);
    }

    #[test]
    fn round_trips_through_json() {
        let config = EncoderConfig {
            history_planes: 4,
            fill_empty_history: FillEmptyHistory::Always,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"history_planes":4,"fill_empty_history":"always"}"#);
        assert_eq!(EncoderConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn encode_applies_settings() {
        let history = PositionHistory::startpos();
        let one = EncoderConfig {
            history_planes: 1,
            fill_empty_history: FillEmptyHistory::Always,
        };
        let planes = one.encode(&history);
        assert!(!planes.history(0, HistorySlot::OurPawns).is_zero());
        assert!(planes.as_slice()[PLANES_PER_BOARD..104].iter().all(|p| p.is_zero()));

        let batch = one.encode_batch(&[history.clone(), history]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], planes);
    }
}
