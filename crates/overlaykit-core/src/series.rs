//! Time-series samples supplied by the host.

use serde::{Deserialize, Serialize};

/// One OHLCV bar of the underlying series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Candle {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Candle with every price field set to `close`; handy for close-only series.
    pub fn from_close(timestamp: i64, close: f64) -> Self {
        Self::new(timestamp, close, close, close, close, 0.0)
    }
}
