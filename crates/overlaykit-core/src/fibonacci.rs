//! Fibonacci ratio table shared by every fib-family template.
//!
//! Templates pick levels by name from this table instead of repeating
//! literals, so all tools agree on the exact numeric value of each ratio.

use serde::{Deserialize, Serialize};

/// Canonical retracement/extension ratios, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FibRatio {
    /// Base level (0%) used by retracement and channel tools
    Zero,
    R0236,
    R0382,
    R0500,
    R0618,
    R1000,
    R1272,
    R1618,
    R2000,
}

impl FibRatio {
    /// Every ratio, in ascending order.
    pub const ALL: [FibRatio; 9] = [
        FibRatio::Zero,
        FibRatio::R0236,
        FibRatio::R0382,
        FibRatio::R0500,
        FibRatio::R0618,
        FibRatio::R1000,
        FibRatio::R1272,
        FibRatio::R1618,
        FibRatio::R2000,
    ];

    /// Full circles around the first anchor.
    pub const CIRCLE_LEVELS: [FibRatio; 5] = [
        FibRatio::R0236,
        FibRatio::R0382,
        FibRatio::R0500,
        FibRatio::R0618,
        FibRatio::R1000,
    ];

    /// Half arcs, speed-resistance fan rays.
    pub const ARC_LEVELS: [FibRatio; 4] = [
        FibRatio::R0382,
        FibRatio::R0500,
        FibRatio::R0618,
        FibRatio::R1000,
    ];

    /// Levels beyond the measured move.
    pub const EXTENSION_LEVELS: [FibRatio; 3] =
        [FibRatio::R1272, FibRatio::R1618, FibRatio::R2000];

    /// Classic retracement grid between two anchors.
    pub const RETRACEMENT_LEVELS: [FibRatio; 6] = [
        FibRatio::Zero,
        FibRatio::R0236,
        FibRatio::R0382,
        FibRatio::R0500,
        FibRatio::R0618,
        FibRatio::R1000,
    ];

    /// Parallel channel copies.
    pub const CHANNEL_LEVELS: [FibRatio; 5] = [
        FibRatio::Zero,
        FibRatio::R0382,
        FibRatio::R0500,
        FibRatio::R0618,
        FibRatio::R1000,
    ];

    pub fn value(&self) -> f64 {
        match self {
            FibRatio::Zero => 0.0,
            FibRatio::R0236 => 0.236,
            FibRatio::R0382 => 0.382,
            FibRatio::R0500 => 0.5,
            FibRatio::R0618 => 0.618,
            FibRatio::R1000 => 1.0,
            FibRatio::R1272 => 1.272,
            FibRatio::R1618 => 1.618,
            FibRatio::R2000 => 2.0,
        }
    }

    /// Name as used in configuration and labels
    pub fn as_str(&self) -> &'static str {
        match self {
            FibRatio::Zero => "0",
            FibRatio::R0236 => "0.236",
            FibRatio::R0382 => "0.382",
            FibRatio::R0500 => "0.5",
            FibRatio::R0618 => "0.618",
            FibRatio::R1000 => "1",
            FibRatio::R1272 => "1.272",
            FibRatio::R1618 => "1.618",
            FibRatio::R2000 => "2",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Percentage label, e.g. `61.8%`
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.value() * 100.0)
    }
}

/// Fibonacci numbers used for time-zone spacing.
pub const FIB_TIME_SEQUENCE: [u32; 6] = [1, 2, 3, 5, 8, 13];
