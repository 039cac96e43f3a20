//! Derived performance statistics.

use serde::{Deserialize, Serialize};

/// Performance statistics snapshot for one game.
///
/// Recomputed on demand from the turn history, never stored by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Sum of recorded turn scores. Voided turns count as 0.
    pub total_score: u16,

    /// Total darts thrown, including those of voided turns.
    pub darts_thrown: u32,

    /// Turns recorded, voided ones included.
    pub turns_taken: u32,

    /// `total_score / darts_thrown`, rounded to one decimal.
    pub points_per_dart: f64,

    /// Points per dart normalized to three darts, rounded to one decimal.
    pub three_dart_average: f64,
}

impl GameStats {
    /// Compute the statistics for the given totals.
    ///
    /// Both averages are `0.0` when no darts have been thrown.
    #[must_use]
    pub fn new(total_score: u16, darts_thrown: u32, turns_taken: u32) -> Self {
        let (points_per_dart, three_dart_average) = if darts_thrown == 0 {
            (0.0, 0.0)
        } else {
            let per_dart = f64::from(total_score) / f64::from(darts_thrown);
            // Round once per figure; rounding per-dart first would compound.
            (round_to_tenth(per_dart), round_to_tenth(per_dart * 3.0))
        };

        Self {
            total_score,
            darts_thrown,
            turns_taken,
            points_per_dart,
            three_dart_average,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
