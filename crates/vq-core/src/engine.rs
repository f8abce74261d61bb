//! VQ Snapshot scoring.
//!
//! A complete answer set sums to a score in `14..=70`. The score is then
//! classified against [`BANDS`], an ordered table of inclusive upper bounds
//! scanned first-match. The last row has no bound, so every `i32` lands in
//! exactly one band.

use serde::Serialize;

use crate::answers::AnswerSet;
use crate::question::{LIKERT_MAX, LIKERT_MIN, QUESTION_COUNT};

/// Lowest score a complete answer set can produce.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const MIN_SCORE: i32 = QUESTION_COUNT as i32 * LIKERT_MIN as i32;

/// Highest score a complete answer set can produce.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const MAX_SCORE: i32 = QUESTION_COUNT as i32 * LIKERT_MAX as i32;

/// A labelled score interval.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Band {
    /// Inclusive upper bound. `None` for the final catch-all row.
    pub upper: Option<i32>,
    pub label: &'static str,
    pub description: &'static str,
    pub percentile: &'static str,
}

impl Band {
    /// Whether `score` passes this row's guard.
    #[must_use]
    pub fn admits(&self, score: i32) -> bool {
        self.upper.is_none_or(|upper| score <= upper)
    }
}

/// Band table, ascending by upper bound.
pub static BANDS: [Band; 9] = [
    Band {
        upper: Some(25),
        label: "Very Low",
        description: "Strong tendency to adjust values for convenience or self-gain. Moral stance is situational and heavily influenced by external pressures.",
        percentile: "<10th",
    },
    Band {
        upper: Some(33),
        label: "Low",
        description: "Some consistent values in safe settings, but readily compromised when under stress, temptation, or group pressure.",
        percentile: "10th\u{2013}25th",
    },
    Band {
        upper: Some(40),
        label: "Lower-Moderate",
        description: "Generally aware of right and wrong but applies selectively. Will uphold values when stakes are low; risk of bending under higher cost.",
        percentile: "25th\u{2013}40th",
    },
    Band {
        upper: Some(47),
        label: "Moderate",
        description: "Keeps values intact in most personal situations; occasional slip under significant social, financial, or emotional pressure.",
        percentile: "40th\u{2013}60th",
    },
    Band {
        upper: Some(53),
        label: "Upper-Moderate",
        description: "Maintains moral alignment under moderate difficulty; occasional compromise possible only under extreme or complex conditions.",
        percentile: "60th\u{2013}75th",
    },
    Band {
        upper: Some(59),
        label: "High",
        description: "Strong internalized moral compass; acts with integrity even when costly. Rare lapses, usually due to misjudgment rather than willful compromise.",
        percentile: "75th\u{2013}90th",
    },
    Band {
        upper: Some(64),
        label: "Very High",
        description: "Nearly unwavering virtue expression across contexts; actively resists corrupt influence and prioritizes justice and alignment over personal gain.",
        percentile: "90th\u{2013}97th",
    },
    Band {
        upper: Some(67),
        label: "Exceptional",
        description: "Moral stance remains intact in almost any condition, including hostile or corrupt environments. Often seen as a model of integrity by others.",
        percentile: "97th\u{2013}99th",
    },
    Band {
        upper: None,
        label: "Ultra-Rare",
        description: "Lives in full alignment with values regardless of cost; integrity is non-negotiable in all contexts. Acts as a moral anchor in any group.",
        percentile: "Top 0.1% or higher",
    },
];

/// Sum of the recorded answers.
///
/// Only meaningful for a complete set; the flow gates this with
/// [`AnswerSet::is_complete`] before calling.
#[must_use]
pub fn score(answers: &AnswerSet) -> i32 {
    answers.values().map(|v| i32::from(v.get())).sum()
}

/// Classify a score. Total over `i32`.
#[must_use]
pub fn classify(score: i32) -> &'static Band {
    let catch_all = &BANDS[BANDS.len() - 1];
    BANDS.iter().find(|band| band.admits(score)).unwrap_or(catch_all)
}
