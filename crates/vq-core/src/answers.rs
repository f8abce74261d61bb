//! Likert answers and the per-visitor answer set.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::error::FlowError;
use crate::question::{self, LIKERT_MAX, LIKERT_MIN, QUESTION_COUNT};

/// A Likert response, guaranteed to be in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Likert(u8);

impl Likert {
    /// Validate a raw response.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::OutOfRangeAnswer`] if `value` is not in `1..=5`.
    pub fn new(value: i64) -> Result<Self, FlowError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (LIKERT_MIN..=LIKERT_MAX).contains(v))
            .map(Self)
            .ok_or(FlowError::OutOfRangeAnswer { value })
    }

    /// The raw value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Likert {
    type Error = FlowError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Likert {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Responses keyed by question id.
///
/// Recording a second answer for the same question replaces the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<u32, Likert>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the answer for `question_id`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::UnknownQuestion`] if the id is not in the catalog.
    pub fn record(&mut self, question_id: u32, value: Likert) -> Result<(), FlowError> {
        if question::find(question_id).is_none() {
            return Err(FlowError::UnknownQuestion { id: question_id });
        }
        self.answers.insert(question_id, value);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, question_id: u32) -> Option<Likert> {
        self.answers.get(&question_id).copied()
    }

    /// Number of distinct questions answered.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// True once every catalog question has an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    pub fn values(&self) -> impl Iterator<Item = Likert> + '_ {
        self.answers.values().copied()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::question::QUESTIONS;

    fn likert(v: i64) -> Likert {
        Likert::new(v).unwrap()
    }

    #[test]
    fn likert_accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(i64::from(likert(v).get()), v);
        }
    }

    #[test]
    fn likert_rejects_out_of_range() {
        for v in [0, 6, -1, 255, 256, i64::MIN, i64::MAX] {
            assert_eq!(Likert::new(v), Err(FlowError::OutOfRangeAnswer { value: v }));
        }
    }

    #[test]
    fn recording_same_answer_twice_is_idempotent() {
        let mut once = AnswerSet::new();
        once.record(3, likert(4)).unwrap();

        let mut twice = AnswerSet::new();
        twice.record(3, likert(4)).unwrap();
        twice.record(3, likert(4)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.answered(), 1);
    }

    #[test]
    fn later_answer_replaces_earlier() {
        let mut set = AnswerSet::new();
        set.record(3, likert(1)).unwrap();
        set.record(3, likert(5)).unwrap();
        assert_eq!(set.get(3), Some(likert(5)));
        assert_eq!(set.answered(), 1);
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut set = AnswerSet::new();
        assert_eq!(
            set.record(99, likert(3)),
            Err(FlowError::UnknownQuestion { id: 99 })
        );
        assert_eq!(set.answered(), 0);
    }

    #[test]
    fn complete_only_with_every_question() {
        let mut set = AnswerSet::new();
        for q in &QUESTIONS[..13] {
            set.record(q.id, likert(2)).unwrap();
        }
        assert!(!set.is_complete());
        set.record(QUESTIONS[13].id, likert(2)).unwrap();
        assert!(set.is_complete());

        // Overwriting keeps it complete.
        set.record(QUESTIONS[0].id, likert(5)).unwrap();
        assert!(set.is_complete());
    }

    #[test]
    fn serializes_as_id_to_value_map() {
        let mut set = AnswerSet::new();
        set.record(2, likert(5)).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({ "2": 5 }));
    }
}
