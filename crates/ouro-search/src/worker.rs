use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::evaluator::{Evaluate, Match};

/// Run one worker over a contiguous candidate range.
///
/// Candidates are tried strictly ascending, each exactly once; the first
/// match wins and raises `stop` so sibling workers bail out instead of
/// grinding through the rest of their ranges. A `None` return means either
/// the range was exhausted without a match or a sibling already matched --
/// the coordinator distinguishes the two by whether it received a match at
/// all.
pub fn search_range<E: Evaluate>(
    evaluator: &mut E,
    range: Range<u64>,
    stop: &AtomicBool,
) -> Option<Match> {
    for candidate in range {
        if stop.load(Ordering::Relaxed) {
            return None;
        }
        if let Some(found) = evaluator.evaluate(candidate) {
            stop.store(true, Ordering::Relaxed);
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouro_object::ObjectId;

    /// Stub evaluator that records every candidate it sees and matches on
    /// one designated value.
    struct Stub {
        seen: Vec<u64>,
        match_on: Option<u64>,
    }

    impl Stub {
        fn never() -> Self {
            Self {
                seen: Vec::new(),
                match_on: None,
            }
        }

        fn matching(candidate: u64) -> Self {
            Self {
                seen: Vec::new(),
                match_on: Some(candidate),
            }
        }
    }

    fn dummy_match(candidate: u64) -> Match {
        Match {
            parent_body: candidate.to_be_bytes().to_vec(),
            child_body: Vec::new(),
            parent_id: ObjectId::from_digest([0; 20]),
            child_id: ObjectId::from_digest([0; 20]),
        }
    }

    impl Evaluate for Stub {
        fn evaluate(&mut self, candidate: u64) -> Option<Match> {
            self.seen.push(candidate);
            (self.match_on == Some(candidate)).then(|| dummy_match(candidate))
        }
    }

    #[test]
    fn exhausts_range_in_order_without_match() {
        let mut stub = Stub::never();
        let stop = AtomicBool::new(false);
        assert!(search_range(&mut stub, 10..30, &stop).is_none());
        // Every integer in [10, 30), exactly once, ascending.
        assert_eq!(stub.seen, (10..30).collect::<Vec<_>>());
        assert!(!stop.load(Ordering::Relaxed));
    }

    #[test]
    fn stops_at_first_match_and_raises_flag() {
        let mut stub = Stub::matching(14);
        let stop = AtomicBool::new(false);
        let found = search_range(&mut stub, 10..30, &stop).unwrap();
        assert_eq!(found.parent_body, 14u64.to_be_bytes());
        assert_eq!(stub.seen.last(), Some(&14));
        assert!(stop.load(Ordering::Relaxed));
    }

    #[test]
    fn raised_flag_preempts_evaluation() {
        let mut stub = Stub::matching(10);
        let stop = AtomicBool::new(true);
        assert!(search_range(&mut stub, 10..30, &stop).is_none());
        assert!(stub.seen.is_empty());
    }

    #[test]
    fn empty_range_reports_no_match() {
        let mut stub = Stub::never();
        let stop = AtomicBool::new(false);
        assert!(search_range(&mut stub, 5..5, &stop).is_none());
        assert!(stub.seen.is_empty());
    }
}
