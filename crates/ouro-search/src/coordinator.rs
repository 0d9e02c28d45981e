use std::ops::Range;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::thread;

use bytes::Bytes;
use tracing::{debug, info};

use crate::error::{SearchError, SearchResult};
use crate::evaluator::{CommitEvaluator, Evaluate, Match};
use crate::worker::search_range;

/// Longest prefix whose generation width fits in a `u64`.
pub const MAX_PREFIX_LEN: usize = 15;

/// Search parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of leading hex characters of the child hash that must match
    /// the substituted placeholder value.
    pub prefix_len: usize,
    /// Fixed worker pool size; each generation is split evenly across it.
    pub parallelism: usize,
    /// Name of the extra header to splice into the parent. Enables
    /// unbounded expansion: without it the search is a single generation.
    pub extra_header: Option<String>,
}

/// One full pass over a fixed-width candidate range `[start, start + width)`.
///
/// The width is `16^L` for prefix length `L`: one candidate per possible
/// prefix value. Advancing to the next generation repeats the same derived
/// prefixes but shifts every candidate by `width`, which only changes hash
/// outcomes when an extra header feeds the raw candidate into the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation {
    pub index: u64,
    pub start: u64,
    pub width: u64,
}

impl Generation {
    /// The initial generation for a given prefix length.
    pub fn first(prefix_len: usize) -> SearchResult<Self> {
        if !(1..=MAX_PREFIX_LEN).contains(&prefix_len) {
            return Err(SearchError::PrefixLengthOutOfRange {
                requested: prefix_len,
                max: MAX_PREFIX_LEN,
            });
        }
        Ok(Self {
            index: 0,
            start: 0,
            width: 1u64 << (4 * prefix_len),
        })
    }

    /// Split this generation into `parallelism` contiguous equal sub-ranges.
    pub fn partition(&self, parallelism: usize) -> SearchResult<Vec<Range<u64>>> {
        if parallelism == 0 {
            return Err(SearchError::ZeroParallelism);
        }
        let workers = parallelism as u64;
        if self.width % workers != 0 {
            return Err(SearchError::UnevenPartition {
                width: self.width,
                parallelism,
            });
        }
        let sub = self.width / workers;
        (0..workers)
            .map(|w| {
                let begin = self.start + w * sub;
                Ok(begin..begin + sub)
            })
            .collect()
    }

    /// The generation after this one.
    pub fn next(&self) -> SearchResult<Self> {
        let start = self
            .start
            .checked_add(self.width)
            // The next generation's exclusive end must fit in u64 too.
            .filter(|s| s.checked_add(self.width).is_some())
            .ok_or(SearchError::CandidateSpaceOverflow {
                generations: self.index + 1,
            })?;
        Ok(Self {
            index: self.index + 1,
            start,
            width: self.width,
        })
    }
}

/// Drives generations of parallel range workers until a match or failure.
///
/// Per generation: PARTITION the candidate range, DISPATCH one worker per
/// sub-range against the shared immutable bodies, COLLECT results from a
/// bounded channel. The first match ends the search; a fully exhausted
/// generation either expands (extra header enabled) or fails for good,
/// since re-running the same candidate space can only repeat itself.
pub struct Coordinator {
    config: SearchConfig,
}

impl Coordinator {
    /// Validate the configuration up front.
    ///
    /// Prefix length and partition divisibility are preconditions, checked
    /// once here rather than per generation.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        Generation::first(config.prefix_len)?.partition(config.parallelism)?;
        Ok(Self { config })
    }

    /// Search for a self-referential pair over real commit bodies.
    ///
    /// Both bodies are parsed once; structural precondition failures
    /// surface here, before any worker starts.
    pub fn search(&self, parent_body: &Bytes, child_body: &Bytes) -> SearchResult<Match> {
        let evaluator = CommitEvaluator::new(
            parent_body,
            child_body,
            self.config.prefix_len,
            self.config.extra_header.clone(),
        )?;
        let mut evaluators = vec![evaluator; self.config.parallelism];
        self.search_with(&mut evaluators)
    }

    /// Run the generation loop over caller-supplied evaluators.
    ///
    /// One evaluator per worker; `evaluators.len()` is the pool size. This
    /// is the seam the protocol tests drive with stubs.
    pub fn search_with<E: Evaluate + Send>(&self, evaluators: &mut [E]) -> SearchResult<Match> {
        let mut generation = Generation::first(self.config.prefix_len)?;
        loop {
            if let Some(found) = self.run_generation(evaluators, &generation)? {
                info!(
                    generation = generation.index,
                    child = %found.child_id,
                    parent = %found.parent_id,
                    "match found"
                );
                return Ok(found);
            }
            debug!(
                generation = generation.index,
                start = generation.start,
                width = generation.width,
                "generation exhausted"
            );
            if self.config.extra_header.is_none() {
                // Without an extra header the next generation would hash
                // exactly the same bodies again.
                return Err(SearchError::SpaceExhausted {
                    attempted: generation.width,
                });
            }
            generation = generation.next()?;
        }
    }

    /// One PARTITION/DISPATCH/COLLECT round. `Ok(None)` means exhausted.
    fn run_generation<E: Evaluate + Send>(
        &self,
        evaluators: &mut [E],
        generation: &Generation,
    ) -> SearchResult<Option<Match>> {
        let ranges = generation.partition(evaluators.len())?;
        let stop = AtomicBool::new(false);
        // Buffered to pool size: a worker finishing after the coordinator
        // stopped reading never blocks on its final send.
        let (sender, receiver) = mpsc::sync_channel(evaluators.len());
        let found = thread::scope(|scope| {
            let workers = evaluators.len();
            for (evaluator, range) in evaluators.iter_mut().zip(ranges) {
                let sender = sender.clone();
                let stop = &stop;
                scope.spawn(move || {
                    let outcome = search_range(evaluator, range, stop);
                    // The coordinator stops reading after a sibling's
                    // match; the buffer slot keeps this send from blocking.
                    let _ = sender.send(outcome);
                });
            }
            drop(sender);
            let mut first = None;
            for _ in 0..workers {
                match receiver.recv() {
                    Ok(Some(found)) => {
                        first = Some(found);
                        break;
                    }
                    Ok(None) => {}
                    Err(mpsc::RecvError) => break,
                }
            }
            first
        });
        Ok(found)
    }
}
