//! Skip sequence
//!
//! Wraps a forward-only source and keeps one value of look-ahead. Callers can
//! ask for values to be skipped: a skip of the value currently buffered
//! consumes it right away, any other skip is owed against that value's next
//! occurrence in the source.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::SequenceError;

/// Look-ahead wrapper over an iterator with per-value skip requests
///
/// Invariants:
/// - `pending` never holds a zero count; entries are removed when paid off,
///   so its size is bounded by the number of outstanding skip requests.
/// - `buffered` is `None` only once `source` has been drained.
pub struct SkipSequence<I>
where
    I: Iterator,
{
    source: I,
    pending: HashMap<I::Item, usize>,
    buffered: Option<I::Item>,
}

impl<I> SkipSequence<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    /// Wrap `source` and load the first value
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let mut sequence = Self {
            source: source.into_iter(),
            pending: HashMap::new(),
            buffered: None,
        };
        sequence.advance();
        sequence
    }

    /// Whether another value is available
    pub fn has_next(&self) -> bool {
        self.buffered.is_some()
    }

    /// The value the next call to [`try_next`](Self::try_next) would return
    pub fn peek(&self) -> Option<&I::Item> {
        self.buffered.as_ref()
    }

    /// Take the next value, or [`SequenceError::Exhausted`] if none is left
    pub fn try_next(&mut self) -> Result<I::Item, SequenceError> {
        let value = self.buffered.take().ok_or(SequenceError::Exhausted)?;
        self.advance();
        Ok(value)
    }

    /// Suppress the next occurrence of `value`
    ///
    /// If `value` is the one currently buffered, that occurrence is dropped
    /// immediately and later occurrences are unaffected.
    pub fn skip(&mut self, value: I::Item) {
        if self.buffered.as_ref() == Some(&value) {
            tracing::trace!("Skip consumed buffered value");
            self.advance();
        } else {
            *self.pending.entry(value).or_insert(0) += 1;
            tracing::trace!(outstanding = self.pending.len(), "Skip deferred");
        }
    }

    /// Skips still owed against future occurrences of `value`
    pub fn pending_skips(&self, value: &I::Item) -> usize {
        self.pending.get(value).copied().unwrap_or(0)
    }

    /// Drain values through a borrowing iterator
    ///
    /// The sequence stays usable afterwards; `skip` can be called between
    /// uses. Once exhausted, the iterator keeps returning `None`.
    pub fn iter(&mut self) -> impl Iterator<Item = I::Item> + '_ {
        std::iter::from_fn(move || self.try_next().ok())
    }

    /// Number of distinct values with skips still owed
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Refill the buffer with the next value that is not owed a skip
    fn advance(&mut self) {
        self.buffered = None;

        for candidate in self.source.by_ref() {
            match self.pending.get_mut(&candidate) {
                Some(count) => {
                    *count -= 1;
                    if *count == 0 {
                        self.pending.remove(&candidate);
                    }
                    tracing::trace!(
                        outstanding = self.pending.len(),
                        "Skipped value from source"
                    );
                }
                None => {
                    self.buffered = Some(candidate);
                    return;
                }
            }
        }

        tracing::trace!("Source drained");
    }
}

impl<I> fmt::Debug for SkipSequence<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipSequence")
            .field("buffered", &self.buffered)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
