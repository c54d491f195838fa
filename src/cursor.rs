use std::{
    collections::{vec_deque, VecDeque},
    iter::{self, Fuse, FusedIterator},
};

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// An iterator adapter with unbounded lookahead and pushback.
///
/// Items pulled from the wrapped iterator but not yet delivered are kept in a
/// buffer whose front is always the next item to deliver. The wrapped iterator
/// is only advanced as far as the deepest request made so far.
#[derive(Debug, Clone)]
pub struct LookaheadCursor<I: Iterator> {
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

impl<I: Iterator> From<I> for LookaheadCursor<I> {
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<I: Iterator> LookaheadCursor<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self::with_capacity(iter, 0)
    }

    pub fn with_capacity(iter: impl IntoIterator<IntoIter = I>, capacity: usize) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
            buf: VecDeque::with_capacity(capacity),
        }
    }

    /// Pulls from the wrapped iterator until `wanted` items are buffered or it
    /// runs dry. Returns the number of buffered items.
    fn fill(&mut self, wanted: usize) -> usize {
        let missing = wanted.saturating_sub(self.buf.len());
        if missing > 0 {
            trace!(wanted, buffered = self.buf.len(), "refill");
            self.buf.extend(self.iter.by_ref().take(missing));
            if self.buf.len() < wanted {
                trace!(wanted, buffered = self.buf.len(), "producer exhausted");
            }
        }
        self.buf.len()
    }

    fn get(&mut self, offset: usize) -> Option<&I::Item> {
        self.fill(offset.saturating_add(1));
        self.buf.get(offset)
    }

    fn take(&mut self, skip: usize) -> Option<I::Item> {
        if skip > 0 {
            let wanted = skip.saturating_add(1);
            if self.fill(wanted) < wanted {
                self.buf.clear();
                return None;
            }
            self.buf.drain(..skip);
        }
        self.next()
    }

    /// Returns `true` if at least one more item can be delivered.
    ///
    /// Buffers one item from the wrapped iterator if nothing is buffered yet.
    pub fn has_next(&mut self) -> bool {
        self.fill(1) > 0
    }

    /// Returns `true` if at least `n` more items can be delivered, buffering
    /// at most `n` items to find out.
    pub fn has_at_least(&mut self, n: usize) -> bool {
        self.fill(n) >= n
    }

    /// Returns the item `offset` positions ahead of the next one, without
    /// removing anything.
    pub fn peek(&mut self, offset: usize) -> Result<&I::Item> {
        self.get(offset).ok_or_else(|| not_available(offset))
    }

    pub fn peek_mut(&mut self, offset: usize) -> Result<&mut I::Item> {
        self.fill(offset.saturating_add(1));
        self.buf.get_mut(offset).ok_or_else(|| not_available(offset))
    }

    pub fn peek_or<'a>(&'a mut self, offset: usize, default: &'a I::Item) -> &'a I::Item {
        self.get(offset).unwrap_or(default)
    }

    /// Returns the `count` items starting at `offset`, nearest first, without
    /// removing them.
    ///
    /// Everything needed is buffered before the first item is yielded. On
    /// failure the items that could be buffered stay buffered.
    pub fn peek_many(
        &mut self,
        offset: usize,
        count: usize,
    ) -> Result<vec_deque::Iter<'_, I::Item>> {
        let end = offset.saturating_add(count);
        let buffered = self.fill(end);
        if buffered < end {
            return Err(insufficient_items(count, buffered.saturating_sub(offset)));
        }
        Ok(self.buf.range(offset..end))
    }

    /// Like [`peek_many`](Self::peek_many), but always yields exactly `count`
    /// items, filling the positions past the end of the sequence with
    /// `default`.
    pub fn peek_many_or<'a>(
        &'a mut self,
        offset: usize,
        count: usize,
        default: &'a I::Item,
    ) -> impl Iterator<Item = &'a I::Item> + 'a {
        let end = offset.saturating_add(count);
        let buffered = self.fill(end);
        let found = self.buf.range(offset.min(buffered)..end.min(buffered));
        let missing = count - found.len();
        found.chain(iter::repeat(default).take(missing))
    }

    /// Removes `skip` items, then removes and returns the next one.
    ///
    /// If the sequence ends early, every remaining item is consumed before
    /// the error is returned.
    pub fn pop(&mut self, skip: usize) -> Result<I::Item> {
        self.take(skip).ok_or_else(|| not_available(skip))
    }

    pub fn pop_or(&mut self, skip: usize, default: I::Item) -> I::Item {
        self.take(skip).unwrap_or(default)
    }

    /// Removes `skip` items, then removes and returns the next `count` items.
    ///
    /// The items are removed even if the returned iterator is dropped before
    /// it is exhausted. If the sequence ends early, every remaining item is
    /// consumed before the error is returned.
    pub fn pop_many(&mut self, skip: usize, count: usize) -> Result<vec_deque::Drain<'_, I::Item>> {
        let end = skip.saturating_add(count);
        let buffered = self.fill(end);
        if buffered < end {
            self.buf.clear();
            return Err(insufficient_items(count, buffered.saturating_sub(skip)));
        }
        self.buf.drain(..skip);
        Ok(self.buf.drain(..count))
    }

    /// Like [`pop_many`](Self::pop_many), but always yields exactly `count`
    /// items, padding with clones of `default` once the sequence ends.
    pub fn pop_many_or(
        &mut self,
        skip: usize,
        count: usize,
        default: I::Item,
    ) -> impl Iterator<Item = I::Item> + '_
    where
        I::Item: Clone,
    {
        let end = skip.saturating_add(count);
        let buffered = self.fill(end);
        let skipped = skip.min(buffered);
        self.buf.drain(..skipped);
        let found = self.buf.drain(..end.min(buffered) - skipped);
        let missing = count - found.len();
        found.chain(iter::repeat(default).take(missing))
    }

    /// Removes and returns the next item only if `predicate` accepts it.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if self.get(0).is_some_and(predicate) {
            self.next()
        } else {
            None
        }
    }

    /// Makes `item` the next item to be delivered.
    pub fn push(&mut self, item: I::Item) {
        self.buf.push_front(item);
    }

    /// Puts `items` in front of the sequence, in the order given: the first of
    /// `items` is delivered next.
    pub fn push_many<J>(&mut self, items: J)
    where
        J: IntoIterator<Item = I::Item>,
        J::IntoIter: DoubleEndedIterator,
    {
        let items = items.into_iter().rev();
        self.buf.reserve(items.size_hint().0);
        for item in items {
            self.buf.push_front(item);
        }
    }

    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    pub fn buffer(&self) -> vec_deque::Iter<'_, I::Item> {
        self.buf.iter()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }

    /// Splits the cursor into its buffer and the wrapped iterator. The
    /// buffered items come before anything the iterator still yields.
    pub fn into_parts(self) -> (VecDeque<I::Item>, Fuse<I>) {
        (self.buf, self.iter)
    }
}

fn not_available(offset: usize) -> Error {
    let err = Error::NotAvailable { offset };
    debug!(%err);
    err
}

fn insufficient_items(requested: usize, available: usize) -> Error {
    let err = Error::InsufficientItems {
        requested,
        available,
    };
    debug!(%err);
    err
}

impl<I: Iterator> Iterator for LookaheadCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let len = self.buf.len();
        (
            lower.saturating_add(len),
            upper.and_then(|upper| upper.checked_add(len)),
        )
    }
}

impl<I: Iterator> FusedIterator for LookaheadCursor<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for LookaheadCursor<I> {}
