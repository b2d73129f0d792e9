use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use tessera_common::{Result, SeqError};

/// Split `source` into `divisions` contiguous partitions of near-equal size.
///
/// With `N` elements, the first `N % divisions` partitions hold
/// `N / divisions + 1` elements and the rest hold `N / divisions`. When
/// `divisions > N` the trailing partitions are empty.
///
/// All partitions read from one shared cursor, so the source is traversed
/// exactly once. Partitions must be drained in the order they are produced;
/// pulling from a later partition before an earlier one is exhausted hands
/// out elements in an unspecified split.
pub fn divide<S>(source: S, divisions: usize) -> Result<Divide<S::IntoIter>>
where
    S: IntoIterator,
    S::IntoIter: ExactSizeIterator,
{
    let iter = source.into_iter();
    let len = iter.len();
    divide_counted(iter, len, divisions)
}

/// [`divide`] for sources whose length the caller has already counted.
///
/// If `source` yields fewer than `len` elements the trailing partitions end
/// early; surplus elements past `len` are never pulled.
pub fn divide_counted<I: Iterator>(source: I, len: usize, divisions: usize) -> Result<Divide<I>> {
    if divisions == 0 {
        return Err(SeqError::invalid("divide: divisions must be at least 1"));
    }
    let base = len / divisions;
    let remainder = len % divisions;
    tracing::debug!(len, divisions, base, remainder, "dividing sequence");
    Ok(Divide {
        cursor: Rc::new(RefCell::new(source)),
        base,
        remainder,
        divisions,
        produced: 0,
    })
}

/// Iterator over the partitions produced by [`divide`].
pub struct Divide<I> {
    cursor: Rc<RefCell<I>>,
    base: usize,
    remainder: usize,
    divisions: usize,
    produced: usize,
}

impl<I> Divide<I> {
    /// Planned size of partition `index`.
    pub fn partition_len(&self, index: usize) -> usize {
        if index >= self.divisions {
            0
        } else if index < self.remainder {
            self.base + 1
        } else {
            self.base
        }
    }
}

impl<I: Iterator> Iterator for Divide<I> {
    type Item = Partition<I>;

    fn next(&mut self) -> Option<Partition<I>> {
        if self.produced == self.divisions {
            return None;
        }
        let index = self.produced;
        let len = self.partition_len(index);
        self.produced += 1;
        tracing::trace!(index, len, "partition");
        Some(Partition {
            cursor: Rc::clone(&self.cursor),
            index,
            len,
            remaining: len,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.divisions - self.produced;
        (left, Some(left))
    }
}

impl<I: Iterator> ExactSizeIterator for Divide<I> {}

impl<I: Iterator> FusedIterator for Divide<I> {}

impl<I> fmt::Debug for Divide<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Divide")
            .field("base", &self.base)
            .field("remainder", &self.remainder)
            .field("divisions", &self.divisions)
            .field("produced", &self.produced)
            .finish_non_exhaustive()
    }
}

/// One contiguous slice of a divided sequence, drawn lazily from the shared
/// cursor.
pub struct Partition<I> {
    cursor: Rc<RefCell<I>>,
    index: usize,
    len: usize,
    remaining: usize,
}

impl<I> Partition<I> {
    /// Position of this partition among its siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Size fixed when the partition was created.
    pub fn planned_len(&self) -> usize {
        self.len
    }
}

impl<I: Iterator> Iterator for Partition<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.cursor.borrow_mut().next();
        if item.is_some() {
            self.remaining -= 1;
        } else {
            // Source ended short of the counted length.
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<I: Iterator> FusedIterator for Partition<I> {}

impl<I> fmt::Debug for Partition<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("index", &self.index)
            .field("len", &self.len)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
