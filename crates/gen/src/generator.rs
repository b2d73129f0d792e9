use std::fmt;
use std::iter::FusedIterator;

/// A lazy sequence driven by a step function returning `(value, has_more)`.
///
/// The first pull always runs the step function. Later pulls run it only
/// while the previous call reported `has_more == true`, so the value returned
/// together with `false` is the last element. A generator whose step function
/// never reports `false` is infinite; bound it with [`Iterator::take`].
///
/// Generators cannot be rewound. Build a new one to start over.
pub struct Generator<'a, T> {
    step: Box<dyn FnMut() -> (T, bool) + 'a>,
    exhausted: bool,
}

impl<'a, T> Generator<'a, T> {
    pub fn new<F>(step: F) -> Self
    where
        F: FnMut() -> (T, bool) + 'a,
    {
        Self {
            step: Box::new(step),
            exhausted: false,
        }
    }

    /// Generator that never exhausts, calling `f` on every pull.
    pub fn infinite<F>(mut f: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        Self::new(move || (f(), true))
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T> Iterator for Generator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let (value, has_more) = (self.step)();
        self.exhausted = !has_more;
        Some(value)
    }
}

impl<T> FusedIterator for Generator<'_, T> {}

impl<T> fmt::Debug for Generator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
