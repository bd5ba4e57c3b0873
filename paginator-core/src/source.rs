use std::sync::Arc;

use crate::error::Error;
use crate::page::saturating_usize;

/// An ordered, lazily evaluated collection that can be sliced, counted and materialized.
///
/// Slicing must not evaluate the source. Implementations are expected to be cheap to clone,
/// e.g. a query builder or a shared handle.
#[async_trait::async_trait]
pub trait PageSource: Clone + Send + Sync {
    type Item: Send;
    type Error: From<Error> + Send;

    /// Skip `skip` items, then keep at most `take`, preserving order.
    fn skip_take(&self, skip: u64, take: u64) -> Self;

    async fn count(&self) -> Result<u64, Self::Error>;

    async fn fetch(&self) -> Result<Vec<Self::Item>, Self::Error>;
}

/// A [`PageSource`] over items that are already in memory.
///
/// Clones share the underlying items; slicing only narrows the visible window.
#[derive(Debug)]
pub struct VecSource<T> {
    items: Arc<Vec<T>>,
    skip: usize,
    take: Option<usize>,
}

impl<T> Clone for VecSource<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            skip: self.skip,
            take: self.take,
        }
    }
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            skip: 0,
            take: None,
        }
    }

    fn window(&self) -> &[T] {
        let rest = self.items.get(self.skip..).unwrap_or_default();
        match self.take {
            Some(take) => &rest[..take.min(rest.len())],
            None => rest,
        }
    }
}

impl<T> From<Vec<T>> for VecSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for VecSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl<T> PageSource for VecSource<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Error = Error;

    fn skip_take(&self, skip: u64, take: u64) -> Self {
        let skip = saturating_usize(skip);
        let take = saturating_usize(take);
        Self {
            items: self.items.clone(),
            skip: self.skip.saturating_add(skip),
            take: Some(match self.take {
                Some(current) => current.saturating_sub(skip).min(take),
                None => take,
            }),
        }
    }

    async fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.window().len() as u64)
    }

    async fn fetch(&self) -> Result<Vec<Self::Item>, Self::Error> {
        Ok(self.window().to_vec())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
