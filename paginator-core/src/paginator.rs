use std::future::Future;

use crate::error::{Error, InvalidArgumentReason};
use crate::page::{PageRequest, PageResult};
use crate::source::PageSource;

/// Restrict `source` to the items of one page without evaluating it.
///
/// `page` is 1-based. A `page_size` of 0 returns the source unchanged and does not validate `page`.
pub fn paginate<S: PageSource>(source: &S, page_size: i64, page: i64) -> Result<S, Error> {
    paginate_request(source, &PageRequest::new(page, page_size))
}

pub fn paginate_request<S: PageSource>(source: &S, request: &PageRequest) -> Result<S, Error> {
    match request.slice()? {
        Some(slice) => {
            log::debug!(
                "Paginating page {} with size {} (skip {}, take {})",
                request.page,
                request.page_size,
                slice.skip,
                slice.take
            );
            Ok(source.skip_take(slice.skip, slice.take))
        }
        None => {
            log::debug!("Page size is 0, pagination skipped");
            Ok(source.clone())
        }
    }
}

/// Counts the whole source with [`PageSource::count`].
pub async fn count_all<S: PageSource>(source: S) -> Result<u64, S::Error> {
    source.count().await
}

/// Materializes the source with [`PageSource::fetch`].
pub async fn fetch_all<S: PageSource>(source: S) -> Result<Vec<S::Item>, S::Error> {
    source.fetch().await
}

/// Fetch one page of `source`, map its items and report the size of the whole source.
///
/// `counter` receives the unsliced source, `materializer` receives the page slice. Both are
/// awaited concurrently and their errors are returned as is. Invalid arguments are rejected
/// before either of them is called.
pub async fn get_paginated_result_with<S, U, F, C, CFut, M, MFut>(
    source: S,
    page_size: i64,
    page: i64,
    mapper: F,
    counter: C,
    materializer: M,
) -> Result<PageResult<U>, S::Error>
where
    S: PageSource,
    F: FnMut(S::Item) -> U,
    C: FnOnce(S) -> CFut,
    CFut: Future<Output = Result<u64, S::Error>>,
    M: FnOnce(S) -> MFut,
    MFut: Future<Output = Result<Vec<S::Item>, S::Error>>,
{
    let request = PageRequest::new(page, page_size);
    let sliced = paginate_request(&source, &request)?;

    let (total_count, items) = tokio::try_join!(counter(source), materializer(sliced))?;
    log::debug!(
        "Fetched {} of {} items for page {} with size {}",
        items.len(),
        total_count,
        page,
        page_size
    );

    let items = items.into_iter().map(mapper).collect();
    Ok(PageResult::new(items, &request, total_count))
}

pub async fn get_paginated_result_mapped<S, U, F>(
    source: S,
    page_size: i64,
    page: i64,
    mapper: F,
) -> Result<PageResult<U>, S::Error>
where
    S: PageSource,
    F: FnMut(S::Item) -> U,
{
    get_paginated_result_with(source, page_size, page, mapper, count_all::<S>, fetch_all::<S>).await
}

pub async fn get_paginated_result<S>(source: S, page_size: i64, page: i64) -> Result<PageResult<S::Item>, S::Error>
where
    S: PageSource,
{
    get_paginated_result_mapped(source, page_size, page, |item| item).await
}

/// Same as [`get_paginated_result_with`], taking a bundled request.
///
/// A missing request is rejected as an invalid argument.
pub async fn get_page_with<S, U, F, C, CFut, M, MFut>(
    source: S,
    request: impl Into<Option<PageRequest>>,
    mapper: F,
    counter: C,
    materializer: M,
) -> Result<PageResult<U>, S::Error>
where
    S: PageSource,
    F: FnMut(S::Item) -> U,
    C: FnOnce(S) -> CFut,
    CFut: Future<Output = Result<u64, S::Error>>,
    M: FnOnce(S) -> MFut,
    MFut: Future<Output = Result<Vec<S::Item>, S::Error>>,
{
    let Some(request) = request.into() else {
        return Err(Error::from(InvalidArgumentReason::MissingRequest).into());
    };
    get_paginated_result_with(source, request.page_size, request.page, mapper, counter, materializer).await
}

pub async fn get_page_mapped<S, U, F>(
    source: S,
    request: impl Into<Option<PageRequest>>,
    mapper: F,
) -> Result<PageResult<U>, S::Error>
where
    S: PageSource,
    F: FnMut(S::Item) -> U,
{
    get_page_with(source, request, mapper, count_all::<S>, fetch_all::<S>).await
}

pub async fn get_page<S>(source: S, request: impl Into<Option<PageRequest>>) -> Result<PageResult<S::Item>, S::Error>
where
    S: PageSource,
{
    get_page_mapped(source, request, |item| item).await
}

/// Paginate items that are already in memory.
///
/// The whole sequence is collected once to count it. A `page_size` of 0 returns every item.
///
/// # Examples
/// ```
/// use paginator_core::page::PageRequest;
/// use paginator_core::paginator::get_paginated_result_in_memory;
///
/// let result = get_paginated_result_in_memory(1..=25, &PageRequest::new(3, 10)).unwrap();
/// assert_eq!(result.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(result.total_count, 25);
/// ```
pub fn get_paginated_result_in_memory<T>(
    items: impl IntoIterator<Item = T>,
    request: &PageRequest,
) -> Result<PageResult<T>, Error> {
    let slice = request.slice()?;
    let items: Vec<T> = items.into_iter().collect();
    let total_count = items.len() as u64;

    let items = match slice {
        Some(slice) => slice.apply(items.into_iter()).collect(),
        None => items,
    };
    Ok(PageResult::new(items, request, total_count))
}
