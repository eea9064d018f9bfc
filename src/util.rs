use chrono::{Datelike, Utc};
use futures_util::{StreamExt, TryStreamExt, stream};

/// Maps `f` over `items` with at most `limit` futures in flight.
///
/// Output order follows input order regardless of completion order. The
/// first error is returned and the remaining futures are dropped.
pub async fn try_map_ordered<I, F, Fut, T, E>(items: I, limit: usize, f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .try_collect()
        .await
}

/// Calendar year right now, in UTC.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}
