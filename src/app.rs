//! Glue between URL resolution, the fetcher and the configured transport

use crate::extractor::{resolve, CommentFetcher, CommentSource, FetchResult, YoutubeDataApi};
use crate::utils::{AppError, AppSettings, FetchError};
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// Build a fetcher backed by the YouTube Data API
pub fn build_fetcher(settings: &AppSettings) -> Result<CommentFetcher<YoutubeDataApi>, AppError> {
    settings.validate()?;
    let api = YoutubeDataApi::from_settings(settings)?;
    Ok(CommentFetcher::new(api)
        .with_page_size_cap(settings.page_size_cap)
        .with_text_format(settings.text_format))
}

/// Resolve `url` and fetch up to `max_results` comments for it
pub async fn fetch_from_url<S: CommentSource>(
    fetcher: &CommentFetcher<S>,
    url: &str,
    max_results: usize,
) -> Result<FetchResult, AppError> {
    let id = resolve(url).ok_or_else(|| AppError::InvalidUrl(url.trim().to_string()))?;
    info!("Resolved {:?} to video {}", url.trim(), id);
    Ok(fetcher.fetch(&id, max_results).await?)
}

/// Run a fetch under an overall deadline; expiry counts as a remote failure
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Remote(format!(
            "timed out after {}s",
            deadline.as_secs()
        ))
        .into()),
    }
}
