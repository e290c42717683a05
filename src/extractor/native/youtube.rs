use crate::extractor::api::{ApiErrorResponse, CommentThreadListResponse, VideoListResponse};
use crate::extractor::models::VideoId;
use crate::extractor::traits::{CommentSource, CommentThreadsRequest};
use crate::utils::config::AppSettings;
use crate::utils::error::{AppError, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// YouTube Data API v3 client
pub struct YoutubeDataApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YoutubeDataApi {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from validated settings
    pub fn from_settings(settings: &AppSettings) -> Result<Self, AppError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| AppError::Config("missing API key".into()))?;
        Self::new(
            settings.api_base_url.clone(),
            api_key,
            &settings.user_agent,
            settings.request_timeout(),
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Remote(remote_error_message(status, &body)));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Prefer the platform's own message; fall back to the status line
fn remote_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("HTTP {}", status),
    }
}

#[async_trait]
impl CommentSource for YoutubeDataApi {
    fn id(&self) -> &'static str {
        "youtube-data-api"
    }

    async fn list_videos(&self, video_id: &VideoId) -> Result<VideoListResponse, FetchError> {
        self.get_json(
            "videos",
            &[("part", "snippet,statistics"), ("id", video_id.as_str())],
        )
        .await
    }

    async fn list_comment_threads(
        &self,
        request: &CommentThreadsRequest,
    ) -> Result<CommentThreadListResponse, FetchError> {
        let page_size = request.page_size.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", request.video_id.as_str()),
            ("textFormat", request.text_format.as_str()),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = request.page_token.as_deref() {
            query.push(("pageToken", token));
        }

        self.get_json("commentThreads", &query).await
    }
}
