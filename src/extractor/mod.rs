pub mod api;
pub mod fetcher;
pub mod models;
pub mod native;
pub mod resolver;
pub mod traits;

pub use fetcher::CommentFetcher;
pub use models::{CommentRecord, FetchResult, TextFormat, VideoId, VideoMetadata};
pub use native::YoutubeDataApi;
pub use resolver::resolve;
pub use traits::{CommentSource, CommentThreadsRequest};
