pub mod youtube;

pub use youtube::YoutubeDataApi;
