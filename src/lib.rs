//! sportsdb_scraper - TheSportsDB metadata for media libraries
//!
//! This library maps league, season, and event metadata from TheSportsDB
//! onto a media center's video item model. It fetches JSON records, cleans
//! a handful of fields (plot markup, dates, artwork URLs, external IDs),
//! and writes them through the host's setter interface.

mod api;
mod cache;
mod mapping;
mod parse;
mod scraper;
mod settings;
mod types;
mod video_item;

// Re-export error types
pub use api::ApiError;
pub use cache::CacheError;
pub use mapping::MappingError;
pub use scraper::ScrapeError;

pub use api::{ApiClient, InfoFetcher};
pub use cache::ShowInfoCache;
pub use mapping::{add_episode_info, clean_plot, set_rating, set_show_artwork, set_unique_ids};
pub use parse::{ExternalIdKind, MediaIdQuery, UrlParseResult, parse_media_id, parse_nfo_url};
pub use scraper::Scraper;
pub use settings::Settings;
pub use types::{EpisodeInfo, RatingEntry, SeasonEntry, ShowInfo};
pub use video_item::{
    ArtworkRecord, RatingRecord, RecordedVideoInfo, SeasonRecord, UniqueIdRecord, VideoInfoTag,
};
