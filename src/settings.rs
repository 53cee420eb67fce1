//! Static configuration for the scraper.
//!
//! A `Settings` value is built once by the process entry point and handed to
//! the client and scraper explicitly; nothing in this crate reads
//! configuration at load time.

/// Configuration for TheSportsDB endpoints and mapping behavior.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Endpoint returning a single league record by ID
    pub league_url: String,
    /// Endpoint returning all seasons of a league by ID
    pub season_url: String,
    /// Root URL prepended to relative image paths
    pub image_root_url: String,
    /// Rating sources in the order they are considered; the first source
    /// with a rating above zero becomes the default rating
    pub rating_types: Vec<String>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            league_url: "https://www.thesportsdb.com/api/v1/json/3/lookupleague.php".to_string(),
            season_url: "https://www.thesportsdb.com/api/v1/json/3/search_all_seasons.php"
                .to_string(),
            image_root_url: "https://www.thesportsdb.com/images/media/".to_string(),
            rating_types: vec![
                "imdb".to_string(),
                "tmdb".to_string(),
                "tvdb".to_string(),
            ],
            user_agent: concat!("sportsdb_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
