//! Serde data model for TheSportsDB API responses.
//!
//! These structures mirror the JSON shapes returned by the league and season
//! endpoints. Field names follow Rust conventions; the `rename` attributes
//! map them onto the API's Hungarian-notation keys, and the same mapping is
//! used when a record is written to the show cache.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One league record, as returned by the lookup endpoint.
///
/// Everything except the league ID is optional; the API regularly returns
/// `null` or empty strings for fields it has no data for. The `seasons`
/// field never comes from the API: it is attached by season augmentation
/// before the record is handed to the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowInfo {
    /// League identifier, also used as the episode-guide ID and cache key
    #[serde(rename = "idLeague")]
    pub id: String,
    /// League name, mapped to title/original title/show title
    #[serde(rename = "strLeague")]
    pub name: Option<String>,
    /// English description, sanitized into the plot
    #[serde(rename = "strDescriptionEN")]
    pub description_en: Option<String>,
    /// Year the league was formed, e.g. "1992"
    #[serde(rename = "intFormedYear")]
    pub formed_year: Option<String>,
    /// Date of the first recorded event, e.g. "1992-08-15"
    #[serde(rename = "dateFirstEvent")]
    pub first_event_date: Option<String>,
    /// The sport played, mapped to the genre list
    #[serde(rename = "strSport")]
    pub sport: Option<String>,
    /// Broadcaster(s), mapped to the studio list
    #[serde(rename = "strTvRights")]
    pub tv_rights: Option<String>,
    #[serde(rename = "strCountry")]
    pub country: Option<String>,
    #[serde(rename = "strFanart1")]
    pub fanart1: Option<String>,
    #[serde(rename = "strFanart2")]
    pub fanart2: Option<String>,
    #[serde(rename = "strFanart3")]
    pub fanart3: Option<String>,
    #[serde(rename = "strPoster")]
    pub poster: Option<String>,
    #[serde(rename = "strBanner")]
    pub banner: Option<String>,
    /// Ratings keyed by source name ("imdb", "tmdb", ...)
    #[serde(default)]
    pub ratings: HashMap<String, RatingEntry>,
    /// Seasons attached by season augmentation; `None` until augmented or
    /// when the season lookup failed
    #[serde(default)]
    pub seasons: Option<Vec<SeasonEntry>>,
}

/// One event record, as returned by the event endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeInfo {
    /// Season name the event belongs to, e.g. "2024-2025"
    #[serde(rename = "strSeason")]
    pub season: Option<String>,
    /// Event number within the season
    #[serde(rename = "strEpisode")]
    pub episode: Option<String>,
    /// Event name, used as the episode title
    #[serde(rename = "strEvent")]
    pub event: Option<String>,
    /// Air date of the event, e.g. "2024-11-03"
    #[serde(rename = "dateEvent")]
    pub air_date: Option<String>,
    #[serde(rename = "strDescriptionEN")]
    pub description_en: Option<String>,
    #[serde(rename = "strThumb")]
    pub thumb: Option<String>,
    /// League name, used for the date-based title rewrite
    #[serde(rename = "strLeague")]
    pub league: Option<String>,
    #[serde(default)]
    pub ratings: HashMap<String, RatingEntry>,
}

/// A rating/vote pair from one rating source. Both values arrive as strings
/// and are coerced numerically when mapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub rating: Option<String>,
    pub votes: Option<String>,
}

/// A season registered during augmentation and re-attached to the show record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonEntry {
    pub season_num: i32,
    pub season_name: String,
}
