//! Show-level scraping: populating a video item from a league record,
//! enumerating its seasons, and probing video availability.

use crate::api::{ApiError, InfoFetcher};
use crate::cache::ShowInfoCache;
use crate::mapping::{self, MappingError, clean_plot, non_empty, normalize_url, prefix};
use crate::settings::Settings;
use crate::types::{SeasonEntry, ShowInfo};
use crate::video_item::VideoInfoTag;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while scraping a show.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The lookup endpoint returned no league for the given ID
    #[error("No league found for ID {0}")]
    LeagueNotFound(String),

    /// The league record did not match the expected schema
    #[error("Failed to decode league record: {0}")]
    Decode(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Maps league records onto video items, augmenting them with season data
/// and persisting them through the show cache.
pub struct Scraper<F: InfoFetcher> {
    fetcher: F,
    settings: Settings,
    cache: ShowInfoCache,
}

impl<F: InfoFetcher> Scraper<F> {
    pub fn new(fetcher: F, settings: Settings, cache: ShowInfoCache) -> Self {
        Self {
            fetcher,
            settings,
            cache,
        }
    }

    /// Fetches a single league record by ID.
    pub fn lookup_league(&self, league_id: &str) -> Result<ShowInfo, ScrapeError> {
        let resp = self
            .fetcher
            .get_json(&self.settings.league_url, &[("id", league_id)])?;
        let record = resp
            .get("leagues")
            .and_then(Value::as_array)
            .and_then(|leagues| leagues.first())
            .cloned()
            .ok_or_else(|| ScrapeError::LeagueNotFound(league_id.to_string()))?;
        serde_json::from_value(record).map_err(|e| ScrapeError::Decode(e.to_string()))
    }

    /// Populates a video item with a league's show-level metadata.
    ///
    /// The basic fields (titles, plot, media type, episode guide, year,
    /// premiere date) are always set; a malformed formation year is the one
    /// hard error here. With `full_info`, the default unique ID, genre,
    /// studio and country lists, artwork, and seasons are added, the season
    /// list is written back onto the record, and the record is persisted.
    /// Without `full_info`, only the poster is registered.
    pub fn add_main_show_info(
        &self,
        item: &mut dyn VideoInfoTag,
        show_info: &mut ShowInfo,
        full_info: bool,
    ) -> Result<(), ScrapeError> {
        let showname = show_info.name.clone().unwrap_or_default();
        let plot = clean_plot(show_info.description_en.as_deref().unwrap_or(""));
        item.set_title(&showname);
        item.set_original_title(&showname);
        item.set_tvshow_title(&showname);
        item.set_plot(&plot);
        item.set_plot_outline(&plot);
        item.set_media_type("tvshow");
        item.set_episode_guide(&show_info.id);
        let year_field = show_info.formed_year.as_deref().unwrap_or("");
        let year = prefix(year_field, 4)
            .parse::<i32>()
            .map_err(|_| MappingError::InvalidYear(year_field.to_string()))?;
        item.set_year(year);
        item.set_premiered(show_info.first_event_date.as_deref().unwrap_or(""));

        if full_info {
            item.set_unique_id(&show_info.id, "tsdb", true);
            item.set_genres(vec![show_info.sport.clone().unwrap_or_default()]);
            item.set_studios(vec![show_info.tv_rights.clone().unwrap_or_default()]);
            item.set_countries(vec![show_info.country.clone().unwrap_or_default()]);
            mapping::set_show_artwork(show_info, item);
            show_info.seasons = self.add_season_info(&show_info.id, item);
            if let Err(e) = self.cache.store(show_info) {
                log::warn!("Failed to cache show info for league {}: {e}", show_info.id);
            }
        } else if let Some(poster) = non_empty(&show_info.poster) {
            let url = normalize_url(poster);
            let preview = format!("{url}/preview");
            item.add_available_artwork(&url, "poster", &preview);
        }

        log::debug!("Adding sports league information for {showname} to the video item");
        Ok(())
    }

    /// Fetches and registers a league's seasons.
    ///
    /// A failed fetch registers nothing and yields `None`. Otherwise each
    /// season with a non-empty name is registered under the number parsed
    /// from the name's first four characters, and the collected list is
    /// returned for re-attachment onto the show record.
    fn add_season_info(
        &self,
        league_id: &str,
        item: &mut dyn VideoInfoTag,
    ) -> Option<Vec<SeasonEntry>> {
        let resp = match self
            .fetcher
            .get_json(&self.settings.season_url, &[("id", league_id)])
        {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!("Season lookup for league {league_id} failed: {e}");
                return None;
            }
        };
        let mut seasons = Vec::new();
        let records = resp
            .get("seasons")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        for season in &records {
            let season_name = season.get("strSeason").and_then(Value::as_str).unwrap_or("");
            if season_name.is_empty() {
                continue;
            }
            let season_num = match prefix(season_name, 4).parse::<i32>() {
                Ok(num) => num,
                Err(_) => {
                    log::debug!("Skipping season with unparseable name {season_name:?}");
                    continue;
                }
            };
            log::debug!("Adding information for season {season_name} to the video item");
            item.add_season(season_num, season_name);
            seasons.push(SeasonEntry {
                season_num,
                season_name: season_name.to_string(),
            });
        }
        Some(seasons)
    }

    /// Probes whether a YouTube video is watchable.
    ///
    /// A failed fetch, an empty body, or a body carrying the player's
    /// "Video unavailable" message all count as unavailable.
    pub fn check_youtube(&self, key: &str) -> bool {
        let url = format!("https://www.youtube.com/watch?v={key}");
        match self.fetcher.get_text(&url) {
            Ok(body) => !(body.is_empty() || body.contains("Video unavailable")),
            Err(_) => false,
        }
    }
}
