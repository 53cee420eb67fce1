//! The destination collaborator: a media center's mutable video item.
//!
//! The host's item is only ever written through the setter vocabulary below.
//! [`RecordedVideoInfo`] is an in-memory implementation that simply records
//! every call; the CLI prints it and the tests assert against it.

use serde::Serialize;

/// Setter interface of the host-owned video item.
///
/// Mapping code calls these setters and never reads the item back. Calling a
/// mapper twice with the same inputs against a fresh implementation must
/// yield the same state.
pub trait VideoInfoTag {
    fn set_title(&mut self, title: &str);
    fn set_original_title(&mut self, title: &str);
    fn set_tvshow_title(&mut self, title: &str);
    fn set_plot(&mut self, plot: &str);
    fn set_plot_outline(&mut self, plot: &str);
    fn set_media_type(&mut self, media_type: &str);
    fn set_episode_guide(&mut self, guide: &str);
    fn set_year(&mut self, year: i32);
    fn set_premiered(&mut self, date: &str);
    fn set_first_aired(&mut self, date: &str);
    fn set_season(&mut self, season: i32);
    fn set_episode(&mut self, episode: i32);
    fn set_genres(&mut self, genres: Vec<String>);
    fn set_studios(&mut self, studios: Vec<String>);
    fn set_countries(&mut self, countries: Vec<String>);
    fn set_unique_id(&mut self, value: &str, id_type: &str, is_default: bool);
    fn set_rating(&mut self, rating: f64, votes: i32, rating_type: &str, is_default: bool);
    fn add_season(&mut self, number: i32, name: &str);
    fn add_available_artwork(&mut self, url: &str, art_type: &str, preview: &str);
    fn set_available_fanart(&mut self, urls: Vec<String>);
}

/// A registered external identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueIdRecord {
    pub value: String,
    pub id_type: String,
    pub is_default: bool,
}

/// A registered rating with its vote count and source tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRecord {
    pub rating: f64,
    pub votes: i32,
    pub rating_type: String,
    pub is_default: bool,
}

/// A registered season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRecord {
    pub number: i32,
    pub name: String,
}

/// A registered artwork entry with its derived preview URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkRecord {
    pub url: String,
    pub art_type: String,
    pub preview: String,
}

/// A [`VideoInfoTag`] that stores everything set on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordedVideoInfo {
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub tvshow_title: Option<String>,
    pub plot: Option<String>,
    pub plot_outline: Option<String>,
    pub media_type: Option<String>,
    pub episode_guide: Option<String>,
    pub year: Option<i32>,
    pub premiered: Option<String>,
    pub first_aired: Option<String>,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    pub genres: Vec<String>,
    pub studios: Vec<String>,
    pub countries: Vec<String>,
    pub unique_ids: Vec<UniqueIdRecord>,
    pub ratings: Vec<RatingRecord>,
    pub seasons: Vec<SeasonRecord>,
    pub artwork: Vec<ArtworkRecord>,
    pub available_fanart: Vec<String>,
}

impl VideoInfoTag for RecordedVideoInfo {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_original_title(&mut self, title: &str) {
        self.original_title = Some(title.to_string());
    }

    fn set_tvshow_title(&mut self, title: &str) {
        self.tvshow_title = Some(title.to_string());
    }

    fn set_plot(&mut self, plot: &str) {
        self.plot = Some(plot.to_string());
    }

    fn set_plot_outline(&mut self, plot: &str) {
        self.plot_outline = Some(plot.to_string());
    }

    fn set_media_type(&mut self, media_type: &str) {
        self.media_type = Some(media_type.to_string());
    }

    fn set_episode_guide(&mut self, guide: &str) {
        self.episode_guide = Some(guide.to_string());
    }

    fn set_year(&mut self, year: i32) {
        self.year = Some(year);
    }

    fn set_premiered(&mut self, date: &str) {
        self.premiered = Some(date.to_string());
    }

    fn set_first_aired(&mut self, date: &str) {
        self.first_aired = Some(date.to_string());
    }

    fn set_season(&mut self, season: i32) {
        self.season = Some(season);
    }

    fn set_episode(&mut self, episode: i32) {
        self.episode = Some(episode);
    }

    fn set_genres(&mut self, genres: Vec<String>) {
        self.genres = genres;
    }

    fn set_studios(&mut self, studios: Vec<String>) {
        self.studios = studios;
    }

    fn set_countries(&mut self, countries: Vec<String>) {
        self.countries = countries;
    }

    fn set_unique_id(&mut self, value: &str, id_type: &str, is_default: bool) {
        self.unique_ids.push(UniqueIdRecord {
            value: value.to_string(),
            id_type: id_type.to_string(),
            is_default,
        });
    }

    fn set_rating(&mut self, rating: f64, votes: i32, rating_type: &str, is_default: bool) {
        self.ratings.push(RatingRecord {
            rating,
            votes,
            rating_type: rating_type.to_string(),
            is_default,
        });
    }

    fn add_season(&mut self, number: i32, name: &str) {
        self.seasons.push(SeasonRecord {
            number,
            name: name.to_string(),
        });
    }

    fn add_available_artwork(&mut self, url: &str, art_type: &str, preview: &str) {
        self.artwork.push(ArtworkRecord {
            url: url.to_string(),
            art_type: art_type.to_string(),
            preview: preview.to_string(),
        });
    }

    fn set_available_fanart(&mut self, urls: Vec<String>) {
        self.available_fanart = urls;
    }
}
