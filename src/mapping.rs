//! Pure field mappers: plot sanitizing, artwork, unique IDs, ratings, and
//! episode population.
//!
//! Every function here reads its input record and writes the destination item
//! through [`VideoInfoTag`] setters; inputs are never modified.

use crate::types::{EpisodeInfo, RatingEntry, ShowInfo};
use crate::video_item::VideoInfoTag;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+?>").unwrap());

/// HTML tags replaced with their Kodi skin-tag equivalents, in order.
const CLEAN_PLOT_REPLACEMENTS: [(&str, &str); 5] = [
    ("<b>", "[B]"),
    ("</b>", "[/B]"),
    ("<i>", "[I]"),
    ("</i>", "[/I]"),
    ("</p><p>", "[CR]"),
];

/// External ID keys that are copied to the destination item.
const VALID_EXTERNAL_IDS: [&str; 3] = ["tmdb_id", "imdb_id", "tvdb_id"];

/// Errors raised while mapping a record onto a video item.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The league's formation year could not be parsed
    #[error("Invalid formation year: {0:?}")]
    InvalidYear(String),
}

/// Replaces known HTML tags with Kodi skin tags and strips the rest.
pub fn clean_plot(plot: &str) -> String {
    let mut plot = plot.to_string();
    for (from, to) in CLEAN_PLOT_REPLACEMENTS {
        plot = plot.replace(from, to);
    }
    TAG_RE.replace_all(&plot, "").into_owned()
}

/// Registers recognized external IDs on the video item.
///
/// Only the keys in the allow-list are considered, empty values are skipped,
/// the provider tag is the first four characters of the key, and `tmdb_id`
/// is marked as the default identifier.
pub fn set_unique_ids(ext_ids: &HashMap<String, String>, vtag: &mut dyn VideoInfoTag) {
    for key in VALID_EXTERNAL_IDS {
        if let Some(value) = ext_ids.get(key) {
            if !value.is_empty() {
                vtag.set_unique_id(value, &key[..4], key == "tmdb_id");
            }
        }
    }
}

/// Registers ratings from the configured sources.
///
/// Sources are considered in the given order; a rating of zero (or a missing
/// source) is skipped, and the first registered rating becomes the default.
pub fn set_rating(
    ratings: &HashMap<String, RatingEntry>,
    rating_types: &[String],
    vtag: &mut dyn VideoInfoTag,
) {
    let mut first = true;
    for rating_type in rating_types {
        let entry = ratings.get(rating_type);
        let rating = entry
            .and_then(|e| e.rating.as_deref())
            .unwrap_or("0")
            .parse::<f64>()
            .unwrap_or(0.0);
        let votes = entry
            .and_then(|e| e.votes.as_deref())
            .unwrap_or("0")
            .parse::<i32>()
            .unwrap_or(0);
        log::debug!("Considering {rating_type} rating of {rating} with {votes} votes");
        if rating > 0.0 {
            vtag.set_rating(rating, votes, rating_type, first);
            first = false;
        }
    }
}

/// Registers a show's available artwork on the video item.
///
/// Fanart candidates are collected into a single available-fanart list
/// without deduplication; poster and banner are registered individually with
/// a `/preview`-derived preview URL. Absent or empty fields are skipped.
pub fn set_show_artwork(show_info: &ShowInfo, item: &mut dyn VideoInfoTag) {
    let images = [
        ("fanart", &show_info.fanart1),
        ("fanart", &show_info.fanart2),
        ("fanart", &show_info.fanart3),
        ("fanart", &show_info.fanart1),
        ("poster", &show_info.poster),
        ("banner", &show_info.banner),
    ];
    let mut fanart_list = Vec::new();
    for (image_type, image) in images {
        let Some(image) = non_empty(image) else {
            continue;
        };
        if image_type == "fanart" {
            fanart_list.push(normalize_url(image));
        } else {
            let url = normalize_url(image);
            let preview = format!("{url}/preview");
            item.add_available_artwork(&url, image_type, &preview);
        }
    }
    if !fanart_list.is_empty() {
        item.set_available_fanart(fanart_list);
    }
}

/// Populates a video item from an event record.
///
/// All fields are optional: the season defaults to "0000", the episode to
/// "0", and the title to `Episode {n}`. When `full_info` is false and an air
/// date exists, the title is rewritten to `{league}.{YYYYMMDD}.{title}`.
/// When `full_info` is true, the plot, premiere date, and thumbnail are
/// mapped as well.
pub fn add_episode_info(
    item: &mut dyn VideoInfoTag,
    episode_info: &EpisodeInfo,
    full_info: bool,
) {
    let season = prefix(episode_info.season.as_deref().unwrap_or("0000"), 4);
    let episode = episode_info.episode.as_deref().unwrap_or("0");
    let mut title = episode_info
        .event
        .clone()
        .unwrap_or_else(|| format!("Episode {episode}"));
    item.set_season(season.parse().unwrap_or(0));
    item.set_episode(episode.parse().unwrap_or(0));
    item.set_media_type("episode");
    if let Some(air_date) = episode_info.air_date.as_deref() {
        item.set_first_aired(air_date);
        if !full_info {
            title = format!(
                "{}.{}.{}",
                episode_info.league.as_deref().unwrap_or(""),
                air_date.replace('-', ""),
                title
            );
        }
    }
    item.set_title(&title);
    if full_info {
        item.set_title(&title);
        if let Some(raw_plot) = non_empty(&episode_info.description_en) {
            let plot = clean_plot(raw_plot);
            item.set_plot(&plot);
            item.set_plot_outline(&plot);
        }
        if let Some(air_date) = episode_info.air_date.as_deref() {
            item.set_premiered(air_date);
        }
        if let Some(rawurl) = non_empty(&episode_info.thumb) {
            let url = normalize_url(rawurl);
            let preview = format!("{url}/preview");
            item.add_available_artwork(&url, "thumb", &preview);
        }
    }
    log::debug!("Adding episode information for S{season}E{episode} - {title} to the video item");
}

/// Undoes backslash-escaped forward slashes left in image URLs.
pub(crate) fn normalize_url(url: &str) -> String {
    url.replace("\\/", "/")
}

/// Returns the field's value when it is present and non-empty.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// First `n` characters of `s`, or all of it when shorter.
pub(crate) fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShowInfo;
    use crate::video_item::RecordedVideoInfo;

    fn show_with_images() -> ShowInfo {
        ShowInfo {
            id: "4328".to_string(),
            name: Some("English Premier League".to_string()),
            description_en: None,
            formed_year: Some("1992".to_string()),
            first_event_date: Some("1992-08-15".to_string()),
            sport: Some("Soccer".to_string()),
            tv_rights: Some("Sky Sports".to_string()),
            country: Some("England".to_string()),
            fanart1: Some("https:\\/\\/img.example\\/fanart-a.jpg".to_string()),
            fanart2: Some("https://img.example/fanart-b.jpg".to_string()),
            fanart3: None,
            poster: Some("https://img.example/poster.jpg".to_string()),
            banner: Some("https://img.example/banner.jpg".to_string()),
            ratings: HashMap::new(),
            seasons: None,
        }
    }

    #[test]
    fn clean_plot_maps_known_tags_to_skin_tags() {
        assert_eq!(
            clean_plot("<b>Hi</b></p><p>Bye<i>!</i>"),
            "[B]Hi[/B][CR]Bye[I]![/I]"
        );
    }

    #[test]
    fn clean_plot_strips_unmapped_tags() {
        assert_eq!(clean_plot("foo<div>bar</div>"), "foobar");
    }

    #[test]
    fn clean_plot_passes_plain_text_through() {
        assert_eq!(clean_plot("no markup at all"), "no markup at all");
    }

    #[test]
    fn unique_ids_follow_allow_list_and_default_rules() {
        let mut item = RecordedVideoInfo::default();
        let ext_ids = HashMap::from([
            ("tmdb_id".to_string(), "42".to_string()),
            ("imdb_id".to_string(), String::new()),
            ("tvdb_id".to_string(), "7".to_string()),
            ("anidb_id".to_string(), "9".to_string()),
        ]);

        set_unique_ids(&ext_ids, &mut item);

        assert_eq!(item.unique_ids.len(), 2);
        let tmdb = item.unique_ids.iter().find(|u| u.id_type == "tmdb").unwrap();
        assert_eq!(tmdb.value, "42");
        assert!(tmdb.is_default);
        let tvdb = item.unique_ids.iter().find(|u| u.id_type == "tvdb").unwrap();
        assert_eq!(tvdb.value, "7");
        assert!(!tvdb.is_default);
    }

    #[test]
    fn first_nonzero_rating_is_default_and_zero_sources_are_skipped() {
        let mut item = RecordedVideoInfo::default();
        let ratings = HashMap::from([
            (
                "imdb".to_string(),
                RatingEntry {
                    rating: Some("7.5".to_string()),
                    votes: Some("100".to_string()),
                },
            ),
            (
                "tmdb".to_string(),
                RatingEntry {
                    rating: Some("0".to_string()),
                    votes: Some("0".to_string()),
                },
            ),
        ]);
        let order = vec!["imdb".to_string(), "tmdb".to_string()];

        set_rating(&ratings, &order, &mut item);

        assert_eq!(item.ratings.len(), 1);
        assert_eq!(item.ratings[0].rating, 7.5);
        assert_eq!(item.ratings[0].votes, 100);
        assert_eq!(item.ratings[0].rating_type, "imdb");
        assert!(item.ratings[0].is_default);
    }

    #[test]
    fn later_nonzero_ratings_are_not_default() {
        let mut item = RecordedVideoInfo::default();
        let ratings = HashMap::from([
            (
                "imdb".to_string(),
                RatingEntry {
                    rating: Some("7.5".to_string()),
                    votes: Some("100".to_string()),
                },
            ),
            (
                "tmdb".to_string(),
                RatingEntry {
                    rating: Some("6.1".to_string()),
                    votes: Some("20".to_string()),
                },
            ),
        ]);
        let order = vec!["imdb".to_string(), "tmdb".to_string()];

        set_rating(&ratings, &order, &mut item);

        assert_eq!(item.ratings.len(), 2);
        assert!(item.ratings[0].is_default);
        assert!(!item.ratings[1].is_default);
    }

    #[test]
    fn artwork_keeps_duplicate_fanart_and_derives_previews() {
        let mut item = RecordedVideoInfo::default();

        set_show_artwork(&show_with_images(), &mut item);

        // fanart1 is listed twice and must not be deduplicated
        assert_eq!(
            item.available_fanart,
            vec![
                "https://img.example/fanart-a.jpg",
                "https://img.example/fanart-b.jpg",
                "https://img.example/fanart-a.jpg",
            ]
        );
        assert_eq!(item.artwork.len(), 2);
        assert_eq!(item.artwork[0].art_type, "poster");
        assert_eq!(item.artwork[0].url, "https://img.example/poster.jpg");
        assert_eq!(
            item.artwork[0].preview,
            "https://img.example/poster.jpg/preview"
        );
        assert_eq!(item.artwork[1].art_type, "banner");
    }

    #[test]
    fn artwork_skips_absent_fields_entirely() {
        let mut item = RecordedVideoInfo::default();
        let mut show = show_with_images();
        show.fanart1 = None;
        show.fanart2 = None;
        show.fanart3 = None;
        show.poster = None;
        show.banner = Some(String::new());

        set_show_artwork(&show, &mut item);

        assert!(item.available_fanart.is_empty());
        assert!(item.artwork.is_empty());
    }

    #[test]
    fn episode_defaults_apply_when_fields_are_missing() {
        let mut item = RecordedVideoInfo::default();

        add_episode_info(&mut item, &EpisodeInfo::default(), true);

        assert_eq!(item.season, Some(0));
        assert_eq!(item.episode, Some(0));
        assert_eq!(item.media_type.as_deref(), Some("episode"));
        assert_eq!(item.title.as_deref(), Some("Episode 0"));
        assert_eq!(item.first_aired, None);
        assert_eq!(item.premiered, None);
        assert!(item.artwork.is_empty());
    }

    #[test]
    fn episode_title_is_date_prefixed_without_full_info() {
        let mut item = RecordedVideoInfo::default();
        let episode = EpisodeInfo {
            season: Some("2024-2025".to_string()),
            episode: Some("12".to_string()),
            event: Some("Arsenal vs Chelsea".to_string()),
            air_date: Some("2024-11-03".to_string()),
            league: Some("English Premier League".to_string()),
            ..EpisodeInfo::default()
        };

        add_episode_info(&mut item, &episode, false);

        assert_eq!(item.season, Some(2024));
        assert_eq!(item.episode, Some(12));
        assert_eq!(
            item.title.as_deref(),
            Some("English Premier League.20241103.Arsenal vs Chelsea")
        );
        assert_eq!(item.first_aired.as_deref(), Some("2024-11-03"));
        // premiered and plot belong to the full_info branch only
        assert_eq!(item.premiered, None);
        assert_eq!(item.plot, None);
    }

    #[test]
    fn episode_full_info_maps_plot_premiere_and_thumbnail() {
        let mut item = RecordedVideoInfo::default();
        let episode = EpisodeInfo {
            season: Some("2024-2025".to_string()),
            episode: Some("12".to_string()),
            event: Some("Arsenal vs Chelsea".to_string()),
            air_date: Some("2024-11-03".to_string()),
            description_en: Some("<b>Derby</b> day".to_string()),
            thumb: Some("https:\\/\\/img.example\\/thumb.jpg".to_string()),
            ..EpisodeInfo::default()
        };

        add_episode_info(&mut item, &episode, true);

        assert_eq!(item.title.as_deref(), Some("Arsenal vs Chelsea"));
        assert_eq!(item.plot.as_deref(), Some("[B]Derby[/B] day"));
        assert_eq!(item.plot_outline.as_deref(), Some("[B]Derby[/B] day"));
        assert_eq!(item.premiered.as_deref(), Some("2024-11-03"));
        assert_eq!(item.artwork.len(), 1);
        assert_eq!(item.artwork[0].url, "https://img.example/thumb.jpg");
        assert_eq!(item.artwork[0].art_type, "thumb");
        assert_eq!(item.artwork[0].preview, "https://img.example/thumb.jpg/preview");
    }

    #[test]
    fn episode_mapping_is_idempotent_against_a_fresh_item() {
        let episode = EpisodeInfo {
            season: Some("2023-2024".to_string()),
            episode: Some("3".to_string()),
            event: Some("Final".to_string()),
            air_date: Some("2024-05-25".to_string()),
            ..EpisodeInfo::default()
        };

        let mut first = RecordedVideoInfo::default();
        add_episode_info(&mut first, &episode, true);
        let mut second = RecordedVideoInfo::default();
        add_episode_info(&mut second, &episode, true);

        assert_eq!(first, second);
    }

    #[test]
    fn prefix_is_char_boundary_safe() {
        assert_eq!(prefix("2024-2025", 4), "2024");
        assert_eq!(prefix("20", 4), "20");
        assert_eq!(prefix("", 4), "");
    }
}
