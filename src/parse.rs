//! Parsers for the NFO URL convention and free-text media IDs.

use regex::Regex;
use std::sync::LazyLock;

/// Recognized URL patterns, listed in order of priority. Group 1 captures
/// the provider token, group 2 the show ID.
static SHOW_ID_REGEXPS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![(
        Regex::new(r"(?i)(thesportsdb)\.com/league/(\d+)").unwrap(),
        "thesportsdb",
    )]
});

/// Provider and show ID extracted from NFO file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParseResult {
    pub provider: String,
    pub show_id: String,
}

/// External ID namespaces a media ID can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalIdKind {
    Imdb,
    Tmdb,
    Tvdb,
}

impl ExternalIdKind {
    /// The key name used for this namespace in external-ID mappings.
    pub fn as_key(&self) -> &'static str {
        match self {
            ExternalIdKind::Imdb => "imdb_id",
            ExternalIdKind::Tmdb => "tmdb_id",
            ExternalIdKind::Tvdb => "tvdb_id",
        }
    }
}

/// A free-text identifier classified into an external-ID namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaIdQuery {
    pub kind: ExternalIdKind,
    pub title: String,
}

/// Extracts a show ID from NFO file contents.
///
/// Patterns are tried in priority order; the first match whose provider
/// token equals the expected literal wins. Returns `None` when nothing
/// matches.
pub fn parse_nfo_url(nfo: &str) -> Option<UrlParseResult> {
    for (regexp, provider) in SHOW_ID_REGEXPS.iter() {
        log::debug!("Matching NFO contents against {}", regexp.as_str());
        if let Some(caps) = regexp.captures(nfo) {
            if &caps[1] == *provider {
                return Some(UrlParseResult {
                    provider: caps[1].to_string(),
                    show_id: caps[2].to_string(),
                });
            }
        }
    }
    None
}

/// Classifies a short identifier string by prefix.
///
/// Recognized encodings, in priority order: bare `tt<digits>` (IMDB),
/// `imdb/tt<digits>`, `tmdb/<digits>`, `tvdb/<digits>`. Anything else
/// returns `None`.
pub fn parse_media_id(title: &str) -> Option<MediaIdQuery> {
    let title = title.to_lowercase();
    if title.starts_with("tt") && is_digits(&title[2..]) {
        // a bare IMDB ID is unambiguous
        return Some(MediaIdQuery {
            kind: ExternalIdKind::Imdb,
            title,
        });
    }
    if title.starts_with("imdb/tt") && is_digits(&title[7..]) {
        return Some(MediaIdQuery {
            kind: ExternalIdKind::Imdb,
            title: title[5..].to_string(),
        });
    }
    if title.starts_with("tmdb/") && is_digits(&title[5..]) {
        return Some(MediaIdQuery {
            kind: ExternalIdKind::Tmdb,
            title: title[5..].to_string(),
        });
    }
    if title.starts_with("tvdb/") && is_digits(&title[5..]) {
        return Some(MediaIdQuery {
            kind: ExternalIdKind::Tvdb,
            title: title[5..].to_string(),
        });
    }
    None
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfo_url_with_league_link_is_recognized() {
        let nfo = "<tvshow></tvshow>\nhttps://www.thesportsdb.com/league/4328";
        let result = parse_nfo_url(nfo).unwrap();
        assert_eq!(result.provider, "thesportsdb");
        assert_eq!(result.show_id, "4328");
    }

    #[test]
    fn nfo_match_is_case_insensitive_for_the_domain() {
        let result = parse_nfo_url("see THESPORTSDB.com/league/17 for details");
        // The pattern matches but the provider token is compared verbatim,
        // so an upper-cased domain does not count as a hit.
        assert_eq!(result, None);
    }

    #[test]
    fn nfo_without_a_league_link_yields_none() {
        assert_eq!(parse_nfo_url("no match here"), None);
    }

    #[test]
    fn bare_imdb_id_is_kept_whole() {
        let query = parse_media_id("tt1234567").unwrap();
        assert_eq!(query.kind, ExternalIdKind::Imdb);
        assert_eq!(query.title, "tt1234567");
    }

    #[test]
    fn prefixed_imdb_id_keeps_the_tt_part() {
        let query = parse_media_id("imdb/tt1234567").unwrap();
        assert_eq!(query.kind, ExternalIdKind::Imdb);
        assert_eq!(query.title, "tt1234567");
    }

    #[test]
    fn tmdb_and_tvdb_prefixes_are_stripped() {
        let tmdb = parse_media_id("tmdb/5678").unwrap();
        assert_eq!(tmdb.kind, ExternalIdKind::Tmdb);
        assert_eq!(tmdb.title, "5678");

        let tvdb = parse_media_id("tvdb/999").unwrap();
        assert_eq!(tvdb.kind, ExternalIdKind::Tvdb);
        assert_eq!(tvdb.title, "999");
    }

    #[test]
    fn classification_lowercases_its_input() {
        let query = parse_media_id("TMDB/5678").unwrap();
        assert_eq!(query.kind, ExternalIdKind::Tmdb);
        assert_eq!(query.title, "5678");
    }

    #[test]
    fn unrecognized_strings_yield_none() {
        assert_eq!(parse_media_id("xyz"), None);
        assert_eq!(parse_media_id("tt12x4"), None);
        assert_eq!(parse_media_id("tt"), None);
        assert_eq!(parse_media_id("tmdb/"), None);
    }
}
