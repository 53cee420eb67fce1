use sportsdb_scraper::{
    ApiClient, RecordedVideoInfo, Scraper, Settings, ShowInfoCache, parse_media_id, parse_nfo_url,
};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    // Get arguments from command line
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <league-id | media-id | nfo-file>", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} 4328            look up a league by ID", args[0]);
        eprintln!("  {} tmdb/5678       classify a media ID", args[0]);
        eprintln!("  {} tvshow.nfo      extract the league from an NFO file", args[0]);
        process::exit(1);
    }

    let query = &args[1];

    // A recognized media ID is just classified and printed
    if let Some(media_id) = parse_media_id(query) {
        println!(
            "Media ID: {} ({})",
            media_id.title,
            media_id.kind.as_key()
        );
        return;
    }

    let league_id = resolve_league_id(query).unwrap_or_else(|| {
        eprintln!("Error: '{query}' is not a league ID, a media ID, or an NFO file");
        process::exit(1);
    });

    let settings = Settings::default();
    let fetcher = match ApiClient::new(&settings) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("Error: failed to build HTTP client: {e}");
            process::exit(1);
        }
    };
    let cache = match ShowInfoCache::open() {
        Ok(cache) => cache,
        Err(e) => {
            eprintln!("Error: failed to open show cache: {e}");
            process::exit(1);
        }
    };
    let scraper = Scraper::new(fetcher, settings, cache);

    let mut show = match scraper.lookup_league(&league_id) {
        Ok(show) => show,
        Err(e) => {
            eprintln!("Error: league lookup failed: {e}");
            process::exit(1);
        }
    };

    let mut item = RecordedVideoInfo::default();
    if let Err(e) = scraper.add_main_show_info(&mut item, &mut show, true) {
        eprintln!("Error: failed to map league {league_id}: {e}");
        process::exit(1);
    }

    match serde_json::to_string_pretty(&item) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to render video item: {e}");
            process::exit(1);
        }
    }
}

/// Turns the query into a league ID: either it already is one, or it is an
/// NFO file (or raw NFO text) carrying a recognized league URL.
fn resolve_league_id(query: &str) -> Option<String> {
    if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) {
        return Some(query.to_string());
    }

    let path = Path::new(query);
    let nfo = if path.is_file() {
        fs::read_to_string(path).ok()?
    } else {
        query.to_string()
    };

    parse_nfo_url(&nfo).map(|result| result.show_id)
}
