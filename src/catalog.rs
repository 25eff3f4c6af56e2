//! The movie catalog and the derivations the page renders from it.
//!
//! Everything here is plain data and pure functions so the list logic can be
//! unit tested without a browser. The components re-run these derivations on
//! every render; with a catalog this size there is nothing worth caching.

use serde::{Deserialize, Serialize};

/// Closed set of genres, in the order the genre selector lists them.
pub const GENRES: &[&str] = &[
    "Psychological",
    "Supernatural",
    "Slasher",
    "Found Footage",
    "Folk Horror",
    "Creature Feature",
    "Zombie",
    "Gothic",
];

/// Value the genre selector uses for "no genre filter".
pub const ALL_GENRES: &str = "all";

/// How many entries the trending card shows.
const TRENDING_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub genre: String,
    pub poster_url: String,
    pub critic_score: u8,
    pub user_score: u8,
    pub tags: Vec<String>,
    pub blurb: String,
}

/// Ordering applied to the review grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Trending,
    Critic,
    User,
    New,
}

impl SortMode {
    pub fn as_value(self) -> &'static str {
        match self {
            SortMode::Trending => "trending",
            SortMode::Critic => "critic",
            SortMode::User => "user",
            SortMode::New => "new",
        }
    }

    /// Parses a sort selector option value, falling back to `Trending`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "critic" => SortMode::Critic,
            "user" => SortMode::User,
            "new" => SortMode::New,
            _ => SortMode::Trending,
        }
    }
}

/// Search, genre and sort selections owned by the page controls.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub genre: String,
    pub sort: SortMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            genre: ALL_GENRES.to_string(),
            sort: SortMode::Trending,
        }
    }
}

// Critic and user scores are capped at 100 each, so the total fits u16 and
// orders identically to their average.
fn total_score(movie: &MovieRecord) -> u16 {
    u16::from(movie.critic_score) + u16::from(movie.user_score)
}

/// Top entries by average of critic and user score, at most three.
///
/// The sort is stable: records with equal averages keep catalog order.
pub fn derive_trending(catalog: &[MovieRecord]) -> Vec<MovieRecord> {
    let mut list = catalog.to_vec();
    list.sort_by(|a, b| total_score(b).cmp(&total_score(a)));
    list.truncate(TRENDING_LIMIT);
    list
}

/// The review grid: catalog restricted to the genre and search query,
/// ordered by the selected sort mode.
///
/// Genre matching is exact; the query matches case-insensitively against the
/// title or any tag. `Trending` keeps the post-filter order as-is, which is
/// catalog order restricted to matches. All sorts are stable, so equal keys
/// keep their relative order and identical inputs always produce identical
/// output. An unmatched filter yields an empty list, never an error.
pub fn derive_display_list(catalog: &[MovieRecord], filter: &FilterState) -> Vec<MovieRecord> {
    let mut list: Vec<MovieRecord> = catalog
        .iter()
        .filter(|movie| filter.genre == ALL_GENRES || movie.genre == filter.genre)
        .cloned()
        .collect();

    let search = filter.query.trim().to_lowercase();
    if !search.is_empty() {
        list.retain(|movie| {
            movie.title.to_lowercase().contains(&search)
                || movie.tags.iter().any(|tag| tag.to_lowercase().contains(&search))
        });
    }

    match filter.sort {
        SortMode::Critic => list.sort_by(|a, b| b.critic_score.cmp(&a.critic_score)),
        SortMode::User => list.sort_by(|a, b| b.user_score.cmp(&a.user_score)),
        SortMode::New => list.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::Trending => {}
    }

    list
}

/// The review catalog the site ships with.
pub fn sample_catalog() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            id: 1,
            title: "Whispers in the Attic".to_string(),
            year: 2024,
            genre: "Supernatural".to_string(),
            poster_url: "https://images.unsplash.com/photo-1502082553048-f009c37129b9?q=80&w=1200&auto=format&fit=crop".to_string(),
            critic_score: 84,
            user_score: 78,
            tags: vec![
                "Haunted House".to_string(),
                "Slow Burn".to_string(),
                "Atmospheric".to_string(),
            ],
            blurb: "When a family inherits a creaking mansion, a child's whisper becomes a warning none should ignore.".to_string(),
        },
        MovieRecord {
            id: 2,
            title: "Static".to_string(),
            year: 2023,
            genre: "Found Footage".to_string(),
            poster_url: "https://images.unsplash.com/photo-1486693326701-1ea358b19e1d?q=80&w=1200&auto=format&fit=crop".to_string(),
            critic_score: 72,
            user_score: 81,
            tags: vec![
                "Analog Horror".to_string(),
                "VHS".to_string(),
                "Cult".to_string(),
            ],
            blurb: "A college crew documents dead air after midnight and tunes into something that answers back.".to_string(),
        },
        MovieRecord {
            id: 3,
            title: "Pale Harvest".to_string(),
            year: 2022,
            genre: "Folk Horror".to_string(),
            poster_url: "https://images.unsplash.com/photo-1473172707857-f9e276582ab6?q=80&w=1200&auto=format&fit=crop".to_string(),
            critic_score: 90,
            user_score: 86,
            tags: vec![
                "Ritual".to_string(),
                "Rural".to_string(),
                "Wicker".to_string(),
            ],
            blurb: "A village celebrates the season with a ritual no outsider survives to describe.".to_string(),
        },
        MovieRecord {
            id: 4,
            title: "Nine Cuts".to_string(),
            year: 2025,
            genre: "Slasher".to_string(),
            poster_url: "https://images.unsplash.com/photo-1508057198894-247b23fe5ade?q=80&w=1200&auto=format&fit=crop".to_string(),
            critic_score: 61,
            user_score: 74,
            tags: vec![
                "Neo-Slasher".to_string(),
                "Practical FX".to_string(),
                "Camp".to_string(),
            ],
            blurb: "An editor discovers frames spliced into her film that predict real murders\u{2014}hers is the final cut.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(id: u32, title: &str, genre: &str, year: u16, critic: u8, user: u8) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            year,
            genre: genre.to_string(),
            poster_url: String::new(),
            critic_score: critic,
            user_score: user,
            tags: Vec::new(),
            blurb: String::new(),
        }
    }

    fn titles(list: &[MovieRecord]) -> Vec<&str> {
        list.iter().map(|movie| movie.title.as_str()).collect()
    }

    fn filter(query: &str, genre: &str, sort: SortMode) -> FilterState {
        FilterState {
            query: query.to_string(),
            genre: genre.to_string(),
            sort,
        }
    }

    #[test]
    fn test_trending_orders_by_average_score() {
        let trending = derive_trending(&sample_catalog());
        assert_eq!(
            titles(&trending),
            vec!["Pale Harvest", "Whispers in the Attic", "Static"]
        );
    }

    #[test]
    fn test_trending_caps_at_three() {
        let catalog = sample_catalog();
        assert_eq!(derive_trending(&catalog).len(), 3);

        let two = &catalog[..2];
        assert_eq!(derive_trending(two).len(), 2);
    }

    #[test]
    fn test_trending_empty_catalog() {
        assert!(derive_trending(&[]).is_empty());
    }

    #[test]
    fn test_trending_keeps_catalog_order_on_tied_average() {
        // 80/70 and 70/80 both average 75
        let catalog = vec![
            test_record(1, "First", "Gothic", 2020, 80, 70),
            test_record(2, "Second", "Gothic", 2021, 70, 80),
            test_record(3, "Third", "Gothic", 2022, 10, 10),
        ];
        let trending = derive_trending(&catalog);
        assert_eq!(titles(&trending), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_display_default_filter_is_identity() {
        let catalog = sample_catalog();
        let list = derive_display_list(&catalog, &FilterState::default());
        assert_eq!(list, catalog);
    }

    #[test]
    fn test_display_genre_filter_exact_match() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("", "Slasher", SortMode::Trending),
        );
        assert_eq!(titles(&list), vec!["Nine Cuts"]);
    }

    #[test]
    fn test_display_genre_without_entries_is_empty() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("", "Gothic", SortMode::Trending),
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_display_query_matches_tags_case_insensitively() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("vhs", ALL_GENRES, SortMode::Trending),
        );
        assert_eq!(titles(&list), vec!["Static"]);
    }

    #[test]
    fn test_display_query_matches_title_substring() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("harv", ALL_GENRES, SortMode::Trending),
        );
        assert_eq!(titles(&list), vec!["Pale Harvest"]);
    }

    #[test]
    fn test_display_query_is_trimmed() {
        let catalog = sample_catalog();
        let list = derive_display_list(&catalog, &filter("   ", ALL_GENRES, SortMode::Trending));
        assert_eq!(list, catalog);
    }

    #[test]
    fn test_display_unmatched_query_yields_empty_list() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("zombeavers", ALL_GENRES, SortMode::Trending),
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_display_query_and_genre_combine() {
        // "cult" matches a Static tag, but the genre filter runs first
        let list = derive_display_list(
            &sample_catalog(),
            &filter("cult", "Folk Horror", SortMode::Trending),
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_display_sort_by_critic_score() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("", ALL_GENRES, SortMode::Critic),
        );
        assert_eq!(
            titles(&list),
            vec!["Pale Harvest", "Whispers in the Attic", "Static", "Nine Cuts"]
        );
    }

    #[test]
    fn test_display_sort_by_user_score() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("", ALL_GENRES, SortMode::User),
        );
        assert_eq!(
            titles(&list),
            vec!["Pale Harvest", "Static", "Whispers in the Attic", "Nine Cuts"]
        );
    }

    #[test]
    fn test_display_sort_by_year() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("", ALL_GENRES, SortMode::New),
        );
        assert_eq!(
            titles(&list),
            vec!["Nine Cuts", "Whispers in the Attic", "Static", "Pale Harvest"]
        );
    }

    #[test]
    fn test_display_trending_keeps_post_filter_order() {
        let list = derive_display_list(
            &sample_catalog(),
            &filter("a", ALL_GENRES, SortMode::Trending),
        );
        // every title containing "a", in catalog order, no re-sort by score
        assert_eq!(
            titles(&list),
            vec!["Whispers in the Attic", "Static", "Pale Harvest", "Nine Cuts"]
        );
    }

    #[test]
    fn test_display_sorts_are_stable_on_equal_keys() {
        let catalog = vec![
            test_record(1, "First", "Zombie", 2020, 70, 50),
            test_record(2, "Second", "Zombie", 2020, 70, 60),
            test_record(3, "Third", "Zombie", 2021, 70, 60),
        ];

        let by_critic = derive_display_list(&catalog, &filter("", ALL_GENRES, SortMode::Critic));
        assert_eq!(titles(&by_critic), vec!["First", "Second", "Third"]);

        let by_year = derive_display_list(&catalog, &filter("", ALL_GENRES, SortMode::New));
        assert_eq!(titles(&by_year), vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_sort_mode_select_values_round_trip() {
        for mode in [SortMode::Trending, SortMode::Critic, SortMode::User, SortMode::New] {
            assert_eq!(SortMode::from_value(mode.as_value()), mode);
        }
    }

    #[test]
    fn test_sort_mode_unknown_value_falls_back_to_trending() {
        assert_eq!(SortMode::from_value("alphabetical"), SortMode::Trending);
        assert_eq!(SortMode::from_value(""), SortMode::Trending);
    }
}
