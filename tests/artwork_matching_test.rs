mod utils;

use anidex_lib::modules::artwork::{
    domain::services::match_scorer::CONFIDENCE_THRESHOLD, ArtworkService, ImageMatcher,
    ImageSearchRepository, ImageUrlBuilder, MatchTarget, TmdbAdapter,
};
use anidex_lib::AppState;
use std::sync::Arc;
use utils::factories::CandidateFactory;
use utils::fixtures::{tmdb_results, tmdb_show};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

fn matcher() -> ImageMatcher {
    ImageMatcher::new(ImageUrlBuilder::new(IMAGE_BASE))
}

#[test]
fn test_exact_title_beats_substring_title() {
    let candidates = vec![
        CandidateFactory::new(1, "Naruto Shippuden").build(),
        CandidateFactory::new(2, "Naruto").build(),
    ];

    let best = matcher()
        .best_candidate(&MatchTarget::new("Naruto"), &candidates)
        .unwrap();

    assert_eq!(best.candidate.id, 2);
    assert_eq!(best.score, 100.0);
}

#[test]
fn test_year_mismatch_still_accepts_exact_title() {
    let candidates = vec![CandidateFactory::new(7, "Attack on Titan").aired("2020-12-07").build()];
    let target = MatchTarget::new("Attack on Titan").with_season_year(Some(2013));

    let best = matcher().best_candidate(&target, &candidates).unwrap();

    assert_eq!(best.score, 80.0);
}

#[test]
fn test_year_hint_separates_remakes() {
    let candidates = vec![
        CandidateFactory::new(1, "Hunter x Hunter").aired("1999-10-16").build(),
        CandidateFactory::new(2, "Hunter x Hunter").aired("2011-10-02").build(),
    ];
    let target = MatchTarget::new("HUNTER×HUNTER")
        .with_alt_titles(["Hunter x Hunter (2011)"])
        .with_season_year(Some(2011));

    let best = matcher().best_candidate(&target, &candidates).unwrap();

    assert_eq!(best.candidate.id, 2);
}

#[test]
fn test_year_correct_substring_match_beats_more_popular_one_three_years_off() {
    let candidates = vec![
        CandidateFactory::new(1, "Frieren: Beyond Journey's End Recap")
            .aired("2020-04-01")
            .vote(8.0)
            .popularity(900.0)
            .build(),
        CandidateFactory::new(2, "Frieren: Beyond Journey's End Season 1")
            .aired("2023-09-29")
            .vote(8.0)
            .popularity(30.0)
            .build(),
    ];
    let target = MatchTarget::new("Frieren Beyond Journeys End").with_season_year(Some(2023));

    let best = matcher().best_candidate(&target, &candidates).unwrap();

    // 70 - 20 + 16 + 6 = 72 against 70 + 15 + 16 + 0.2 = 101.2
    assert_eq!(best.candidate.id, 2);
    assert!((best.score - 101.2).abs() < 1e-9);
}

#[test]
fn test_weak_candidates_yield_no_artwork() {
    let candidates = vec![
        CandidateFactory::new(1, "Completely Different").vote(7.0).popularity(30.0).build(),
        CandidateFactory::new(2, "Another Show").aired("1990-01-01").build(),
    ];
    let target = MatchTarget::new("Naruto").with_season_year(Some(2002));

    let result = matcher().select(&target, &candidates);

    assert!(result.is_empty());
    assert!(7.0 * 2.0 + 30.0 / 150.0 < CONFIDENCE_THRESHOLD);
}

#[test]
fn test_alt_titles_match_localized_names() {
    let candidates = vec![CandidateFactory::new(3, "진격의 거인")
        .also_named("進撃の巨人")
        .without_backdrop()
        .build()];
    let target = MatchTarget::new("Shingeki no Kyojin").with_alt_titles(["進撃の巨人"]);

    let result = matcher().select(&target, &candidates);

    assert_eq!(
        result.poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/poster_3.jpg")
    );
    assert_eq!(result.backdrop_url, None);
}

#[test]
fn test_equal_scores_keep_first_candidate() {
    let candidates = vec![
        CandidateFactory::new(10, "Monster").build(),
        CandidateFactory::new(11, "Monster").build(),
    ];

    let best = matcher()
        .best_candidate(&MatchTarget::new("monster"), &candidates)
        .unwrap();

    assert_eq!(best.candidate.id, 10);
}

#[tokio::test]
async fn test_empty_localized_search_falls_back_to_english() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/tv"))
        .and(query_param("language", "ko-KR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tmdb_results(vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/tv"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tmdb_results(vec![tmdb_show(
            46260,
            "Naruto",
            "ナルト",
            "2002-10-03",
        )])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let repository: Arc<dyn ImageSearchRepository> =
        Arc::new(TmdbAdapter::with_base_url("test-key", mock_server.uri()));
    let service = ArtworkService::new(Some(repository), matcher());
    let target = MatchTarget::new("Naruto").with_season_year(Some(2002));

    let result = service.match_image(&target).await;

    assert_eq!(
        result.poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/poster_46260.jpg")
    );
    assert_eq!(
        result.backdrop_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w780/backdrop_46260.jpg")
    );
}

#[tokio::test]
async fn test_server_error_yields_no_artwork() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let repository: Arc<dyn ImageSearchRepository> =
        Arc::new(TmdbAdapter::with_base_url("test-key", mock_server.uri()));
    let service = ArtworkService::new(Some(repository), matcher());

    assert!(service.match_image(&MatchTarget::new("Naruto")).await.is_empty());
}

#[tokio::test]
async fn test_app_state_without_key_never_matches() {
    let state = AppState::from_config(&Default::default());

    let result = state
        .match_image("Naruto", &["ナルト".to_string()], Some(2002))
        .await;

    assert!(result.is_empty());
}
