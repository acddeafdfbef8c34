//! AniList GraphQL documents

/// Paged search with every filter the planner can emit
pub const SEARCH_ANIME_QUERY: &str = r#"
query SearchAnime(
  $page: Int
  $perPage: Int
  $search: String
  $sort: [MediaSort]
  $genre_in: [String]
  $season: MediaSeason
  $seasonYear: Int
  $status_in: [MediaStatus]
  $format_in: [MediaFormat]
  $episodes_greater: Int
  $episodes_lesser: Int
  $averageScore_greater: Int
) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      currentPage
      lastPage
      hasNextPage
    }
    media(
      type: ANIME
      search: $search
      sort: $sort
      genre_in: $genre_in
      season: $season
      seasonYear: $seasonYear
      status_in: $status_in
      format_in: $format_in
      episodes_greater: $episodes_greater
      episodes_lesser: $episodes_lesser
      averageScore_greater: $averageScore_greater
    ) {
      id
      title {
        romaji
        english
        native
      }
      coverImage {
        large
      }
      bannerImage
      episodes
      averageScore
      popularity
      genres
      format
      status
      season
      seasonYear
      description(asHtml: false)
    }
  }
}
"#;

/// Single title with studios, trailer, relations and top recommendations
pub const ANIME_DETAIL_QUERY: &str = r#"
query AnimeDetail($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    title {
      romaji
      english
      native
    }
    coverImage {
      large
      extraLarge
    }
    bannerImage
    description(asHtml: false)
    episodes
    averageScore
    popularity
    format
    status
    season
    seasonYear
    genres
    studios(isMain: true) {
      nodes {
        id
        name
      }
    }
    trailer {
      id
      site
      thumbnail
    }
    relations {
      edges {
        relationType
        node {
          id
          title {
            romaji
            english
            native
          }
          coverImage {
            large
          }
          averageScore
          format
          seasonYear
        }
      }
    }
    recommendations(sort: RATING_DESC, perPage: 10) {
      nodes {
        mediaRecommendation {
          id
          title {
            romaji
            english
            native
          }
          coverImage {
            large
          }
          averageScore
          format
          seasonYear
        }
      }
    }
  }
}
"#;
