//! AniList GraphQL queries
//!
//! List queries share one field selection so the mapper sees a single shape.

/// Free-text anime search, paginated
pub const ANIME_SEARCH_QUERY: &str = r#"
query ($search: String, $page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      currentPage
      lastPage
      hasNextPage
      perPage
    }
    media(search: $search, type: ANIME) {
      id
      title {
        romaji
        english
        native
      }
      coverImage {
        large
        medium
      }
      startDate {
        year
        month
        day
      }
      description
      status
      episodes
      duration
      genres
      averageScore
      popularity
    }
  }
}
"#;

/// Ranked listing (popularity or score), paginated
pub const ANIME_RANKED_QUERY: &str = r#"
query ($page: Int, $perPage: Int, $sort: [MediaSort]) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      currentPage
      lastPage
      hasNextPage
      perPage
    }
    media(type: ANIME, sort: $sort) {
      id
      title {
        romaji
        english
        native
      }
      coverImage {
        large
        medium
      }
      startDate {
        year
        month
        day
      }
      description
      status
      episodes
      duration
      genres
      averageScore
      popularity
    }
  }
}
"#;

/// Anime listing filtered by genre, most popular first
pub const ANIME_GENRE_QUERY: &str = r#"
query ($genre: String, $page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    pageInfo {
      total
      currentPage
      lastPage
      hasNextPage
      perPage
    }
    media(type: ANIME, genre: $genre, sort: POPULARITY_DESC) {
      id
      title {
        romaji
        english
        native
      }
      coverImage {
        large
        medium
      }
      startDate {
        year
        month
        day
      }
      description
      status
      episodes
      duration
      genres
      averageScore
      popularity
    }
  }
}
"#;

/// Single anime with the fields needed for a detail view
pub const MEDIA_DETAIL_QUERY: &str = r#"
query ($id: Int) {
  Media(id: $id, type: ANIME) {
    id
    title {
      romaji
      english
      native
    }
    coverImage {
      extraLarge
      large
      medium
    }
    bannerImage
    startDate {
      year
      month
      day
    }
    description(asHtml: false)
    status
    episodes
    duration
    genres
    averageScore
    popularity
    studios(isMain: true) {
      nodes {
        id
        name
      }
    }
  }
}
"#;
