//! Recorded provider payloads, trimmed to the fields the adapters read

pub const ANILIST_SEARCH: &str = r#"{
  "data": {
    "Page": {
      "pageInfo": { "total": 3, "currentPage": 1, "lastPage": 1, "hasNextPage": false, "perPage": 20 },
      "media": [
        {
          "id": 16498,
          "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan", "native": "進撃の巨人" },
          "coverImage": { "large": "https://s4.anilist.co/file/anilistcdn/media/anime/cover/medium/bx16498.jpg", "medium": null },
          "startDate": { "year": 2013, "month": 4, "day": 7 },
          "description": "Several hundred years ago, humans were nearly exterminated by titans.<br><br>\n(Source: Kodansha)",
          "status": "FINISHED",
          "episodes": 25,
          "duration": 24,
          "genres": ["Action", "Drama", "Fantasy"],
          "averageScore": 85,
          "popularity": 900000
        },
        {
          "id": 1535,
          "title": { "romaji": "Death Note", "english": null, "native": "デスノート" },
          "coverImage": { "large": null, "medium": "https://s4.anilist.co/file/anilistcdn/media/anime/cover/small/bx1535.jpg" },
          "startDate": { "year": 2006, "month": 10, "day": 4 },
          "status": "FINISHED",
          "averageScore": 100
        },
        {
          "id": 170942,
          "title": { "romaji": "Unannounced Sequel", "english": null, "native": null },
          "coverImage": null,
          "startDate": { "year": null, "month": null, "day": null },
          "status": "NOT_YET_RELEASED",
          "averageScore": null
        }
      ]
    }
  }
}"#;

pub const ANILIST_DETAIL: &str = r#"{
  "data": {
    "Media": {
      "id": 16498,
      "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan", "native": "進撃の巨人" },
      "coverImage": { "extraLarge": "https://s4.anilist.co/xl.jpg", "large": "https://s4.anilist.co/l.jpg", "medium": null },
      "bannerImage": null,
      "startDate": { "year": 2013, "month": 4, "day": 7 },
      "description": "Several hundred years ago...<br>\n<i>(Source: Kodansha)</i>",
      "status": "FINISHED",
      "episodes": 25,
      "duration": 24,
      "genres": ["Action", "Drama"],
      "averageScore": 85,
      "popularity": 900000,
      "studios": { "nodes": [ { "id": 858, "name": "Wit Studio" } ] }
    }
  }
}"#;

pub const TMDB_MOVIE_SEARCH: &str = r#"{
  "page": 1,
  "results": [
    {
      "adult": false,
      "id": 27205,
      "title": "Inception",
      "original_title": "Inception",
      "overview": "Cobb, a skilled thief...",
      "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
      "backdrop_path": "/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg",
      "release_date": "2010-07-15",
      "vote_average": 8.4,
      "vote_count": 35000,
      "popularity": 90.5,
      "genre_ids": [28, 878, 12]
    },
    {
      "id": 64956,
      "title": "Inception: The Cobol Job",
      "poster_path": null,
      "release_date": "",
      "vote_average": 7.2
    }
  ],
  "total_pages": 3,
  "total_results": 52
}"#;

pub const TMDB_TV_SEARCH: &str = r#"{
  "page": 1,
  "results": [
    {
      "id": 1396,
      "name": "Breaking Bad",
      "original_name": "Breaking Bad",
      "poster_path": "/ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
      "first_air_date": "2008-01-20",
      "vote_average": 8.9,
      "origin_country": ["US"]
    }
  ],
  "total_pages": 1,
  "total_results": 1
}"#;

pub const TMDB_MOVIE_DETAIL: &str = r#"{
  "id": 27205,
  "title": "Inception",
  "original_title": "Inception",
  "overview": "Cobb, a skilled thief who commits corporate espionage...",
  "tagline": "Your mind is the scene of the crime.",
  "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
  "release_date": "2010-07-15",
  "runtime": 148,
  "status": "Released",
  "vote_average": 8.4,
  "genres": [ { "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" } ]
}"#;

pub const TMDB_SEASON: &str = r#"{
  "name": "Season 1",
  "overview": "High school chemistry teacher Walter White...",
  "air_date": "2008-01-20",
  "season_number": 1,
  "episodes": [
    { "episode_number": 1, "name": "Pilot", "air_date": "2008-01-20", "runtime": 58, "vote_average": 8.2 },
    { "episode_number": 2, "name": "Cat's in the Bag...", "air_date": "2008-01-27", "runtime": 48, "vote_average": 8.0 }
  ]
}"#;

pub const GOOGLE_BOOKS_SEARCH: &str = r#"{
  "kind": "books#volumes",
  "totalItems": 41,
  "items": [
    {
      "kind": "books#volume",
      "id": "zyTCAlFPjgYC",
      "volumeInfo": {
        "title": "The Google Story",
        "authors": ["David A. Vise", "Mark Malseed"],
        "publisher": "Random House Digital, Inc.",
        "publishedDate": "2005-11-15",
        "pageCount": 207,
        "categories": ["Browsers (Computer programs)"],
        "averageRating": 3.5,
        "imageLinks": {
          "smallThumbnail": "http://books.google.com/books/content?id=zyTCAlFPjgYC&zoom=5",
          "thumbnail": "http://books.google.com/books/content?id=zyTCAlFPjgYC&zoom=1"
        },
        "language": "en"
      }
    },
    {
      "kind": "books#volume",
      "id": "anonymous01",
      "volumeInfo": {
        "title": "Untraceable Pamphlet"
      }
    }
  ]
}"#;

pub const GOOGLE_BOOKS_EMPTY: &str = r#"{ "kind": "books#volumes", "totalItems": 0 }"#;

pub const GOOGLE_BOOKS_VOLUME: &str = r#"{
  "id": "zyTCAlFPjgYC",
  "volumeInfo": {
    "title": "The Google Story",
    "authors": ["David A. Vise", "Mark Malseed"],
    "publisher": "Random House Digital, Inc.",
    "publishedDate": "2005-11-15",
    "description": "<p>Here is the story behind one of the most remarkable Internet successes.</p>",
    "pageCount": 207,
    "categories": ["Browsers (Computer programs)"],
    "averageRating": 3.5,
    "imageLinks": {
      "thumbnail": "http://books.google.com/thumb",
      "large": "http://books.google.com/large"
    },
    "language": "en"
  }
}"#;
