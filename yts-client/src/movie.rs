use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::magnet;

/// The genres YTS knows about, as accepted by the `genre` filter.
pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Film-Noir",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Sport",
    "Thriller",
    "War",
    "Western",
];

/// The uniform wrapper every YTS endpoint responds with.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct Envelope<T> {
    #[serde(default)]
    status: String,
    #[serde(default)]
    status_message: String,
    data: Option<T>,
    #[serde(rename = "@meta", skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
}

impl<T> Envelope<T> {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct Meta {
    server_time: i64,
    server_timezone: String,
    api_version: u32,
    execution_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct MovieListData {
    movie_count: u32,
    limit: u32,
    page_number: u32,
    movies: Vec<Movie>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct MovieDetailsData {
    movie: Movie,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct MovieSuggestionsData {
    movie_count: u32,
    movies: Vec<Movie>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct ParentalGuidesData {
    parental_guide_count: u32,
    parental_guides: Vec<ParentalGuide>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct Movie {
    id: u32,
    url: String,
    imdb_code: String,
    title: String,
    title_english: String,
    title_long: String,
    slug: String,
    year: u32,
    rating: f32,
    runtime: u32,
    genres: Vec<String>,
    summary: String,
    description_full: String,
    synopsis: String,
    yt_trailer_code: String,
    language: String,
    mpa_rating: String,
    background_image: String,
    background_image_original: String,
    small_cover_image: String,
    medium_cover_image: String,
    large_cover_image: String,
    state: String,
    torrents: Vec<Torrent>,
    date_uploaded: String,
    date_uploaded_unix: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    cast: Option<Vec<Cast>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct Torrent {
    url: String,
    hash: String,
    quality: String,
    #[serde(rename = "type")]
    kind: String,
    is_repack: String,
    video_codec: String,
    bit_depth: String,
    audio_channels: String,
    seeds: u32,
    peers: u32,
    size: String,
    size_bytes: u64,
    date_uploaded: String,
    date_uploaded_unix: i64,
}

impl Torrent {
    /// Magnet URI for this release, labelled with the movie title and quality.
    pub fn magnet(&self, movie_title: &str) -> String {
        let display_name = format!("{} [{}]", movie_title, self.quality);
        magnet::magnet_link(&self.hash, &display_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct Cast {
    name: String,
    character_name: String,
    url_small_image: String,
    imdb_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[get = "pub"]
#[serde(default)]
pub struct ParentalGuide {
    #[serde(rename = "type")]
    kind: String,
    parental_guide_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_list_envelope() {
        let body = serde_json::json!({
            "status": "ok",
            "status_message": "Query was successful",
            "data": {
                "movie_count": 41,
                "limit": 20,
                "page_number": 1,
                "movies": [{
                    "id": 3175,
                    "title": "Blade Runner",
                    "year": 1982,
                    "rating": 8.1,
                    "genres": ["Sci-Fi", "Thriller"],
                    "torrents": [{
                        "hash": "CAFEBABE",
                        "quality": "1080p",
                        "type": "bluray",
                        "seeds": 120,
                        "peers": 30,
                        "size": "1.85 GB",
                        "size_bytes": 1986422374u64
                    }],
                    "date_uploaded_unix": 1446321498
                }]
            },
            "@meta": {
                "server_time": 1446321498,
                "server_timezone": "CET",
                "api_version": 2,
                "execution_time": "0.01 ms"
            }
        });

        let envelope: Envelope<MovieListData> = serde_json::from_value(body).unwrap();
        assert!(!envelope.is_error());

        let data = envelope.data().as_ref().unwrap();
        assert_eq!(*data.movie_count(), 41);
        assert_eq!(data.movies().len(), 1);

        let movie = &data.movies()[0];
        assert_eq!(movie.title(), "Blade Runner");
        assert_eq!(*movie.year(), 1982);
        // Fields absent from the payload fall back to defaults.
        assert_eq!(movie.imdb_code(), "");
        assert!(movie.cast().is_none());
        assert_eq!(movie.torrents()[0].kind(), "bluray");
    }

    #[test]
    fn detects_error_envelope() {
        let body = serde_json::json!({
            "status": "error",
            "status_message": "Movie not found"
        });

        let envelope: Envelope<MovieDetailsData> = serde_json::from_value(body).unwrap();
        assert!(envelope.is_error());
        assert_eq!(envelope.status_message(), "Movie not found");
        assert!(envelope.data().is_none());
    }

    #[test]
    fn torrent_magnet_carries_title_and_quality() {
        let body = serde_json::json!({ "hash": "ABCDEF", "quality": "720p" });
        let torrent: Torrent = serde_json::from_value(body).unwrap();

        let magnet = torrent.magnet("Blade Runner");
        assert!(magnet.starts_with("magnet:?xt=urn:btih:ABCDEF&dn=Blade%20Runner%20%5B720p%5D"));
    }
}
