use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Watch, short, embed, /v/ and arbitrary-path forms. The id is the 11 characters
    // after the marker, stopping short of quote, ampersand, query, slash and whitespace.
    static ref YOUTUBE_ID_PATTERN: Regex = Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("video id pattern is valid");
}

const DOMAIN_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

pub fn has_youtube_domain(input: &str) -> bool {
    DOMAIN_MARKERS.iter().any(|marker| input.contains(marker))
}

/// Returns the video id for a YouTube URL, or the input itself when it carries no
/// YouTube domain. Input without a domain is not checked for length or charset.
pub fn extract_video_id(input: Option<&str>) -> Option<String> {
    let input = input.filter(|value| !value.is_empty())?;

    if !has_youtube_domain(input) {
        return Some(input.to_string());
    }

    YOUTUBE_ID_PATTERN
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    fn extract(input: &str) -> Option<String> {
        extract_video_id(Some(input))
    }

    #[test]
    fn test_watch_urls() {
        assert_eq!(extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(extract("https://m.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(extract("youtube.com/watch?v=dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(
            extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract("https://www.youtube.com/watch?feature=shared&v=dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_short_urls() {
        assert_eq!(extract("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(extract("https://youtu.be/dQw4w9WgXcQ?si=AbCdEf").as_deref(), Some(ID));
    }

    #[test]
    fn test_embed_and_v_urls() {
        assert_eq!(extract("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(
            extract("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1").as_deref(),
            Some(ID)
        );
        assert_eq!(extract("https://www.youtube.com/v/dQw4w9WgXcQ").as_deref(), Some(ID));
        assert_eq!(extract("https://www.youtube.com/e/dQw4w9WgXcQ").as_deref(), Some(ID));
    }

    #[test]
    fn test_arbitrary_path_form_takes_last_segment() {
        assert_eq!(
            extract("https://www.youtube.com/user/SomeChannel/a/1/dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn test_only_eleven_characters_are_taken() {
        assert_eq!(extract("https://youtu.be/dQw4w9WgXcQEXTRA").as_deref(), Some(ID));
    }

    #[test]
    fn test_youtube_url_without_id_is_none() {
        assert_eq!(extract("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extract("https://www.youtube.com/"), None);
        assert_eq!(extract("https://youtu.be/"), None);
        assert_eq!(extract("https://www.youtube.com/watch?list=PL123"), None);
    }

    #[test]
    fn test_input_without_domain_is_returned_unchanged() {
        assert_eq!(extract(ID).as_deref(), Some(ID));
        assert_eq!(extract("not a video id").as_deref(), Some("not a video id"));
        assert_eq!(
            extract("https://vimeo.com/123456").as_deref(),
            Some("https://vimeo.com/123456")
        );
    }

    #[test]
    fn test_empty_or_missing_input_is_none() {
        assert_eq!(extract_video_id(None), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(embed_url(ID), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }
}
