use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Appended verbatim after the encoded description.
pub const STYLE_SUFFIX: &str = " children book illustration, cute style, soft colors, masterpiece, 4k";

/// Standard path quoting: unreserved characters and `/` pass through.
const PATH_QUOTE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~').remove(b'/');

/// Builds illustration URLs against the hosted text-to-image endpoint. The
/// service renders on GET, so nothing is fetched here.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// `None` when there is nothing to draw.
    pub fn build(&self, description: &str) -> Option<String> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        let encoded = utf8_percent_encode(description, PATH_QUOTE);
        Some(format!("{}/prompt/{}{}", self.base_url, encoded, STYLE_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("https://image.pollinations.ai")
    }

    #[test]
    fn encodes_description_and_appends_style() {
        let url = builder().build("A cat in space, cartoon").unwrap();
        assert_eq!(
            url,
            "https://image.pollinations.ai/prompt/A%20cat%20in%20space%2C%20cartoon children book illustration, cute style, soft colors, masterpiece, 4k"
        );
    }

    #[test]
    fn empty_description_builds_nothing() {
        assert_eq!(builder().build(""), None);
        assert_eq!(builder().build("  \n"), None);
    }

    #[test]
    fn utf8_is_encoded_bytewise_and_slash_is_kept() {
        let url = builder().build("кот/dog~_.-").unwrap();
        assert!(url.starts_with("https://image.pollinations.ai/prompt/%D0%BA%D0%BE%D1%82/dog~_.-"));
    }

    #[test]
    fn repeated_builds_do_not_double_encode() {
        let b = builder();
        let first = b.build("50% off & more?").unwrap();
        let second = b.build("50% off & more?").unwrap();
        assert_eq!(first, second);
        assert!(first.contains("/prompt/50%25%20off%20%26%20more%3F children book"));
    }

    #[test]
    fn surrounding_whitespace_is_not_encoded() {
        let b = builder();
        assert_eq!(b.build("  A fox\n"), b.build("A fox"));
        assert!(b.build(" A fox ").unwrap().starts_with("https://image.pollinations.ai/prompt/A%20fox children book"));
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let url = ImageUrlBuilder::new("http://localhost:9000/").build("fox").unwrap();
        assert!(url.starts_with("http://localhost:9000/prompt/fox "));
    }
}
