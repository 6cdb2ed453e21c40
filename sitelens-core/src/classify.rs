//! Pure URL classification: path segments, top-level section, category
//! token, year/month token and a display title, derived from a single
//! URL with no lookups and no failure modes.

use percent_encoding::percent_decode_str;
use url::Url;

/// Sentinel section for URLs whose path is empty (or unparseable).
pub const ROOT_SECTION: &str = "(root)";

/// Title used for the site root page.
pub const HOME_TITLE: &str = "Home";

/// Structural and semantic attributes derived from one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlFacets {
    /// Path split on `/` with empty components removed.
    pub segments: Vec<String>,
    /// First path segment, or [`ROOT_SECTION`] if the path is empty.
    pub section: String,
    /// Segment immediately following a literal `category` segment,
    /// lower-cased.
    pub category: Option<String>,
    /// `YYYY/MM` if a 4-digit then a 2-digit segment lead the path,
    /// either at the very start or right after the section segment.
    pub year_month: Option<String>,
    /// Last path segment, percent-decoded, hyphens replaced with
    /// spaces; [`HOME_TITLE`] for an empty path.
    pub title: String,
}

/// Classify a URL. Never panics: a string that does not parse as a URL
/// degrades to an empty segment list under [`ROOT_SECTION`] with the
/// raw input as title.
pub fn classify(raw: &str) -> UrlFacets {
    let Ok(parsed) = Url::parse(raw) else {
        return UrlFacets {
            segments: Vec::new(),
            section: ROOT_SECTION.to_string(),
            category: None,
            year_month: None,
            title: raw.to_string(),
        };
    };

    let segments: Vec<String> = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    let section = segments
        .first()
        .cloned()
        .unwrap_or_else(|| ROOT_SECTION.to_string());

    let category = segments
        .iter()
        .position(|s| s == "category")
        .and_then(|i| segments.get(i + 1))
        .map(|s| s.to_lowercase());

    let year_month = year_month_at(&segments, 0).or_else(|| year_month_at(&segments, 1));

    let title = segments
        .last()
        .map(|s| decode_title(s))
        .unwrap_or_else(|| HOME_TITLE.to_string());

    UrlFacets {
        segments,
        section,
        category,
        year_month,
        title,
    }
}

/// Host of a URL, if it parses and has one.
pub fn url_host(raw: &str) -> Option<String> {
    Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

fn year_month_at(segments: &[String], start: usize) -> Option<String> {
    match (segments.get(start), segments.get(start + 1)) {
        (Some(year), Some(month)) if is_digits(year, 4) && is_digits(month, 2) => {
            Some(format!("{}/{}", year, month))
        }
        _ => None,
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

fn decode_title(segment: &str) -> String {
    let decoded = percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    decoded.replace('-', " ")
}
