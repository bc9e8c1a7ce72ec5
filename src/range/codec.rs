//! Range facet codec
//!
//! Parses the price buckets offered by the backend into a global domain,
//! decodes the active `priceRange` filter and encodes slider changes as query
//! patches.
//!
//! # Grammar
//!
//! ```text
//! slug   = "de-" int "-a-" int        ; "de" = from, "a" = to
//! active = int " TO " int
//! ```
//!
//! # Examples
//! ```
//! # use facetnav::range::{RangeFacetOption, parse_domain, parse_active};
//! let options = vec![
//!     RangeFacetOption::new("de-100-a-200"),
//!     RangeFacetOption::new("de-50-a-150"),
//! ];
//! let domain = parse_domain(&options).unwrap();
//! assert_eq!((domain.min, domain.max), (50, 200));
//!
//! let active = parse_active(Some("120 TO 180"), domain);
//! assert_eq!((active.low, active.high), (120, 180));
//! ```

use super::error::RangeParseError;
use crate::query::{QueryKey, QueryPatch};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::trace;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^de-(\d+)-a-(\d+)$").expect("slug pattern is valid"));

static ACTIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+) TO (-?\d+)$").expect("range pattern is valid"));

/// Bucket offered by the backend for a range facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFacetOption {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub selected: bool,
}

impl RangeFacetOption {
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            quantity: None,
            selected: false,
        }
    }

    /// Bounds encoded in the slug
    ///
    /// # Errors
    ///
    /// Returns `RangeParseError::InvalidSlug` if the slug does not match.
    pub fn bounds(&self) -> Result<(i64, i64), RangeParseError> {
        parse_slug(&self.slug)
    }
}

/// Parse `de-{min}-a-{max}`
///
/// # Errors
///
/// Returns `RangeParseError::InvalidSlug` if the slug does not match or a
/// number does not fit in an `i64`.
pub fn parse_slug(slug: &str) -> Result<(i64, i64), RangeParseError> {
    parse_pair(&SLUG_PATTERN, slug).ok_or_else(|| RangeParseError::InvalidSlug(slug.to_string()))
}

/// Emit `de-{min}-a-{max}`
#[must_use]
pub fn encode_slug(min: i64, max: i64) -> String {
    format!("de-{min}-a-{max}")
}

fn parse_pair(pattern: &Regex, input: &str) -> Option<(i64, i64)> {
    let captures = pattern.captures(input)?;
    let first = captures.get(1)?.as_str().parse().ok()?;
    let second = captures.get(2)?.as_str().parse().ok()?;
    Some((first, second))
}

/// Overall bounds of a range facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDomain {
    pub min: i64,
    pub max: i64,
}

/// Fold every well-formed option into a single domain
///
/// Options with a malformed slug are skipped. Returns `None` when no option
/// is well-formed, in which case the facet must not be rendered.
#[must_use]
pub fn parse_domain(options: &[RangeFacetOption]) -> Option<RangeDomain> {
    options
        .iter()
        .filter_map(|option| match option.bounds() {
            Ok(bounds) => Some(bounds),
            Err(e) => {
                trace!(error = %e, "skipping range option");
                None
            }
        })
        .fold(None, |domain: Option<RangeDomain>, (min, max)| {
            Some(match domain {
                None => RangeDomain { min, max },
                Some(domain) => RangeDomain {
                    min: domain.min.min(min),
                    max: domain.max.max(max),
                },
            })
        })
}

/// Currently applied range value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRange {
    pub low: i64,
    pub high: i64,
}

impl ActiveRange {
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub const fn as_array(&self) -> [i64; 2] {
        [self.low, self.high]
    }
}

impl From<RangeDomain> for ActiveRange {
    fn from(domain: RangeDomain) -> Self {
        Self::new(domain.min, domain.max)
    }
}

impl FromStr for ActiveRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(&ACTIVE_PATTERN, s)
            .map(|(low, high)| Self::new(low, high))
            .ok_or_else(|| RangeParseError::InvalidValue(s.to_string()))
    }
}

impl fmt::Display for ActiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} TO {}", self.low, self.high)
    }
}

/// Decode the active filter, defaulting to the whole domain
///
/// A well-formed value is returned verbatim, even outside the domain, so a
/// slider can show a filter wider than the currently offered buckets.
#[must_use]
pub fn parse_active(raw: Option<&str>, domain: RangeDomain) -> ActiveRange {
    raw.and_then(|raw| raw.parse::<ActiveRange>().ok())
        .unwrap_or_else(|| domain.into())
}

/// Query patch committing `[low, high]`
///
/// Always resets pagination since the result set changes.
#[must_use]
pub fn encode_change(low: i64, high: i64) -> QueryPatch {
    QueryPatch::new()
        .set(QueryKey::PriceRange, ActiveRange::new(low, high).to_string())
        .remove(QueryKey::Page)
}

/// Display state of a range slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSlider {
    pub domain: RangeDomain,
    pub value: ActiveRange,
}

impl RangeSlider {
    /// Slider for `options` with the current `priceRange` value
    ///
    /// `None` when the facet is not applicable.
    #[must_use]
    pub fn from_facets(options: &[RangeFacetOption], price_range: Option<&str>) -> Option<Self> {
        let domain = parse_domain(options)?;
        Some(Self {
            domain,
            value: parse_active(price_range, domain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(slugs: &[&str]) -> Vec<RangeFacetOption> {
        slugs.iter().map(|s| RangeFacetOption::new(*s)).collect()
    }

    #[test]
    fn test_parse_slug() {
        assert_eq!(parse_slug("de-100-a-200"), Ok((100, 200)));
        assert_eq!(parse_slug("de-0-a-0"), Ok((0, 0)));
    }

    #[test]
    fn test_parse_slug_rejects_malformed() {
        for slug in ["", "100-200", "from-1-to-2", "de-1-a-", "de-x-a-2", "de-1-a-2-b", "de-1.5-a-2"] {
            assert_eq!(
                parse_slug(slug),
                Err(RangeParseError::InvalidSlug(slug.to_string())),
                "{slug}"
            );
        }
    }

    #[test]
    fn test_parse_slug_overflow_is_invalid() {
        assert!(parse_slug("de-1-a-99999999999999999999999").is_err());
    }

    #[test]
    fn test_encode_slug() {
        assert_eq!(encode_slug(10, 20), "de-10-a-20");
        assert_eq!(parse_slug(&encode_slug(10, 20)), Ok((10, 20)));
    }

    #[test]
    fn test_domain_folds_overlapping_buckets() {
        let domain = parse_domain(&options(&["de-100-a-200", "de-50-a-150"])).unwrap();
        assert_eq!(domain, RangeDomain { min: 50, max: 200 });
    }

    #[test]
    fn test_domain_skips_malformed_options() {
        let domain = parse_domain(&options(&["garbage", "de-10-a-20", "de-5-a-8"])).unwrap();
        assert_eq!(domain, RangeDomain { min: 5, max: 20 });
    }

    #[test]
    fn test_domain_none_when_nothing_matches() {
        assert_eq!(parse_domain(&options(&["a", "b"])), None);
        assert_eq!(parse_domain(&[]), None);
    }

    #[test]
    fn test_parse_active_verbatim_without_clamping() {
        let domain = RangeDomain { min: 150, max: 160 };
        assert_eq!(parse_active(Some("120 TO 180"), domain), ActiveRange::new(120, 180));
    }

    #[test]
    fn test_parse_active_defaults_to_domain() {
        let domain = RangeDomain { min: 50, max: 200 };
        assert_eq!(parse_active(None, domain).as_array(), [50, 200]);
        assert_eq!(parse_active(Some("cheap"), domain).as_array(), [50, 200]);
        assert_eq!(parse_active(Some("10 to 20"), domain).as_array(), [50, 200]);
    }

    #[test]
    fn test_active_range_display_round_trip() {
        let range: ActiveRange = "-5 TO 30".parse().unwrap();
        assert_eq!(range, ActiveRange::new(-5, 30));
        assert_eq!(range.to_string(), "-5 TO 30");
    }

    #[test]
    fn test_encode_change_resets_page() {
        let patch = encode_change(10, 90);
        assert_eq!(patch.get(QueryKey::PriceRange), Some(Some("10 TO 90")));
        assert!(patch.removes(QueryKey::Page));
        assert_eq!(patch.len(), 2);
    }

    #[test]
    fn test_slider_from_facets() {
        let slider =
            RangeSlider::from_facets(&options(&["de-0-a-100", "de-100-a-500"]), Some("20 TO 300"))
                .unwrap();
        assert_eq!(slider.domain, RangeDomain { min: 0, max: 500 });
        assert_eq!(slider.value, ActiveRange::new(20, 300));

        assert!(RangeSlider::from_facets(&options(&["x"]), None).is_none());
    }
}
