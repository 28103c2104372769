//! Denomination classification.
//!
//! OpenStreetMap `denomination` tags are free text (`greek_orthodox`,
//! `roman_catholic`, `armenian_apostolic`, ...). They are folded into a fixed
//! set of five labels by case-insensitive keyword matching.

use std::fmt;

use strum_macros::EnumIter;

/// Coarse Christian-tradition label of a church.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Denomination {
    Orthodox,
    Catholic,
    ArmenianOrthodox,
    Protestant,
    General,
}

/// Keywords classified as Protestant besides `protestant` itself.
const PROTESTANT_KEYWORDS: &[&str] = &[
    "protestant",
    "anglican",
    "lutheran",
    "evangelical",
    "baptist",
    "methodist",
    "presbyterian",
    "reformed",
];

impl Denomination {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Denomination::Orthodox => "Orthodox",
            Denomination::Catholic => "Catholic",
            Denomination::ArmenianOrthodox => "Armenian Orthodox",
            Denomination::Protestant => "Protestant",
            Denomination::General => "Christian",
        }
    }

    /// Marker colour (CSS colour name).
    pub fn color(&self) -> &'static str {
        match self {
            Denomination::Orthodox => "red",
            Denomination::Catholic => "blue",
            Denomination::ArmenianOrthodox => "purple",
            Denomination::Protestant => "green",
            Denomination::General => "orange",
        }
    }

    /// Legend colour of the index page.
    pub fn hex(&self) -> &'static str {
        match self {
            Denomination::Orthodox => "#ff0000",
            Denomination::Catholic => "#0000ff",
            Denomination::ArmenianOrthodox => "#800080",
            Denomination::Protestant => "#008000",
            Denomination::General => "#ff8c00",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a raw denomination tag.
///
/// Armenian is checked before Orthodox so that "Armenian Orthodox" and
/// `armenian_apostolic` land in their own bucket; `armenian_catholic` is
/// Catholic. Anything unrecognised, including the `Christian` default, is
/// [`Denomination::General`].
pub fn classify(tag: &str) -> Denomination {
    let tag = tag.to_lowercase();
    if tag.contains("armenian") && !tag.contains("catholic") {
        Denomination::ArmenianOrthodox
    } else if tag.contains("orthodox") {
        Denomination::Orthodox
    } else if tag.contains("catholic") {
        Denomination::Catholic
    } else if PROTESTANT_KEYWORDS.iter().any(|k| tag.contains(k)) {
        Denomination::Protestant
    } else {
        Denomination::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_classify_exact_labels() {
        assert_eq!(classify("Orthodox"), Denomination::Orthodox);
        assert_eq!(classify("Catholic"), Denomination::Catholic);
        assert_eq!(classify("Armenian Orthodox"), Denomination::ArmenianOrthodox);
        assert_eq!(classify("Protestant"), Denomination::Protestant);
        assert_eq!(classify("Christian"), Denomination::General);
    }

    #[test]
    fn test_classify_osm_tag_values() {
        assert_eq!(classify("greek_orthodox"), Denomination::Orthodox);
        assert_eq!(classify("bulgarian_orthodox"), Denomination::Orthodox);
        assert_eq!(classify("roman_catholic"), Denomination::Catholic);
        assert_eq!(classify("armenian_apostolic"), Denomination::ArmenianOrthodox);
        assert_eq!(classify("armenian_catholic"), Denomination::Catholic);
        assert_eq!(classify("anglican"), Denomination::Protestant);
        assert_eq!(classify("lutheran"), Denomination::Protestant);
        assert_eq!(classify("syriac_orthodox"), Denomination::Orthodox);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Orthodox (Historic)"), Denomination::Orthodox);
        assert_eq!(classify("ROMAN_CATHOLIC"), Denomination::Catholic);
    }

    #[test]
    fn test_classify_unknown_is_general() {
        assert_eq!(classify(""), Denomination::General);
        assert_eq!(classify("nondenominational"), Denomination::General);
        assert_eq!(classify("assyrian"), Denomination::General);
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: std::collections::HashSet<_> =
            Denomination::iter().map(|d| d.color()).collect();
        assert_eq!(colors.len(), 5);
        let hexes: std::collections::HashSet<_> = Denomination::iter().map(|d| d.hex()).collect();
        assert_eq!(hexes.len(), 5);
    }
}
