//! Coverage analysis of a set of churches.
//!
//! Counts churches per named district and per denomination and lists the
//! notable ones, printed with `--with-analysis`.

use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;

use crate::classify::Denomination;
use crate::models::{Church, SourceType};
use crate::overpass::{BoundingBox, ISTANBUL_BBOX, PRINCES_ISLANDS_BBOX};

/// Districts reported by the analysis, in report order.
pub const AREAS: [(&str, BoundingBox); 9] = [
    ("Historical Peninsula", BoundingBox::new(40.99, 28.94, 41.02, 28.98)),
    ("Beyoğlu/Galata", BoundingBox::new(41.02, 28.97, 41.04, 28.99)),
    ("Fatih District", BoundingBox::new(41.00, 28.92, 41.02, 28.96)),
    ("Üsküdar (Asian)", BoundingBox::new(41.01, 29.01, 41.03, 29.04)),
    ("Kadıköy (Asian)", BoundingBox::new(40.98, 29.02, 41.00, 29.05)),
    ("Northern European", BoundingBox::new(41.08, 28.95, 41.15, 29.10)),
    ("Western Suburbs", BoundingBox::new(40.95, 28.60, 41.05, 28.80)),
    ("Eastern Asian", BoundingBox::new(40.85, 29.15, 41.00, 29.40)),
    ("Princes Islands", PRINCES_ISLANDS_BBOX),
];

const NOTABLE_KEYWORDS: [&str; 6] = [
    "hagia",
    "sophia",
    "cathedral",
    "patriarchate",
    "saint",
    "holy",
];

/// Sample names are listed for areas with at most this many churches.
const SMALL_AREA_MAX: usize = 5;
const SAMPLE_NAMES: usize = 3;
const NOTABLE_SHOWN: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AreaCount {
    pub name: &'static str,
    pub count: usize,
    /// First names, only for areas with 1 to 5 churches
    pub sample_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total: usize,
    pub areas: Vec<AreaCount>,
    /// Sorted by count, descending
    pub denominations: Vec<(Denomination, usize)>,
    /// Tag that made each record a church, every source type listed
    pub sources: Vec<(SourceType, usize)>,
    /// Sorted alphabetically, all of them
    pub notable: Vec<String>,
}

impl CoverageReport {
    pub fn from_churches(churches: &[Church]) -> Self {
        let areas = AREAS
            .iter()
            .map(|(name, bbox)| {
                let inside: Vec<&Church> = churches
                    .iter()
                    .filter(|c| bbox.contains(c.coordinates))
                    .collect();
                let sample_names = if inside.len() <= SMALL_AREA_MAX {
                    inside
                        .iter()
                        .take(SAMPLE_NAMES)
                        .map(|c| c.name.clone())
                        .collect()
                } else {
                    Vec::new()
                };
                AreaCount {
                    name: *name,
                    count: inside.len(),
                    sample_names,
                }
            })
            .collect();

        let mut by_denomination: HashMap<Denomination, usize> = HashMap::new();
        for church in churches {
            *by_denomination.entry(church.denomination).or_default() += 1;
        }
        let mut denominations: Vec<(Denomination, usize)> = by_denomination.into_iter().collect();
        denominations.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let sources = SourceType::iter()
            .map(|source| {
                let count = churches
                    .iter()
                    .filter(|c| c.source_type() == source)
                    .count();
                (source, count)
            })
            .collect();

        let mut notable: Vec<String> = churches
            .iter()
            .filter(|c| {
                let name = c.name.to_lowercase();
                NOTABLE_KEYWORDS.iter().any(|k| name.contains(k))
            })
            .map(|c| c.name.clone())
            .collect();
        notable.sort();

        Self {
            total: churches.len(),
            areas,
            denominations,
            sources,
            notable,
        }
    }

    pub fn area(&self, name: &str) -> Option<&AreaCount> {
        self.areas.iter().find(|a| a.name == name)
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🗺️ Istanbul Churches Coverage Analysis")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total churches found: {}", self.total)?;
        writeln!(f)?;

        writeln!(f, "📍 Geographic Distribution:")?;
        for area in &self.areas {
            writeln!(f, "  {:20}: {:3} churches", area.name, area.count)?;
            for name in &area.sample_names {
                writeln!(f, "    - {}", name)?;
            }
            if !area.sample_names.is_empty() && area.count > area.sample_names.len() {
                writeln!(f, "    ... and {} more", area.count - area.sample_names.len())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "⛪ Denomination Distribution:")?;
        for (denomination, count) in &self.denominations {
            let label = match denomination {
                Denomination::General => "General Christian",
                other => other.label(),
            };
            writeln!(f, "  {:20}: {:3} churches", label, count)?;
        }

        writeln!(f)?;
        writeln!(f, "🏷️ Source Tags:")?;
        for (source, count) in &self.sources {
            writeln!(f, "  {:20}: {:3} churches", source.label(), count)?;
        }

        writeln!(f)?;
        writeln!(f, "📊 Coverage Statistics:")?;
        writeln!(
            f,
            "  Bounding Box: {}°N to {}°N, {}°E to {}°E",
            ISTANBUL_BBOX.south, ISTANBUL_BBOX.north, ISTANBUL_BBOX.west, ISTANBUL_BBOX.east
        )?;
        writeln!(f, "  Includes Islands: Yes (Princes' Islands)")?;
        writeln!(f, "  Both Continents: Yes (European + Asian sides)")?;

        writeln!(f)?;
        writeln!(f, "🏛️ Notable Churches Found:")?;
        for name in self.notable.iter().take(NOTABLE_SHOWN) {
            writeln!(f, "  - {}", name)?;
        }
        if self.notable.len() > NOTABLE_SHOWN {
            writeln!(
                f,
                "  ... and {} more notable churches",
                self.notable.len() - NOTABLE_SHOWN
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use crate::overpass::fallback_churches;

    #[test]
    fn test_report_on_fallback_dataset() {
        let report = CoverageReport::from_churches(&fallback_churches());
        assert_eq!(report.total, 20);
        assert_eq!(report.areas.len(), AREAS.len());

        let peninsula = report.area("Historical Peninsula").expect("peninsula");
        assert_eq!(peninsula.count, 2);
        assert_eq!(
            peninsula.sample_names,
            vec!["Armenian Patriarchate Church", "Surp Yerrortutyun Armenian Church"]
        );

        let galata = report.area("Beyoğlu/Galata").expect("galata");
        assert_eq!(galata.count, 9);
        assert!(galata.sample_names.is_empty());

        let uskudar = report.area("Üsküdar (Asian)").expect("uskudar");
        assert_eq!(uskudar.count, 3);
        assert_eq!(uskudar.sample_names.len(), 3);

        let islands = report.area("Princes Islands").expect("islands");
        assert_eq!(islands.count, 0);
        assert!(islands.sample_names.is_empty());

        assert_eq!(report.denominations[0], (Denomination::Orthodox, 8));
        assert_eq!(report.denominations[1], (Denomination::Catholic, 6));
        let total: usize = report.denominations.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_source_breakdown() {
        let report = CoverageReport::from_churches(&fallback_churches());
        assert_eq!(
            report.sources,
            vec![
                (SourceType::Historic, 2),
                (SourceType::Building, 0),
                (SourceType::Amenity, 0),
                (SourceType::Unspecified, 18),
            ]
        );

        let mut tagged = Church::new(
            "Aya Triada",
            "greek_orthodox",
            Coordinates::new(41.036, 28.986),
        );
        tagged.amenity = Some("place_of_worship".into());
        tagged.building = Some("church".into());
        let report = CoverageReport::from_churches(&[tagged]);
        assert_eq!(report.sources[1], (SourceType::Building, 1));
        assert_eq!(report.sources[2], (SourceType::Amenity, 0));
    }

    #[test]
    fn test_notable_churches_sorted() {
        let report = CoverageReport::from_churches(&fallback_churches());
        assert_eq!(
            report.notable,
            vec![
                "Armenian Patriarchate Church",
                "Hagia Sophia",
                "St. Esprit Cathedral",
                "St. George Cathedral",
            ]
        );
    }

    #[test]
    fn test_large_area_has_no_sample_names() {
        let churches: Vec<Church> = (0..6)
            .map(|i| {
                Church::new(
                    format!("Church {}", i),
                    "Christian",
                    Coordinates::new(41.03, 28.975 + i as f64 * 0.001),
                )
            })
            .collect();
        let report = CoverageReport::from_churches(&churches);
        let galata = report.area("Beyoğlu/Galata").expect("galata");
        assert_eq!(galata.count, 6);
        assert!(galata.sample_names.is_empty());
    }

    #[test]
    fn test_display_contains_sections() {
        let text = CoverageReport::from_churches(&fallback_churches()).to_string();
        assert!(text.contains("Total churches found: 20"));
        assert!(text.contains("📍 Geographic Distribution:"));
        assert!(text.contains("⛪ Denomination Distribution:"));
        assert!(text.contains("Armenian Orthodox"));
        assert!(text.contains("- Hagia Sophia"));
        assert!(text.contains("🏷️ Source Tags:"));
        assert!(text.contains("historic=*"));
        assert!(text.contains("40.8°N to 41.3°N, 28.5°E to 29.5°E"));
    }
}
