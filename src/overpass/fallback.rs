//! Built-in dataset of well-known Istanbul churches.
//!
//! Used when the Overpass query fails so a run always produces a map.

use crate::models::{Church, Coordinates};

/// Number of records returned by [`fallback_churches`].
pub const FALLBACK_CHURCH_COUNT: usize = 20;

struct Entry {
    name: &'static str,
    name_en: &'static str,
    denomination: &'static str,
    historic: bool,
    lat: f64,
    lon: f64,
    description: &'static str,
}

const ENTRIES: [Entry; FALLBACK_CHURCH_COUNT] = [
    // Historic and major churches
    Entry {
        name: "Hagia Sophia",
        name_en: "Hagia Sophia",
        denomination: "Orthodox (Historic)",
        historic: true,
        lat: 41.0086,
        lon: 28.9802,
        description: "Historic Byzantine cathedral, later Ottoman mosque, now museum/mosque",
    },
    Entry {
        name: "Chora Church (Kariye Museum)",
        name_en: "Chora Church",
        denomination: "Orthodox",
        historic: true,
        lat: 41.0307,
        lon: 28.9388,
        description: "Byzantine church famous for its mosaics and frescoes",
    },
    Entry {
        name: "St. George Cathedral",
        name_en: "St. George Cathedral",
        denomination: "Orthodox",
        historic: false,
        lat: 41.0287,
        lon: 28.9496,
        description: "Orthodox Patriarchate of Constantinople",
    },
    Entry {
        name: "St. Anthony of Padua",
        name_en: "St. Anthony of Padua",
        denomination: "Catholic",
        historic: false,
        lat: 41.0362,
        lon: 28.9744,
        description: "Largest Catholic church in Istanbul",
    },
    Entry {
        name: "Armenian Patriarchate Church",
        name_en: "Armenian Patriarchate Church",
        denomination: "Armenian Orthodox",
        historic: false,
        lat: 41.0176,
        lon: 28.9668,
        description: "Armenian Apostolic Church of Constantinople",
    },
    Entry {
        name: "Bulgarian St. Stephen Church",
        name_en: "Bulgarian St. Stephen Church",
        denomination: "Orthodox",
        historic: false,
        lat: 41.0276,
        lon: 28.9408,
        description: "Historic iron church built by Bulgarian community",
    },
    Entry {
        name: "Aya Triada Greek Orthodox Church",
        name_en: "Holy Trinity Church",
        denomination: "Orthodox",
        historic: false,
        lat: 41.0380,
        lon: 28.9760,
        description: "Greek Orthodox church in Beyoğlu",
    },
    Entry {
        name: "Surp Krikor Lusarovich Armenian Church",
        name_en: "St. Gregory the Illuminator Church",
        denomination: "Armenian Orthodox",
        historic: false,
        lat: 41.0260,
        lon: 28.9740,
        description: "Armenian church in Galata",
    },
    // European side
    Entry {
        name: "St. Esprit Cathedral",
        name_en: "St. Esprit Cathedral",
        denomination: "Catholic",
        historic: false,
        lat: 41.0340,
        lon: 28.9756,
        description: "French Catholic cathedral in Harbiye",
    },
    Entry {
        name: "St. Louis of the French",
        name_en: "St. Louis of the French",
        denomination: "Catholic",
        historic: false,
        lat: 41.0350,
        lon: 28.9750,
        description: "French Catholic church in Beyoğlu",
    },
    Entry {
        name: "St. Peter and Paul Church",
        name_en: "St. Peter and Paul Church",
        denomination: "Catholic",
        historic: false,
        lat: 41.0258,
        lon: 28.9730,
        description: "Italian Catholic church in Galata",
    },
    Entry {
        name: "Dutch Chapel",
        name_en: "Dutch Chapel",
        denomination: "Protestant",
        historic: false,
        lat: 41.0255,
        lon: 28.9735,
        description: "Historic Protestant chapel in Galata",
    },
    Entry {
        name: "Christ Church",
        name_en: "Christ Church",
        denomination: "Anglican",
        historic: false,
        lat: 41.0340,
        lon: 28.9745,
        description: "Anglican church serving English-speaking community",
    },
    Entry {
        name: "St. Mary Draperis",
        name_en: "St. Mary Draperis",
        denomination: "Catholic",
        historic: false,
        lat: 41.0345,
        lon: 28.9742,
        description: "Franciscan Catholic church in Beyoğlu",
    },
    Entry {
        name: "Surp Yerrortutyun Armenian Church",
        name_en: "Holy Trinity Armenian Church",
        denomination: "Armenian Orthodox",
        historic: false,
        lat: 41.0180,
        lon: 28.9680,
        description: "Armenian Apostolic church in Kumkapı",
    },
    // Asian side
    Entry {
        name: "Surp Takavor Armenian Church",
        name_en: "Holy Savior Armenian Church",
        denomination: "Armenian Orthodox",
        historic: false,
        lat: 41.0170,
        lon: 29.0250,
        description: "Armenian church in Üsküdar",
    },
    Entry {
        name: "St. Barbara Church",
        name_en: "St. Barbara Church",
        denomination: "Orthodox",
        historic: false,
        lat: 41.0160,
        lon: 29.0240,
        description: "Greek Orthodox church in Üsküdar",
    },
    Entry {
        name: "Sacred Heart Church",
        name_en: "Sacred Heart Church",
        denomination: "Catholic",
        historic: false,
        lat: 41.0180,
        lon: 29.0300,
        description: "Catholic church serving Asian side community",
    },
    // Fener
    Entry {
        name: "St. Nicholas Church",
        name_en: "St. Nicholas Church",
        denomination: "Orthodox",
        historic: false,
        lat: 41.0290,
        lon: 28.9450,
        description: "Orthodox church in Fener district",
    },
    Entry {
        name: "Panagia Isodion Church",
        name_en: "Panagia Isodion Church",
        denomination: "Orthodox",
        historic: false,
        lat: 41.0300,
        lon: 28.9460,
        description: "Greek Orthodox church in Fener",
    },
];

/// Returns the fallback dataset.
pub fn fallback_churches() -> Vec<Church> {
    ENTRIES
        .iter()
        .map(|entry| {
            let mut church = Church::new(
                entry.name,
                entry.denomination,
                Coordinates::new(entry.lat, entry.lon),
            );
            church.name_en = Some(entry.name_en.to_string());
            church.historic = entry.historic.then(|| "church".to_string());
            church.description = Some(entry.description.to_string());
            church
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Denomination;
    use crate::overpass::ISTANBUL_BBOX;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_has_fixed_length() {
        assert_eq!(fallback_churches().len(), FALLBACK_CHURCH_COUNT);
    }

    #[test]
    fn test_fallback_locations_are_unique_and_inside_istanbul() {
        let churches = fallback_churches();
        let keys: HashSet<_> = churches.iter().map(|c| c.coordinates.dedup_key(6)).collect();
        assert_eq!(keys.len(), churches.len());
        assert!(churches.iter().all(|c| ISTANBUL_BBOX.contains(c.coordinates)));
    }

    #[test]
    fn test_fallback_denominations() {
        let churches = fallback_churches();
        let count = |d: Denomination| churches.iter().filter(|c| c.denomination == d).count();
        assert_eq!(count(Denomination::Orthodox), 8);
        assert_eq!(count(Denomination::Catholic), 6);
        assert_eq!(count(Denomination::ArmenianOrthodox), 4);
        assert_eq!(count(Denomination::Protestant), 2);
        assert_eq!(count(Denomination::General), 0);
        // Christ Church keeps its raw tag
        assert!(churches
            .iter()
            .any(|c| c.name == "Christ Church" && c.denomination_tag == "Anglican"));
    }
}
