// SPDX-License-Identifier: MPL-2.0
//! Static destination catalog for the selector.
//!
//! Purely presentation data: the workflow only ever sees the country name
//! string that ends up in the transform prompt.

/// A selectable destination country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub flag: &'static str,
}

/// Continents used as tabs in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];

    /// i18n key for the tab label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Continent::Africa => "continent-africa",
            Continent::Asia => "continent-asia",
            Continent::Europe => "continent-europe",
            Continent::NorthAmerica => "continent-north-america",
            Continent::SouthAmerica => "continent-south-america",
            Continent::Oceania => "continent-oceania",
        }
    }

    pub fn countries(&self) -> &'static [Country] {
        match self {
            Continent::Africa => &AFRICA,
            Continent::Asia => &ASIA,
            Continent::Europe => &EUROPE,
            Continent::NorthAmerica => &NORTH_AMERICA,
            Continent::SouthAmerica => &SOUTH_AMERICA,
            Continent::Oceania => &OCEANIA,
        }
    }
}

const fn c(name: &'static str, flag: &'static str) -> Country {
    Country { name, flag }
}

static AFRICA: [Country; 10] = [
    c("Morocco", "🇲🇦"),
    c("Egypt", "🇪🇬"),
    c("Kenya", "🇰🇪"),
    c("Nigeria", "🇳🇬"),
    c("Ethiopia", "🇪🇹"),
    c("South Africa", "🇿🇦"),
    c("Ghana", "🇬🇭"),
    c("Tanzania", "🇹🇿"),
    c("Senegal", "🇸🇳"),
    c("Madagascar", "🇲🇬"),
];

static ASIA: [Country; 12] = [
    c("Japan", "🇯🇵"),
    c("China", "🇨🇳"),
    c("India", "🇮🇳"),
    c("South Korea", "🇰🇷"),
    c("Thailand", "🇹🇭"),
    c("Vietnam", "🇻🇳"),
    c("Indonesia", "🇮🇩"),
    c("Mongolia", "🇲🇳"),
    c("Nepal", "🇳🇵"),
    c("Turkey", "🇹🇷"),
    c("Uzbekistan", "🇺🇿"),
    c("Saudi Arabia", "🇸🇦"),
];

static EUROPE: [Country; 12] = [
    c("France", "🇫🇷"),
    c("Italy", "🇮🇹"),
    c("Spain", "🇪🇸"),
    c("Germany", "🇩🇪"),
    c("Greece", "🇬🇷"),
    c("Scotland", "🏴󠁧󠁢󠁳󠁣󠁴󠁿"),
    c("Norway", "🇳🇴"),
    c("Netherlands", "🇳🇱"),
    c("Ukraine", "🇺🇦"),
    c("Romania", "🇷🇴"),
    c("Portugal", "🇵🇹"),
    c("Austria", "🇦🇹"),
];

static NORTH_AMERICA: [Country; 6] = [
    c("Mexico", "🇲🇽"),
    c("United States", "🇺🇸"),
    c("Canada", "🇨🇦"),
    c("Guatemala", "🇬🇹"),
    c("Cuba", "🇨🇺"),
    c("Panama", "🇵🇦"),
];

static SOUTH_AMERICA: [Country; 7] = [
    c("Peru", "🇵🇪"),
    c("Brazil", "🇧🇷"),
    c("Argentina", "🇦🇷"),
    c("Bolivia", "🇧🇴"),
    c("Colombia", "🇨🇴"),
    c("Chile", "🇨🇱"),
    c("Ecuador", "🇪🇨"),
];

static OCEANIA: [Country; 5] = [
    c("New Zealand", "🇳🇿"),
    c("Australia", "🇦🇺"),
    c("Fiji", "🇫🇯"),
    c("Samoa", "🇼🇸"),
    c("Papua New Guinea", "🇵🇬"),
];

/// The fixed "popular right now" row shown above the tabs.
pub static HOT_DESTINATIONS: [&str; 6] = [
    "Japan",
    "India",
    "Morocco",
    "Peru",
    "Mexico",
    "Scotland",
];

/// Looks a country up by exact name across the whole catalog.
pub fn find(name: &str) -> Option<Country> {
    Continent::ALL
        .iter()
        .flat_map(|continent| continent.countries().iter())
        .copied()
        .find(|country| country.name == name)
}

/// Case-insensitive substring search across all continents.
///
/// An empty query matches nothing; the selector falls back to the active
/// continent tab in that case.
pub fn search(query: &str) -> Vec<Country> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    Continent::ALL
        .iter()
        .flat_map(|continent| continent.countries().iter())
        .copied()
        .filter(|country| country.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_continent_has_countries() {
        for continent in Continent::ALL {
            assert!(!continent.countries().is_empty(), "{:?}", continent);
        }
    }

    #[test]
    fn hot_destinations_exist_in_catalog() {
        for name in HOT_DESTINATIONS {
            assert!(find(name).is_some(), "missing hot destination {}", name);
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let hits = search("jApAn");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Japan");
    }

    #[test]
    fn search_matches_substrings_across_continents() {
        let hits = search("an");
        assert!(hits.iter().any(|c| c.name == "Japan"));
        assert!(hits.iter().any(|c| c.name == "France"));
    }

    #[test]
    fn empty_search_returns_nothing() {
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
    }

    #[test]
    fn country_names_are_unique() {
        let mut names: Vec<&str> = Continent::ALL
            .iter()
            .flat_map(|c| c.countries().iter().map(|c| c.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
