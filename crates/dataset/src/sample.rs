//! Deterministic sample dataset.
//!
//! Stands in for real Census extracts when no data file is available. The
//! generator is pure: every invocation yields the same states, cities, and
//! metric series, so fallback-loaded processes are reproducible.

use crate::types::{City, Dataset, MetricPoint, State, StateBounds};

pub const SAMPLE_YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];

/// Simulated annual population growth applied per year after 2020.
const GROWTH_PER_YEAR: f64 = 0.01;

struct StateSeed {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    center: (f64, f64),
    bounds: (f64, f64, f64, f64), // north, south, east, west
}

struct CitySeed {
    id: &'static str,
    name: &'static str,
    state_id: &'static str,
    state_code: &'static str,
    lat: f64,
    lon: f64,
    population: u64,
}

const STATES: [StateSeed; 5] = [
    StateSeed {
        id: "1",
        name: "California",
        code: "CA",
        center: (36.7783, -119.4179),
        bounds: (42.0, 32.5, -114.1, -124.4),
    },
    StateSeed {
        id: "2",
        name: "Texas",
        code: "TX",
        center: (31.9686, -99.9018),
        bounds: (36.5, 25.8, -93.5, -106.6),
    },
    StateSeed {
        id: "3",
        name: "New York",
        code: "NY",
        center: (42.1657, -74.9481),
        bounds: (45.0, 40.5, -71.8, -79.8),
    },
    StateSeed {
        id: "4",
        name: "Florida",
        code: "FL",
        center: (27.7663, -81.6868),
        bounds: (31.0, 24.5, -80.0, -87.6),
    },
    StateSeed {
        id: "5",
        name: "Illinois",
        code: "IL",
        center: (40.3495, -88.9861),
        bounds: (42.5, 37.0, -87.0, -91.5),
    },
];

const CITIES: [CitySeed; 18] = [
    // California
    CitySeed { id: "101", name: "Los Angeles", state_id: "1", state_code: "CA", lat: 34.0522, lon: -118.2437, population: 3_898_747 },
    CitySeed { id: "102", name: "San Francisco", state_id: "1", state_code: "CA", lat: 37.7749, lon: -122.4194, population: 873_965 },
    CitySeed { id: "103", name: "San Diego", state_id: "1", state_code: "CA", lat: 32.7157, lon: -117.1611, population: 1_423_851 },
    CitySeed { id: "104", name: "Sacramento", state_id: "1", state_code: "CA", lat: 38.5816, lon: -121.4944, population: 524_943 },
    CitySeed { id: "105", name: "San Jose", state_id: "1", state_code: "CA", lat: 37.3382, lon: -121.8863, population: 1_021_795 },
    // Texas
    CitySeed { id: "201", name: "Houston", state_id: "2", state_code: "TX", lat: 29.7604, lon: -95.3698, population: 2_320_268 },
    CitySeed { id: "202", name: "Dallas", state_id: "2", state_code: "TX", lat: 32.7767, lon: -96.7970, population: 1_343_573 },
    CitySeed { id: "203", name: "Austin", state_id: "2", state_code: "TX", lat: 30.2672, lon: -97.7431, population: 978_908 },
    CitySeed { id: "204", name: "San Antonio", state_id: "2", state_code: "TX", lat: 29.4241, lon: -98.4936, population: 1_547_253 },
    // New York
    CitySeed { id: "301", name: "New York City", state_id: "3", state_code: "NY", lat: 40.7128, lon: -74.0060, population: 8_336_817 },
    CitySeed { id: "302", name: "Buffalo", state_id: "3", state_code: "NY", lat: 42.8864, lon: -78.8784, population: 276_807 },
    CitySeed { id: "303", name: "Rochester", state_id: "3", state_code: "NY", lat: 43.1566, lon: -77.6088, population: 211_328 },
    // Florida
    CitySeed { id: "401", name: "Miami", state_id: "4", state_code: "FL", lat: 25.7617, lon: -80.1918, population: 442_241 },
    CitySeed { id: "402", name: "Tampa", state_id: "4", state_code: "FL", lat: 27.9506, lon: -82.4572, population: 384_959 },
    CitySeed { id: "403", name: "Orlando", state_id: "4", state_code: "FL", lat: 28.5383, lon: -81.3792, population: 307_573 },
    CitySeed { id: "404", name: "Jacksonville", state_id: "4", state_code: "FL", lat: 30.3322, lon: -81.6557, population: 949_611 },
    // Illinois
    CitySeed { id: "501", name: "Chicago", state_id: "5", state_code: "IL", lat: 41.8781, lon: -87.6298, population: 2_693_976 },
    CitySeed { id: "502", name: "Aurora", state_id: "5", state_code: "IL", lat: 41.7606, lon: -88.3201, population: 180_542 },
];

/// Build the full sample dataset: 5 states, 18 cities, and one metric point
/// per city per year in [`SAMPLE_YEARS`].
pub fn generate() -> Dataset {
    let states = STATES
        .iter()
        .map(|s| State {
            id: s.id.to_string(),
            name: s.name.to_string(),
            code: s.code.to_string(),
            center_lat: s.center.0,
            center_lon: s.center.1,
            bounds: StateBounds {
                north: s.bounds.0,
                south: s.bounds.1,
                east: s.bounds.2,
                west: s.bounds.3,
            },
        })
        .collect();

    let cities: Vec<City> = CITIES
        .iter()
        .map(|c| City {
            id: c.id.to_string(),
            name: c.name.to_string(),
            state_id: c.state_id.to_string(),
            state_code: c.state_code.to_string(),
            lat: c.lat,
            lon: c.lon,
            population: Some(c.population),
        })
        .collect();

    let mut metrics = Vec::with_capacity(cities.len() * SAMPLE_YEARS.len());
    for city in &cities {
        for year in SAMPLE_YEARS {
            let growth = 1.0 + f64::from(year - SAMPLE_YEARS[0]) * GROWTH_PER_YEAR;
            let population = city.population.unwrap_or(0) as f64;
            metrics.push(MetricPoint {
                id: format!("{}-{}", city.id, year),
                city_id: city.id.clone(),
                city_name: city.name.clone(),
                state_id: city.state_id.clone(),
                state_code: city.state_code.clone(),
                lat: city.lat,
                lon: city.lon,
                value: (population * growth).round(),
                year,
            });
        }
    }

    Dataset {
        states,
        cities,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::{SAMPLE_YEARS, generate};
    use pretty_assertions::assert_eq;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(), generate());
    }

    #[test]
    fn seed_counts() {
        let data = generate();
        assert_eq!(data.states.len(), 5);
        assert_eq!(data.cities.len(), 18);
        assert_eq!(data.metrics.len(), 18 * SAMPLE_YEARS.len());
    }

    #[test]
    fn states_in_seed_order() {
        let data = generate();
        let codes: Vec<_> = data.states.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["CA", "TX", "NY", "FL", "IL"]);
    }

    #[test]
    fn metric_values_follow_growth_curve() {
        let data = generate();
        let la_2020 = data.metrics.iter().find(|m| m.id == "101-2020").unwrap();
        let la_2024 = data.metrics.iter().find(|m| m.id == "101-2024").unwrap();
        assert_eq!(la_2020.value, 3_898_747.0);
        assert_eq!(la_2024.value, (3_898_747.0_f64 * 1.04).round());
    }

    #[test]
    fn metric_ids_are_city_and_year() {
        let data = generate();
        for m in &data.metrics {
            assert_eq!(m.id, format!("{}-{}", m.city_id, m.year));
        }
    }
}
