//! Region and brand resolution.
//!
//! The configuration names the region and the brand (`north_america`, `kia`),
//! but sessions are opened with numeric codes. Client libraries publish their
//! own name tables and they have changed between versions, so the names are
//! looked up in every table the client exposes.
//!
//! The candidates are tried in this order:
//!
//! 1. The numeric override (`region_code` and `brand_code`), when both are set.
//! 2. The names looked up in each catalogue, newest first. A catalogue only
//!    yields a candidate if it knows both names.
//! 3. The numeric fallback [`Selector::FALLBACK`], which always exists.
//!
//! Duplicates are removed keeping the first occurrence.
use vehicle_control_configuration::VehicleCloud;
use vehicle_control_primitives::region::{Brand, Region, Selector};

/// A table of region and brand names published by a cloud client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    pub regions: Vec<(Region, String)>,
    pub brands: Vec<(Brand, String)>,
}

impl Catalogue {
    #[must_use]
    pub fn new(regions: &[(Region, &str)], brands: &[(Brand, &str)]) -> Self {
        Self {
            regions: regions.iter().map(|(code, name)| (*code, (*name).to_owned())).collect(),
            brands: brands.iter().map(|(code, name)| (*code, (*name).to_owned())).collect(),
        }
    }

    #[must_use]
    pub fn region(&self, name: &str) -> Option<Region> {
        lookup(&self.regions, name)
    }

    #[must_use]
    pub fn brand(&self, name: &str) -> Option<Brand> {
        lookup(&self.brands, name)
    }

    /// It resolves both names, or nothing.
    #[must_use]
    pub fn selector(&self, region: &str, brand: &str) -> Option<Selector> {
        Some(Selector::new(self.region(region)?, self.brand(brand)?))
    }
}

fn lookup<T: Copy>(table: &[(T, String)], name: &str) -> Option<T> {
    let wanted = normalize(name);

    table
        .iter()
        .find(|(_, candidate)| normalize(candidate) == wanted)
        .map(|(code, _)| *code)
}

/// `North America`, `north_america` and `NORTH-AMERICA` are the same name.
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c.to_ascii_lowercase() })
        .collect()
}

/// The ordered list of selectors a session is opened with.
#[must_use]
pub fn candidates(config: &VehicleCloud, catalogues: &[Catalogue]) -> Vec<Selector> {
    let numeric_override = match (config.region_code, config.brand_code) {
        (Some(region), Some(brand)) => Some(Selector::new(Region(region), Brand(brand))),
        _ => None,
    };

    let symbolic = catalogues
        .iter()
        .filter_map(|catalogue| catalogue.selector(&config.region, &config.brand));

    let mut candidates: Vec<Selector> = Vec::new();

    for selector in numeric_override
        .into_iter()
        .chain(symbolic)
        .chain(std::iter::once(Selector::FALLBACK))
    {
        if !candidates.contains(&selector) {
            candidates.push(selector);
        }
    }

    candidates
}
