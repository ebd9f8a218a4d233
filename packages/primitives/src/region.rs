//! Region and brand selectors.
//!
//! Vehicle clouds are partitioned by region (each region has its own
//! servers and account database) and brand. Clients identify both with
//! small numeric codes.
//!
//! Code | Region | Code | Brand
//! ---|---|---|---
//! `1` | Europe | `1` | Kia
//! `2` | Canada | `2` | Hyundai
//! `3` | North America (USA) | `3` | Genesis
//! `4` | China | |
//! `5` | Australia | |
//! `6` | India | |
use std::fmt;

use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Numeric region code.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(transparent)]
pub struct Region(pub u8);

/// Numeric brand code.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[serde(transparent)]
pub struct Brand(pub u8);

impl Region {
    pub const EUROPE: Region = Region(1);
    pub const CANADA: Region = Region(2);
    pub const NORTH_AMERICA: Region = Region(3);
    pub const CHINA: Region = Region(4);
    pub const AUSTRALIA: Region = Region(5);
    pub const INDIA: Region = Region(6);
}

impl Brand {
    pub const KIA: Brand = Brand(1);
    pub const HYUNDAI: Brand = Brand(2);
    pub const GENESIS: Brand = Brand(3);
}

/// The region and brand pair a session is opened with.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Debug, Constructor)]
pub struct Selector {
    pub region: Region,
    pub brand: Brand,
}

impl Selector {
    /// The selector used when nothing else can be resolved: North America, Kia.
    pub const FALLBACK: Selector = Selector {
        region: Region::NORTH_AMERICA,
        brand: Brand::KIA,
    };
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {} brand {}", self.region.0, self.brand.0)
    }
}
