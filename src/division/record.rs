//! The canonical division record.
//!
//! Both dataset versions normalize into this one shape at load time, so
//! the rest of the crate never sees schema variants.

use std::fmt;

use super::kind::DivisionType;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Coord { lat, lon }
    }
}

/// The value used to look a division up.
///
/// Which variant applies is fixed per dataset: numeric ids when every
/// record carries one, names otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DivisionKey {
    Id(u64),
    Name(String),
}

impl DivisionKey {
    pub fn name(name: impl Into<String>) -> Self {
        DivisionKey::Name(name.into())
    }
}

impl fmt::Display for DivisionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionKey::Id(id) => write!(f, "#{}", id),
            DivisionKey::Name(name) => f.write_str(name),
        }
    }
}

/// One administrative division.
#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub id: Option<u64>,
    pub name: String,
    pub population: u64,
    /// Area in km². Absent in the legacy district dataset.
    pub area: Option<f64>,
    pub kind: DivisionType,
    pub link: Option<String>,
    pub highlights: Vec<String>,
    pub coord: Option<Coord>,
    pub image: Option<String>,
    pub image_attribution: Option<String>,
    pub info: Option<String>,
    /// Province or metropolitan city the division belongs to.
    pub first_level_division: Option<String>,
}

impl Division {
    /// Creates a division with only the required fields set.
    pub fn new(name: impl Into<String>, population: u64, kind: DivisionType) -> Self {
        Division {
            id: None,
            name: name.into(),
            population,
            area: None,
            kind,
            link: None,
            highlights: Vec::new(),
            coord: None,
            image: None,
            image_attribution: None,
            info: None,
            first_level_division: None,
        }
    }

    pub fn with_coord(mut self, lat: f64, lon: f64) -> Self {
        self.coord = Some(Coord::new(lat, lon));
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Returns the lookup key: the id when present, the name otherwise.
    pub fn key(&self) -> DivisionKey {
        match self.id {
            Some(id) => DivisionKey::Id(id),
            None => DivisionKey::Name(self.name.clone()),
        }
    }

    /// Returns true if `key` identifies this division.
    pub fn matches_key(&self, key: &DivisionKey) -> bool {
        match key {
            DivisionKey::Id(id) => self.id == Some(*id),
            DivisionKey::Name(name) => self.name == *name,
        }
    }
}
