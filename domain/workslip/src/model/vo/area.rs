use serde::{Deserialize, Serialize};

use super::catalog::office_catalog;

/// Where the service took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Area {
    InHouse,
    OnSite,
    Interagency,
}

impl Area {
    pub const ALL: [Area; 3] = [Area::InHouse, Area::OnSite, Area::Interagency];

    pub fn label(self) -> &'static str {
        match self {
            Self::InHouse => "In House",
            Self::OnSite => "On Site",
            Self::Interagency => "Interagency",
        }
    }

    /// Accepts display labels ("On Site") as well as identifiers ("onSite").
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase().replace([' ', '_', '-'], "");
        Self::ALL.into_iter().find(|el| el.label().to_lowercase().replace(' ', "") == wanted)
    }

    pub fn offices(self) -> &'static [&'static str] {
        office_catalog(self)
    }

    pub fn is_valid_office(self, office: &str) -> bool {
        self.offices().contains(&office)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The three area flags as persisted. Exclusivity is the form's job, so a
/// stored record may carry more than one flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AreaFlags {
    pub in_house: bool,
    pub on_site: bool,
    pub interagency: bool,
}

impl AreaFlags {
    pub fn only(area: Area) -> Self {
        let mut flags = Self::default();
        flags.set(area, true);
        flags
    }

    pub fn contains(&self, area: Area) -> bool {
        match area {
            Area::InHouse => self.in_house,
            Area::OnSite => self.on_site,
            Area::Interagency => self.interagency,
        }
    }

    pub fn set(&mut self, area: Area, value: bool) {
        match area {
            Area::InHouse => self.in_house = value,
            Area::OnSite => self.on_site = value,
            Area::Interagency => self.interagency = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.in_house || self.on_site || self.interagency)
    }

    pub fn iter(&self) -> impl Iterator<Item = Area> + '_ {
        Area::ALL.into_iter().filter(|el| self.contains(*el))
    }

    /// First flagged area, in catalog order.
    pub fn selected(&self) -> Option<Area> {
        self.iter().next()
    }

    /// Labels of every flagged area joined by `separator`.
    pub fn join_labels(&self, separator: &str) -> String {
        self.iter().map(Area::label).collect::<Vec<_>>().join(separator)
    }
}

impl From<Option<Area>> for AreaFlags {
    fn from(area: Option<Area>) -> Self {
        area.map(Self::only).unwrap_or_default()
    }
}
