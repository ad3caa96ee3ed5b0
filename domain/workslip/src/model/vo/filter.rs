use std::collections::BTreeSet;

use super::{Area, Quarter};
use crate::model::entity::WorkSlip;

/// Browse filter over persisted slips. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlipFilter {
    /// Case-insensitive text matched against SO number, date, area label,
    /// offices and the legacy action text.
    pub search: Option<String>,
    pub area: Option<Area>,
    pub office: Option<String>,
    pub quarter: Option<Quarter>,
}

impl SlipFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, slip: &WorkSlip) -> bool {
        self.matches_search(slip)
            && self.area.map_or(true, |area| slip.area.contains(area))
            && self
                .office
                .as_deref()
                .map_or(true, |office| slip.offices.iter().any(|el| el == office))
            && self.quarter.map_or(true, |quarter| slip.quarter == quarter)
    }

    fn matches_search(&self, slip: &WorkSlip) -> bool {
        let needle = match self.search.as_deref().map(str::trim) {
            Some(search) if !search.is_empty() => search.to_lowercase(),
            _ => return true,
        };
        slip.so_number.to_lowercase().contains(&needle)
            || slip.date.contains(&needle)
            || slip.area_label().to_lowercase().contains(&needle)
            || slip.offices.iter().any(|el| el.to_lowercase().contains(&needle))
            || slip.legacy_action_done().to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, slips: &'a [WorkSlip]) -> Vec<&'a WorkSlip> {
        slips.iter().filter(|el| self.matches(el)).collect()
    }
}

/// Every office that occurs in `slips`, sorted, for the office filter choices.
pub fn offices_in_use(slips: &[WorkSlip]) -> Vec<String> {
    slips
        .iter()
        .flat_map(|el| el.offices.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
