use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{Area, Quarter, RequestCategory};
use crate::model::entity::WorkSlip;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    /// `YYYY-MM`
    pub key: String,
    /// `Apr 2025`
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCounts {
    pub in_house: usize,
    pub on_site: usize,
    pub interagency: usize,
}

impl AreaCounts {
    pub fn get(&self, area: Area) -> usize {
        match area {
            Area::InHouse => self.in_house,
            Area::OnSite => self.on_site,
            Area::Interagency => self.interagency,
        }
    }
}

/// Aggregate counts behind the reports page and the totals export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipSummary {
    pub total: usize,
    pub hardware: usize,
    pub software: usize,
    pub by_area: AreaCounts,
    /// Sorted by count, highest first.
    pub by_request: Vec<NamedCount>,
    /// Sorted by count, highest first.
    pub by_technician: Vec<NamedCount>,
    /// Always Q1 to Q4.
    pub by_quarter: Vec<NamedCount>,
    /// Ascending by month; slips without a readable date are skipped.
    pub by_month: Vec<MonthCount>,
}

impl SlipSummary {
    pub fn of<'a>(slips: impl IntoIterator<Item = &'a WorkSlip>) -> Self {
        let mut summary = Self::default();
        let mut requests = Tally::default();
        let mut technicians = Tally::default();
        let mut quarters = HashMap::<Quarter, usize>::new();
        let mut months = BTreeMap::<(i32, u32), usize>::new();

        for slip in slips {
            summary.total += 1;
            let request = slip.first_request_type();
            if request.map_or(false, |el| el.counts_as(RequestCategory::Hardware)) {
                summary.hardware += 1;
            }
            if request.map_or(false, |el| el.counts_as(RequestCategory::Software)) {
                summary.software += 1;
            }
            for area in slip.area.iter() {
                match area {
                    Area::InHouse => summary.by_area.in_house += 1,
                    Area::OnSite => summary.by_area.on_site += 1,
                    Area::Interagency => summary.by_area.interagency += 1,
                }
            }

            let action = slip.legacy_action_done();
            requests.add(if action.is_empty() { "—" } else { action });
            let technician = slip.technician_name.as_str();
            technicians.add(if technician.is_empty() {
                "Unassigned"
            } else {
                technician
            });
            *quarters.entry(slip.quarter).or_default() += 1;

            if let Ok(date) = NaiveDate::parse_from_str(slip.date.trim(), "%Y-%m-%d") {
                *months.entry((date.year(), date.month())).or_default() += 1;
            }
        }

        summary.by_request = requests.into_sorted();
        summary.by_technician = technicians.into_sorted();
        summary.by_quarter = Quarter::ALL
            .into_iter()
            .map(|el| NamedCount {
                name: el.to_string(),
                count: quarters.get(&el).copied().unwrap_or_default(),
            })
            .collect();
        summary.by_month = months
            .into_iter()
            .map(|((year, month), count)| MonthCount {
                key: format!("{year:04}-{month:02}"),
                label: format!("{} {year}", MONTHS[(month as usize - 1) % 12]),
                count,
            })
            .collect();
        summary
    }
}

/// Counts in first-seen order, so equal counts keep a stable order.
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    counts: Vec<NamedCount>,
}

impl Tally {
    fn add(&mut self, name: &str) {
        match self.index.get(name) {
            Some(i) => self.counts[*i].count += 1,
            None => {
                self.index.insert(name.to_owned(), self.counts.len());
                self.counts.push(NamedCount {
                    name: name.to_owned(),
                    count: 1,
                });
            }
        }
    }

    fn into_sorted(mut self) -> Vec<NamedCount> {
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts
    }
}
