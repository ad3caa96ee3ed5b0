use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use domain_workslip::model::{
    entity::{DraftRecord, WorkSlip},
    vo::{Area, AreaFlags, Quarter, RequiredField, TechnicalReport},
};
use serde::{Deserialize, Serialize};

/// Editable column of a technical report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportField {
    Request,
    ActionDone,
    Recommendation,
}

/// In-progress intake form.
///
/// Every mutation keeps the form consistent: offices stay inside the
/// catalog of the chosen area, the quarter follows the date until it is
/// overridden, and printer details only survive while the first report row
/// is a printer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeForm {
    so_number: String,
    date: String,
    quarter: Quarter,
    area: AreaFlags,
    offices: Vec<String>,
    time_started: String,
    time_ended: String,
    reports: Vec<TechnicalReport>,
    requester_signature: String,
    technician_name: String,
    approved_by: String,
    printer_brand: String,
    printer_model: String,
    touched: BTreeSet<RequiredField>,
}

impl IntakeForm {
    /// Blank form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            quarter: Quarter::from_date(&date),
            date,
            so_number: String::new(),
            area: AreaFlags::default(),
            offices: vec![],
            time_started: String::new(),
            time_ended: String::new(),
            reports: vec![TechnicalReport::default()],
            requester_signature: String::new(),
            technician_name: String::new(),
            approved_by: String::new(),
            printer_brand: String::new(),
            printer_model: String::new(),
            touched: BTreeSet::new(),
        }
    }

    /// Resumes editing a saved draft, restoring every field.
    pub fn from_draft(draft: &DraftRecord) -> Self {
        Self::from_slip(draft.slip())
    }

    /// Opens a stored slip for editing. Offices outside the catalog of its
    /// areas and printer details of a non-printer request are dropped.
    pub fn from_slip(slip: &WorkSlip) -> Self {
        let mut reports = slip.technical_reports.clone();
        if reports.is_empty() {
            reports.push(TechnicalReport::default());
        }
        let mut form = Self {
            so_number: slip.so_number.clone(),
            date: slip.date.clone(),
            quarter: slip.quarter,
            area: slip.area,
            offices: slip.offices.clone(),
            time_started: slip.time_started.clone(),
            time_ended: slip.time_ended.clone(),
            reports,
            requester_signature: slip.requester_signature.clone(),
            technician_name: slip.technician_name.clone(),
            approved_by: slip.approved_by.clone(),
            printer_brand: slip.printer_brand.clone().unwrap_or_default(),
            printer_model: slip.printer_model.clone().unwrap_or_default(),
            touched: BTreeSet::new(),
        };
        form.prune_offices();
        form.sync_printer_fields();
        form
    }

    pub fn so_number(&self) -> &str {
        &self.so_number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    pub fn area(&self) -> AreaFlags {
        self.area
    }

    pub fn offices(&self) -> &[String] {
        &self.offices
    }

    pub fn time_started(&self) -> &str {
        &self.time_started
    }

    pub fn time_ended(&self) -> &str {
        &self.time_ended
    }

    pub fn reports(&self) -> &[TechnicalReport] {
        &self.reports
    }

    pub fn requester_signature(&self) -> &str {
        &self.requester_signature
    }

    pub fn technician_name(&self) -> &str {
        &self.technician_name
    }

    pub fn approved_by(&self) -> &str {
        &self.approved_by
    }

    pub fn printer_brand(&self) -> &str {
        &self.printer_brand
    }

    pub fn printer_model(&self) -> &str {
        &self.printer_model
    }

    pub fn set_so_number(&mut self, value: impl Into<String>) {
        self.so_number = value.into();
    }

    /// Also recomputes the quarter, discarding any override.
    pub fn set_date(&mut self, value: impl Into<String>) {
        self.date = value.into();
        self.quarter = Quarter::from_date(&self.date);
    }

    /// Holds until the next date change.
    pub fn override_quarter(&mut self, quarter: Quarter) {
        self.quarter = quarter;
    }

    /// Chooses `area` exclusively and drops offices outside its catalog.
    pub fn select_area(&mut self, area: Area) {
        self.area = AreaFlags::only(area);
        self.prune_offices();
    }

    /// Offices selectable under the current area, in catalog order.
    pub fn available_offices(&self) -> Vec<&'static str> {
        self.area.iter().flat_map(|el| el.offices().iter().copied()).collect()
    }

    /// Adds or removes `office`. Offices outside the current catalog are
    /// ignored; returns whether the selection changed.
    pub fn toggle_office(&mut self, office: &str) -> bool {
        if let Some(position) = self.offices.iter().position(|el| el == office) {
            self.offices.remove(position);
            return true;
        }
        if !self.area.iter().any(|el| el.is_valid_office(office)) {
            return false;
        }
        self.offices.push(office.to_owned());
        true
    }

    fn prune_offices(&mut self) {
        let area = self.area;
        self.offices
            .retain(|office| area.iter().any(|el| el.is_valid_office(office)));
    }

    pub fn set_time_started(&mut self, value: impl Into<String>) {
        self.time_started = value.into();
    }

    pub fn set_time_ended(&mut self, value: impl Into<String>) {
        self.time_ended = value.into();
    }

    pub fn add_report_row(&mut self) {
        self.reports.push(TechnicalReport::default());
    }

    /// No-op for the last remaining row or an out-of-range index.
    pub fn remove_report_row(&mut self, index: usize) {
        if self.reports.len() > 1 && index < self.reports.len() {
            self.reports.remove(index);
            self.sync_printer_fields();
        }
    }

    pub fn update_report_row(&mut self, index: usize, field: ReportField, value: impl Into<String>) {
        let Some(row) = self.reports.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            ReportField::Request => row.request = value,
            ReportField::ActionDone => row.action_done = value,
            ReportField::Recommendation => row.recommendation = value,
        }
        self.sync_printer_fields();
    }

    pub fn set_requester_signature(&mut self, value: impl Into<String>) {
        self.requester_signature = value.into();
    }

    pub fn set_technician_name(&mut self, value: impl Into<String>) {
        self.technician_name = value.into();
    }

    pub fn set_approved_by(&mut self, value: impl Into<String>) {
        self.approved_by = value.into();
    }

    /// Printer details apply only to a printer request in the first row.
    pub fn printer_fields_visible(&self) -> bool {
        self.reports
            .first()
            .map_or(false, TechnicalReport::is_printer_isolation)
    }

    pub fn set_printer_brand(&mut self, value: impl Into<String>) {
        if self.printer_fields_visible() {
            self.printer_brand = value.into();
        }
    }

    pub fn set_printer_model(&mut self, value: impl Into<String>) {
        if self.printer_fields_visible() {
            self.printer_model = value.into();
        }
    }

    fn sync_printer_fields(&mut self) {
        if !self.printer_fields_visible() {
            self.printer_brand.clear();
            self.printer_model.clear();
        }
    }

    /// Marks `field` as visited so its error, if any, is shown.
    pub fn touch(&mut self, field: RequiredField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(RequiredField::ALL);
    }

    pub fn is_touched(&self, field: RequiredField) -> bool {
        self.touched.contains(&field)
    }

    /// Every required field still empty, touched or not.
    pub fn missing(&self) -> Vec<RequiredField> {
        self.slip(false).missing_required_fields()
    }

    /// Errors of touched fields only.
    pub fn errors(&self) -> BTreeMap<RequiredField, &'static str> {
        self.missing()
            .into_iter()
            .filter(|el| self.is_touched(*el))
            .map(|el| (el, el.message()))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.missing().is_empty()
    }

    /// The slip to submit: SO number and report rows trimmed, a fresh
    /// identifier, no persistence time.
    pub fn to_submission(&self) -> WorkSlip {
        let mut slip = self.slip(true);
        slip.id = WorkSlip::new_id();
        slip
    }

    /// The slip to keep as a draft, exactly as typed.
    pub fn to_draft(&self) -> WorkSlip {
        self.slip(false)
    }

    fn slip(&self, trim: bool) -> WorkSlip {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_owned());
        let technical_reports = if trim {
            self.reports.iter().map(TechnicalReport::trimmed).collect()
        } else {
            self.reports.clone()
        };
        WorkSlip {
            id: String::new(),
            so_number: if trim {
                self.so_number.trim().to_owned()
            } else {
                self.so_number.clone()
            },
            date: self.date.clone(),
            quarter: self.quarter,
            area: self.area,
            offices: self.offices.clone(),
            time_started: self.time_started.clone(),
            time_ended: self.time_ended.clone(),
            technical_reports,
            requester_signature: self.requester_signature.clone(),
            technician_name: self.technician_name.clone(),
            approved_by: self.approved_by.clone(),
            printer_brand: non_empty(&self.printer_brand),
            printer_model: non_empty(&self.printer_model),
            created_at: None,
        }
    }
}
