use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use rand::{distributions::Uniform, Rng};
use serde::{Deserialize, Serialize};

use crate::model::{
    vo::{
        AreaFlags, Quarter, RawTechnicalReport, RawWorkSlip, RequestType, RequiredField,
        TechnicalReport,
    },
    AggregateRoot,
};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A work slip in canonical form.
///
/// Deserialization goes through [`RawWorkSlip`] and always normalizes;
/// serialization emits the wire shape, including the flattened
/// `actionDone`/`recommendation` fields projected from the first report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawWorkSlip", into = "RawWorkSlip")]
pub struct WorkSlip {
    pub id: String,
    pub so_number: String,
    /// `YYYY-MM-DD`, empty on unfinished drafts.
    pub date: String,
    pub quarter: Quarter,
    pub area: AreaFlags,
    pub offices: Vec<String>,
    pub time_started: String,
    pub time_ended: String,
    /// Never empty.
    pub technical_reports: Vec<TechnicalReport>,
    pub requester_signature: String,
    pub technician_name: String,
    pub approved_by: String,
    pub printer_brand: Option<String>,
    pub printer_model: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for WorkSlip {
    fn default() -> Self {
        RawWorkSlip::default().into()
    }
}

impl AggregateRoot for WorkSlip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl WorkSlip {
    /// `slip-<unix millis>-<7 base36 chars>`
    pub fn new_id() -> String {
        Self::prefixed_id("slip")
    }

    pub(crate) fn prefixed_id(prefix: &str) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(Uniform::from(0..BASE36.len()))
            .take(7)
            .map(|el| BASE36[el] as char)
            .collect();
        format!("{prefix}-{}-{suffix}", Utc::now().timestamp_millis())
    }

    fn first_report(&self) -> Option<&TechnicalReport> {
        self.technical_reports.first()
    }

    /// Request of the first report row, as stored in the flattened
    /// `actionDone` field.
    pub fn legacy_action_done(&self) -> &str {
        self.first_report().map_or("", |el| el.request.as_str())
    }

    pub fn legacy_recommendation(&self) -> &str {
        self.first_report()
            .map_or("", |el| el.recommendation.as_str())
    }

    pub fn first_request_type(&self) -> Option<RequestType> {
        self.first_report().and_then(TechnicalReport::request_type)
    }

    /// Area labels joined by ", ", or "—" when no area is flagged.
    pub fn area_label(&self) -> String {
        if self.area.is_empty() {
            "—".to_owned()
        } else {
            self.area.join_labels(", ")
        }
    }

    /// Stamps the persistence time at millisecond precision.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now.trunc_subsecs(3));
    }

    /// Fields a submission still lacks, in form order.
    pub fn missing_required_fields(&self) -> Vec<RequiredField> {
        let blank = |value: &str| value.trim().is_empty();
        RequiredField::ALL
            .into_iter()
            .filter(|field| match field {
                RequiredField::SoNumber => blank(&self.so_number),
                RequiredField::Offices => self.offices.is_empty(),
                RequiredField::Date => blank(&self.date),
                RequiredField::Area => self.area.is_empty(),
                RequiredField::TimeStarted => blank(&self.time_started),
                RequiredField::TimeEnded => blank(&self.time_ended),
                RequiredField::Request => blank(self.legacy_action_done()),
                RequiredField::Technician => blank(&self.technician_name),
            })
            .collect()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|el| !el.is_empty())
}

/// RFC 3339, SQLite's `YYYY-MM-DD HH:MM:SS` (read as UTC), a bare date, or
/// unix milliseconds.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|el| el.and_hms_opt(0, 0, 0))
        })
        .map(|el| el.and_utc())
        .or_else(|| text.parse().ok().and_then(DateTime::<Utc>::from_timestamp_millis))
}

impl From<RawWorkSlip> for WorkSlip {
    fn from(raw: RawWorkSlip) -> Self {
        let date = raw.date.unwrap_or_default();
        let quarter = raw
            .quarter
            .and_then(Quarter::from_number)
            .unwrap_or_else(|| Quarter::from_date(&date));
        let offices = match (raw.offices, non_empty(raw.office)) {
            (Some(offices), _) => offices,
            (None, Some(office)) => vec![office],
            (None, None) => vec![],
        };
        let technical_reports = match raw.technical_reports {
            Some(rows) if !rows.is_empty() => rows.into_iter().map(Into::into).collect(),
            _ => vec![TechnicalReport::from_legacy(
                raw.action_done.as_deref().unwrap_or_default(),
                raw.recommendation.as_deref().unwrap_or_default(),
            )],
        };
        let created_at = raw.created_at.as_deref().and_then(parse_timestamp);

        Self {
            id: raw.id.unwrap_or_default(),
            so_number: raw.so_number.unwrap_or_default(),
            date,
            quarter,
            area: AreaFlags {
                in_house: raw.area_in_house.unwrap_or_default(),
                on_site: raw.area_on_site.unwrap_or_default(),
                interagency: raw.area_interagency.unwrap_or_default(),
            },
            offices,
            time_started: raw.time_started.unwrap_or_default(),
            time_ended: raw.time_ended.unwrap_or_default(),
            technical_reports,
            requester_signature: raw.requester_signature.unwrap_or_default(),
            technician_name: raw.technician_name.unwrap_or_default(),
            approved_by: raw.approved_by.unwrap_or_default(),
            printer_brand: non_empty(raw.printer_brand),
            printer_model: non_empty(raw.printer_model),
            created_at,
        }
    }
}

impl From<WorkSlip> for RawWorkSlip {
    fn from(slip: WorkSlip) -> Self {
        let action_done = slip.legacy_action_done().to_owned();
        let recommendation = slip.legacy_recommendation().to_owned();
        Self {
            id: Some(slip.id),
            so_number: Some(slip.so_number),
            date: Some(slip.date),
            quarter: Some(slip.quarter.number().into()),
            area_in_house: Some(slip.area.in_house),
            area_on_site: Some(slip.area.on_site),
            area_interagency: Some(slip.area.interagency),
            offices: Some(slip.offices),
            office: None,
            time_started: Some(slip.time_started),
            time_ended: Some(slip.time_ended),
            action_done: Some(action_done),
            recommendation: Some(recommendation),
            requester_signature: Some(slip.requester_signature),
            technician_name: Some(slip.technician_name),
            approved_by: Some(slip.approved_by),
            created_at: slip
                .created_at
                .map(|el| el.to_rfc3339_opts(SecondsFormat::Millis, true)),
            printer_brand: slip.printer_brand,
            printer_model: slip.printer_model,
            technical_reports: Some(
                slip.technical_reports
                    .into_iter()
                    .map(|el| RawTechnicalReport {
                        request: Some(el.request),
                        action_done: Some(el.action_done),
                        recommendation: Some(el.recommendation),
                    })
                    .collect(),
            ),
        }
    }
}
