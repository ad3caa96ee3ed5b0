use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use domain_workslip::{
    exception::WorkSlipResult,
    model::{
        entity::WorkSlip,
        vo::{Area, CsvDownload, SlipFilter, SlipSummary},
    },
    service::{ExportService, WorkSlipService},
};

const BOM: &[u8] = b"\xEF\xBB\xBF";

const SLIP_HEADERS: [&str; 14] = [
    "SO No",
    "Date",
    "Quarter",
    "Area",
    "Offices",
    "Time Started",
    "Time Ended",
    "Request",
    "Technician",
    "Requester",
    "Approved By",
    "Recommendation",
    "Printer Brand",
    "Printer Model",
];

/// Spreadsheet-friendly CSV: UTF-8 with BOM, every field quoted, CRLF.
#[derive(typed_builder::TypedBuilder)]
pub struct ExportServiceImpl {
    work_slip_service: Arc<dyn WorkSlipService>,
}

impl ExportServiceImpl {
    fn writer() -> Writer<Vec<u8>> {
        WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::CRLF)
            .from_writer(BOM.to_vec())
    }

    fn finish(writer: Writer<Vec<u8>>, prefix: &str, today: NaiveDate) -> anyhow::Result<CsvDownload> {
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Flush csv: {}", e.error()))?;
        Ok(CsvDownload {
            file_name: format!("SO-WorkSlip-{prefix}-{}.csv", today.format("%Y-%m-%d")),
            bytes,
        })
    }

    fn slip_row(slip: &WorkSlip) -> [String; 14] {
        [
            slip.so_number.clone(),
            slip.date.clone(),
            slip.quarter.to_string(),
            slip.area.join_labels("; "),
            slip.offices.join("; "),
            slip.time_started.clone(),
            slip.time_ended.clone(),
            slip.legacy_action_done().to_owned(),
            slip.technician_name.clone(),
            slip.requester_signature.clone(),
            slip.approved_by.clone(),
            slip.legacy_recommendation()
                .replace("\r\n", " ")
                .replace('\n', " "),
            slip.printer_brand.clone().unwrap_or_default(),
            slip.printer_model.clone().unwrap_or_default(),
        ]
    }

    pub fn render_slips<'a>(
        slips: impl IntoIterator<Item = &'a WorkSlip>,
        today: NaiveDate,
    ) -> anyhow::Result<CsvDownload> {
        let mut writer = Self::writer();
        writer.write_record(SLIP_HEADERS).context("Write csv header")?;
        for slip in slips {
            writer
                .write_record(Self::slip_row(slip))
                .with_context(|| format!("Write csv row of slip {}", slip.id))?;
        }
        Self::finish(writer, "Report", today)
    }

    pub fn render_totals(summary: &SlipSummary, today: NaiveDate) -> anyhow::Result<CsvDownload> {
        let rows = [
            ("Total Slips", summary.total),
            ("Hardware", summary.hardware),
            ("Software", summary.software),
            (Area::InHouse.label(), summary.by_area.get(Area::InHouse)),
            (Area::OnSite.label(), summary.by_area.get(Area::OnSite)),
            (Area::Interagency.label(), summary.by_area.get(Area::Interagency)),
        ];
        let mut writer = Self::writer();
        writer.write_record(["Category", "Count"])?;
        for (category, count) in rows {
            writer.write_record([category.to_owned(), count.to_string()])?;
        }
        Self::finish(writer, "Totals", today)
    }
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    async fn slips_csv(&self, filter: &SlipFilter) -> WorkSlipResult<CsvDownload> {
        let slips = self.work_slip_service.list().await?;
        Ok(Self::render_slips(filter.apply(&slips), Utc::now().date_naive())?)
    }

    async fn totals_csv(&self) -> WorkSlipResult<CsvDownload> {
        let slips = self.work_slip_service.list().await?;
        let summary = SlipSummary::of(&slips);
        Ok(Self::render_totals(&summary, Utc::now().date_naive())?)
    }
}
