use anyhow::Context;
use async_trait::async_trait;
use domain_workslip::{
    model::{
        entity::WorkSlip,
        vo::{RawTechnicalReport, RawWorkSlip},
    },
    repository::{DBRepository, MutableRepository, ReadOnlyRepository, WorkSlipRepo},
};
use sea_orm::{
    prelude::*, ConnectionTrait, NotSet, QueryFilter, QueryOrder, QueryTrait, Set,
};
use serde::de::DeserializeOwned;

use crate::infrastructure::database::{entity::prelude::*, OrmRepo};

/// Lists stored as JSON text. Unreadable text reads as absent and the slip
/// falls back to its defaults.
fn json_column<T: DeserializeOwned>(id: &str, column: &str, text: Option<&str>) -> Option<T> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    serde_json::from_str(text)
        .map_err(|e| tracing::warn!("Ignoring unreadable {column} of slip {id}: {e}"))
        .ok()
}

impl From<WorkSlipModel> for WorkSlip {
    fn from(model: WorkSlipModel) -> Self {
        let offices = json_column::<Vec<String>>(&model.id, "offices", model.offices.as_deref());
        let technical_reports = json_column::<Vec<RawTechnicalReport>>(
            &model.id,
            "technicalReports",
            model.technical_reports.as_deref(),
        );
        RawWorkSlip {
            id: Some(model.id),
            so_number: model.so_number,
            date: model.date,
            quarter: model.quarter.map(i64::from),
            area_in_house: model.area_in_house.map(|el| el != 0),
            area_on_site: model.area_on_site.map(|el| el != 0),
            area_interagency: model.area_interagency.map(|el| el != 0),
            offices,
            office: None,
            time_started: model.time_started,
            time_ended: model.time_ended,
            action_done: model.action_done,
            recommendation: model.recommendation,
            requester_signature: model.requester_signature,
            technician_name: model.technician_name,
            approved_by: model.approved_by,
            created_at: model.created_at,
            printer_brand: model.printer_brand,
            printer_model: model.printer_model,
            technical_reports,
        }
        .into()
    }
}

fn flag(value: Option<bool>) -> Option<i32> {
    value.map(i32::from)
}

fn active_model(slip: &WorkSlip) -> anyhow::Result<WorkSlipActiveModel> {
    let raw = RawWorkSlip::from(slip.clone());
    Ok(WorkSlipActiveModel {
        id: Set(slip.id.clone()),
        so_number: Set(raw.so_number),
        date: Set(raw.date),
        area_in_house: Set(flag(raw.area_in_house)),
        area_on_site: Set(flag(raw.area_on_site)),
        area_interagency: Set(flag(raw.area_interagency)),
        offices: Set(Some(
            serde_json::to_string(&raw.offices.unwrap_or_default()).context("Encode offices")?,
        )),
        time_started: Set(raw.time_started),
        time_ended: Set(raw.time_ended),
        action_done: Set(raw.action_done),
        recommendation: Set(raw.recommendation),
        requester_signature: Set(raw.requester_signature),
        technician_name: Set(raw.technician_name),
        approved_by: Set(raw.approved_by),
        created_at: Set(raw.created_at),
        printer_brand: Set(raw.printer_brand),
        printer_model: Set(raw.printer_model),
        quarter: Set(raw.quarter.map(|el| el as i32)),
        technical_reports: Set(Some(
            serde_json::to_string(&raw.technical_reports.unwrap_or_default())
                .context("Encode technical reports")?,
        )),
    })
}

#[async_trait]
impl ReadOnlyRepository<WorkSlip> for OrmRepo {
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<WorkSlip>> {
        Ok(WorkSlipEntity::find_by_id(id.to_owned())
            .one(self.db.get_connection())
            .await?
            .map(WorkSlip::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<WorkSlip>> {
        Ok(WorkSlipEntity::find()
            .order_by_desc(WorkSlipColumn::CreatedAt)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(WorkSlip::from)
            .collect())
    }
}

#[async_trait]
impl MutableRepository<WorkSlip> for OrmRepo {
    async fn insert(&self, entity: &WorkSlip) -> anyhow::Result<String> {
        let stmt = WorkSlipEntity::insert(active_model(entity)?)
            .build(self.db.get_connection().get_database_backend());
        self.push(stmt).await;
        Ok(entity.id.clone())
    }

    async fn update(&self, entity: &WorkSlip) -> anyhow::Result<()> {
        let mut model = active_model(entity)?;
        // An update never clears createdAt.
        if entity.created_at.is_none() {
            model.created_at = NotSet;
        }
        let stmt = WorkSlipEntity::update_many()
            .set(model)
            .filter(WorkSlipColumn::Id.eq(entity.id.as_str()))
            .build(self.db.get_connection().get_database_backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()> {
        let stmt = WorkSlipEntity::delete_many()
            .filter(WorkSlipColumn::Id.eq(id))
            .build(self.db.get_connection().get_database_backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        OrmRepo::save_changed(self).await
    }
}

impl DBRepository<WorkSlip> for OrmRepo {}

#[async_trait]
impl WorkSlipRepo for OrmRepo {
    async fn get_all_by_so_number(&self, so_number: &str) -> anyhow::Result<Vec<WorkSlip>> {
        Ok(WorkSlipEntity::find()
            .filter(WorkSlipColumn::SoNumber.eq(so_number))
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(WorkSlip::from)
            .collect())
    }
}
