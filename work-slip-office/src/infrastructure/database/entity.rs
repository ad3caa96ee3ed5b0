//! Row of the `work_slips` table. Column names match earlier
//! deployments so their database files open unchanged.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "work_slips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_name = "soNumber", column_type = "Text")]
    pub so_number: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub date: Option<String>,
    #[sea_orm(column_name = "areaInHouse")]
    pub area_in_house: Option<i32>,
    #[sea_orm(column_name = "areaOnSite")]
    pub area_on_site: Option<i32>,
    #[sea_orm(column_name = "areaInteragency")]
    pub area_interagency: Option<i32>,
    /// JSON array of office names.
    #[sea_orm(column_type = "Text")]
    pub offices: Option<String>,
    #[sea_orm(column_name = "timeStarted", column_type = "Text")]
    pub time_started: Option<String>,
    #[sea_orm(column_name = "timeEnded", column_type = "Text")]
    pub time_ended: Option<String>,
    #[sea_orm(column_name = "actionDone", column_type = "Text")]
    pub action_done: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub recommendation: Option<String>,
    #[sea_orm(column_name = "requesterSignature", column_type = "Text")]
    pub requester_signature: Option<String>,
    #[sea_orm(column_name = "technicianName", column_type = "Text")]
    pub technician_name: Option<String>,
    #[sea_orm(column_name = "approvedBy", column_type = "Text")]
    pub approved_by: Option<String>,
    /// RFC 3339 with milliseconds, sortable as text.
    #[sea_orm(column_name = "createdAt", column_type = "Text")]
    pub created_at: Option<String>,
    #[sea_orm(column_name = "printerBrand", column_type = "Text")]
    pub printer_brand: Option<String>,
    #[sea_orm(column_name = "printerModel", column_type = "Text")]
    pub printer_model: Option<String>,
    pub quarter: Option<i32>,
    /// JSON array of technical report rows.
    #[sea_orm(column_name = "technicalReports", column_type = "Text")]
    pub technical_reports: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub mod prelude {
    pub use super::{
        ActiveModel as WorkSlipActiveModel, Column as WorkSlipColumn, Entity as WorkSlipEntity,
        Model as WorkSlipModel,
    };
}
