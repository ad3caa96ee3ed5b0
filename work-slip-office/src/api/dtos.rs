use domain_workslip::model::vo::{Area, Quarter, SlipFilter};
use serde::Deserialize;

use super::error::ApiError;

/// Query string of the browse, report and export endpoints. Empty values
/// are ignored.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SlipFilterQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub office: Option<String>,
    /// `2` or `Q2`.
    #[serde(default)]
    pub quarter: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|el| el.trim().to_owned())
        .filter(|el| !el.is_empty())
}

impl TryFrom<SlipFilterQuery> for SlipFilter {
    type Error = ApiError;

    fn try_from(query: SlipFilterQuery) -> Result<Self, Self::Error> {
        let area = non_empty(query.area)
            .map(|el| {
                Area::from_label(&el).ok_or_else(|| ApiError::bad_request(format!("Unknown area {el}")))
            })
            .transpose()?;
        let quarter = non_empty(query.quarter)
            .map(|el| {
                el.trim_start_matches(['Q', 'q'])
                    .parse::<i64>()
                    .ok()
                    .and_then(Quarter::from_number)
                    .ok_or_else(|| ApiError::bad_request(format!("Unknown quarter {el}")))
            })
            .transpose()?;
        Ok(SlipFilter {
            search: non_empty(query.search),
            area,
            office: non_empty(query.office),
            quarter,
        })
    }
}
