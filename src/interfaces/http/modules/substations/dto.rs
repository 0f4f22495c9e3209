//! Substation (facility) DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::{ReassignmentItem, ReassignmentOutcome, ReassignmentReport};
use crate::domain::EquipmentUnit;
use crate::interfaces::http::modules::equipment::RuDto;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubstationDto {
    pub id: String,
    #[serde(rename = "totalRUs")]
    pub total_rus: usize,
    pub rus: Vec<RuDto>,
}

impl SubstationDto {
    pub fn new(id: String, units: Vec<EquipmentUnit>) -> Self {
        Self {
            id,
            total_rus: units.len(),
            rus: units.into_iter().map(RuDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignUnitsRequest {
    #[validate(length(min = 1, message = "ruIds must not be empty"))]
    pub ru_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReassignmentOutcomeDto {
    Updated,
    NotFound,
    Failed,
}

impl From<ReassignmentOutcome> for ReassignmentOutcomeDto {
    fn from(o: ReassignmentOutcome) -> Self {
        match o {
            ReassignmentOutcome::Updated => Self::Updated,
            ReassignmentOutcome::NotFound => Self::NotFound,
            ReassignmentOutcome::Failed => Self::Failed,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignmentItemDto {
    pub ru_id: String,
    pub outcome: ReassignmentOutcomeDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ReassignmentItem> for ReassignmentItemDto {
    fn from(i: ReassignmentItem) -> Self {
        Self {
            ru_id: i.ru_id,
            outcome: i.outcome.into(),
            error: i.error,
        }
    }
}

/// Per-unit manifest of a bulk reassignment plus the units that moved
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignmentDto {
    pub substation_id: String,
    pub count: usize,
    pub items: Vec<ReassignmentItemDto>,
    pub rus: Vec<RuDto>,
}

impl ReassignmentDto {
    pub fn new(substation_id: String, report: ReassignmentReport) -> Self {
        Self {
            substation_id,
            count: report.updated.len(),
            items: report.items.into_iter().map(Into::into).collect(),
            rus: report.updated.into_iter().map(RuDto::from).collect(),
        }
    }
}
