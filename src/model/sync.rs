use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response of the manual synchronisation triggers
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResponseDto {
    pub success: bool,
    /// Only present when the server is configured to report synchronisation outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<SyncReportDto>,
}

/// Record counts of a completed synchronisation pass
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncReportDto {
    /// `commodity` or `star system`
    pub kind: String,
    pub created: usize,
    pub updated: usize,
    /// Records dropped by filtering or whose required parent was missing
    pub skipped: usize,
    /// Per star system steps that were rolled back
    pub failures: Vec<String>,
}
