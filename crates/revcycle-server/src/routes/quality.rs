use axum::Json;
use revcycle_core::demo;
use revcycle_core::models::quality::FacilityQuality;

/// Facility metrics are not uploadable; the panel always shows sample data.
pub async fn list_quality() -> Json<Vec<FacilityQuality>> {
    Json(demo::facility_quality())
}
