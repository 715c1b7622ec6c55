use crate::chart::types::{Aspect, BodyPosition, ChartRequest, ChartResponse, Location};

/// Assemble the response payload, echoing the request metadata.
pub fn build_response(
    request: &ChartRequest,
    timezone: &str,
    chart: Vec<BodyPosition>,
    aspects: Vec<Aspect>,
) -> ChartResponse {
    ChartResponse {
        chart,
        aspects,
        date: request.date.clone(),
        time: request.time.clone(),
        timezone: timezone.to_string(),
        location: Location {
            lat: request.lat,
            lon: request.lon,
        },
    }
}
