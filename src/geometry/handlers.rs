use crate::errors::GameError;
use crate::geometry::requests::NearestPointRequestBody;
use crate::geometry::responses::NearestPointResponse;
use crate::geometry::{nearest_point_on_line, PlanarPoint};
use crate::http::extractors::ValidJson;
use axum::response::Json;

#[axum::debug_handler]
pub async fn nearest_point(
    ValidJson(request_body): ValidJson<NearestPointRequestBody>,
) -> Result<Json<NearestPointResponse>, GameError> {
    let point = PlanarPoint::new(request_body.lon, request_body.lat);
    let line = request_body
        .line_coords
        .iter()
        .map(|&[lon, lat]| PlanarPoint::new(lon, lat))
        .collect::<Vec<_>>();
    let nearest = nearest_point_on_line(point, &line).ok_or_else(|| {
        GameError::Validation(String::from(
            "`line_coords` must hold at least two coordinates.",
        ))
    })?;
    Ok(Json(NearestPointResponse {
        nearest_lat: nearest.y,
        nearest_lon: nearest.x,
    }))
}
