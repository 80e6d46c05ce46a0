use utoipa::OpenApi;

use civicstats_coordinates::Coordinate;
use civicstats_parties::Party;
use civicstats_statistics::{GeoFilter, PartyAggregate};
use civicstats_users::User;

use crate::app::{dto, routes};

/// Where the generated document is served; Swagger UI lives under `/api-docs`.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "civicstats",
        description = "Party membership statistics by city and country."
    ),
    paths(
        routes::system::health,
        routes::parties::list_parties,
        routes::parties::create_party,
        routes::parties::get_party,
        routes::parties::update_party,
        routes::parties::delete_party,
        routes::coordinates::list_coordinates,
        routes::coordinates::create_coordinate,
        routes::coordinates::get_coordinate,
        routes::coordinates::update_coordinate,
        routes::coordinates::delete_coordinate,
        routes::users::list_users,
        routes::users::create_user,
        routes::users::get_user,
        routes::users::update_user,
        routes::users::delete_user,
        routes::statistics::statistics_by_city,
        routes::statistics::statistics_by_country,
    ),
    components(schemas(
        Party,
        Coordinate,
        User,
        GeoFilter,
        PartyAggregate,
        dto::PartyRequest,
        dto::CoordinateRequest,
        dto::UserRequest,
    ))
)]
pub struct ApiDoc;
