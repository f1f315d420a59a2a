pub mod coordinates;
pub mod route;

pub use coordinates::Coordinates;
pub use route::{
    CatalogResponse, GenerateRouteRequest, GeneratedRouteResponse, RecommendRequest,
    RecommendResponse, RouteRecord,
};
