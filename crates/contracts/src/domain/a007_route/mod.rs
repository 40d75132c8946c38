pub mod aggregate;

pub use aggregate::{GeoBounds, OptimizeRouteRequest, Route, RouteId, RouteQuery, RouteStop};
