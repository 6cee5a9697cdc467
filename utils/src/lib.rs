pub mod query_params;
pub mod surf_logging;

pub use query_params::QueryParams;
pub use surf_logging::SurfLogging;
