mod angles;
mod aspects;
mod computer;
mod error;
mod response;
mod service;
mod time;
mod types;

pub use error::ChartError;
pub use service::ChartService;
pub use types::{
    Aspect, AspectKind, BodyPosition, ChartRequest, ChartResponse, Location, ZodiacSign,
};
