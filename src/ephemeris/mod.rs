mod body;
mod elements;
mod error;
mod kepler;
mod moon;
mod provider;
mod timescale;

pub use body::CelestialBody;
pub use error::EphemerisError;
pub use provider::{EphemerisProvider, KeplerianEphemeris};
