mod error;
mod service;
mod sources;
mod translate;
mod types;

pub use error::HoroscopeError;
pub use service::HoroscopeService;
pub use sources::{AztroSource, BurcYorumlariSource, HoroscopeAppSource, HoroscopeSource};
pub use translate::{OpenAiTranslator, Translator};
pub use types::HoroscopeResponse;

#[cfg(test)]
pub(crate) use service::tests as test_support;
