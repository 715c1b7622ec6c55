use std::sync::Arc;

use crate::chart::ZodiacSign;
use crate::horoscope::error::HoroscopeError;
use crate::horoscope::sources::{fetch_first, HoroscopeSource};
use crate::horoscope::translate::Translator;
use crate::horoscope::types::{HoroscopeResponse, Language};

pub struct HoroscopeService {
    sources: Vec<Arc<dyn HoroscopeSource>>,
    translator: Option<Arc<dyn Translator>>,
}

impl HoroscopeService {
    pub fn new(
        sources: Vec<Arc<dyn HoroscopeSource>>,
        translator: Option<Arc<dyn Translator>>,
    ) -> Self {
        Self {
            sources,
            translator,
        }
    }

    /// Fetch today's text for `sign` and translate it into Turkish if needed.
    pub async fn translated(&self, sign: &str) -> Result<HoroscopeResponse, HoroscopeError> {
        let zodiac =
            ZodiacSign::parse(sign).ok_or_else(|| HoroscopeError::UnknownSign(sign.to_string()))?;
        let horoscope = fetch_first(&self.sources, zodiac).await?;

        let translated = match horoscope.language {
            Language::Turkish => horoscope.text.clone(),
            Language::English => {
                let translator = self.translator.as_ref().ok_or_else(|| {
                    HoroscopeError::Translation("no translator configured".to_string())
                })?;
                translator.translate(&horoscope.text).await?
            }
        };

        Ok(HoroscopeResponse {
            sign: title_case(sign.trim()),
            original: horoscope.text,
            translated,
        })
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
