use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::sync::Arc;

use crate::chart::ZodiacSign;
use crate::horoscope::error::HoroscopeError;
use crate::horoscope::types::{Horoscope, Language};

/// One provider of daily horoscope text.
#[async_trait]
pub trait HoroscopeSource: Send + Sync {
    fn name(&self) -> &str;

    /// `Ok(None)` when the source answered but had nothing for this sign.
    async fn fetch(&self, sign: ZodiacSign) -> Result<Option<Horoscope>, HoroscopeError>;
}

fn check_status(source_name: &str, response: Response) -> Result<Response, HoroscopeError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(HoroscopeError::Status {
            source_name: source_name.to_string(),
            status: status.as_u16(),
        })
    }
}

fn non_empty(text: Option<String>, language: Language) -> Option<Horoscope> {
    text.filter(|t| !t.trim().is_empty())
        .map(|text| Horoscope { text, language })
}

pub struct HoroscopeAppSource {
    client: Client,
    base_url: String,
}

impl HoroscopeAppSource {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct HoroscopeAppResponse {
    data: HoroscopeAppData,
}

#[derive(Deserialize)]
struct HoroscopeAppData {
    horoscope_data: Option<String>,
}

#[async_trait]
impl HoroscopeSource for HoroscopeAppSource {
    fn name(&self) -> &str {
        "horoscope-app-api"
    }

    async fn fetch(&self, sign: ZodiacSign) -> Result<Option<Horoscope>, HoroscopeError> {
        let response = self
            .client
            .get(format!("{}/api/v1/get-horoscope/daily", self.base_url))
            .query(&[("sign", sign.key()), ("day", "today")])
            .send()
            .await?;
        let body: HoroscopeAppResponse = check_status(self.name(), response)?.json().await?;
        Ok(non_empty(body.data.horoscope_data, Language::English))
    }
}

pub struct AztroSource {
    client: Client,
    base_url: String,
}

impl AztroSource {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct AztroResponse {
    description: Option<String>,
}

#[async_trait]
impl HoroscopeSource for AztroSource {
    fn name(&self) -> &str {
        "aztro"
    }

    async fn fetch(&self, sign: ZodiacSign) -> Result<Option<Horoscope>, HoroscopeError> {
        let response = self
            .client
            .post(format!("{}/", self.base_url))
            .query(&[("sign", sign.key()), ("day", "today")])
            .send()
            .await?;
        let body: AztroResponse = check_status(self.name(), response)?.json().await?;
        Ok(non_empty(body.description, Language::English))
    }
}

/// Turkish daily readings, addressed by ASCII Turkish sign slug.
pub struct BurcYorumlariSource {
    client: Client,
    base_url: String,
}

impl BurcYorumlariSource {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct BurcEntry {
    #[serde(rename = "GunlukYorum")]
    daily: Option<String>,
}

#[async_trait]
impl HoroscopeSource for BurcYorumlariSource {
    fn name(&self) -> &str {
        "burc-yorumlari"
    }

    async fn fetch(&self, sign: ZodiacSign) -> Result<Option<Horoscope>, HoroscopeError> {
        let response = self
            .client
            .get(format!("{}/get/{}", self.base_url, sign.turkish_slug()))
            .send()
            .await?;
        let entries: Vec<BurcEntry> = check_status(self.name(), response)?.json().await?;
        Ok(non_empty(
            entries.into_iter().next().and_then(|e| e.daily),
            Language::Turkish,
        ))
    }
}

/// Try each source in order; the first non-empty text wins.
pub async fn fetch_first(
    sources: &[Arc<dyn HoroscopeSource>],
    sign: ZodiacSign,
) -> Result<Horoscope, HoroscopeError> {
    for source in sources {
        match source.fetch(sign).await {
            Ok(Some(horoscope)) => {
                log::debug!("Horoscope for {} served by {}", sign.key(), source.name());
                return Ok(horoscope);
            }
            Ok(None) => log::debug!("{} had no text for {}", source.name(), sign.key()),
            Err(e) => log::warn!("Horoscope source {} failed: {}", source.name(), e),
        }
    }
    Err(HoroscopeError::NoData)
}
