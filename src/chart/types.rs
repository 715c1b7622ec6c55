use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::chart::angles::round2_below;
use crate::ephemeris::CelestialBody;

/// Zodiac signs in zodiacal order from Aries. Serialized with Turkish names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, ToSchema)]
#[strum(serialize_all = "lowercase")]
pub enum ZodiacSign {
    #[serde(rename = "Koç")]
    Aries,
    #[serde(rename = "Boğa")]
    Taurus,
    #[serde(rename = "İkizler")]
    Gemini,
    #[serde(rename = "Yengeç")]
    Cancer,
    #[serde(rename = "Aslan")]
    Leo,
    #[serde(rename = "Başak")]
    Virgo,
    #[serde(rename = "Terazi")]
    Libra,
    #[serde(rename = "Akrep")]
    Scorpio,
    #[serde(rename = "Yay")]
    Sagittarius,
    #[serde(rename = "Oğlak")]
    Capricorn,
    #[serde(rename = "Kova")]
    Aquarius,
    #[serde(rename = "Balık")]
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign containing a longitude that is already normalized to [0, 360).
    pub fn from_normalized(longitude: f64) -> Self {
        Self::ALL[(longitude / 30.0).floor() as usize % 12]
    }

    /// Lowercase English key, e.g. `aries`.
    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Koç",
            ZodiacSign::Taurus => "Boğa",
            ZodiacSign::Gemini => "İkizler",
            ZodiacSign::Cancer => "Yengeç",
            ZodiacSign::Leo => "Aslan",
            ZodiacSign::Virgo => "Başak",
            ZodiacSign::Libra => "Terazi",
            ZodiacSign::Scorpio => "Akrep",
            ZodiacSign::Sagittarius => "Yay",
            ZodiacSign::Capricorn => "Oğlak",
            ZodiacSign::Aquarius => "Kova",
            ZodiacSign::Pisces => "Balık",
        }
    }

    /// ASCII-folded Turkish name, as used in Turkish horoscope URLs.
    pub fn turkish_slug(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "koc",
            ZodiacSign::Taurus => "boga",
            ZodiacSign::Gemini => "ikizler",
            ZodiacSign::Cancer => "yengec",
            ZodiacSign::Leo => "aslan",
            ZodiacSign::Virgo => "basak",
            ZodiacSign::Libra => "terazi",
            ZodiacSign::Scorpio => "akrep",
            ZodiacSign::Sagittarius => "yay",
            ZodiacSign::Capricorn => "oglak",
            ZodiacSign::Aquarius => "kova",
            ZodiacSign::Pisces => "balik",
        }
    }

    /// English key (`aries`), Turkish name (`Koç`) or Turkish slug (`koc`),
    /// case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|sign| {
            sign.key() == wanted
                || sign.turkish_slug() == wanted
                || sign.display_name().to_lowercase() == wanted
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, ToSchema)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
}

impl AspectKind {
    /// Detection order for every body pair.
    pub const TABLE: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Sextile,
    ];

    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sextile => 60.0,
        }
    }
}

/// Derived placement of a body on the zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
    pub house: u8,
    pub retrograde: bool,
}

/// One chart row. Numeric fields are absent when the lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BodyPosition {
    pub key: CelestialBody,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<ZodiacSign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_degree: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrograde: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub longitude: Option<f64>,
}

impl BodyPosition {
    pub fn placed(body: CelestialBody, placement: Placement) -> Self {
        Self {
            key: body,
            name: body.display_name().to_string(),
            sign: Some(placement.sign),
            degree: Some(placement.degree),
            absolute_degree: Some(round2_below(placement.longitude, 360.0)),
            house: Some(placement.house),
            retrograde: Some(placement.retrograde),
            error: None,
            longitude: Some(placement.longitude),
        }
    }

    pub fn failed(body: CelestialBody, error: String) -> Self {
        Self {
            key: body,
            name: body.display_name().to_string(),
            sign: None,
            degree: None,
            absolute_degree: None,
            house: None,
            retrograde: None,
            error: Some(error),
            longitude: None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.error.is_none() && self.longitude.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Aspect {
    /// Display label, e.g. `Güneş & Ay`
    pub between: String,
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    pub aspect: AspectKind,
    pub orb: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChartRequest {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Local clock time, `HH:MM`
    pub time: String,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lon: f64,
    /// UTC offset, `±HH:MM`; defaults to `+00:00`
    #[serde(default)]
    pub tz: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartResponse {
    pub chart: Vec<BodyPosition>,
    pub aspects: Vec<Aspect>,
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub location: Location,
}

// Coordinates arrive as JSON numbers or numeric strings.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(v) => Ok(v),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_periodic_in_longitude() {
        use crate::chart::angles::normalize;
        for lon in [0.0, 15.5, 29.999, 30.0, 181.2, 359.9] {
            let sign = ZodiacSign::from_normalized(normalize(lon));
            for k in [-3.0, -1.0, 1.0, 2.0, 10.0] {
                assert_eq!(ZodiacSign::from_normalized(normalize(lon + 360.0 * k)), sign);
            }
        }
        assert_eq!(ZodiacSign::from_normalized(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_normalized(280.37), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::from_normalized(359.99), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_parsing_accepts_english_and_turkish() {
        assert_eq!(ZodiacSign::parse("aries"), Some(ZodiacSign::Aries));
        assert_eq!(ZodiacSign::parse("Capricorn"), Some(ZodiacSign::Capricorn));
        assert_eq!(ZodiacSign::parse("Balık"), Some(ZodiacSign::Pisces));
        assert_eq!(ZodiacSign::parse("oglak"), Some(ZodiacSign::Capricorn));
        assert_eq!(ZodiacSign::parse("ophiuchus"), None);
    }

    #[test]
    fn signs_serialize_with_turkish_names() {
        let json = serde_json::to_string(&ZodiacSign::Gemini).unwrap();
        assert_eq!(json, "\"İkizler\"");
    }

    #[test]
    fn request_accepts_string_coordinates() {
        let req: ChartRequest = serde_json::from_str(
            r#"{"date":"2000-01-01","time":"12:00","lat":"41.01","lon":28.97}"#,
        )
        .unwrap();
        assert_eq!(req.lat, 41.01);
        assert_eq!(req.lon, 28.97);
        assert!(req.tz.is_none());

        let bad = serde_json::from_str::<ChartRequest>(
            r#"{"date":"2000-01-01","time":"12:00","lat":"north","lon":0}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn failed_position_omits_numeric_fields() {
        let pos = BodyPosition::failed(CelestialBody::Mars, "no data".into());
        let json = serde_json::to_value(&pos).unwrap();
        assert_eq!(json["name"], "Mars");
        assert_eq!(json["error"], "no data");
        assert!(json.get("sign").is_none());
        assert!(json.get("house").is_none());
        assert!(json.get("longitude").is_none());
    }
}
