use serde::Serialize;
use strum_macros::AsRefStr;
use utoipa::ToSchema;

/// Bodies tracked in a chart, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 10] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
    ];

    /// Lookup key used by ephemeris data sets.
    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "Güneş",
            CelestialBody::Moon => "Ay",
            CelestialBody::Mercury => "Merkür",
            CelestialBody::Venus => "Venüs",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jüpiter",
            CelestialBody::Saturn => "Satürn",
            CelestialBody::Uranus => "Uranüs",
            CelestialBody::Neptune => "Neptün",
            CelestialBody::Pluto => "Plüton",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase_english() {
        let keys: Vec<_> = CelestialBody::ALL.iter().map(|b| b.key()).collect();
        assert_eq!(
            keys,
            vec![
                "sun", "moon", "mercury", "venus", "mars", "jupiter", "saturn", "uranus",
                "neptune", "pluto"
            ]
        );
    }

    #[test]
    fn display_names_are_turkish() {
        assert_eq!(CelestialBody::Sun.display_name(), "Güneş");
        assert_eq!(CelestialBody::Pluto.display_name(), "Plüton");
    }
}
