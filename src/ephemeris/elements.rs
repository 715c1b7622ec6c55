use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::ephemeris::error::EphemerisError;

const EMBEDDED_ELEMENTS: &str = include_str!("../../data/elements.yaml");

/// One orbital element as `[value at J2000.0, rate per Julian century]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Element(pub f64, pub f64);

impl Element {
    pub fn at(&self, centuries: f64) -> f64 {
        self.0 + self.1 * centuries
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: Element,
    pub eccentricity: Element,
    pub inclination: Element,
    pub mean_longitude: Element,
    pub perihelion_longitude: Element,
    pub node_longitude: Element,
}

/// Element table plus the calendar years it is valid for.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSet {
    pub valid_from_year: i32,
    pub valid_to_year: i32,
    pub bodies: HashMap<String, OrbitalElements>,
}

impl ElementSet {
    /// The element table compiled into the binary.
    pub fn embedded() -> Result<Self, EphemerisError> {
        Self::parse(EMBEDDED_ELEMENTS, "embedded")
    }

    /// Load an element table from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, EphemerisError> {
        if !path.exists() {
            return Err(EphemerisError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let source_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self::parse(&content, &source_name)
    }

    fn parse(content: &str, source_name: &str) -> Result<Self, EphemerisError> {
        let invalid = |message: String| EphemerisError::InvalidElements {
            source_name: source_name.to_string(),
            message,
        };

        let set: ElementSet = serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?;

        if set.valid_from_year > set.valid_to_year {
            return Err(invalid(format!(
                "empty validity range {}-{}",
                set.valid_from_year, set.valid_to_year
            )));
        }
        for (key, el) in &set.bodies {
            let e = el.eccentricity.0;
            if !(0.0..1.0).contains(&e) {
                return Err(invalid(format!("{}: eccentricity {} not elliptic", key, e)));
            }
            if el.semi_major_axis.0 <= 0.0 {
                return Err(invalid(format!("{}: non-positive semi-major axis", key)));
            }
        }

        Ok(set)
    }

    pub fn get(&self, key: &str) -> Result<&OrbitalElements, EphemerisError> {
        self.bodies
            .get(key)
            .ok_or_else(|| EphemerisError::UnknownBody(key.to_string()))
    }
}
