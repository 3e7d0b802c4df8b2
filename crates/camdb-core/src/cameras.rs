use serde::{Deserialize, Serialize};

/// A normalized traffic-camera entry.
///
/// `latitude` and `longitude` are carried through exactly as they appear in
/// the source data; they are never parsed into floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraRecord {
    /// Numeric id taken from `code`; `0` when no number could be extracted.
    pub number: u32,
    pub code: String,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

impl CameraRecord {
    /// Display column for this camera, derived from its number.
    #[must_use]
    pub fn column(&self) -> CameraColumn {
        CameraColumn::classify(self.number)
    }
}

/// One data row of the source file before validation and parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Combined code and name text, e.g. `UTR-CM-552 Neude rijbaan`.
    pub camera: String,
    pub latitude: String,
    pub longitude: String,
}

/// The four columns the map UI groups cameras into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraColumn {
    /// Number divisible by 3 only.
    Fizz,
    /// Number divisible by 5 only.
    Buzz,
    /// Number divisible by both 3 and 5.
    FizzBuzz,
    Other,
}

impl CameraColumn {
    #[must_use]
    pub fn classify(number: u32) -> Self {
        match (number % 3 == 0, number % 5 == 0) {
            (true, true) => CameraColumn::FizzBuzz,
            (true, false) => CameraColumn::Fizz,
            (false, true) => CameraColumn::Buzz,
            (false, false) => CameraColumn::Other,
        }
    }
}
