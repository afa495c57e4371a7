use serde::Deserialize;

// Fields missing from a payload decode to their zero value.

/// Header block shared by every N2YO satellite response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SatelliteInfo {
    #[serde(rename = "satid")]
    pub id: u32,
    #[serde(rename = "satname")]
    pub name: String,
    #[serde(rename = "transactionscount")]
    pub transaction_count: u32,
    /// Only present on visual-passes responses
    #[serde(rename = "passescount")]
    pub pass_count: Option<u32>,
}

/// Response of the `tle` endpoint. The element set is kept as opaque text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TleRecord {
    pub info: SatelliteInfo,
    pub tle: String,
}

/// One predicted visible pass. Times are Unix epoch seconds (UTC).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PassRecord {
    #[serde(rename = "startAz")]
    pub start_azimuth: f64,
    #[serde(rename = "startAzCompass")]
    pub start_azimuth_compass: String,
    #[serde(rename = "startEl")]
    pub start_elevation: f64,
    #[serde(rename = "startUTC")]
    pub start_time: i64,
    #[serde(rename = "maxAz")]
    pub max_azimuth: f64,
    #[serde(rename = "maxAzCompass")]
    pub max_azimuth_compass: String,
    #[serde(rename = "maxEl")]
    pub max_elevation: f64,
    #[serde(rename = "maxUTC")]
    pub max_time: i64,
    #[serde(rename = "endAz")]
    pub end_azimuth: f64,
    #[serde(rename = "endAzCompass")]
    pub end_azimuth_compass: String,
    #[serde(rename = "endEl")]
    pub end_elevation: f64,
    #[serde(rename = "endUTC")]
    pub end_time: i64,
    #[serde(rename = "mag")]
    pub magnitude: f64,
    #[serde(rename = "duration")]
    pub duration_seconds: i64,
    #[serde(rename = "startVisibility")]
    pub start_visibility_time: i64,
}

/// Response of the `visualpasses` endpoint, passes in chronological order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualPassesResponse {
    pub info: SatelliteInfo,
    pub passes: Vec<PassRecord>,
}

impl VisualPassesResponse {
    /// True when the reported pass count disagrees with the decoded list
    pub fn count_mismatch(&self) -> bool {
        self.info
            .pass_count
            .is_some_and(|n| n as usize != self.passes.len())
    }
}
