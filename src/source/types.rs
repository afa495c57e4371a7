/// Observer location and window for visual-pass predictions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    /// Prediction window, 1 to 10 days
    pub days: u8,
    /// Minimum number of seconds the satellite must be visible
    pub min_visibility_s: u32,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            altitude_m: 0.0,
            days: 1,
            min_visibility_s: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    Tle { satellite_id: u32 },
    VisualPasses { satellite_id: u32, observer: Observer },
}

impl Request {
    pub fn satellite_id(&self) -> u32 {
        match self {
            Request::Tle { satellite_id } | Request::VisualPasses { satellite_id, .. } => {
                *satellite_id
            }
        }
    }

    /// Endpoint name, also used as the fixture file prefix
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Tle { .. } => "tle",
            Request::VisualPasses { .. } => "visualpasses",
        }
    }

    /// Path below the API base, e.g. `tle/25544`
    pub fn endpoint_path(&self) -> String {
        match self {
            Request::Tle { satellite_id } => format!("tle/{}", satellite_id),
            Request::VisualPasses {
                satellite_id,
                observer,
            } => format!(
                "visualpasses/{}/{}/{}/{}/{}/{}",
                satellite_id,
                observer.latitude_deg,
                observer.longitude_deg,
                observer.altitude_m,
                observer.days,
                observer.min_visibility_s
            ),
        }
    }
}
