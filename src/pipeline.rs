use std::io::{self, Write};
use std::num::ParseIntError;

use thiserror::Error;

use crate::model::{self, DecodeError};
use crate::render;
use crate::source::{DataSource, FetchError, Observer, Request};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Missing satellite ID")]
    Missing,
    #[error("Invalid satellite ID: '{input}'. {reason}")]
    Invalid {
        input: String,
        reason: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Error performing {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: FetchError,
    },
    #[error("Error decoding {what} JSON: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

/// What to query for one satellite
#[derive(Debug, Clone, Copy, Default)]
pub struct Plan {
    /// Also fetch visual passes for this observer after the TLE
    pub passes: Option<Observer>,
}

pub fn parse_satellite_id(arg: Option<&str>) -> Result<u32, InputError> {
    let input = arg.ok_or(InputError::Missing)?;
    input.parse().map_err(|reason| InputError::Invalid {
        input: input.to_string(),
        reason,
    })
}

/// Runs parse, fetch, decode and render for the TLE and, if planned, the
/// visual passes. Stops at the first failure; anything already rendered
/// stays written.
pub fn run(
    arg: Option<&str>,
    source: &dyn DataSource,
    plan: &Plan,
    out: &mut impl Write,
) -> Result<(), PipelineError> {
    let satellite_id = parse_satellite_id(arg)?;

    let request = Request::Tle { satellite_id };
    let raw = fetch(source, &request)?;
    let record = model::decode_tle(&raw).map_err(|source| PipelineError::Decode {
        what: describe(&request),
        source,
    })?;
    render::write_tle(out, &record)?;

    if let Some(observer) = plan.passes {
        let request = Request::VisualPasses {
            satellite_id,
            observer,
        };
        let raw = fetch(source, &request)?;
        let response =
            model::decode_visual_passes(&raw).map_err(|source| PipelineError::Decode {
                what: describe(&request),
                source,
            })?;
        render::write_visual_passes(out, &response)?;
    }

    out.flush()?;
    Ok(())
}

fn fetch(source: &dyn DataSource, request: &Request) -> Result<Vec<u8>, PipelineError> {
    source.fetch(request).map_err(|source| PipelineError::Fetch {
        what: describe(request),
        source,
    })
}

fn describe(request: &Request) -> &'static str {
    match request {
        Request::Tle { .. } => "TLE",
        Request::VisualPasses { .. } => "Visual Passes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory source keyed by request kind, recording every request.
    #[derive(Default)]
    struct MockSource {
        payloads: HashMap<&'static str, &'static str>,
        requests: RefCell<Vec<Request>>,
    }

    impl MockSource {
        fn with(mut self, kind: &'static str, payload: &'static str) -> Self {
            self.payloads.insert(kind, payload);
            self
        }
    }

    impl DataSource for MockSource {
        fn fetch(&self, request: &Request) -> Result<Vec<u8>, FetchError> {
            self.requests.borrow_mut().push(*request);
            match self.payloads.get(request.kind()) {
                Some(payload) => Ok(payload.as_bytes().to_vec()),
                None => Err(FetchError::FixtureRead {
                    path: format!("{}-{}.json", request.kind(), request.satellite_id()),
                    source: io::Error::from(io::ErrorKind::NotFound),
                }),
            }
        }
    }

    const TLE: &str = r#"{"info": {"satid": 25544, "satname": "SPACE STATION", "transactionscount": 4},
        "tle": "1 25544U\r\n2 25544"}"#;
    const PASSES: &str = r#"{"info": {"satid": 25544, "satname": "SPACE STATION", "transactionscount": 5, "passescount": 1},
        "passes": [{"startAz": 307.21, "startAzCompass": "NW", "duration": 635}]}"#;

    fn run_with(
        arg: Option<&str>,
        source: &MockSource,
        plan: Plan,
    ) -> (Result<(), PipelineError>, String) {
        let mut out = Vec::new();
        let result = run(arg, source, &plan, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn missing_id_does_no_io() {
        let source = MockSource::default().with("tle", TLE);
        let (result, out) = run_with(None, &source, Plan::default());

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Missing satellite ID");
        assert!(out.is_empty());
        assert!(source.requests.borrow().is_empty());
    }

    #[test]
    fn invalid_id_reports_literal_input() {
        let source = MockSource::default().with("tle", TLE);
        let (result, out) = run_with(Some("abc"), &source, Plan::default());

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Invalid satellite ID: 'abc'."), "{message}");
        assert!(out.is_empty());
        assert!(source.requests.borrow().is_empty());
    }

    #[test]
    fn negative_or_padded_id_is_invalid() {
        assert!(matches!(
            parse_satellite_id(Some("-5")),
            Err(InputError::Invalid { .. })
        ));
        assert!(matches!(
            parse_satellite_id(Some(" 25544 ")),
            Err(InputError::Invalid { .. })
        ));
        assert_eq!(parse_satellite_id(Some("25544")).unwrap(), 25544);
    }

    #[test]
    fn renders_tle_only_by_default() {
        let source = MockSource::default().with("tle", TLE).with("visualpasses", PASSES);
        let (result, out) = run_with(Some("25544"), &source, Plan::default());

        result.unwrap();
        assert!(out.starts_with("Satellite name     : SPACE STATION\n"));
        assert!(out.ends_with("TLE                : \n1 25544U\r\n2 25544\n"));
        assert_eq!(
            *source.requests.borrow(),
            vec![Request::Tle { satellite_id: 25544 }]
        );
    }

    #[test]
    fn renders_tle_then_passes() {
        let source = MockSource::default().with("tle", TLE).with("visualpasses", PASSES);
        let plan = Plan {
            passes: Some(Observer::default()),
        };
        let (result, out) = run_with(Some("25544"), &source, plan);

        result.unwrap();
        let tle_at = out.find("TLE                : ").unwrap();
        let passes_at = out.find("Passes Count       : 1").unwrap();
        assert!(tle_at < passes_at);
        assert!(out.contains("Pass  0:\n  StartUTC         : 0\n  StartAz          : 307.210000\n"));
        assert_eq!(source.requests.borrow().len(), 2);
    }

    #[test]
    fn missing_fixture_stops_before_rendering() {
        let source = MockSource::default();
        let (result, out) = run_with(Some("99999"), &source, Plan::default());

        let err = result.unwrap_err();
        assert!(matches!(err, PipelineError::Fetch { what: "TLE", .. }));
        assert!(err.to_string().starts_with("Error performing TLE: "));
        assert!(out.is_empty());
    }

    #[test]
    fn decode_failure_stops_before_rendering() {
        let source = MockSource::default().with("tle", "not json");
        let (result, out) = run_with(Some("25544"), &source, Plan::default());

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Decode { what: "TLE", .. }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn passes_failure_keeps_rendered_tle() {
        let source = MockSource::default().with("tle", TLE);
        let plan = Plan {
            passes: Some(Observer::default()),
        };
        let (result, out) = run_with(Some("25544"), &source, plan);

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Fetch {
                what: "Visual Passes",
                ..
            }
        ));
        assert!(out.contains("TLE                : "));
        assert!(!out.contains("Passes Count"));
    }

    #[test]
    fn renders_shipped_fixtures() {
        use crate::source::FixtureSource;

        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let source = FixtureSource::new(dir);
        let plan = Plan {
            passes: Some(Observer::default()),
        };

        let mut out = Vec::new();
        run(Some("25544"), &source, &plan, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Satellite ID       : 25544\n"));
        assert!(out.contains("Passes Count       : 3\n"));
        for i in 0..3 {
            assert!(out.contains(&format!("Pass {:2}:\n", i)));
        }
        assert_eq!(out.matches("  Start Visibility : ").count(), 3);
    }

    #[test]
    fn array_payload_stops_before_rendering() {
        let source = MockSource::default().with("tle", "[]");
        let (result, out) = run_with(Some("25544"), &source, Plan::default());

        assert!(matches!(
            result.unwrap_err(),
            PipelineError::Decode {
                what: "TLE",
                source: DecodeError::NotAnObject(_),
            }
        ));
        assert!(out.is_empty());
    }
}
