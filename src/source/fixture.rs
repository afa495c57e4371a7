use std::path::{Path, PathBuf};

use crate::source::error::FetchError;
use crate::source::{DataSource, Request};

/// Reads canned responses from `<dir>/<kind>-<id>.json` instead of
/// querying the API.
pub struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn fixture_path(&self, request: &Request) -> PathBuf {
        self.dir
            .join(format!("{}-{}.json", request.kind(), request.satellite_id()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DataSource for FixtureSource {
    fn fetch(&self, request: &Request) -> Result<Vec<u8>, FetchError> {
        let path = self.fixture_path(request);
        log::debug!("Loading fixture {}", path.display());

        std::fs::read(&path).map_err(|source| FetchError::FixtureRead {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Observer;

    #[test]
    fn names_fixtures_by_kind_and_id() {
        let source = FixtureSource::new(PathBuf::from("fixtures"));
        assert_eq!(
            source.fixture_path(&Request::Tle { satellite_id: 25544 }),
            Path::new("fixtures/tle-25544.json")
        );
        assert_eq!(
            source.fixture_path(&Request::VisualPasses {
                satellite_id: 25544,
                observer: Observer::default(),
            }),
            Path::new("fixtures/visualpasses-25544.json")
        );
    }

    #[test]
    fn reads_fixture_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tle-42.json"), b"{\"tle\": \"x\"}").unwrap();

        let source = FixtureSource::new(dir.path().to_path_buf());
        let raw = source.fetch(&Request::Tle { satellite_id: 42 }).unwrap();
        assert_eq!(raw, b"{\"tle\": \"x\"}");
    }

    #[test]
    fn missing_fixture_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixtureSource::new(dir.path().to_path_buf());

        let err = source.fetch(&Request::Tle { satellite_id: 1 }).unwrap_err();
        match err {
            FetchError::FixtureRead { path, source } => {
                assert!(path.ends_with("tle-1.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
