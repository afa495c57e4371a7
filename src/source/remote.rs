use std::path::PathBuf;

use reqwest::Url;

use crate::config::Dotfile;
use crate::source::error::FetchError;
use crate::source::{DataSource, Request};

pub const N2YO_BASE_URL: &str = "https://api.n2yo.com/rest/v1/satellite";

/// Live N2YO client. The dotfile is read on every fetch and all of its
/// entries are sent as query parameters.
pub struct RemoteSource {
    base_url: String,
    config_path: PathBuf,
    bypass_proxy: bool,
}

impl RemoteSource {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            base_url: N2YO_BASE_URL.to_string(),
            config_path,
            bypass_proxy: false,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self.bypass_proxy = true;
        self
    }

    pub fn build_url(&self, request: &Request, params: &Dotfile) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.base_url, request.endpoint_path());
        let mut url = Url::parse(&raw).map_err(|e| FetchError::Url(format!("{}: {}", raw, e)))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }
}

impl DataSource for RemoteSource {
    fn fetch(&self, request: &Request) -> Result<Vec<u8>, FetchError> {
        let params = Dotfile::from_file(&self.config_path)?;
        if params.get("apiKey").is_none() {
            log::warn!("No apiKey in {}", self.config_path.display());
        }
        let url = self.build_url(request, &params)?;
        // The query carries the api key, only the path is logged
        let path = url.path().to_string();

        let mut builder = reqwest::blocking::Client::builder();
        if self.bypass_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        log::info!("GET {}", path);
        let response = client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                path,
            });
        }

        let body = response.bytes()?;
        log::debug!("Received {} bytes from {}", body.len(), path);
        Ok(body.to_vec())
    }
}
