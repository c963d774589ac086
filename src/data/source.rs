//! Data source abstraction and the HTTP implementation backed by the NYC open-data API.

use crate::data::decode::{decode_records, Decoded};
use crate::data::model::{SatScore, School};
use crate::error::{Dataset, Result, SchoolsError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// NYC DOE high school directory.
pub const SCHOOLS_URL: &str = "https://data.cityofnewyork.us/resource/s3k6-pzi2.json";

/// NYC DOE SAT results.
pub const SAT_SCORES_URL: &str = "https://data.cityofnewyork.us/resource/f9bf-2cp4.json";

/// Where each collection is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub schools: String,
    pub sat_scores: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            schools: SCHOOLS_URL.to_string(),
            sat_scores: SAT_SCORES_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn url(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Schools => &self.schools,
            Dataset::SatScores => &self.sat_scores,
        }
    }
}

/// Provider of the two collections.
///
/// Implementations must be shareable across tasks: both collections are fetched
/// concurrently from the same source.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_schools(&self) -> Result<Decoded<School>>;

    async fn fetch_scores(&self) -> Result<Decoded<SatScore>>;
}

/// Unauthenticated GET against the open-data endpoints.
///
/// No timeout is configured: a request that never completes leaves its collection
/// unloaded.
pub struct HttpSource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpSource {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nycschools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SchoolsError::other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch<T>(&self, dataset: Dataset) -> Result<Decoded<T>>
    where
        T: DeserializeOwned + crate::data::model::Keyed,
    {
        let url = self.endpoints.url(dataset);
        log::info!("fetching {dataset} from {url}");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SchoolsError::fetch(dataset, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SchoolsError::fetch(
                dataset,
                format!("HTTP status {}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SchoolsError::fetch(dataset, format!("failed to read body: {e}")))?;

        let decoded = decode_records::<T>(dataset, &body)?;
        log::info!(
            "{dataset}: {} records accepted, {} rejected",
            decoded.records.len(),
            decoded.rejected
        );
        Ok(decoded)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_schools(&self) -> Result<Decoded<School>> {
        self.fetch(Dataset::Schools).await
    }

    async fn fetch_scores(&self) -> Result<Decoded<SatScore>> {
        self.fetch(Dataset::SatScores).await
    }
}
