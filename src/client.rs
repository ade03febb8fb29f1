use serde::de::DeserializeOwned;
use std::fmt::{self, Debug};
use tracing::debug;

use crate::models::{MeasuresResponse, MetricsResponse, ProjectStatusResponse};
use crate::{Error, Measure, QualityGateStatus, Requester};

/// Metric keys a quality report needs, baked into the measures request the
/// same way the server's web UI asks for them.
const REPORT_METRIC_KEYS: &str = concat!(
    "alert_status,bugs,reliability_rating,reliability_remediation_effort,",
    "vulnerabilities,security_rating,security_remediation_effort,security_hotspots,",
    "security_review_rating,code_smells,sqale_rating,sqale_index,",
    "coverage,tests,test_success_density,duplicated_lines_density,duplicated_blocks,",
    "ncloc,ncloc_language_distribution,lines,comment_lines_density,",
    "complexity,cognitive_complexity,functions,classes,files"
);

/// Client for the measures and quality-gate read APIs of one project.
///
/// Holds a requester plus the immutable configuration identifying the project
/// (server URL, authentication token, project key, branch) and performs two
/// kinds of read-only lookups: [`measures`](MeasureClient::measures) and
/// [`quality_gate_status`](MeasureClient::quality_gate_status). Nothing is
/// cached or mutated between calls, so independent instances can serve
/// concurrent callers.
#[derive(Clone)]
pub struct MeasureClient<R> {
    requester: R,
    server_url: String,
    token: String,
    project_key: String,
    branch: String,
}

impl<R: Debug> Debug for MeasureClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The token stays out of debug output.
        f.debug_struct("MeasureClient")
            .field("requester", &self.requester)
            .field("server_url", &self.server_url)
            .field("project_key", &self.project_key)
            .field("branch", &self.branch)
            .finish_non_exhaustive()
    }
}

impl<R> MeasureClient<R> {
    /// Create a client for one project on one server.
    ///
    /// Trailing slashes on `server_url` are trimmed so the request templates
    /// can join path segments with a single `/`. All other values are
    /// interpolated into request URLs verbatim, without percent-encoding,
    /// which matches what the server accepts for its project keys and branch
    /// names.
    pub fn new(
        requester: R,
        server_url: impl Into<String>,
        token: impl Into<String>,
        project_key: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        let mut server_url = server_url.into();
        server_url.truncate(server_url.trim_end_matches('/').len());
        Self {
            requester,
            server_url,
            token: token.into(),
            project_key: project_key.into(),
            branch: branch.into(),
        }
    }

    /// Base URL of the analysis server, without a trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Token the requester authenticates with.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Key of the project being reported on.
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Branch of the project being reported on.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    fn measures_url(&self) -> String {
        format!(
            "{}/api/measures/component?component={}&branch={}&metricKeys={}",
            self.server_url, self.project_key, self.branch, REPORT_METRIC_KEYS
        )
    }

    fn quality_gate_url(&self) -> String {
        format!(
            "{}/api/qualitygates/project_status?branch={}&projectKey={}",
            self.server_url, self.branch, self.project_key
        )
    }

    fn metric_url(&self, metric_key: &str) -> String {
        format!(
            "{}/api/metrics/search?branch={}&projectKey={}&metricKeys={}",
            self.server_url, self.branch, self.project_key, metric_key
        )
    }
}

impl<R: Requester> MeasureClient<R> {
    /// Fetch all measures of the configured project.
    ///
    /// Returns the measures in the order the server listed them, neither
    /// deduplicated nor sorted. Requester failures propagate unchanged; a
    /// response without a `component.measures` array fails with
    /// [`Error::DecodeResponse`].
    pub fn measures(&self) -> Result<Vec<Measure>, Error> {
        let response: MeasuresResponse = self.fetch(&self.measures_url())?;
        let measures = response.component.measures;
        debug!(count = measures.len(), "fetched project measures");
        Ok(measures)
    }

    /// Fetch the quality-gate conditions of the configured project, keyed by
    /// metric display name.
    ///
    /// The status endpoint only carries machine keys, so every condition
    /// triggers one further lookup to resolve its human-readable metric name:
    /// `1 + C` requests for `C` conditions, issued strictly in sequence. Any
    /// failure along the way aborts the whole operation; no partial map is
    /// returned. An empty `conditions` array yields an empty map without any
    /// secondary request.
    pub fn quality_gate_status(&self) -> Result<QualityGateStatus, Error> {
        let response: ProjectStatusResponse = self.fetch(&self.quality_gate_url())?;
        let conditions = response.project_status.conditions;

        let mut statuses = QualityGateStatus::with_capacity(conditions.len());
        for condition in conditions {
            let lookup: MetricsResponse = self.fetch(&self.metric_url(&condition.metric_key))?;
            let metric = lookup
                .metrics
                .into_iter()
                .next()
                .ok_or_else(|| Error::UnknownMetric(condition.metric_key))?;
            statuses.insert(metric.name, condition.status);
        }
        debug!(conditions = statuses.len(), "resolved quality gate conditions");
        Ok(statuses)
    }

    /// One round trip: request the URL and decode the document it returns.
    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        debug!(url, "requesting");
        let document = self.requester.request(url)?;
        serde_json::from_value(document).map_err(Error::DecodeResponse)
    }
}
