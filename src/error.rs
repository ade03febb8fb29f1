use std::error::Error as StdError;

/// Errors surfaced by the measure client and the requester it drives.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The server received the request but judged it invalid. Produced by
    /// requester implementations.
    ///
    /// The payload is the server's own description of the problem.
    #[error("the server rejected the request: {0}")]
    BadRequest(String),

    /// The server could not be contacted at all. Produced by requester
    /// implementations.
    #[error("the server could not be reached: {0}")]
    Unavailable(Box<dyn StdError + Send + Sync + 'static>),

    /// A response arrived but did not match the expected shape, for example a
    /// measures listing without a `component.measures` array. Produced by the
    /// client's decoding step.
    #[error("decoding the server response failed: {0}")]
    DecodeResponse(serde_json::Error),

    /// A per-metric lookup returned an empty `metrics` array, so the metric
    /// key could not be resolved to a display name.
    #[error("no metric named {0:?} is known to the server")]
    UnknownMetric(String),
}
