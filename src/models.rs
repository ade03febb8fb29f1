use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single named metric value reported by the server for a project.
///
/// Only `metricKey` is guaranteed to be present; everything else the server
/// includes is carried along unchanged so the report layer sees the full
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Machine key of the metric, for example `coverage`.
    pub metric_key: String,

    /// Reported value, if the server computed one. The server sends values as
    /// strings regardless of the metric's type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the value is the best achievable one for this metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_value: Option<bool>,

    /// Any further fields the server returned, verbatim.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Quality-gate evaluation keyed by metric display name.
///
/// Entries appear in the order the server listed the conditions. Statuses are
/// the server's own strings (`"OK"`, `"ERROR"`, `"WARN"`). Should the server
/// report two conditions resolving to the same name, the last status wins
/// while the entry keeps its original position.
pub type QualityGateStatus = IndexMap<String, String>;

/// Envelope of the measures listing: `{ "component": { "measures": [..] } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct MeasuresResponse {
    pub(crate) component: ComponentMeasures,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComponentMeasures {
    pub(crate) measures: Vec<Measure>,
}

/// Envelope of the quality-gate status: `{ "projectStatus": { "conditions": [..] } }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectStatusResponse {
    pub(crate) project_status: ProjectStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectStatus {
    pub(crate) conditions: Vec<Condition>,
}

/// One metric-threshold check within the quality gate. The server sends more
/// fields (comparator, thresholds, actual value); only the two used for the
/// report are decoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Condition {
    pub(crate) status: String,
    pub(crate) metric_key: String,
}

/// Envelope of the per-metric lookup: `{ "metrics": [ { "name": .. } ] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct MetricsResponse {
    pub(crate) metrics: Vec<MetricMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetricMeta {
    pub(crate) name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn measure_keeps_unknown_fields() {
        let measure: Measure = serde_json::from_value(json!({
            "metricKey": "coverage",
            "value": "87.3",
            "bestValue": false,
            "period": { "index": 1, "value": "3.5" },
        }))
        .unwrap();

        assert_eq!("coverage", measure.metric_key);
        assert_eq!(Some("87.3".into()), measure.value);
        assert_eq!(Some(false), measure.best_value);
        assert_eq!(json!({ "index": 1, "value": "3.5" }), measure.other["period"]);
    }

    #[test]
    fn measure_requires_metric_key() {
        serde_json::from_value::<Measure>(json!({ "value": "87.3" })).unwrap_err();
    }

    #[test]
    fn serialization_format() {
        let measure = Measure {
            metric_key: "ncloc".into(),
            value: Some("1267".into()),
            best_value: None,
            other: Map::new(),
        };
        let serialized = serde_json::to_string(&measure).unwrap();
        let expected = "{\"metricKey\":\"ncloc\",\"value\":\"1267\"}";
        assert_eq!(expected, serialized);
    }

    #[test]
    fn conditions_decode_ignores_extra_fields() {
        let response: ProjectStatusResponse = serde_json::from_value(json!({
            "projectStatus": {
                "status": "ERROR",
                "conditions": [
                    {
                        "status": "ERROR",
                        "metricKey": "new_coverage",
                        "comparator": "LT",
                        "errorThreshold": "85",
                        "actualValue": "82.5",
                    },
                ],
            },
        }))
        .unwrap();

        let conditions = response.project_status.conditions;
        assert_eq!(1, conditions.len());
        assert_eq!("ERROR", conditions[0].status);
        assert_eq!("new_coverage", conditions[0].metric_key);
    }

    #[test]
    fn duplicate_names_keep_first_position() {
        let mut statuses = QualityGateStatus::new();
        statuses.insert("Coverage".into(), "OK".into());
        statuses.insert("Blocker Issues".into(), "OK".into());
        statuses.insert("Coverage".into(), "ERROR".into());

        let entries: Vec<_> = statuses.iter().collect();
        assert_eq!(2, entries.len());
        assert_eq!(("Coverage", "ERROR"), (entries[0].0.as_str(), entries[0].1.as_str()));
        assert_eq!(("Blocker Issues", "OK"), (entries[1].0.as_str(), entries[1].1.as_str()));
    }
}
