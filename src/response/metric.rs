use std::collections::HashMap;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};

/// The normalized status category a query is answered with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter)]
pub enum CanonicalMetric {
    FullStatus,
    Latitude,
    Longitude,
    Altitude,
    Speed,
    VelocityVector,
    Size,
    Weight,
    Mass,
    Volume,
    OrbitalPeriod,
}

impl CanonicalMetric {
    /// Maps the raw metric slot value to exactly one canonical metric.
    ///
    /// Matching is exact and case-sensitive. An absent or unrecognized value
    /// resolves to `FullStatus`.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|value| METRIC_SYNONYM_LOOKUP.get(value).copied())
            .unwrap_or(CanonicalMetric::FullStatus)
    }

    /// `true` for metrics answered with fixed reference text.
    pub fn is_static(self) -> bool {
        matches!(
            self,
            CanonicalMetric::Size
                | CanonicalMetric::Weight
                | CanonicalMetric::Mass
                | CanonicalMetric::Volume
                | CanonicalMetric::OrbitalPeriod
        )
    }
}

/// Accepted slot values and the metric each one selects.
pub(super) const METRIC_SYNONYMS: [(&str, CanonicalMetric); 18] = [
    ("location", CanonicalMetric::FullStatus),
    ("position", CanonicalMetric::FullStatus),
    ("status", CanonicalMetric::FullStatus),
    ("status update", CanonicalMetric::FullStatus),
    ("update", CanonicalMetric::FullStatus),
    ("latitude", CanonicalMetric::Latitude),
    ("longitude", CanonicalMetric::Longitude),
    ("altitude", CanonicalMetric::Altitude),
    ("elevation", CanonicalMetric::Altitude),
    ("speed", CanonicalMetric::Speed),
    ("velocity", CanonicalMetric::VelocityVector),
    ("size", CanonicalMetric::Size),
    ("dimensions", CanonicalMetric::Size),
    ("weight", CanonicalMetric::Weight),
    ("mass", CanonicalMetric::Mass),
    ("volume", CanonicalMetric::Volume),
    ("orbital period", CanonicalMetric::OrbitalPeriod),
    ("period", CanonicalMetric::OrbitalPeriod),
];

static METRIC_SYNONYM_LOOKUP: LazyLock<HashMap<&'static str, CanonicalMetric>> =
    LazyLock::new(|| METRIC_SYNONYMS.into_iter().collect());
