//! Validation record and zone match.

use serde::{Deserialize, Serialize};

use acm_validator_provider::HostedZone;

use crate::error::{CoreError, CoreResult};

/// One DNS record that proves control of `domain`.
///
/// All four fields are non-empty; [`ValidationRecord::try_new`] is the only constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawValidationRecord")]
pub struct ValidationRecord {
    domain: String,
    name: String,
    record_type: String,
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValidationRecord {
    domain: String,
    name: String,
    record_type: String,
    value: String,
}

impl TryFrom<RawValidationRecord> for ValidationRecord {
    type Error = CoreError;

    fn try_from(raw: RawValidationRecord) -> CoreResult<Self> {
        Self::try_new(raw.domain, raw.name, raw.record_type, raw.value)
    }
}

impl ValidationRecord {
    /// Build a record, rejecting empty or whitespace-only fields.
    pub fn try_new(
        domain: impl Into<String>,
        name: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
    ) -> CoreResult<Self> {
        let record = Self {
            domain: domain.into(),
            name: name.into(),
            record_type: record_type.into(),
            value: value.into(),
        };

        for (field, content) in [
            ("domain", &record.domain),
            ("name", &record.name),
            ("type", &record.record_type),
            ("value", &record.value),
        ] {
            if content.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "validation record field '{field}' is empty"
                )));
            }
        }

        Ok(record)
    }

    /// Domain the record validates.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Fully-qualified record name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record type (`CNAME` for ACM).
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// Record value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Result of zone resolution: the chosen zone, or no match (not an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "zone", rename_all = "camelCase")]
pub enum ZoneMatch {
    /// Longest-suffix zone.
    Matched(HostedZone),
    /// No zone name is a suffix of the domain.
    NoMatch,
}

impl ZoneMatch {
    /// The matched zone, if any.
    pub fn zone(&self) -> Option<&HostedZone> {
        match self {
            Self::Matched(zone) => Some(zone),
            Self::NoMatch => None,
        }
    }
}
