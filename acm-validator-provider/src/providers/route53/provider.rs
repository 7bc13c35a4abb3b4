//! Route 53 `HostedZoneSource` and `RecordSetSink` implementations

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::strip_resource_prefix;
use crate::traits::{ErrorContext, HostedZoneSource, RecordSetSink};
use crate::types::{ChangeInfo, HostedZone, RecordSetChange};

use super::types::{
    ChangeResourceRecordSetsResponse, ListHostedZonesResponse, Route53HostedZone, UpsertRequest,
};
use super::{ROUTE53_API_VERSION, Route53Provider};

/// Comment attached to every change batch.
const CHANGE_COMMENT: &str = "ACM DNS validation record";

impl Route53Provider {
    fn convert_hosted_zone(zone: Route53HostedZone) -> HostedZone {
        HostedZone {
            id: strip_resource_prefix(&zone.id),
            name: zone.name,
            private_zone: zone.config.is_some_and(|c| c.private_zone),
            record_count: zone.resource_record_set_count,
        }
    }
}

#[async_trait]
impl HostedZoneSource for Route53Provider {
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        let path = format!("/{ROUTE53_API_VERSION}/hostedzone");
        let response: ListHostedZonesResponse = self.get(&path, ErrorContext::default()).await?;

        if response.is_truncated {
            log::warn!(
                "ListHostedZones is truncated (next marker {:?}); only the first {} zones are considered",
                response.next_marker,
                response.hosted_zones.items.len()
            );
        }

        Ok(response
            .hosted_zones
            .items
            .into_iter()
            .map(Self::convert_hosted_zone)
            .collect())
    }
}

#[async_trait]
impl RecordSetSink for Route53Provider {
    async fn upsert_record_set(&self, change: &RecordSetChange) -> Result<ChangeInfo> {
        let zone_id = strip_resource_prefix(&change.zone_id);
        let path = format!(
            "/{ROUTE53_API_VERSION}/hostedzone/{}/rrset/",
            urlencoding::encode(&zone_id)
        );
        let body = UpsertRequest {
            name: &change.name,
            record_type: &change.record_type,
            ttl: change.ttl,
            value: &change.value,
            comment: Some(CHANGE_COMMENT),
        }
        .to_xml()?;

        let ctx = ErrorContext {
            zone_id: Some(zone_id),
            record_name: Some(change.name.clone()),
            ..Default::default()
        };
        let response: ChangeResourceRecordSetsResponse = self.post(&path, body, ctx).await?;

        let info = response.change_info;
        Ok(ChangeInfo {
            id: strip_resource_prefix(&info.id),
            status: info.status,
            submitted_at: info.submitted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::route53::types::HostedZoneConfig;

    #[test]
    fn hosted_zone_id_prefix_is_stripped() {
        let zone = Route53Provider::convert_hosted_zone(Route53HostedZone {
            id: "/hostedzone/Z1D633PJN98FT9".to_string(),
            name: "example.com.".to_string(),
            config: Some(HostedZoneConfig { private_zone: true }),
            resource_record_set_count: Some(3),
        });
        assert_eq!(zone.id, "Z1D633PJN98FT9");
        assert!(zone.private_zone);
        assert_eq!(zone.record_count, Some(3));
    }

    #[test]
    fn hosted_zone_without_config_is_public() {
        let zone = Route53Provider::convert_hosted_zone(Route53HostedZone {
            id: "Z2".to_string(),
            name: "b.example.com.".to_string(),
            config: None,
            resource_record_set_count: None,
        });
        assert!(!zone.private_zone);
        assert_eq!(zone.id, "Z2");
    }
}
