//! Route 53 API type definition
//!
//! Request and response documents go through `quick-xml` serde. On the response side the
//! root element name is not checked, only its children.

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

use super::{ROUTE53_SERVICE, ROUTE53_XMLNS};

// ============ Hosted zones ============

/// `ListHostedZonesResponse`
#[derive(Debug, Deserialize)]
pub struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZoneList,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
}

/// `<HostedZones>` wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct HostedZoneList {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<Route53HostedZone>,
}

/// One `<HostedZone>` element.
#[derive(Debug, Deserialize)]
pub struct Route53HostedZone {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Config")]
    pub config: Option<HostedZoneConfig>,
    #[serde(rename = "ResourceRecordSetCount")]
    pub resource_record_set_count: Option<u64>,
}

/// `<Config>` of a hosted zone.
#[derive(Debug, Deserialize)]
pub struct HostedZoneConfig {
    #[serde(rename = "PrivateZone", default)]
    pub private_zone: bool,
}

// ============ Record changes ============

/// `ChangeResourceRecordSetsResponse`
#[derive(Debug, Deserialize)]
pub struct ChangeResourceRecordSetsResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: Route53ChangeInfo,
}

/// `<ChangeInfo>` element.
#[derive(Debug, Deserialize)]
pub struct Route53ChangeInfo {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SubmittedAt")]
    pub submitted_at: Option<String>,
}

/// Single UPSERT change of one single-value record set.
#[derive(Debug)]
pub struct UpsertRequest<'a> {
    pub name: &'a str,
    pub record_type: &'a str,
    pub ttl: u32,
    pub value: &'a str,
    pub comment: Option<&'a str>,
}

impl UpsertRequest<'_> {
    /// Serialize as a `ChangeResourceRecordSetsRequest` document.
    pub fn to_xml(&self) -> Result<String> {
        let document = ChangeResourceRecordSetsRequest {
            xmlns: ROUTE53_XMLNS,
            change_batch: ChangeBatch {
                comment: self.comment,
                changes: Changes {
                    change: vec![Change {
                        action: "UPSERT",
                        resource_record_set: ResourceRecordSet {
                            name: self.name,
                            record_type: self.record_type,
                            ttl: self.ttl,
                            resource_records: ResourceRecords {
                                resource_record: vec![ResourceRecordValue { value: self.value }],
                            },
                        },
                    }],
                },
            },
        };

        let body =
            quick_xml::se::to_string(&document).map_err(|e| ProviderError::SerializationError {
                provider: ROUTE53_SERVICE.to_string(),
                detail: e.to_string(),
            })?;
        Ok(format!(r#"<?xml version="1.0" encoding="UTF-8"?>{body}"#))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename = "ChangeResourceRecordSetsRequest")]
struct ChangeResourceRecordSetsRequest<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    change_batch: ChangeBatch<'a>,
}

#[derive(Debug, Serialize)]
struct ChangeBatch<'a> {
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(rename = "Changes")]
    changes: Changes<'a>,
}

#[derive(Debug, Serialize)]
struct Changes<'a> {
    #[serde(rename = "Change")]
    change: Vec<Change<'a>>,
}

#[derive(Debug, Serialize)]
struct Change<'a> {
    #[serde(rename = "Action")]
    action: &'static str,
    #[serde(rename = "ResourceRecordSet")]
    resource_record_set: ResourceRecordSet<'a>,
}

#[derive(Debug, Serialize)]
struct ResourceRecordSet<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Type")]
    record_type: &'a str,
    #[serde(rename = "TTL")]
    ttl: u32,
    #[serde(rename = "ResourceRecords")]
    resource_records: ResourceRecords<'a>,
}

#[derive(Debug, Serialize)]
struct ResourceRecords<'a> {
    #[serde(rename = "ResourceRecord")]
    resource_record: Vec<ResourceRecordValue<'a>>,
}

#[derive(Debug, Serialize)]
struct ResourceRecordValue<'a> {
    #[serde(rename = "Value")]
    value: &'a str,
}

// ============ Errors ============

/// Error document. Covers both `<ErrorResponse><Error>..</Error></ErrorResponse>` and
/// `<InvalidChangeBatch><Messages>..</Messages></InvalidChangeBatch>`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: Option<ErrorDetail>,
    #[serde(rename = "Messages")]
    pub messages: Option<ErrorMessages>,
}

/// `<Error>` element.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

/// `<Messages>` of an `InvalidChangeBatch` document.
#[derive(Debug, Deserialize)]
pub struct ErrorMessages {
    #[serde(rename = "Message", default)]
    pub items: Vec<String>,
}

impl ErrorResponse {
    /// Error code and message, if the document carried either shape.
    pub fn into_code_and_message(self) -> Option<(String, String)> {
        if let Some(messages) = self.messages {
            return Some(("InvalidChangeBatch".to_string(), messages.items.join("; ")));
        }
        let error = self.error?;
        Some((error.code?, error.message.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_hosted_zones_response() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListHostedZonesResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <HostedZones>
    <HostedZone>
      <Id>/hostedzone/Z1</Id>
      <Name>example.com.</Name>
      <CallerReference>ref-1</CallerReference>
      <Config><PrivateZone>false</PrivateZone></Config>
      <ResourceRecordSetCount>4</ResourceRecordSetCount>
    </HostedZone>
    <HostedZone>
      <Id>/hostedzone/Z2</Id>
      <Name>b.example.com.</Name>
      <CallerReference>ref-2</CallerReference>
      <Config><Comment>internal</Comment><PrivateZone>true</PrivateZone></Config>
      <ResourceRecordSetCount>2</ResourceRecordSetCount>
    </HostedZone>
  </HostedZones>
  <IsTruncated>true</IsTruncated>
  <NextMarker>Z3</NextMarker>
  <MaxItems>2</MaxItems>
</ListHostedZonesResponse>"#;

        let resp: ListHostedZonesResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(resp.hosted_zones.items.len(), 2);
        assert_eq!(resp.hosted_zones.items[1].name, "b.example.com.");
        assert!(resp.hosted_zones.items[1].config.as_ref().unwrap().private_zone);
        assert_eq!(resp.hosted_zones.items[0].resource_record_set_count, Some(4));
        assert!(resp.is_truncated);
        assert_eq!(resp.next_marker.as_deref(), Some("Z3"));
    }

    #[test]
    fn upsert_request_escapes_text() {
        let xml = UpsertRequest {
            name: "_x.example.com.",
            record_type: "TXT",
            ttl: 600,
            value: "a<b&c",
            comment: None,
        }
        .to_xml()
        .unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><ChangeResourceRecordSetsRequest xmlns="https://route53.amazonaws.com/doc/2013-04-01/">"#));
        assert!(xml.contains("<Action>UPSERT</Action>"));
        assert!(xml.contains("<TTL>600</TTL>"));
        assert!(xml.contains("<Value>a&lt;b&amp;c</Value>"));
        assert!(!xml.contains("<Comment>"));
    }

    #[test]
    fn upsert_request_document_layout() {
        let xml = UpsertRequest {
            name: "_a.b.example.com.",
            record_type: "CNAME",
            ttl: 300,
            value: "_c.acm-validations.aws.",
            comment: Some("ACM DNS validation record"),
        }
        .to_xml()
        .unwrap();

        assert!(xml.contains(concat!(
            "<ChangeBatch><Comment>ACM DNS validation record</Comment><Changes><Change>",
            "<Action>UPSERT</Action><ResourceRecordSet>",
            "<Name>_a.b.example.com.</Name><Type>CNAME</Type><TTL>300</TTL>",
            "<ResourceRecords><ResourceRecord><Value>_c.acm-validations.aws.</Value></ResourceRecord></ResourceRecords>",
            "</ResourceRecordSet></Change></Changes></ChangeBatch>",
            "</ChangeResourceRecordSetsRequest>"
        )));
    }

    #[test]
    fn error_response_shapes() {
        let generic = r#"<ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <Error><Type>Sender</Type><Code>NoSuchHostedZone</Code><Message>No hosted zone found with ID: Z9</Message></Error>
  <RequestId>abc</RequestId>
</ErrorResponse>"#;
        let (code, message) = quick_xml::de::from_str::<ErrorResponse>(generic)
            .unwrap()
            .into_code_and_message()
            .unwrap();
        assert_eq!(code, "NoSuchHostedZone");
        assert!(message.contains("Z9"));

        let batch = r#"<InvalidChangeBatch xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <Messages><Message>RRSet with DNS name x. is not permitted in zone example.com.</Message></Messages>
  <RequestId>abc</RequestId>
</InvalidChangeBatch>"#;
        let (code, message) = quick_xml::de::from_str::<ErrorResponse>(batch)
            .unwrap()
            .into_code_and_message()
            .unwrap();
        assert_eq!(code, "InvalidChangeBatch");
        assert!(message.contains("not permitted"));
    }
}
