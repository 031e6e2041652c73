//! Data types for Congress.gov API requests and responses.
//!
//! Upstream payloads arrive camelCase; the domain types here serialize
//! snake_case on our own API surface. Conversion happens once, at
//! construction from the wire payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The type of a bill or resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillType {
    /// House bill
    Hr,
    /// Senate bill
    S,
    /// House joint resolution
    Hjres,
    /// Senate joint resolution
    Sjres,
    /// House concurrent resolution
    Hconres,
    /// Senate concurrent resolution
    Sconres,
    /// House simple resolution
    Hres,
    /// Senate simple resolution
    Sres,
}

impl BillType {
    /// Lowercase form used in Congress.gov URL paths.
    #[must_use]
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::S => "s",
            Self::Hjres => "hjres",
            Self::Sjres => "sjres",
            Self::Hconres => "hconres",
            Self::Sconres => "sconres",
            Self::Hres => "hres",
            Self::Sres => "sres",
        }
    }

    /// Uppercase wire form (e.g. "HJRES").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::S => "S",
            Self::Hjres => "HJRES",
            Self::Sjres => "SJRES",
            Self::Hconres => "HCONRES",
            Self::Sconres => "SCONRES",
            Self::Hres => "HRES",
            Self::Sres => "SRES",
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The most recent recorded action on a bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct BillAction {
    /// Date the action was taken (e.g. "2024-01-17")
    pub action_date: String,
    /// Free-text description of the action
    pub text: String,
}

/// A bill as listed by Congress.gov.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Bill {
    /// Congress number (e.g. 118)
    pub congress: u32,
    /// Bill number within its type (e.g. "3076")
    pub number: String,
    /// Chamber of origin ("House" or "Senate")
    pub origin_chamber: String,
    /// Single-letter chamber code ("H" or "S")
    pub origin_chamber_code: String,
    /// Bill title
    pub title: String,
    /// Bill type
    #[serde(rename = "type")]
    pub bill_type: BillType,
    /// Last metadata update timestamp
    pub update_date: String,
    /// Last update timestamp including text changes
    pub update_date_including_text: String,
    /// Canonical Congress.gov API URL for the bill
    pub url: String,
    /// Latest recorded action, if any
    pub latest_action: Option<BillAction>,
}

/// The full text of one version of a bill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct BillText {
    /// Congress number
    pub congress: u32,
    /// Bill type
    #[serde(rename = "type")]
    pub bill_type: BillType,
    /// Bill number
    pub number: String,
    /// Full text content
    pub text: String,
    /// Label of the text version that was actually selected (e.g. "Enrolled Bill")
    pub text_type: String,
}

/// Query parameters for a bill listing call.
///
/// Time bounds must already be formatted as UTC timestamps ending in a
/// literal `Z` (e.g. "2024-01-01T00:00:00Z").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillListQuery {
    pub from_datetime: Option<String>,
    pub to_datetime: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub sort: String,
}

impl Default for BillListQuery {
    fn default() -> Self {
        Self {
            from_datetime: None,
            to_datetime: None,
            limit: 250,
            offset: 0,
            sort: "updateDate+desc".to_string(),
        }
    }
}

/// Response from the bill listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BillsResponse {
    #[serde(default)]
    pub bills: Vec<BillPayload>,
}

/// One bill entry as the upstream API serializes it (camelCase).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub congress: u32,
    pub number: String,
    pub origin_chamber: String,
    pub origin_chamber_code: String,
    pub title: String,
    #[serde(rename = "type")]
    pub bill_type: BillType,
    pub update_date: String,
    pub update_date_including_text: String,
    pub url: String,
    pub latest_action: Option<BillActionPayload>,
}

/// Latest-action entry as the upstream API serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillActionPayload {
    pub action_date: String,
    pub text: String,
}

impl From<BillPayload> for Bill {
    fn from(payload: BillPayload) -> Self {
        Self {
            congress: payload.congress,
            number: payload.number,
            origin_chamber: payload.origin_chamber,
            origin_chamber_code: payload.origin_chamber_code,
            title: payload.title,
            bill_type: payload.bill_type,
            update_date: payload.update_date,
            update_date_including_text: payload.update_date_including_text,
            url: payload.url,
            latest_action: payload.latest_action.map(|action| BillAction {
                action_date: action.action_date,
                text: action.text,
            }),
        }
    }
}

/// Response from the per-bill text versions endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVersionsResponse {
    #[serde(default)]
    pub text_versions: Vec<TextVersion>,
}

/// One stage of a bill's text (e.g. introduced, enrolled).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TextVersion {
    /// Human-readable stage label (e.g. "Enrolled Bill"); absent for some versions
    #[serde(rename = "type", default)]
    pub version_type: Option<String>,
    /// Available format variants of this version
    #[serde(default)]
    pub formats: Vec<TextFormat>,
}

/// One format variant of a text version.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TextFormat {
    /// Format label (e.g. "Formatted Text", "PDF", "Formatted XML")
    #[serde(rename = "type", default)]
    pub format_type: Option<String>,
    /// Fetch URL for the content in this format
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bill_type_deserializes_from_uppercase() {
        let parsed: BillType = serde_json::from_str("\"HJRES\"").expect("should parse");
        assert_eq!(parsed, BillType::Hjres);
    }

    #[test]
    fn bill_type_path_segments_are_lowercase() {
        let cases = [
            (BillType::Hr, "hr"),
            (BillType::S, "s"),
            (BillType::Hjres, "hjres"),
            (BillType::Sjres, "sjres"),
            (BillType::Hconres, "hconres"),
            (BillType::Sconres, "sconres"),
            (BillType::Hres, "hres"),
            (BillType::Sres, "sres"),
        ];

        for (bill_type, expected) in cases {
            assert_eq!(bill_type.as_path_segment(), expected);
        }
    }

    #[test]
    fn bill_converts_from_camel_case_payload() {
        let payload: BillPayload = serde_json::from_value(json!({
            "congress": 118,
            "number": "3076",
            "originChamber": "House",
            "originChamberCode": "H",
            "title": "An Act",
            "type": "HR",
            "updateDate": "2024-01-17",
            "updateDateIncludingText": "2024-01-17T20:30:00Z",
            "url": "https://api.congress.gov/v3/bill/118/hr/3076?format=json",
            "latestAction": {
                "actionDate": "2024-01-16",
                "text": "Became Public Law"
            }
        }))
        .expect("should parse");

        let bill = Bill::from(payload);
        assert_eq!(bill.congress, 118);
        assert_eq!(bill.origin_chamber, "House");
        assert_eq!(bill.origin_chamber_code, "H");
        assert_eq!(bill.bill_type, BillType::Hr);

        let action = bill.latest_action.expect("should have latest action");
        assert_eq!(action.action_date, "2024-01-16");
        assert_eq!(action.text, "Became Public Law");
    }

    #[test]
    fn bill_payload_rejects_missing_required_field() {
        // No originChamber - construction must fail rather than default
        let result: Result<BillPayload, _> = serde_json::from_value(json!({
            "congress": 118,
            "number": "3076",
            "originChamberCode": "H",
            "title": "An Act",
            "type": "HR",
            "updateDate": "2024-01-17",
            "updateDateIncludingText": "2024-01-17T20:30:00Z",
            "url": "https://api.congress.gov/v3/bill/118/hr/3076?format=json",
            "latestAction": null
        }));

        assert!(result.is_err());
    }

    #[test]
    fn bill_serializes_snake_case_with_type_field() {
        let bill = Bill {
            congress: 118,
            number: "3076".to_string(),
            origin_chamber: "House".to_string(),
            origin_chamber_code: "H".to_string(),
            title: "An Act".to_string(),
            bill_type: BillType::Hr,
            update_date: "2024-01-17".to_string(),
            update_date_including_text: "2024-01-17T20:30:00Z".to_string(),
            url: "https://example.com".to_string(),
            latest_action: None,
        };

        let value = serde_json::to_value(&bill).expect("serialize");
        assert_eq!(value["origin_chamber"], "House");
        assert_eq!(value["type"], "HR");
        assert_eq!(value["update_date_including_text"], "2024-01-17T20:30:00Z");
    }

    #[test]
    fn bill_list_query_defaults() {
        let query = BillListQuery::default();
        assert_eq!(query.limit, 250);
        assert_eq!(query.offset, 0);
        assert_eq!(query.sort, "updateDate+desc");
        assert!(query.from_datetime.is_none());
        assert!(query.to_datetime.is_none());
    }

    #[test]
    fn text_versions_response_defaults_to_empty() {
        let parsed: TextVersionsResponse =
            serde_json::from_value(json!({})).expect("should parse");
        assert!(parsed.text_versions.is_empty());
    }
}
