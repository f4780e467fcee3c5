//! Wire types for `POST {base}/launches/query`

use serde::{Deserialize, Serialize};

/// Request body: an empty filter plus paging and population options
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub query: serde_json::Value,
    pub options: QueryOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryOptions {
    pub page: u32,
    pub limit: u32,
    pub populate: Vec<PopulatePath>,
}

/// A reference the upstream should expand inline, restricted to `select`
#[derive(Debug, Clone, Serialize)]
pub struct PopulatePath {
    pub path: String,
    pub select: serde_json::Value,
}

impl QueryRequest {
    /// Every launch, with rocket names and payload customers expanded
    pub fn all_launches(page: u32, limit: u32) -> Self {
        Self {
            query: serde_json::json!({}),
            options: QueryOptions {
                page,
                limit,
                populate: vec![
                    PopulatePath {
                        path: "rocket".to_string(),
                        select: serde_json::json!({ "name": 1 }),
                    },
                    PopulatePath {
                        path: "payloads".to_string(),
                        select: serde_json::json!({ "customers": 1 }),
                    },
                ],
            },
        }
    }
}

/// One page of query results
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub docs: Vec<UpstreamLaunch>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_docs: Option<u64>,
}

/// Launch document as returned with the populate options above
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamLaunch {
    pub flight_number: i64,
    pub name: String,
    pub rocket: UpstreamRocket,
    pub date_local: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub upcoming: Option<bool>,
    #[serde(default)]
    pub payloads: Vec<UpstreamPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRocket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPayload {
    #[serde(default)]
    pub customers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(QueryRequest::all_launches(1, 100)).unwrap();
        assert_eq!(body["query"], serde_json::json!({}));
        assert_eq!(body["options"]["page"], 1);
        assert_eq!(body["options"]["populate"][0]["path"], "rocket");
        assert_eq!(body["options"]["populate"][1]["select"]["customers"], 1);
    }

    #[test]
    fn test_response_parses_paging_fields() {
        let json = r#"{
            "docs": [{
                "flight_number": 1,
                "name": "FalconSat",
                "rocket": { "name": "Falcon 1", "id": "5e9d0d95eda69955f709d1eb" },
                "date_local": "2006-03-25T10:30:00+12:00",
                "success": false,
                "upcoming": false,
                "payloads": [{ "customers": ["DARPA"], "id": "5eb0e4b5b6c3bb0006eeb1e1" }]
            }],
            "totalDocs": 205,
            "page": 1,
            "hasNextPage": true,
            "nextPage": 2
        }"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert!(response.has_next_page);
        assert_eq!(response.next_page, Some(2));
        assert_eq!(response.docs[0].payloads[0].customers, vec!["DARPA"]);
    }

    #[test]
    fn test_null_success_parses() {
        let json = r#"{
            "flight_number": 190,
            "name": "Crew-5",
            "rocket": { "name": "Falcon 9" },
            "date_local": "2022-09-29T12:00:00-04:00",
            "success": null,
            "payloads": []
        }"#;
        let launch: UpstreamLaunch = serde_json::from_str(json).unwrap();
        assert_eq!(launch.success, None);
    }
}
