use serde::Deserialize;
use std::collections::BTreeMap;

use super::client::{EsClient, EsError};

/// Odpověď na indices segments API (`GET /_segments`)
#[derive(Debug, Deserialize)]
pub struct SegmentsResponse {
    #[serde(default)]
    pub indices: BTreeMap<String, IndexSegments>,
}

/// Segmenty jednoho indexu, seskupené podle shard id
#[derive(Debug, Deserialize)]
pub struct IndexSegments {
    /// shard id -> záznam za každou fyzickou kopii (primary i repliky)
    #[serde(default)]
    pub shards: BTreeMap<String, Vec<ShardSegments>>,
}

/// Jedna fyzická kopie shardu na konkrétním nodu
#[derive(Debug, Deserialize)]
pub struct ShardSegments {
    #[serde(default)]
    pub routing: ShardRouting,
    #[serde(default)]
    pub segments: BTreeMap<String, Segment>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShardRouting {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub node: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub memory_in_bytes: u64,
}

impl EsClient {
    /// Získá segment statistiky všech indexů
    pub async fn segments(&self) -> Result<SegmentsResponse, EsError> {
        self.get("/_segments").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_segments_response() {
        let raw = json!({
            "_shards": { "total": 2, "successful": 2, "failed": 0 },
            "indices": {
                "logs": {
                    "shards": {
                        "0": [
                            {
                                "routing": { "state": "STARTED", "primary": true, "node": "abc123" },
                                "num_committed_segments": 1,
                                "num_search_segments": 1,
                                "segments": {
                                    "_0": { "generation": 0, "num_docs": 10, "memory_in_bytes": 2048 }
                                }
                            }
                        ]
                    }
                }
            }
        });

        let response: SegmentsResponse = serde_json::from_value(raw).unwrap();
        let index = &response.indices["logs"];
        let instance = &index.shards["0"][0];

        assert!(instance.routing.primary);
        assert_eq!(instance.routing.state, "STARTED");
        assert_eq!(instance.routing.node.as_deref(), Some("abc123"));
        assert_eq!(instance.segments["_0"].memory_in_bytes, 2048);
    }

    #[test]
    fn test_missing_memory_defaults_to_zero() {
        let raw = json!({
            "indices": {
                "logs": {
                    "shards": {
                        "0": [
                            {
                                "routing": { "state": "STARTED", "primary": false },
                                "segments": { "_0": { "generation": 0 } }
                            }
                        ]
                    }
                }
            }
        });

        let response: SegmentsResponse = serde_json::from_value(raw).unwrap();
        let instance = &response.indices["logs"].shards["0"][0];

        assert_eq!(instance.segments["_0"].memory_in_bytes, 0);
        assert_eq!(instance.routing.node, None);
    }

    #[test]
    fn test_missing_shards_and_segments_default_to_empty() {
        let raw = json!({
            "indices": {
                "empty-index": {},
                "bare-shard": {
                    "shards": { "0": [ { "routing": { "primary": true } } ] }
                }
            }
        });

        let response: SegmentsResponse = serde_json::from_value(raw).unwrap();

        assert!(response.indices["empty-index"].shards.is_empty());
        assert!(response.indices["bare-shard"].shards["0"][0].segments.is_empty());
    }

    #[test]
    fn test_empty_cluster() {
        let response: SegmentsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.indices.is_empty());
    }
}
