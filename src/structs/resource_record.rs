use serde::{Deserialize, Serialize};

/// One inventoried resource, projected down to the fields recency
/// analysis needs. Both inventory schemas land here: the bulk asset
/// search carries `updateTime`/`createTime`, the per-service listings
/// carry `creationTimestamp` (compute) or `timeCreated` (storage).
/// Everything else in the raw JSON is dropped on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceRecord {
    pub name: Option<String>,
    pub asset_type: Option<String>,
    pub update_time: Option<String>,
    pub create_time: Option<String>,
    pub creation_timestamp: Option<String>,
    pub time_created: Option<String>,
}

impl ResourceRecord {
    /// Timestamp fields in extraction priority order: bulk-schema
    /// fields first, then the per-service ones. Absent fields are
    /// filtered out here; unparseable values are the extractor's
    /// problem.
    pub fn timestamp_candidates(&self) -> impl Iterator<Item = &str> {
        [
            self.update_time.as_deref(),
            self.create_time.as_deref(),
            self.creation_timestamp.as_deref(),
            self.time_created.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_schema_fields_come_first() {
        let record = ResourceRecord {
            update_time: Some("2024-01-01T00:00:00Z".to_string()),
            creation_timestamp: Some("2020-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let candidates: Vec<&str> = record.timestamp_candidates().collect();
        assert_eq!(candidates, vec!["2024-01-01T00:00:00Z", "2020-01-01T00:00:00Z"]);
    }

    #[test]
    fn ignores_unknown_json_fields() {
        let raw = r#"{
            "name": "//compute.googleapis.com/projects/p/zones/z/instances/vm-1",
            "assetType": "compute.googleapis.com/Instance",
            "updateTime": "2024-02-02T10:00:00Z",
            "location": "us-central1-a",
            "state": "RUNNING"
        }"#;
        let record: ResourceRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.asset_type.as_deref(), Some("compute.googleapis.com/Instance"));
        assert_eq!(record.timestamp_candidates().count(), 1);
    }
}
