use serde::{Deserialize, Serialize};

/// One dataset table known to the data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetTable {
    /// Table name, unique on the service
    pub table_name: String,

    /// Column names in table order
    pub columns: Vec<String>,
}

/// Catalog of every dataset table and its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetsResponse {
    pub tables: Vec<DatasetTable>,
}

/// The service wraps every payload in a `res` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetsEnvelope {
    pub res: DatasetsResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_catalog() {
        let payload = r#"{
            "res": {
                "tables": [
                    { "table_name": "btc_price", "columns": ["kline_open_time", "open_price", "close_price"] },
                    { "table_name": "eth_price", "columns": ["kline_open_time", "volume"] }
                ]
            }
        }"#;

        let envelope: DatasetsEnvelope = serde_json::from_str(payload).unwrap();
        assert_eq!(envelope.res.tables.len(), 2);
        assert_eq!(envelope.res.tables[0].table_name, "btc_price");
        assert_eq!(
            envelope.res.tables[0].columns,
            vec!["kline_open_time", "open_price", "close_price"]
        );
        assert_eq!(envelope.res.tables[1].columns.len(), 2);
    }

    #[test]
    fn test_roundtrip_preserves_column_order() {
        let table = DatasetTable {
            table_name: "orders".to_string(),
            columns: vec!["id".to_string(), "total".to_string(), "created".to_string()],
        };
        let json = serde_json::to_string(&table).unwrap();
        let back: DatasetTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
