use serde::{Deserialize, Serialize};

pub const SUCCESS: &str = "success";

/// `{ "data": ..., "message": "success" }` wrapper used by `/time` and `/random`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: SUCCESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeData {
    pub unix_timestamp: String, // seconds, stringified
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomData {
    pub random_number: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexInfo {
    pub app_version: u32,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
}
