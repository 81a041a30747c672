use crate::traits::Serializer;
use todo_core::{TodoError, TodoResult};

/// Compact JSON serializer for domain models
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> TodoResult<Vec<u8>> {
        serde_json::to_vec(data).map_err(|e| TodoError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> TodoResult<T> {
        serde_json::from_slice(bytes).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}
