use async_trait::async_trait;
use todo_core::TodoResult;

/// Asynchronous string store addressed by key.
/// Implementations handle different backends (file, memory, ...).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was ever written
    async fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set(&self, key: &str, value: String) -> TodoResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> TodoResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> TodoResult<T>;
}
