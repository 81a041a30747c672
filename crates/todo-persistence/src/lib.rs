pub mod serialization;
pub mod snapshot;
pub mod store;
pub mod traits;

pub use serialization::*;
pub use snapshot::ListSnapshot;
pub use store::*;
pub use traits::*;
