pub mod controller;
pub mod save_worker;

pub use controller::{Hydration, ListStoreController, Submission};
pub use save_worker::{SaveStats, SaveWorker};
