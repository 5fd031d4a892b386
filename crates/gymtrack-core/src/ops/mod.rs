pub mod exercise_ops;
pub mod schedule_ops;
pub mod store;

pub use store::Store;
