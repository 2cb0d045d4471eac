pub mod store;
pub mod utils;

pub use store::Store;
