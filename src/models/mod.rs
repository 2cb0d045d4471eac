pub mod holding;
pub mod snapshot;

pub use holding::Holding;
pub use snapshot::RefreshedHolding;
