pub mod refresh;

pub use refresh::RefreshEngine;
