pub mod snapshot;
pub mod swap;
