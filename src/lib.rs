pub mod asset;
pub mod cli;
pub mod error;
pub mod prelude;
