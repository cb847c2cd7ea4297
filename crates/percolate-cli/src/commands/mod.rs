pub mod stats;
pub mod subset;
