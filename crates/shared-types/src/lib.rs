pub mod config;
pub mod dashboard;
pub mod error;
pub mod loan;

pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use loan::*;
