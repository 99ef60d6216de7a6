pub mod catalog;
pub mod cell;
pub mod error;
pub mod io;
pub mod paths;
pub mod recommend;
pub mod roadmap;
pub mod skills;
pub mod status;
pub mod store;
pub mod theme;
pub mod types;
pub mod wizard;

pub use error::{HubError, Result};
