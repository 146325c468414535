pub mod bytes_str;
mod encode;
pub mod error;
pub mod query;
pub mod scheme;
mod uri;

pub use crate::uri::{Builder, Uri};
