pub mod error;
pub mod namespace;
pub mod schema;
pub mod unichem;

pub use error::ResolveError;
pub use namespace::Namespace;
pub use schema::{CompoundIds, SourceMapping};
pub use unichem::{Resolution, UniChemClient};
