pub mod reader;
pub mod record;

pub use reader::{RecordReader, parse_record, records};
pub use record::{Attribute, InteractionClaim, InteractionRecord};
