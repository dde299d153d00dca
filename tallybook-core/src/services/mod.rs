//! Service layer - the record operations
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on one operation area: identifier generation, record
//! construction, or the wire codec.

mod codec;
mod ident;
mod records;

pub use codec::CodecService;
pub use ident::{IdService, IdStrategy};
pub use records::RecordService;
