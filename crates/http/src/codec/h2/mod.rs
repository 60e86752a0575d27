//! HTTP/2 field block sequencing.
//!
//! - [`FieldBlock`]: pseudo-headers first, in directive or default order, then
//!   the regular fields in sorter order
//! - [`FieldBlockSink`]: the compression stage the block is handed to, which
//!   must keep the order it receives
//!
//! No bytes are produced here. Encoding the block is the sink's job.

mod field_block;
mod sink;

pub use field_block::{FieldBlock, PseudoHeaderValues};
pub use sink::FieldBlockSink;
