//! The stream codec handlers write through.
//!
//! A dumb, bounds-checked little-endian transport. It knows nothing about
//! type resolution: handlers compose its operations.
//!
//! - [`TypeTag`]: one byte naming the wire shape a handler owns.
//! - [`WireFormat`]: positional ([`Compact`](WireFormat::Compact)) or
//!   self-describing ([`Tagged`](WireFormat::Tagged)) composite layout.
//! - [`StreamWriter`] and [`StreamReader`]: scalar, string, tag and object
//!   reference operations.
//! - [`Payload`]: the written bytes plus the table of referenced objects.
//! - [`StreamError`]: every way a read or write can fail.
//!
//! # Examples
//!
//! ```
//! use vc_stream::{StreamReader, StreamWriter, WireFormat};
//!
//! let mut writer = StreamWriter::new(WireFormat::Compact);
//! writer.write_i32(42);
//! writer.write_str("hi").unwrap();
//! let payload = writer.finish();
//! assert_eq!(&payload.bytes()[..4], &[42, 0, 0, 0]);
//!
//! let mut reader = StreamReader::from_payload(WireFormat::Compact, &payload);
//! assert_eq!(reader.read_i32(), Ok(42));
//! assert_eq!(reader.read_string().as_deref(), Ok("hi"));
//! assert!(reader.finish().is_ok());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod format;
mod payload;
mod reader;
mod tag;
mod writer;

// -----------------------------------------------------------------------------
// Exports

pub use error::StreamError;
pub use format::WireFormat;
pub use payload::Payload;
pub use reader::StreamReader;
pub use tag::TypeTag;
pub use writer::StreamWriter;
