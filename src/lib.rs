//! Reflection-driven type dispatch for inspectors and binary streams.
//!
//! - [`reflect`]: type and field descriptors, markers, dynamic values and the
//!   reflection provider seam.
//! - [`stream`]: the byte codec every handler writes through.
//! - [`inspect`]: handlers, the cached resolver and the per-object dispatcher.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_inspect as inspect;
pub use vc_reflect as reflect;
pub use vc_stream as stream;
