//! Request/response correlation for deCONZ serial coprocessor frames.
//!
//! The coprocessor echoes each request's 8-bit sequence number in its
//! response. This crate keeps the table of outstanding requests, decodes
//! incoming frames via [`deconz_frame`], and delivers each decoded result
//! (or failure) to the original caller exactly once.
//!
//! Single-threaded by construction: frame processing and cancellation both
//! go through `&mut Driver`, while the returned [`Response`] futures can be
//! awaited from anywhere.

pub mod driver;
pub mod error;
pub mod registry;
pub mod response;

pub use driver::Driver;
pub use error::{RequestError, Result};
pub use registry::{PendingRequest, Registry};
pub use response::Response;
