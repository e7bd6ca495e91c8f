#![forbid(unsafe_code)]

//! Core data model for the vscroll virtualized-list runtime.
//!
//! This crate holds the pieces the adapter control surface and the host
//! runtime share: the buffered item [`wrapper::Wrapper`], the windowed
//! [`buffer::Buffer`], the [`viewport::Viewport`] measurement seam, and the
//! [`effect::Effect`] request vocabulary the adapter emits toward the host.
//!
//! No rendering, fetching, or scroll reading happens here; those live in the
//! host runtime. This crate is pure state and bookkeeping.

pub mod buffer;
pub mod effect;
pub mod viewport;
pub mod wrapper;

pub use buffer::Buffer;
pub use effect::{Effect, VisibilityEdge};
pub use viewport::Viewport;
pub use wrapper::{Op, Wrapper, WrapperId};
