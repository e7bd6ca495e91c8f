#![forbid(unsafe_code)]

//! Control surface for the vscroll virtualized-list runtime.
//!
//! The [`Adapter`] wraps a windowed [`vscroll_core::Buffer`] and carries the
//! runtime's two hard algorithms:
//!
//! - [`reconcile::apply_update`] — diff a replacement item list against one
//!   buffered wrapper, preserving item identity and relative order while
//!   tagging removals and inserting net-new items.
//! - [`Adapter::calculate_properties`] — a single bounded scan over live
//!   geometry that finds the topmost and bottommost visible rows.
//!
//! Everything the host must do in response (window re-adjustment, reload,
//! edge clipping, property mirroring) is emitted as
//! [`vscroll_core::Effect`]s and drained by the host runtime.

pub mod adapter;
pub mod error;
pub mod reconcile;
pub mod visibility;

pub use adapter::{Adapter, Updates};
pub use error::AdapterError;
pub use visibility::VisibleRow;
