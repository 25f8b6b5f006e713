//! Domain types for settings resolution.
//!
//! This layer is pure: no file handles, no logger setup, no process state.
//!
//! - **`store`** – the ordered section/entry store the line parser fills.
//! - **`accessors`** – typed `get_*` operations over the store.
//! - **`convert`** – lenient string conversions and the [`ValueParsers`]
//!   collaborator seam used for durations and geometries.
//! - **`geometry`** – the `WxH+X+Y` window geometry value.

pub mod accessors;
pub mod convert;
pub mod geometry;
pub mod store;

pub use convert::{BuiltinParsers, ValueParsers};
pub use geometry::Geometry;
pub use store::{ConfigStore, Entry, Section, StoreError};
