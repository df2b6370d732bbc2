//! View models mutated by the presenter.
//!
//! Each one stands in for a rendering capability (text panel, map tiles,
//! 3D canvas) and carries no weather semantics of its own. Frontends read
//! them and draw; the presenter is the only writer.

pub mod map;
pub mod panel;
pub mod scene;
