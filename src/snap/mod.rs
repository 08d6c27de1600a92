//! Scroll-snap section navigation.
//!
//! Wheel, touch and keyboard input on a full-viewport container is turned
//! into discrete, eased transitions between its child sections, one at a
//! time. The state machine lives in [`controller`] and knows nothing about
//! the browser; [`hook`] wires it to the DOM.

pub mod animator;
pub mod controller;
pub mod easing;
pub mod hook;
pub mod intent;
pub mod surface;

pub use hook::use_scroll_snap;
