//! Timeline and easing engine.
//!
//! A [`Phase`] tree (timed / delay / sequence / repeat) is a pure
//! function of a start value and elapsed milliseconds. The
//! [`ParameterStore`] owns the named scalars the variants animate and
//! pulls each timeline forward on every frame.

mod easing;
mod interpolate;
mod params;
mod phase;


pub use easing::*;
pub use interpolate::*;
pub use params::*;
pub use phase::*;
