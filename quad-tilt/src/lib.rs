//! Device orientation events and display capability queries for miniquad/macroquad.
//!
//! # WASM Usage
//!
//! For WASM builds, include the JavaScript plugin after miniquad's `gl.js`:
//!
//! ```html
//! <script src="gl.js"></script>
//! <script src="quad-tilt.js"></script>
//! <script>load("your-game.wasm");</script>
//! ```
//!
//! The plugin only listens to `deviceorientation` while an
//! [`OrientationListener`] is alive.

/// Plugin version for miniquad's plugin system.
#[no_mangle]
#[cfg(target_arch = "wasm32")]
pub extern "C" fn quad_tilt_crate_version() -> u32 {
    1
}

/// One orientation reading, in degrees. Either angle may be missing on
/// devices without the corresponding sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Front/back tilt.
    pub beta: Option<f32>,
    /// Left/right tilt.
    pub gamma: Option<f32>,
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::Orientation;

    extern "C" {
        fn sapp_tilt_start();
        fn sapp_tilt_stop();
        fn sapp_tilt_next() -> i32;
        fn sapp_tilt_beta() -> f32;
        fn sapp_tilt_gamma() -> f32;
        fn sapp_is_coarse_landscape() -> i32;
    }

    fn angle(value: f32) -> Option<f32> {
        (!value.is_nan()).then_some(value)
    }

    pub(crate) fn start() {
        unsafe { sapp_tilt_start() }
    }

    pub(crate) fn stop() {
        unsafe { sapp_tilt_stop() }
    }

    pub(crate) fn next() -> Option<Orientation> {
        if unsafe { sapp_tilt_next() } == 0 {
            return None;
        }
        Some(Orientation {
            beta: angle(unsafe { sapp_tilt_beta() }),
            gamma: angle(unsafe { sapp_tilt_gamma() }),
        })
    }

    pub(crate) fn is_coarse_landscape() -> bool {
        unsafe { sapp_is_coarse_landscape() != 0 }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::Orientation;

    pub(crate) fn start() {}

    pub(crate) fn stop() {}

    pub(crate) fn next() -> Option<Orientation> {
        None
    }

    pub(crate) fn is_coarse_landscape() -> bool {
        false
    }
}

#[cfg(not(target_arch = "wasm32"))]
use native as backend;
#[cfg(target_arch = "wasm32")]
use wasm as backend;

/// Registration of the global orientation listener. Events are only queued
/// while this value is alive; dropping it removes the listener.
#[derive(Debug)]
pub struct OrientationListener {
    _private: (),
}

impl OrientationListener {
    pub fn register() -> Self {
        backend::start();
        Self { _private: () }
    }

    /// Drains the readings received since the last call, oldest first.
    pub fn poll(&mut self) -> Vec<Orientation> {
        std::iter::from_fn(backend::next).collect()
    }
}

impl Drop for OrientationListener {
    fn drop(&mut self) {
        backend::stop();
    }
}

/// Returns true for a coarse pointer in landscape orientation, i.e. a phone
/// or tablet held sideways. On native platforms this always returns false.
pub fn is_coarse_landscape() -> bool {
    backend::is_coarse_landscape()
}
