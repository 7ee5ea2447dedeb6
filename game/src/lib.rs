/// Logs the error of a `Result` at warn level and turns it into an `Option`.
/// The error is appended as the last format argument.
macro_rules! warn_err {
    ($expr:expr, $($arg:tt)+) => {
        $expr.map_err(|e| log::warn!($($arg)+, e)).ok()
    };
}

pub(crate) mod carve;
pub(crate) mod course;
pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod host;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod navigator;
pub(crate) mod position;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod storage;

pub mod game_app;
