pub mod color;
pub mod consts;
pub mod denoise;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod pipeline;

pub use denoise::{denoise, denoise_with, DenoiseParams};
pub use error::{DenoiseError, Result};
pub use frame::{ColorFrame, Frame};
