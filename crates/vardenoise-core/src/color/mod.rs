pub mod process;

pub use process::{luminance, split_interleaved};
