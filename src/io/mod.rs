pub mod input;
pub mod output;

pub use input::collect_seeds;
pub use output::{create_writer, OutputFormat, OutputWriter};
