pub mod envi;
pub mod loader;

pub use envi::EnViDict;
pub use loader::EnViLoader;
