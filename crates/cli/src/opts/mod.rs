mod portal;
pub use portal::*;
