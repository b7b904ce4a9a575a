pub mod codec;
pub mod picture;
