pub mod cropping;
pub mod imaging;
pub mod metadata;
pub mod pipeline;
pub mod shared;
