pub mod bounding_box;
pub mod constants;
pub mod crop_error;
pub mod frame;
