pub mod bbox_cropper;
