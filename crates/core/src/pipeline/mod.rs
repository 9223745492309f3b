pub mod crop_image_use_case;
