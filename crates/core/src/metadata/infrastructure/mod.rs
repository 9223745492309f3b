pub mod adapter_factory;
mod bbox_json;
pub mod fish_count_adapter;
pub mod has_fish_adapter;
pub mod json_file_metadata_reader;
