pub mod metadata_adapter;
pub mod metadata_reader;
