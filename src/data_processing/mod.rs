pub mod data_processor;
pub mod directory_walker;
pub mod extraction_error;
pub mod field_normalizer;
pub mod name_decoder;
pub mod player_record;
pub mod range_filter;
pub mod record_builder;
pub mod record_error;
