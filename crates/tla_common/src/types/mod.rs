pub mod bundle_info;
pub mod code_pattern;
pub mod module_id;
pub mod module_info;
pub mod output_chunk;
pub mod raw_idx;
pub mod source_chunk;
