use crate::common::*;

#[doc = "Millisecond-resolution timestamp used in generated filenames."]
pub fn file_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S%3f").to_string()
}

#[doc = "Human-readable timestamp for the exported document's metadata block."]
pub fn display_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
