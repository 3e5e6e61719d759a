use crate::common::*;

#[doc = "A written HTML artifact: never mutated after creation, uniquely named."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ExportedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}
