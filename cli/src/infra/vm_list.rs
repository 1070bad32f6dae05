//! Infrastructure implementation of the `VmListSource` port.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::VmListSource;
use crate::domain::ResourceId;
use crate::domain::vm::parse_vm_list;

/// Reads one identifier per line from a text file on disk.
pub struct FileVmList;

impl VmListSource for FileVmList {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<Vec<ResourceId>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Ok(parse_vm_list(&content))
    }
}
