//! Filesystem helpers shared by source acquisition and metadata merging.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::Path;

/// Copy a directory tree, recreating symlinks instead of following them.
///
/// Existing destination entries are overwritten; permission bits travel
/// with regular files.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_symlink() {
            let target = fs::read_link(&src_path)?;
            if dst_path.symlink_metadata().is_ok() {
                fs::remove_file(&dst_path)?;
            }
            symlink(&target, &dst_path)?;
        } else if file_type.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
