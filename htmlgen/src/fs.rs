use std::path::PathBuf;

use fs_err::{create_dir_all, read_to_string, remove_dir_all};

use crate::{MPath, MResult, error::Error};

pub fn walk_for_file(mut dir: PathBuf, file_name: &str) -> Option<PathBuf> {
    loop {
        let file_path = dir.join(file_name);
        if file_path.exists() {
            return Some(file_path);
        }

        if !dir.pop() {
            break;
        }
    }

    None
}

/// Convert PathBuf to Utf8PathBuf
pub fn to_mpath(path_buf: PathBuf) -> MResult<MPath> {
    MPath::from_path_buf(path_buf).map_err(|path| Error::NonUtf8Path(path).into())
}

pub fn read_string(path: &MPath) -> MResult<String> {
    Ok(read_to_string(path.as_std_path())?)
}

pub fn write_string(path: &MPath, content: &str) -> MResult<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    fs_err::write(path.as_std_path(), content)?;
    Ok(())
}

/// Removes everything under `dir` and leaves it empty.
pub fn clear_dir(dir: &MPath) -> MResult<()> {
    remove_dir_all(dir.as_std_path())?;
    create_dir_all(dir.as_std_path())?;
    Ok(())
}
