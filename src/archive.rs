use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Moves processed class files into `archive_dir`, keeping their names.
pub fn archive_inputs(files: &[PathBuf], archive_dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(archive_dir)?;
    let mut moved = Vec::with_capacity(files.len());
    for src in files {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = archive_dir.join(name);
        move_file(src, &dst)?;
        tracing::info!(from = %src.display(), to = %dst.display(), "archived class file");
        moved.push(dst);
    }
    Ok(moved)
}

/// Moves generated class report folders into `archive_dir`, next to the
/// class files they came from.
pub fn archive_reports(dirs: &[PathBuf], archive_dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(archive_dir)?;
    let mut moved = Vec::with_capacity(dirs.len());
    for src in dirs {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = archive_dir.join(name);
        move_dir(src, &dst)?;
        tracing::info!(from = %src.display(), to = %dst.display(), "archived class reports");
        moved.push(dst);
    }
    Ok(moved)
}

fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        // Rename fails across filesystems.
        Err(_) => {
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
    }
}

fn move_dir(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", src.display()),
        ));
    }
    // A rename onto an existing non-empty folder fails too; merge instead.
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    copy_dir(src, dst)?;
    fs::remove_dir_all(src)
}

fn copy_dir(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
