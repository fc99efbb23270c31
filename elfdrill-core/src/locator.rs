use crate::Binary;
use anyhow::{ensure, Context, Result};
use goblin::Hint;
use rand::Rng;
use std::fs;
use std::io::Read;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects regular files with any execute bit set, matching
/// `find <dir> -executable -type f`.
pub fn find_executables(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .metadata()
                .map(|meta| meta.permissions().mode() & 0o111 != 0)
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Keeps only paths whose leading bytes goblin recognizes as an ELF image.
pub fn filter_elf(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| looks_like_elf(path))
        .cloned()
        .collect()
}

fn looks_like_elf(path: &Path) -> bool {
    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };
    let mut ident = [0u8; 16];
    if file.read_exact(&mut ident).is_err() {
        return false;
    }
    matches!(goblin::peek_bytes(&ident), Ok(Hint::Elf(_)))
}

/// Copies `path` into `folder`, preserving the file name.
pub fn stage(path: &Path, folder: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let dest = folder.join(name);
    fs::copy(path, &dest)
        .with_context(|| format!("copying {} to {}", path.display(), dest.display()))?;
    Ok(dest)
}

/// Samples candidates uniformly until one parses, staging the pick into
/// `folder` and parsing the staged copy.
///
/// Candidates that fail the full parse are dropped from the set (and their
/// staged copy deleted), so the loop is bounded by the set size; an empty or
/// exhausted set is a fatal error.
pub fn pick_random_elf<R: Rng>(
    rng: &mut R,
    candidates: &mut Vec<PathBuf>,
    folder: &Path,
) -> Result<Binary> {
    ensure!(!candidates.is_empty(), "no valid ELF binaries found");
    loop {
        let index = rng.gen_range(0..candidates.len());
        let picked = candidates[index].clone();
        log::debug!("Found a binary: {}", picked.display());

        let staged = stage(&picked, folder)?;
        match Binary::open(&staged) {
            Ok(binary) => {
                log::debug!("Found binary copied to training folder");
                return Ok(binary);
            }
            Err(err) => {
                log::warn!("skipping {}: {err:#}", picked.display());
                let _ = fs::remove_file(&staged);
                candidates.swap_remove(index);
                ensure!(!candidates.is_empty(), "no valid ELF binaries found");
            }
        }
    }
}
