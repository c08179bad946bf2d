//! Writing generated files into the site's public directory.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::{Result, SeoError};

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// Where the generated files ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub sitemap_path: PathBuf,
    pub robots_path: PathBuf,
    /// False when a robots.txt already existed and was left untouched.
    pub robots_written: bool,
}

/// Writes sitemap.xml and robots.txt into `output_dir`, creating it if needed.
///
/// sitemap.xml is always overwritten. robots.txt is only written when absent, so a hand-edited
/// file survives rebuilds.
///
/// # Errors
///
/// Any filesystem failure, tagged with the path it happened on.
pub fn write_outputs(sitemap: &str, robots: &str, output_dir: &Path) -> Result<WriteReport> {
    fs::create_dir_all(output_dir).map_err(SeoError::io(output_dir))?;

    let sitemap_path = output_dir.join(SITEMAP_FILE);
    fs::write(&sitemap_path, sitemap).map_err(SeoError::io(&sitemap_path))?;
    tracing::info!("Wrote {}", sitemap_path.display());

    let robots_path = output_dir.join(ROBOTS_FILE);
    let robots_written = write_if_absent(&robots_path, robots)?;
    if robots_written {
        tracing::info!("Wrote {}", robots_path.display());
    } else {
        tracing::info!("Kept existing {}", robots_path.display());
    }

    Ok(WriteReport {
        sitemap_path,
        robots_path,
        robots_written,
    })
}

/// Creates `path` with `contents` unless it already exists. Returns whether it wrote.
fn write_if_absent(path: &Path, contents: &str) -> Result<bool> {
    persist_if_absent(path, |file| file.write_all(contents.as_bytes()))
}

/// Fills a temporary file next to `path`, then moves it into place without replacing an existing
/// file. A failed fill leaves nothing at `path`.
fn persist_if_absent<F>(path: &Path, fill: F) -> Result<bool>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    if path.exists() {
        return Ok(false);
    }
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir).map_err(SeoError::io(dir))?;
    fill(&mut staged).map_err(SeoError::io(path))?;
    staged.as_file().sync_all().map_err(SeoError::io(path))?;

    match staged.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(SeoError::io(path)(e.error)),
    }
}
