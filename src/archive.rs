//! Theme archiving
//!
//! Packs every regular file under a theme directory into a deflate-compressed
//! zip. Entry names are the file's path relative to the theme root with `/`
//! separators, so `theme/layout/theme.liquid` becomes `layout/theme.liquid`.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::checksum::Checksum;
use crate::error::{Result, ThemeError};

/// Highest deflate level accepted in [`ArchiveOptions`]
pub const MAX_COMPRESSION_LEVEL: i64 = 9;

/// Settings for writing an archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// 0 stores files uncompressed, 1-9 picks the deflate level; the encoder
    /// default when unset
    pub compression_level: Option<i64>,
}

impl ArchiveOptions {
    /// Reject compression levels outside 0-9
    pub fn validate(&self) -> Result<()> {
        match self.compression_level {
            Some(level) if !(0..=MAX_COMPRESSION_LEVEL).contains(&level) => {
                Err(ThemeError::InvalidCompressionLevel(level))
            }
            _ => Ok(()),
        }
    }

    fn file_options(&self) -> SimpleFileOptions {
        match self.compression_level {
            Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
            level => SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(level),
        }
    }
}

/// One file written into the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Relative path inside the archive (`/`-separated)
    pub name: String,
    /// Uncompressed size in bytes
    pub size: u64,
    pub checksum: Checksum,
}

/// What [`archive_directory`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub output: PathBuf,
    pub entries: Vec<ArchiveEntry>,
}

impl ArchiveSummary {
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

/// Archive name for `path`, relative to `root`.
///
/// `None` when `path` is not below `root` or a component is not valid UTF-8.
pub fn entry_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Zip every regular file under `source` into `output`.
///
/// `output` is created or truncated, and removed again if writing fails.
/// Directory symlinks are not descended into; file symlinks are archived with
/// their target's content. If `output` sits inside `source` it is left out of
/// the archive.
pub fn archive_directory(
    source: &Path,
    output: &Path,
    options: ArchiveOptions,
) -> Result<ArchiveSummary> {
    options.validate()?;
    if !fs::metadata(source)?.is_dir() {
        return Err(ThemeError::SourceNotDirectory(source.display().to_string()));
    }

    let file = File::create(output)?;
    match write_entries(source, output, file, options) {
        Ok(entries) => {
            info!(
                output = %output.display(),
                entries = entries.len(),
                "archive written"
            );
            Ok(ArchiveSummary {
                output: output.to_path_buf(),
                entries,
            })
        }
        Err(e) => {
            if let Err(rm) = fs::remove_file(output) {
                warn!(output = %output.display(), error = %rm, "could not remove partial archive");
            }
            Err(e)
        }
    }
}

fn write_entries(
    source: &Path,
    output: &Path,
    file: File,
    options: ArchiveOptions,
) -> Result<Vec<ArchiveEntry>> {
    let output_canonical = fs::canonicalize(output)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let file_options = options.file_options();
    let mut entries = Vec::new();

    for entry in WalkDir::new(source).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !is_archivable(&entry) {
            continue;
        }

        if entry.file_name() == output_canonical.file_name().unwrap_or_default()
            && fs::canonicalize(path)? == output_canonical
        {
            warn!(path = %path.display(), "skipping the archive being written");
            continue;
        }

        let name = entry_name(source, path)
            .ok_or_else(|| ThemeError::InvalidEntryName(path.display().to_string()))?;

        zip.start_file(name.clone(), file_options)?;
        let mut reader = Tee {
            inner: File::open(path)?,
            sink: &mut zip,
        };
        let (checksum, size) = Checksum::from_reader(&mut reader)?;

        debug!(entry = %name, size, "added");
        entries.push(ArchiveEntry { name, size, checksum });
    }

    zip.finish()?.flush()?;
    Ok(entries)
}

/// Reopen an archive and check it holds exactly the entries in `summary`
pub fn verify_archive(summary: &ArchiveSummary) -> Result<()> {
    let mut archive = ZipArchive::new(File::open(&summary.output)?)?;

    if archive.len() != summary.entries.len() {
        return Err(ThemeError::VerificationFailed(format!(
            "expected {} entries, found {}",
            summary.entries.len(),
            archive.len()
        )));
    }

    let expected: HashMap<&str, &ArchiveEntry> = summary
        .entries
        .iter()
        .map(|e| (e.name.as_str(), e))
        .collect();

    for i in 0..archive.len() {
        let file = archive.by_index(i)?;
        let name = file.name().to_string();
        let entry = expected
            .get(name.as_str())
            .ok_or_else(|| {
                ThemeError::VerificationFailed(format!("unexpected entry {}", name))
            })?;

        let (checksum, size) = Checksum::from_reader(file)?;
        if size != entry.size || checksum != entry.checksum {
            return Err(ThemeError::VerificationFailed(format!(
                "content mismatch in {}",
                name
            )));
        }
    }

    Ok(())
}

fn is_archivable(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if entry.path_is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(meta) => meta.is_file(),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping dangling symlink");
                false
            }
        };
    }
    false
}

/// Reader that copies everything it yields into a writer
struct Tee<R, W> {
    inner: R,
    sink: W,
}

impl<R: io::Read, W: io::Write> io::Read for Tee<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.sink.write_all(&buf[..n])?;
        Ok(n)
    }
}
