//! Text file access for patch and target files

use crate::domain::{split_lines, LineEnding, TargetTail};
use crate::error::{PuddingError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// A line-oriented text file on disk
#[derive(Debug, Clone)]
pub struct TextFile {
    pub path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextFile { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Whether the whole file is valid UTF-8
    pub fn is_text(&self) -> Result<bool> {
        let bytes = fs::read(&self.path)?;
        Ok(std::str::from_utf8(&bytes).is_ok())
    }

    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(PuddingError::Io)
    }

    pub fn read_lines(&self) -> Result<Vec<String>> {
        Ok(split_lines(&self.read_to_string()?))
    }

    /// Check whether the last byte is a newline. An empty file counts as
    /// terminated so nothing gets inserted before the first appended line.
    pub fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path)?;
        if file.metadata()?.len() == 0 {
            return Ok(true);
        }

        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    /// Detect the line ending from the first line only.
    pub fn line_ending(&self) -> Result<LineEnding> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut first = Vec::new();
        reader.read_until(b'\n', &mut first)?;
        Ok(LineEnding::detect(&String::from_utf8_lossy(&first)))
    }

    pub fn tail(&self) -> Result<TargetTail> {
        Ok(TargetTail {
            terminated: self.ends_with_newline()?,
            ending: self.line_ending()?,
        })
    }

    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Truncate and rewrite in place, following symlinks and keeping the
    /// file's permissions. A crash mid-write can lose content; `backup` guards
    /// against that.
    pub fn overwrite(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Copy to `<path>.bak`, overwriting an existing backup.
    pub fn backup(&self) -> Result<PathBuf> {
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        Ok(backup)
    }
}
