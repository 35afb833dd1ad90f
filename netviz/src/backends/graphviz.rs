//! Runs the external GraphViz `dot` program on a saved document. The program
//! is started directly with one argument per value, never through a shell, so
//! file names with spaces or quotes are passed through untouched.

use crate::core::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    /// The program to run, looked up in PATH.
    pub program: String,
    /// The output format, passed as "-T<format>". This is also the extension
    /// of the output file.
    pub format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            program: String::from("dot"),
            format: String::from("svg"),
        }
    }
}

impl Renderer {
    pub fn new(program: &str, format: &str) -> Self {
        Self {
            program: program.to_string(),
            format: format.to_string(),
        }
    }

    /// Returns the file that rendering \p dot_path produces.
    pub fn output_path(&self, dot_path: &Path) -> PathBuf {
        dot_path.with_extension(&self.format)
    }

    /// The arguments passed to the program for \p dot_path.
    pub fn args(&self, dot_path: &Path) -> Vec<OsString> {
        vec![
            OsString::from(format!("-T{}", self.format)),
            dot_path.as_os_str().to_os_string(),
            OsString::from("-o"),
            self.output_path(dot_path).into_os_string(),
        ]
    }

    /// Renders the DOT file at \p dot_path and returns the path of the
    /// picture.
    pub fn render(&self, dot_path: &Path) -> Result<PathBuf> {
        let out = self.output_path(dot_path);
        log::debug!("Running {} on {}", self.program, dot_path.display());
        let output = Command::new(&self.program)
            .args(self.args(dot_path))
            .output()
            .map_err(|source| Error::RenderSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::RenderFailed {
                program: self.program.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        log::info!("Wrote {}", out.display());
        Ok(out)
    }
}
