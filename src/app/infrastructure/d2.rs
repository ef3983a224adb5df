//! d2 compiler adapter.
//!
//! Pipes the diagram source into `d2 ... - -` and reads the SVG back from
//! stdout. Diagnostics come from stderr.

use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::app::error::{AppError, Result};
use crate::app::services::diagrams::{CompileRequest, DiagramCompiler};

/// Environment variable naming the d2 executable.
pub const D2_BIN_ENV: &str = "ADOME_D2_BIN";

#[derive(Debug, Clone)]
pub struct D2Cli {
    program: PathBuf,
}

impl Default for D2Cli {
    fn default() -> Self {
        Self::new("d2")
    }
}

impl D2Cli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Explicit path wins, then `ADOME_D2_BIN`, then `d2` on PATH.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_from(explicit, std::env::var_os(D2_BIN_ENV))
    }

    /// `resolve` with the environment value supplied by the caller.
    pub fn resolve_from(explicit: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        explicit
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// True when the executable can be started at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn args(request: &CompileRequest) -> Vec<OsString> {
        vec![
            format!("--layout={}", request.layout).into(),
            format!("--pad={}", request.pad).into(),
            format!("--theme={}", request.theme_id).into(),
            // stdin in, stdout out
            "-".into(),
            "-".into(),
        ]
    }
}

impl DiagramCompiler for D2Cli {
    fn compile(&self, request: &CompileRequest) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(Self::args(request))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::CompilerUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // d2 may exit before reading everything; its exit status says why
            match stdin.write_all(request.source.as_bytes()) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let diagnostic = if stderr.is_empty() {
                format!("d2 exited with {}", output.status)
            } else {
                stderr
            };
            return Err(AppError::Compile(diagnostic));
        }

        let svg = String::from_utf8_lossy(&output.stdout).into_owned();
        if !svg.contains("<svg") {
            return Err(AppError::Compile("d2 produced no SVG output".to_string()));
        }
        Ok(svg)
    }
}
