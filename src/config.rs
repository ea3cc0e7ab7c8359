use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

/// Model file looked up next to the executable when no path is configured.
pub const DEFAULT_MODEL_FILE: &str = "model.onnx";

#[derive(Parser, Debug, Clone)]
#[command(name = "lesion-classifier", about = "Skin lesion classification API")]
pub struct Config {
    /// Address to bind; all interfaces by default
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Path to the ONNX classifier
    #[arg(long = "model", env = "MODEL_PATH")]
    pub model: Option<PathBuf>,

    /// Number of HTTP workers (actix default when unset)
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

impl Config {
    pub fn model_path(&self) -> io::Result<PathBuf> {
        match &self.model {
            Some(path) => Ok(path.clone()),
            None => default_model_path(),
        }
    }
}

fn default_model_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DEFAULT_MODEL_FILE))
}
