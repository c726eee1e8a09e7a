mod info;
mod relocate;
mod swing;

pub use info::info;
pub use relocate::relocate;
pub use swing::{non_swing, swing};

use crate::config::ElectionConfig;
use crate::formats::{read_election, FormatError};
use crate::model::Election;
use crate::optimize::OptimizeError;
use crate::relocate::RelocationError;
use crate::util::{write_serialized, UtilError};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("{0}")]
    Optimize(#[from] OptimizeError),
    #[error("{0}")]
    Relocation(#[from] RelocationError),
    #[error("{0}")]
    Output(#[from] UtilError),
}

pub type Result<T> = std::result::Result<T, CommandError>;

fn load(path: &Path, config: &ElectionConfig) -> Result<Election> {
    Ok(read_election(path, config)?)
}

fn write_report<T: Serialize>(output: Option<&Path>, report: &T) -> Result<()> {
    if let Some(path) = output {
        write_serialized(path, report)?;
        log::info!("wrote report to {}", path.display());
    }
    Ok(())
}
