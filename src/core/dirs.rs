use crate::core::error::{Result, SlopError};
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join("slop")).ok_or_else(|| {
        SlopError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the config directory",
        ))
    })
}

pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("config.json"))
}
