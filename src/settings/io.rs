// src/settings/io.rs
use bevy::log::{debug, error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::AppSettings;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "MatrixPad";
const APPLICATION: &str = "matrixpad";
const CONFIG_FILE: &str = "app_settings.json";

/// Location of the settings file, creating its directory if needed.
pub fn settings_path() -> io::Result<PathBuf> {
    let proj_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        io::Error::new(ErrorKind::NotFound, "Could not determine project directories for app settings.")
    })?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(CONFIG_FILE))
}

pub fn load_settings() -> io::Result<AppSettings> {
    load_settings_from(&settings_path()?)
}

pub fn save_settings(settings: &AppSettings) -> io::Result<()> {
    save_settings_to(&settings_path()?, settings)
}

/// A missing file yields the defaults; an unreadable one is an error.
pub fn load_settings_from(path: &Path) -> io::Result<AppSettings> {
    info!("AppSettings: Attempting to load settings from {:?}", path);
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Using defaults.", path);
            return Ok(AppSettings::default());
        }
        Err(e) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", path, e);
            return Err(e);
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        error!("AppSettings: Failed to parse settings file {:?}: {}", path, e);
        io::Error::new(ErrorKind::InvalidData, format!("Failed to parse settings file: {}", e))
    })
}

/// Writes a sibling `.tmp` file and renames it over `path`, so a failed write
/// leaves the previous settings in place.
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> io::Result<()> {
    info!("AppSettings: Saving settings to {:?}", path);
    debug!("AppSettings: {:?}", settings);
    let tmp_path = path.with_extension("json.tmp");
    let result = write_settings_file(&tmp_path, settings).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = &result {
        error!("AppSettings: Failed to save settings to {:?}: {}", path, e);
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_settings_file(path: &Path, settings: &AppSettings) -> io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, settings).map_err(|e| io::Error::new(ErrorKind::Other, e))?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
