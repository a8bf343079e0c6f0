//! Profile storage for persisting the server URL and credentials.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use upsource_rpc::{Credentials, ServerUrl};

use super::Profile;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored profile data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredProfile {
    url: String,
    credentials: Option<String>,
}

/// Get the profile file path.
pub fn profile_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "upsource").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("profile.json"))
}

/// Save a profile to disk.
pub fn save_profile(profile: &Profile) -> Result<()> {
    let stored = StoredProfile {
        url: profile.url.to_string(),
        credentials: profile
            .credentials
            .as_ref()
            .map(|c| c.encoded().to_string()),
    };

    let path = profile_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write profile file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load a profile from disk.
pub fn load_profile() -> Result<Option<Profile>> {
    let path = profile_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read profile file")?;
    let stored: StoredProfile = serde_json::from_str(&json).context("Invalid profile file")?;

    let url = ServerUrl::new(&stored.url).context("Invalid server URL in profile")?;
    let credentials = stored.credentials.map(Credentials::from_encoded);

    Ok(Some(Profile { url, credentials }))
}

/// Remove the stored profile. Returns false if there was none.
pub fn clear_profile() -> Result<bool> {
    let path = profile_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove profile file")?;
    Ok(true)
}
