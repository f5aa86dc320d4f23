//! Session acquisition with on-disk reuse: a session id persisted by an
//! earlier invocation is restored and validated before falling back to a
//! fresh login.

use crate::connect::ConnectionTarget;
use crate::error::ScoutError;
use crate::vsphere::VsphereClient;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const CACHE_SUBDIR: &str = "vscout";

#[derive(Debug, Serialize, Deserialize)]
struct CachedSession {
    host: String,
    username: String,
    session_id: String,
}

/// Builds an authenticated client for the target, reusing a cached session
/// when the server still accepts it. Cache problems are never fatal.
pub async fn acquire_client(target: &ConnectionTarget) -> Result<VsphereClient, ScoutError> {
    let mut client = VsphereClient::new(target).map_err(ScoutError::Auth)?;

    let cache_path = cache_dir().map(|dir| session_file(&dir, target));

    if let Some(path) = &cache_path {
        if let Some(cached) = load_session(path) {
            client.restore_session(cached.session_id);
            match client.session_is_active().await {
                Ok(true) => {
                    debug!("reusing cached session for {}", target.host());
                    return Ok(client);
                }
                Ok(false) => debug!("cached session for {} is stale", target.host()),
                Err(e) => debug!("cached session probe failed: {e}"),
            }
            client.clear_session();
        }
    }

    client.login().await.map_err(ScoutError::Auth)?;

    if let Some(path) = &cache_path {
        if let Err(e) = store_session(path, target, &client) {
            warn!("could not persist session cache: {e}");
        }
    }

    Ok(client)
}

fn cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(CACHE_SUBDIR))
}

/// One cache file per distinct (user, endpoint, TLS policy) tuple.
fn session_file(dir: &Path, target: &ConnectionTarget) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(target.username().as_bytes());
    hasher.update(b"@");
    hasher.update(target.host().as_bytes());
    hasher.update(target.port().to_le_bytes());
    hasher.update([target.insecure() as u8]);
    let digest = hasher.finalize();
    let name: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    dir.join(name).with_extension("json")
}

fn load_session(path: &Path) -> Option<CachedSession> {
    let data = fs::read(path).ok()?;
    serde_json::from_slice(&data).ok()
}

fn store_session(
    path: &Path,
    target: &ConnectionTarget,
    client: &VsphereClient,
) -> std::io::Result<()> {
    let Some(session_id) = client.session_id() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let payload = CachedSession {
        host: target.host().to_string(),
        username: target.username().to_string(),
        session_id: session_id.to_string(),
    };
    fs::write(path, serde_json::to_vec(&payload)?)
}
