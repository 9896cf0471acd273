use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

const CONFIG_HOME_VAR: &str = "FITLAB_CONFIG_HOME";
const API_URL_VAR: &str = "FITLAB_API_URL";

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Holds the FitLab environment variables for one test and restores them on drop.
pub struct FitlabEnvGuard {
    previous_home: Option<String>,
    previous_api_url: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl FitlabEnvGuard {
    pub fn new(config_home: PathBuf, api_url: Option<&str>) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous_home = std::env::var(CONFIG_HOME_VAR).ok();
        let previous_api_url = std::env::var(API_URL_VAR).ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_VAR, config_home);
            match api_url {
                Some(url) => std::env::set_var(API_URL_VAR, url),
                None => std::env::remove_var(API_URL_VAR),
            }
        }
        Self {
            previous_home,
            previous_api_url,
            _lock: lock,
        }
    }
}

impl Drop for FitlabEnvGuard {
    fn drop(&mut self) {
        restore(CONFIG_HOME_VAR, self.previous_home.take());
        restore(API_URL_VAR, self.previous_api_url.take());
    }
}

fn restore(name: &str, value: Option<String>) {
    // SAFETY: tests run under a global lock to prevent concurrent env mutations.
    unsafe {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }
}
