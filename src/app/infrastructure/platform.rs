/// What the desktop reports about its color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTheme {
    Dark,
    Light,
    /// Probe failed or platform unsupported. Treated as light.
    Unknown,
}

impl SystemTheme {
    pub fn is_dark(&self) -> bool {
        matches!(self, SystemTheme::Dark)
    }

    /// Classify the text a settings tool printed, e.g. `'prefer-dark'`.
    pub fn from_setting(output: &str) -> Self {
        if output.trim().to_lowercase().contains("dark") {
            SystemTheme::Dark
        } else {
            SystemTheme::Light
        }
    }
}

/// Ask the desktop for its color scheme. Never fails: any probe error
/// degrades to `Unknown`.
pub fn detect_system_theme() -> SystemTheme {
    let theme = probe();
    log::debug!("system theme probe: {:?}", theme);
    theme
}

#[cfg(target_os = "windows")]
fn probe() -> SystemTheme {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let Ok(key) = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
    else {
        return SystemTheme::Unknown;
    };
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    match key.get_value::<u32, _>("AppsUseLightTheme") {
        Ok(0) => SystemTheme::Dark,
        Ok(_) => SystemTheme::Light,
        Err(_) => SystemTheme::Unknown,
    }
}

#[cfg(target_os = "macos")]
fn probe() -> SystemTheme {
    use std::process::Command;

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => {
            SystemTheme::from_setting(&String::from_utf8_lossy(&output.stdout))
        }
        // The key only exists while dark mode is on
        Ok(_) => SystemTheme::Light,
        Err(e) => {
            log::warn!("failed to run defaults: {}", e);
            SystemTheme::Unknown
        }
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn probe() -> SystemTheme {
    // color-scheme is the modern GNOME key; gtk-theme covers older desktops
    // that only ship a dark theme variant.
    let mut answered = false;
    for key in ["color-scheme", "gtk-theme"] {
        match gsettings(key) {
            Some(value) => {
                if SystemTheme::from_setting(&value).is_dark() {
                    return SystemTheme::Dark;
                }
                answered = true;
            }
            None => continue,
        }
    }
    if answered {
        SystemTheme::Light
    } else {
        SystemTheme::Unknown
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn gsettings(key: &str) -> Option<String> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .map_err(|e| log::debug!("gsettings unavailable: {}", e))
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
