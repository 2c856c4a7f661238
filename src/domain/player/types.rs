use super::error::PlaybackError;
use serde::Serialize;
use std::fmt;

/// Sound played on every beep, relative to the page that loads the module.
pub const BELL_SOUND_PATH: &str = "bell.mp3";

/// Identifier of the page element the UI application attaches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Result<Self, PlaybackError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PlaybackError::InvalidMountPoint(
                "element identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options handed to the host application when it is initialized.
///
/// Without a mount point the application takes over the whole page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub mount: Option<MountPoint>,
}

impl InitOptions {
    pub fn full_page() -> Self {
        Self { mount: None }
    }

    pub fn mounted(mount: MountPoint) -> Self {
        Self { mount: Some(mount) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Uninitialized,
    Ready,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStats {
    /// Beeps received from the host application.
    pub notifications: u32,
    /// Play commands that failed, synchronously or once the media primitive answered.
    pub failures: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_point_keeps_identifier() {
        let mount = MountPoint::new("elm-root").unwrap();
        assert_eq!(mount.as_str(), "elm-root");
        assert_eq!(mount.to_string(), "elm-root");
    }

    #[test]
    fn test_mount_point_rejects_blank() {
        assert!(matches!(
            MountPoint::new(""),
            Err(PlaybackError::InvalidMountPoint(_))
        ));
        assert!(matches!(
            MountPoint::new("   "),
            Err(PlaybackError::InvalidMountPoint(_))
        ));
    }

    #[test]
    fn test_init_options() {
        assert_eq!(InitOptions::default(), InitOptions::full_page());
        assert!(InitOptions::full_page().mount.is_none());

        let options = InitOptions::mounted(MountPoint::new("widget").unwrap());
        assert_eq!(options.mount.unwrap().as_str(), "widget");
    }

    #[test]
    fn test_stats_start_at_zero() {
        let stats = PlaybackStats::default();
        assert_eq!(stats.notifications, 0);
        assert_eq!(stats.failures, 0);
    }
}
