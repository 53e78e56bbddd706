use anyhow::Context;
use freelook_camera::{CameraSettings, StartPose};
use freelook_render_wgpu::RendererOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Demo configuration, read from YAML. Every section is optional.
///
/// ```yaml
/// window:
///   width: 1280
///   height: 720
/// textures:
///   primary: resources/textures/cubo_rubick.jpg
/// camera:
///   position: [0.0, 1.0, 5.0]
/// settings:
///   movement_speed: 4.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub textures: TextureConfig,
    pub camera: StartPose,
    pub settings: CameraSettings,
    pub renderer: RendererConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "LearnOpenGL".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub primary: PathBuf,
    pub secondary: PathBuf,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            primary: PathBuf::from("resources/textures/cubo_rubick.jpg"),
            secondary: PathBuf::from("resources/textures/awesomeface.png"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub clear_color: [f64; 3],
    pub texture_mix: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        let options = RendererOptions::default();
        Self {
            clear_color: options.clear_color,
            texture_mix: options.texture_mix,
        }
    }
}

impl From<RendererConfig> for RendererOptions {
    fn from(config: RendererConfig) -> Self {
        Self {
            clear_color: config.clear_color,
            texture_mix: config.texture_mix.clamp(0.0, 1.0),
        }
    }
}

impl DemoConfig {
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("invalid demo config")?;
        config
            .settings
            .validate()
            .context("invalid camera settings in demo config")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&data)
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(width) = overrides.width {
            self.window.width = width;
        }
        if let Some(height) = overrides.height {
            self.window.height = height;
        }
        if let Some(path) = overrides.primary_texture {
            self.textures.primary = path;
        }
        if let Some(path) = overrides.secondary_texture {
            self.textures.secondary = path;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub primary_texture: Option<PathBuf>,
    pub secondary_texture: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::io::Write;

    #[test]
    fn defaults_match_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "LearnOpenGL");
        assert_eq!(config.camera.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(config.renderer.clear_color, [0.2, 0.3, 0.3]);
        assert_eq!(config.renderer.texture_mix, 0.2);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = DemoConfig::from_yaml(
            "window:\n  width: 1280\nsettings:\n  movement_speed: 4.0\n",
        )
        .unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.settings.movement_speed, 4.0);
        assert_eq!(config.settings.sensitivity, 0.1);
        assert_eq!(config.textures, TextureConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(DemoConfig::from_yaml("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(DemoConfig::from_yaml("window:\n  width: wide\n").is_err());
    }

    #[test]
    fn rejects_unusable_camera_settings() {
        let err = DemoConfig::from_yaml("settings:\n  near: 0.0\n  far: -5.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("invalid clip planes"));

        let err = DemoConfig::from_yaml("settings:\n  sensitivity: .nan\n").unwrap_err();
        assert!(format!("{err:#}").contains("sensitivity"));

        assert!(DemoConfig::from_yaml("settings:\n  movement_speed: 0.0\n").is_err());
    }

    #[test]
    fn overrides_win() {
        let mut config = DemoConfig::default();
        config.apply_overrides(Overrides {
            height: Some(720),
            secondary_texture: Some(PathBuf::from("face.png")),
            ..Overrides::default()
        });
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.textures.secondary, PathBuf::from("face.png"));
    }

    #[test]
    fn texture_mix_is_clamped() {
        let options: RendererOptions = RendererConfig {
            clear_color: [0.0; 3],
            texture_mix: 3.0,
        }
        .into();
        assert_eq!(options.texture_mix, 1.0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "camera:\n  yaw: 0.0\n  fov: 30.0").unwrap();
        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(config.camera.yaw, 0.0);
        assert_eq!(config.camera.fov, 30.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DemoConfig::load("/nonexistent/freelook.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/freelook.yaml"));
    }
}
