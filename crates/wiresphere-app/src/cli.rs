use std::path::PathBuf;

use clap::Parser;
use wiresphere_config::{SphereVariant, WireSphereConfig};

/// wiresphere: an animated wireframe sphere with periodic slicing.
#[derive(Parser, Debug)]
#[command(name = "wiresphere", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override, as an `EnvFilter` directive (e.g. `debug`,
    /// `wiresphere_core=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Variant to render: flat, projected or mesh.
    #[arg(long)]
    pub variant: Option<SphereVariant>,

    /// Window width in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut WireSphereConfig) {
        if let Some(variant) = self.variant {
            config.sphere.variant = variant;
        }
        if let Some(width) = self.width {
            config.window.width = width.max(1);
        }
        if let Some(height) = self.height {
            config.window.height = height.max(1);
        }
    }

    /// Filter directive: `--log-level`, then the config's level.
    pub fn log_directive(&self, config: &WireSphereConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.directive().to_string())
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wiresphere").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_leaves_config_alone() {
        let mut config = WireSphereConfig::default();
        args(&[]).apply_overrides(&mut config);
        assert_eq!(config.sphere.variant, SphereVariant::Projected);
        assert_eq!(config.window.width, WireSphereConfig::default().window.width);
    }

    #[test]
    fn overrides_variant_and_size() {
        let mut config = WireSphereConfig::default();
        args(&["--variant", "mesh", "--width", "800", "--height", "0"])
            .apply_overrides(&mut config);
        assert_eq!(config.sphere.variant, SphereVariant::Mesh);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 1);
    }

    #[test]
    fn rejects_unknown_variant() {
        let result = Args::try_parse_from(["wiresphere", "--variant", "cube"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_directive_prefers_flag() {
        let config = WireSphereConfig::default();
        assert_eq!(args(&[]).log_directive(&config), "wiresphere=info");
        assert_eq!(
            args(&["--log-level", "wiresphere=debug"]).log_directive(&config),
            "wiresphere=debug"
        );
    }

    #[test]
    fn print_config_and_path_flags() {
        let a = args(&["--print-config", "--config", "/tmp/custom.toml"]);
        assert!(a.print_config);
        assert_eq!(a.config, Some(PathBuf::from("/tmp/custom.toml")));
    }
}
