mod app_state;
mod cli;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;
use wiresphere_common::ConfigError;
use wiresphere_config::WireSphereConfig;

const DEFAULT_DIRECTIVE: &str = "wiresphere=info";

/// Load the config named on the command line, or the default one.
fn load_config(args: &cli::Args) -> Result<WireSphereConfig, ConfigError> {
    match args.config.as_deref() {
        Some(path) => wiresphere_config::load_config_from(path),
        None => wiresphere_config::load_config(),
    }
}

/// Run `f` under a temporary subscriber at the default level, so events
/// emitted before the configured subscriber is installed still reach `writer`.
fn with_bootstrap_logging<W, T>(writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

fn main() {
    let args = cli::parse();

    // The config seeds the global filter, so it is read under a bootstrap one.
    let loaded = with_bootstrap_logging(std::io::stdout, || load_config(&args));
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    args.apply_overrides(&mut config);

    let directive = args.log_directive(&config);
    let filter = match directive.parse::<Directive>() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(e) => {
            eprintln!("invalid log level '{directive}' ({e}), using {DEFAULT_DIRECTIVE}");
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("wiresphere v{} starting...", env!("CARGO_PKG_VERSION"));
    match loaded {
        Ok(_) => tracing::info!(
            variant = config.sphere.variant.as_str(),
            "config loaded"
        ),
        Err(e) => tracing::warn!("config load failed, using defaults: {e}"),
    }

    if args.print_config {
        println!("{}", wiresphere_config::config_to_json(&config));
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::WireSphereApp::new(config);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("event loop error: {e}");
    }
    if app.init_failed() {
        std::process::exit(1);
    }
    tracing::info!("shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn loader_events_are_emitted_before_logging_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sphere]\nvariant = \"flat\"\n").unwrap();

        let captured = Captured::default();
        let sink = captured.clone();
        let config = with_bootstrap_logging(move || sink.clone(), || {
            wiresphere_config::load_config_from(&path)
        })
        .unwrap();

        assert_eq!(config.sphere.variant.as_str(), "flat");
        assert!(captured.text().contains("loaded config from"));
    }
}
