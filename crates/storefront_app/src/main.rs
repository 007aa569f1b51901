mod config;
mod render;

use std::path::PathBuf;

use storefront_core::ScreenView;
use storefront_engine::{LogTracker, StaticMenuProvider, SystemClock, ViewStateController};
use storefront_logging::store_info;

const CONFIG_ENV: &str = "STOREFRONT_CONFIG";
const CONFIG_FILENAME: &str = "storefront.ron";

fn main() -> anyhow::Result<()> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let (config, warning) = match config::load(&path) {
        Ok(config) => (config, None),
        Err(err) => (config::AppConfig::default(), Some(err)),
    };

    storefront_logging::initialize(
        config.log_destination,
        storefront_logging::parse_level(&config.log_level),
    );
    if let Some(err) = warning {
        config::report(&path, &err);
    }

    let provider = match config.menu.clone() {
        Some(items) => StaticMenuProvider::new(items),
        None => StaticMenuProvider::default(),
    };
    let controller =
        ViewStateController::new(provider, SystemClock, LogTracker).with_locale(config.locale);

    let mut out = std::io::stdout().lock();
    render::write_lines(&mut out, &[controller.opening_info().to_string()])?;

    let states = controller.subscribe();
    controller.fetch();
    for state in states.try_iter() {
        store_info!("state {:?}", state);
        let view = ScreenView::of(state, config.locale);
        render::write_lines(&mut out, &render::render(&view))?;
    }
    Ok(())
}
