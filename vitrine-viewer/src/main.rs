use vitrine_viewer::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("vitrine_viewer", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::resolve()?;
    log::info!(
        "starting vitrine with {} images, period {:?}",
        config.gallery.len(),
        config.period
    );

    app::run(config)?;
    Ok(())
}
