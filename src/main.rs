use trpo_course_bot::config::{Config, PACKAGE};
use std::process::exit;

use spdlog::prelude::*;

#[tokio::main]
async fn main() {
    // Everything below `Info` is dropped in release builds.
    if cfg!(debug_assertions) {
        spdlog::default_logger().set_level_filter(LevelFilter::All)
    }

    info!("starting {} v{}", PACKAGE.name, PACKAGE.version);

    if let Ok(path) = dotenvy::dotenv() {
        info!("environment loaded from '{}'", path.display());
    }

    let result = match Config::from_env() {
        Ok(config) => trpo_course_bot::run(config).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = result {
        error!("startup aborted: {err}");
        exit(1);
    }
}
