mod api;
mod cors;
mod http_error;
mod models;

use std::str::FromStr;
use std::sync::Arc;

use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use cors::Cors;
use models::config::Config;
use models::context::{Context, ContextPointer};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_logging(config.log_level());

    let context: ContextPointer = Arc::new(Context::new(config));

    let figment = rocket::Config::figment()
        .merge(("port", *context.config().port()))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .manage(context)
        .attach(Cors)
        .mount("/api", api::routes())
        .launch()
        .await?;

    Ok(())
}

fn init_logging(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);

    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger initialized twice");
}
