mod catalog;
mod classifier;
mod config;
mod error;
mod handlers;
mod models;
mod preprocess;
mod upload;

use std::io::Write;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use log::info;

use crate::classifier::{Classifier, OnnxClassifier};
use crate::config::Config;

fn init_logging() {
    // default level is info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::parse();

    let model_path = config
        .model_path()
        .context("Could not resolve the model location")?;
    let classifier: Arc<dyn Classifier> = Arc::new(
        OnnxClassifier::load(&model_path)
            .with_context(|| format!("Failed to load model {}", model_path.display()))?,
    );
    let classifier = web::Data::from(classifier);

    info!("Server running at http://{}:{}", config.host, config.port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(classifier.clone())
            .configure(handlers::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host.as_str(), config.port))?.run().await?;

    Ok(())
}
