//! Serve command - HTTP service

use anyhow::{Context, Result};
use repograde::acquire::GitCloneSource;
use repograde::config::GraderConfig;
use repograde::pipeline::Grader;
use std::sync::Arc;

/// Build the grader once and serve until interrupted
pub fn run(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = GraderConfig::load()?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let client = config.build_client()?;
    let grader = Grader::new(
        Arc::new(client),
        Arc::new(GitCloneSource::new(config.forge.clone_mirror.clone())),
        config.forge.host.clone(),
    );

    println!("Serving on http://{}:{}", host, port);
    actix_web::rt::System::new()
        .block_on(repograde::server::run(&host, port, grader))
        .with_context(|| format!("HTTP server on {}:{} failed", host, port))
}
