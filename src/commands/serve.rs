//! Serve command - run the HTTP server

use std::path::Path;
use std::sync::Arc;

use log::info;

use todos::adapters::{InMemoryTodoStore, SignedTokenIssuer};
use todos::api::TodoDispatcher;
use todos::config::ServerConfig;
use todos::core::services::TodoService;
use todos::server::tiny_http as http_server;

/// Command-line values that take precedence over the config file
#[derive(Debug, Default)]
pub struct ServeOverrides {
    /// Interface to bind
    pub host: Option<String>,
    /// Port to bind
    pub port: Option<u16>,
    /// Worker thread count
    pub workers: Option<usize>,
}

impl ServeOverrides {
    fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }
    }
}

/// Start the server and block until it stops
pub fn serve(config_path: Option<&Path>, overrides: &ServeOverrides) -> anyhow::Result<()> {
    let mut config = ServerConfig::load(config_path)?;
    overrides.apply(&mut config);
    config.validate()?;

    let dispatcher = TodoDispatcher::new(
        TodoService::new(InMemoryTodoStore::new()),
        SignedTokenIssuer::new(config.token.secret.clone(), config.token.ttl_secs),
    )
    .with_users_base(config.server.users_base.clone());

    let addr = config.bind_addr();
    let server = http_server::bind(&addr)?;
    info!("listening on http://{addr}/todos");
    println!("Listening on http://{addr}/todos");
    println!("Press Ctrl+C to stop");

    http_server::serve(Arc::new(dispatcher), Arc::new(server), config.server.workers)
}
