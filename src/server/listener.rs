use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

use tracing::{error, info};

use crate::config::Config;
use crate::http::mime::MimeCatalog;
use crate::server::connection::serve_connection;

pub fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)?;
    info!("Listening on {}", cfg.listen_addr);

    let mime = Arc::new(MimeCatalog::default());

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                error!("accept: {}", e);
                continue;
            }
        };

        if let Ok(peer) = stream.peer_addr() {
            info!("Accepted connection from {}", peer);
        }

        let cfg = cfg.clone();
        let mime = Arc::clone(&mime);
        thread::spawn(move || {
            serve_connection(stream, &cfg, &mime);
        });
    }

    Ok(())
}
