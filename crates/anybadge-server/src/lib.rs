//! # anybadge-server
//!
//! **Tier 3 (Binary)**
//!
//! A small blocking HTTP server that renders a badge for
//! `GET /?label=<label>&value=<value>` and a help page otherwise.
//!
//! ## What belongs here
//! * Listener setup and the accept loop
//! * Request-line parsing and response serialization
//! * Routing of query parameters to badges
//!
//! ## What does NOT belong here
//! * Badge rendering (use anybadge-core)
//! * Flag and environment parsing (use anybadge-config)

pub mod handler;
pub mod http;

use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpListener, TcpStream};

use anybadge_config::{ServerCli, ServerSettings, init_tracing};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

pub use handler::{BADGE_COLOR, PublicAddress, handle, help_page};
pub use http::{Request, RequestError, Response, Status};

pub fn run() -> Result<()> {
    let cli = ServerCli::parse();
    let settings = ServerSettings::from_env(&cli).context("Invalid server settings")?;
    init_tracing(&settings.log_level);

    let server = Server::bind(&settings).with_context(|| {
        format!(
            "Failed to listen on {}:{}",
            settings.listen_address, settings.port
        )
    })?;
    let public = server.public_address();
    info!("Serving at: http://{}:{}", public.host, public.port);
    server.serve();
    Ok(())
}

/// A bound listener answering one request per connection.
pub struct Server {
    listener: TcpListener,
    public: PublicAddress,
}

impl Server {
    pub fn bind(settings: &ServerSettings) -> std::io::Result<Self> {
        let listener = TcpListener::bind((settings.listen_address.as_str(), settings.port))?;
        // Port 0 binds an ephemeral port; report the one we got.
        let port = listener.local_addr()?.port();
        Ok(Self {
            listener,
            public: PublicAddress {
                host: settings.listen_address.clone(),
                port,
            },
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn public_address(&self) -> PublicAddress {
        self.public.clone()
    }

    /// Accept connections until the listener fails. Per-connection errors are logged.
    pub fn serve(&self) {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(err) = handle_connection(stream, &self.public) {
                        warn!(error = %err, "failed to answer request");
                    }
                }
                Err(err) => warn!(error = %err, "failed to accept connection"),
            }
        }
    }
}

/// Read one request from `stream`, answer it, and close.
pub fn handle_connection(stream: TcpStream, public: &PublicAddress) -> Result<()> {
    let peer = stream.peer_addr().ok();
    let mut reader = BufReader::new(stream.try_clone().context("Failed to clone stream")?);
    let mut writer = BufWriter::new(stream);

    let response = match Request::read_from(&mut reader) {
        Ok(request) => {
            let response = handle(&request, public);
            info!(
                peer = ?peer,
                method = %request.method,
                target = %request.target,
                status = response.status.code(),
                "request"
            );
            response
        }
        Err(RequestError::Closed) => {
            debug!(peer = ?peer, "connection closed without a request");
            return Ok(());
        }
        Err(err) => {
            warn!(peer = ?peer, error = %err, "bad request");
            Response::new(Status::BadRequest, http::CONTENT_TYPE_TEXT, "Bad Request\n")
        }
    };

    response
        .write_to(&mut writer)
        .context("Failed to write response")
}
