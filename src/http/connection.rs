use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::files::handler::FileHandler;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::limiter::RateLimiter;

pub struct Connection {
    stream: TcpStream,
    client_ip: String,
    handler: Arc<FileHandler>,
    limiter: Arc<RateLimiter>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    RateCheck,
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        client_ip: String,
        handler: Arc<FileHandler>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            stream,
            client_ip,
            handler,
            limiter,
            buffer: BytesMut::with_capacity(1024),
            state: ConnectionState::RateCheck,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::RateCheck => {
                    if self.limiter.admit(&self.client_ip).await {
                        self.state = ConnectionState::Reading;
                    } else {
                        warn!("Rate limit exceeded for {}", self.client_ip);
                        let response =
                            Response::too_many_requests(self.limiter.retry_after_secs());
                        self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                    }
                }

                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(req).await;
                    info!(
                        client = %self.client_ip,
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // No keep-alive: one response per connection
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            if let Some(request) = parser::parse_request_line(&self.buffer) {
                return Ok(Some(request));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed without sending anything
                    return Ok(None);
                }
                // Partial line then EOF: parse what arrived
                let line = String::from_utf8_lossy(&self.buffer).into_owned();
                return Ok(Some(parser::request_from_line(&line)));
            }
        }
    }
}
