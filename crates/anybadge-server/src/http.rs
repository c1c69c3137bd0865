//! Just enough HTTP/1.x to answer one request per connection.

use std::io::{self, BufRead, Read, Write};

use thiserror::Error;

/// Upper bound on the request head (request line plus headers).
pub const MAX_HEAD_BYTES: usize = 16 * 1024;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("connection closed before a request line was received")]
    Closed,
    #[error("malformed request line {0:?}")]
    MalformedRequestLine(String),
    #[error("request head exceeds {MAX_HEAD_BYTES} bytes")]
    TooLarge,
    #[error("failed to read request: {0}")]
    Io(#[from] io::Error),
}

/// A parsed request line. Headers are read and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Request target as sent, e.g. `/?label=a&value=b`.
    pub target: String,
}

impl Request {
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
        }
    }

    /// Parse `METHOD TARGET VERSION`.
    pub fn parse_request_line(line: &str) -> Result<Self, RequestError> {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(target), Some(version), None) if version.starts_with("HTTP/") => {
                Ok(Self::new(method, target))
            }
            _ => Err(RequestError::MalformedRequestLine(line.to_string())),
        }
    }

    /// Read a request head from `reader`, consuming headers up to the blank line.
    ///
    /// At most [`MAX_HEAD_BYTES`] are read from `reader`, however long its lines are.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, RequestError> {
        let mut remaining = MAX_HEAD_BYTES;
        let mut line = String::new();

        if read_bounded_line(reader, &mut line, &mut remaining)? == 0 {
            return Err(RequestError::Closed);
        }
        let request = Self::parse_request_line(line.trim_end())?;

        loop {
            line.clear();
            let n = read_bounded_line(reader, &mut line, &mut remaining)?;
            if n == 0 || line.trim_end().is_empty() {
                break;
            }
        }
        Ok(request)
    }
}

/// Read one line without taking more than `remaining` bytes.
fn read_bounded_line(
    reader: &mut impl BufRead,
    line: &mut String,
    remaining: &mut usize,
) -> Result<usize, RequestError> {
    if *remaining == 0 {
        return Err(RequestError::TooLarge);
    }
    let n = reader.by_ref().take(*remaining as u64).read_line(line)?;
    *remaining -= n;
    if *remaining == 0 && !line.ends_with('\n') {
        return Err(RequestError::TooLarge);
    }
    Ok(n)
}

/// Response status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::InternalServerError => 500,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

pub const CONTENT_TYPE_SVG: &str = "image/svg+xml";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    /// Send headers (including the body's length) but not the body.
    pub head_only: bool,
}

impl Response {
    pub fn new(status: Status, content_type: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            headers: Vec::new(),
            body: body.into(),
            head_only: false,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn without_body(mut self) -> Self {
        self.head_only = true;
        self
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(
            out,
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status.code(),
            self.status.reason(),
            self.content_type,
            self.body.len()
        )?;
        for (name, value) in &self.headers {
            write!(out, "{name}: {value}\r\n")?;
        }
        out.write_all(b"\r\n")?;
        if !self.head_only {
            out.write_all(self.body.as_bytes())?;
        }
        out.flush()
    }
}
