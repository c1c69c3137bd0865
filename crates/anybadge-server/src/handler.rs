//! Request routing.

use anybadge_core::{Badge, BadgeOptions};
use tracing::{debug, warn};
use url::Url;

use crate::http::{
    CONTENT_TYPE_HTML, CONTENT_TYPE_SVG, CONTENT_TYPE_TEXT, Request, Response, Status,
};

/// Badge color for every badge served over HTTP.
pub const BADGE_COLOR: &str = "green";

/// Address shown in the help page's example link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicAddress {
    pub host: String,
    pub port: u16,
}

/// Answer one request.
pub fn handle(request: &Request, public: &PublicAddress) -> Response {
    match request.method.as_str() {
        "GET" => get(&request.target, public),
        "HEAD" => get(&request.target, public).without_body(),
        other => {
            debug!(method = other, "method not allowed");
            Response::new(
                Status::MethodNotAllowed,
                CONTENT_TYPE_TEXT,
                "Method Not Allowed\n",
            )
            .with_header("Allow", "GET, HEAD")
        }
    }
}

fn get(target: &str, public: &PublicAddress) -> Response {
    let Some(url) = parse_target(target) else {
        return Response::new(Status::BadRequest, CONTENT_TYPE_TEXT, "Bad Request\n");
    };
    if url.path() == "/favicon.ico" {
        debug!("ignoring favicon request");
        return Response::new(Status::NotFound, CONTENT_TYPE_TEXT, "Not Found\n");
    }

    let label = first_param(&url, "label");
    let value = first_param(&url, "value");
    debug!(label = %label, value = %value, "badge query");

    if label.is_empty() || value.is_empty() {
        debug!("not all parameters present");
        return Response::new(Status::Ok, CONTENT_TYPE_HTML, help_page(public));
    }

    match Badge::new(BadgeOptions::new(label, value).default_color(BADGE_COLOR)) {
        Ok(badge) => Response::new(Status::Ok, CONTENT_TYPE_SVG, badge.svg()),
        Err(err) => {
            warn!(error = %err, "failed to build badge");
            Response::new(
                Status::InternalServerError,
                CONTENT_TYPE_TEXT,
                format!("{err}\n"),
            )
        }
    }
}

fn parse_target(target: &str) -> Option<Url> {
    if !target.starts_with('/') {
        return None;
    }
    let base = Url::parse("http://localhost/").ok()?;
    base.join(target).ok()
}

fn first_param(url: &Url, name: &str) -> String {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

/// HTML page shown when `label` or `value` is missing.
pub fn help_page(public: &PublicAddress) -> String {
    let example = format!(
        "http://{}:{}/?label=Project%20Awesomeness&value=110%25",
        public.host, public.port
    );
    format!(
        "<html><head><title>Anybadge Web Server.</title></head><body>\
         <h1>Welcome to the Anybadge Web Server.</h1>\
         <p>You are seeing this message because you haven't passed all the query parameters \
         to display a badge.</p>\
         <p>You need to pass at least a <b>label</b> and <b>value</b> parameter.</p>\
         <p>Here is an example:</p>\
         <p><a href=\"{example}\">{example}</a></p>\
         </body></html>"
    )
}
