//! Request script files.
//!
//! A script file supplies the requests for one client run, one per line:
//!
//! ```text
//! uppercase hello there
//! reverse HELLO
//! random
//! ```
//!
//! The first word is the action name; the remainder of the line (which may
//! contain spaces, or be absent for an empty message) is the message sent
//! verbatim as the request payload.

use std::path::Path;

use crate::error::Result;
use crate::protocol::Action;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub action: Action,
    pub message: String,
}

/// Parse a single script line.
///
/// Returns `Ok(None)` for blank lines; `UnknownAction` if the first word
/// is not one of the five action names.
pub fn parse_line(line: &str) -> Result<Option<Request>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (name, message) = match line.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (line, ""),
    };

    Ok(Some(Request {
        action: name.parse()?,
        message: message.to_string(),
    }))
}

/// Read and parse a whole script file.
pub async fn read_script(path: &Path) -> Result<Vec<Request>> {
    let contents = tokio::fs::read_to_string(path).await?;
    let mut requests = Vec::new();
    for line in contents.lines() {
        if let Some(request) = parse_line(line)? {
            requests.push(request);
        }
    }
    tracing::debug!(path = %path.display(), count = requests.len(), "script parsed");
    Ok(requests)
}
