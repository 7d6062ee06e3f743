use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three read-only backend resources refreshed each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Stocks,
    Best,
    Trending,
}

impl Resource {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Stocks => "/stocks",
            Self::Best => "/best",
            Self::Trending => "/trending",
        }
    }

    /// The exact message the presentation boundary shows for this resource.
    pub const fn backend_error(self) -> &'static str {
        match self {
            Self::Stocks => "Backend /stocks error",
            Self::Best => "Backend /best error",
            Self::Trending => "Backend /trending error",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Failure classification at the feed boundary. Missing or aliased fields
/// are not errors; the normalizer resolves those to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedErrorKind {
    /// The read returned a non-success status or the call itself failed.
    Transport,
    /// The response body could not be decoded as JSON.
    Parse,
}

/// A failed read against one of the three backend resources.
///
/// `Display` yields the resource-specific backend message; the underlying
/// detail stays available for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .resource.backend_error())]
pub struct FeedError {
    resource: Resource,
    kind: FeedErrorKind,
    detail: String,
}

impl FeedError {
    pub fn transport(resource: Resource, detail: impl Into<String>) -> Self {
        Self {
            resource,
            kind: FeedErrorKind::Transport,
            detail: detail.into(),
        }
    }

    pub fn parse(resource: Resource, detail: impl Into<String>) -> Self {
        Self {
            resource,
            kind: FeedErrorKind::Parse,
            detail: detail.into(),
        }
    }

    pub const fn resource(&self) -> Resource {
        self.resource
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Cycle-level error recorded in the view state. The previous good data
/// stays visible alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewError {
    pub kind: FeedErrorKind,
    pub message: String,
}

impl From<&FeedError> for ViewError {
    fn from(error: &FeedError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_error_displays_resource_message() {
        let error = FeedError::transport(Resource::Best, "status 502");
        assert_eq!(error.to_string(), "Backend /best error");
        assert_eq!(error.detail(), "status 502");
    }

    #[test]
    fn view_error_preserves_kind_and_message() {
        let feed_error = FeedError::parse(Resource::Trending, "expected array");
        let view_error = ViewError::from(&feed_error);
        assert_eq!(view_error.kind, FeedErrorKind::Parse);
        assert_eq!(view_error.message, "Backend /trending error");
    }
}
