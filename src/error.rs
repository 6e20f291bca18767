use std::error::Error;

/// An error raised while seeding the namespace registry from its external source.
///
/// The preview cannot proceed reliably without the already-registered prefixes,
/// so this failure aborts the run instead of continuing with an empty table.
#[derive(Debug, thiserror::Error)]
#[error("failed to load namespace prefixes: {0}")]
pub struct NamespaceLoadError(#[source] Box<dyn Error + Send + Sync>);

impl NamespaceLoadError {
    /// Wraps the underlying failure of a [`NamespaceSource`](crate::NamespaceSource).
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// An error raised while building a [`GraphPreview`](crate::GraphPreview).
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The one-time namespace preload failed.
    #[error(transparent)]
    Preload(#[from] NamespaceLoadError),
    /// A buffered relationship statement references a URI for which no resource
    /// was accumulated. The accumulation phase registers both endpoints before
    /// buffering, so this indicates an internal consistency bug.
    #[error("no resource was accumulated for relationship endpoint '{uri}'")]
    UnresolvedEndpoint {
        /// The endpoint URI that has no node.
        uri: String,
    },
}
