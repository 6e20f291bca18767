use crate::error::NamespaceLoadError;
use std::collections::HashMap;

/// Provides the namespace prefixes already registered in an external store.
///
/// The previewer queries this collaborator exactly once, before the first
/// statement is handled, and seeds its registry from the returned rows.
pub trait NamespaceSource {
    /// Returns rows of (namespace IRI, prefix) pairs.
    fn namespaces(&self) -> Result<Vec<(String, String)>, NamespaceLoadError>;
}

impl<S: AsRef<str>> NamespaceSource for [(S, S)] {
    fn namespaces(&self) -> Result<Vec<(String, String)>, NamespaceLoadError> {
        Ok(self
            .iter()
            .map(|(namespace, prefix)| {
                (namespace.as_ref().to_owned(), prefix.as_ref().to_owned())
            })
            .collect())
    }
}

/// A mapping from namespace IRI to a short prefix string.
///
/// Preloaded entries keep their stored prefix; namespaces first seen during
/// the run are assigned `nsN` where `N` is the table size at assignment time,
/// so fresh prefixes are dense and depend only on first-seen order. The table
/// only grows and a namespace keeps its prefix for the whole run.
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    prefixes: HashMap<String, String>,
}

impl NamespaceRegistry {
    /// Seeds a registry from the external `source`.
    ///
    /// A source failure aborts the run; continuing with an empty table would
    /// silently assign fresh prefixes to namespaces the store already knows.
    pub fn preload<S: NamespaceSource + ?Sized>(source: &S) -> Result<Self, NamespaceLoadError> {
        let prefixes = source.namespaces()?.into_iter().collect();
        Ok(Self { prefixes })
    }

    /// Returns the prefix for `namespace`, assigning a fresh one if needed.
    /// Idempotent within a run.
    pub fn prefix_for(&mut self, namespace: &str) -> &str {
        let next = format!("ns{}", self.prefixes.len());
        self.prefixes.entry(namespace.to_owned()).or_insert(next)
    }

    /// The number of registered namespaces.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether no namespace is registered.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Splits an IRI into (namespace, local name).
///
/// The local name starts after the last `#`, else after the last `/`, else
/// after the last `:`. An IRI without any separator is all local name.
pub(crate) fn split_iri(iri: &str) -> (&str, &str) {
    let index = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .or_else(|| iri.rfind(':'));
    match index {
        Some(index) => iri.split_at(index + 1),
        None => ("", iri),
    }
}
