use crate::graph::{PropertyValue, VirtualNode};
use std::collections::{BTreeSet, HashMap};

/// One accumulated resource: its labels and properties so far.
#[derive(Debug)]
struct Resource {
    labels: BTreeSet<String>,
    properties: HashMap<String, PropertyValue>,
}

impl Resource {
    fn new(uri: &str) -> Self {
        let mut labels = BTreeSet::new();
        labels.insert("Resource".to_owned());
        let mut properties = HashMap::new();
        properties.insert("uri".to_owned(), PropertyValue::from(uri));
        Self { labels, properties }
    }
}

/// Owns every resource seen during the accumulation phase, keyed by URI.
///
/// Resources are created lazily on first reference and mutated in place until
/// end-of-stream; nothing is ever removed.
#[derive(Debug, Default)]
pub(crate) struct ResourceAccumulator {
    resources: HashMap<String, Resource>,
}

impl ResourceAccumulator {
    /// Creates the resource for `uri` if it does not exist yet.
    pub fn ensure(&mut self, uri: &str) {
        self.resources
            .entry(uri.to_owned())
            .or_insert_with(|| Resource::new(uri));
    }

    /// Sets a property on the resource for `uri`, creating the resource if
    /// needed. The last writer for a given (uri, name) pair wins.
    // TODO: repeated statements for the same property overwrite instead of
    // building a collection; lift this once multi-valued semantics are decided.
    pub fn set_property(&mut self, uri: &str, name: String, value: PropertyValue) {
        self.resources
            .entry(uri.to_owned())
            .or_insert_with(|| Resource::new(uri))
            .properties
            .insert(name, value);
    }

    /// Adds a label to the resource for `uri`, creating the resource if
    /// needed. Duplicate labels are no-ops.
    pub fn add_label(&mut self, uri: &str, label: String) {
        self.resources
            .entry(uri.to_owned())
            .or_insert_with(|| Resource::new(uri))
            .labels
            .insert(label);
    }

    /// Consumes the accumulator into the URI → node mapping.
    pub fn into_nodes(self) -> HashMap<String, VirtualNode> {
        self.resources
            .into_iter()
            .map(|(uri, resource)| {
                (
                    uri,
                    VirtualNode {
                        labels: resource.labels,
                        properties: resource.properties,
                    },
                )
            })
            .collect()
    }
}
