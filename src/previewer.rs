use crate::accumulator::ResourceAccumulator;
use crate::buffer::StatementBuffer;
use crate::config::PreviewConfig;
use crate::error::PreviewError;
use crate::graph::{GraphPreview, PropertyValue, VirtualRelationship};
use crate::literal::{CoercedLiteral, LiteralCoercer};
use crate::namespaces::{split_iri, NamespaceRegistry, NamespaceSource};
use oxrdf::vocab::rdf;
use oxrdf::{NamedNodeRef, SubjectRef, TermRef, TripleRef};

/// Builds an in-memory preview of the property graph an RDF import would
/// produce, without touching any store.
///
/// The materializer is strictly two-phase: feed every statement through
/// [`handle_statement`](Self::handle_statement) in arrival order, then call
/// [`finish`](Self::finish) once. Relationships can only be resolved once all
/// node identities are known, so nothing is emitted before the stream ends.
/// `finish` consumes the materializer; a fresh one must be created per run.
///
/// Usage example:
/// ```
/// use rdf_graph_preview::{PreviewConfig, PreviewMaterializer};
/// use rdf_graph_preview::{LiteralRef, NamedNodeRef, TripleRef};
///
/// let seed: &[(&str, &str)] = &[("http://xmlns.com/foaf/0.1/", "foaf")];
/// let mut previewer = PreviewMaterializer::new(PreviewConfig::default(), seed)?;
///
/// let alice = NamedNodeRef::new("http://example.com/Alice")?;
/// let name = NamedNodeRef::new("http://xmlns.com/foaf/0.1/name")?;
/// previewer.handle_statement(TripleRef::new(
///     alice,
///     name,
///     LiteralRef::new_simple_literal("Alice"),
/// ));
///
/// let preview = previewer.finish()?;
/// assert_eq!(preview.nodes.len(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug)]
pub struct PreviewMaterializer {
    config: PreviewConfig,
    coercer: LiteralCoercer,
    registry: NamespaceRegistry,
    resources: ResourceAccumulator,
    pending: StatementBuffer,
}

impl PreviewMaterializer {
    /// Creates a materializer for one run, seeding the namespace registry
    /// from `source` before any statement is handled.
    pub fn new<S: NamespaceSource + ?Sized>(
        config: PreviewConfig,
        source: &S,
    ) -> Result<Self, PreviewError> {
        let registry = NamespaceRegistry::preload(source)?;
        tracing::info!("seeded {} namespace prefixes", registry.len());
        let coercer = LiteralCoercer::new(config.language_filter.clone());
        Ok(Self {
            config,
            coercer,
            registry,
            resources: ResourceAccumulator::default(),
            pending: StatementBuffer::default(),
        })
    }

    /// Handles one statement of the input stream.
    ///
    /// Literal objects become properties of the subject (or are dropped by
    /// the language filter); `rdf:type` assertions with a named object become
    /// labels when so configured; everything else registers both endpoints
    /// and is buffered as a future relationship.
    pub fn handle_statement<'a>(&mut self, statement: impl Into<TripleRef<'a>>) {
        let statement = statement.into();
        let subject = subject_uri(statement.subject);
        match statement.object {
            TermRef::Literal(literal) => {
                if let Some(coerced) = self.coercer.coerce(literal) {
                    let name = self.shorten(statement.predicate);
                    match coerced {
                        CoercedLiteral::Value(value) => {
                            self.resources.set_property(subject, name, value);
                        }
                        CoercedLiteral::Tagged { value, language } => {
                            self.resources.set_property(
                                subject,
                                format!("{name}@"),
                                PropertyValue::String(language),
                            );
                            self.resources
                                .set_property(subject, name, PropertyValue::String(value));
                        }
                    }
                }
            }
            TermRef::NamedNode(object)
                if self.config.types_to_labels && statement.predicate == rdf::TYPE =>
            {
                let label = self.shorten(object);
                self.resources.add_label(subject, label);
            }
            TermRef::NamedNode(object) => {
                self.buffer_relationship(subject, statement.predicate, object.as_str());
            }
            TermRef::BlankNode(object) => {
                self.buffer_relationship(subject, statement.predicate, object.as_str());
            }
        }
    }

    fn buffer_relationship(&mut self, subject: &str, predicate: NamedNodeRef<'_>, object: &str) {
        self.resources.ensure(subject);
        self.resources.ensure(object);
        self.pending
            .record(subject.to_owned(), predicate.into_owned(), object.to_owned());
    }

    /// Materializes the preview once the input stream is complete.
    ///
    /// Every accumulated resource becomes a [`VirtualNode`](crate::VirtualNode)
    /// and every buffered statement a [`VirtualRelationship`]. A buffered
    /// endpoint without a node violates the accumulation invariant and fails
    /// the run.
    pub fn finish(self) -> Result<GraphPreview, PreviewError> {
        let Self {
            config,
            coercer: _,
            mut registry,
            resources,
            pending,
        } = self;

        let nodes = resources.into_nodes();
        let mut relationships = Vec::with_capacity(pending.len());
        for statement in pending {
            for endpoint in [&statement.subject, &statement.object] {
                if !nodes.contains_key(endpoint) {
                    return Err(PreviewError::UnresolvedEndpoint {
                        uri: endpoint.clone(),
                    });
                }
            }
            let rel_type = shorten_with(&config, &mut registry, statement.predicate.as_ref());
            relationships.push(VirtualRelationship {
                start: statement.subject,
                end: statement.object,
                rel_type,
            });
        }
        Ok(GraphPreview {
            nodes,
            relationships,
        })
    }

    fn shorten(&mut self, iri: NamedNodeRef<'_>) -> String {
        shorten_with(&self.config, &mut self.registry, iri)
    }
}

fn shorten_with(
    config: &PreviewConfig,
    registry: &mut NamespaceRegistry,
    iri: NamedNodeRef<'_>,
) -> String {
    if config.shorten_uris {
        let (namespace, local_name) = split_iri(iri.as_str());
        let prefix = registry.prefix_for(namespace);
        format!("{prefix}_{local_name}")
    } else {
        iri.as_str().to_owned()
    }
}

fn subject_uri(subject: SubjectRef<'_>) -> &str {
    match subject {
        SubjectRef::NamedNode(node) => node.as_str(),
        SubjectRef::BlankNode(node) => node.as_str(),
    }
}
