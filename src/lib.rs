//! Builds an in-memory preview of the property graph that an RDF import
//! would produce: nodes, labels, properties and relationships, with nothing
//! persisted.
//!
//! Statements arrive already parsed as [`TripleRef`]s and are consumed in two
//! phases. The accumulation phase merges repeated statements about one
//! subject into one entity, coerces literal datatypes into native scalars,
//! turns `rdf:type` assertions into labels, and buffers everything else as a
//! future relationship. The materialization phase then resolves the buffered
//! statements against the accumulated node identities.
//!
//! The entry point is [`PreviewMaterializer`].

mod accumulator;
mod buffer;
mod config;
mod error;
mod graph;
mod literal;
mod namespaces;
mod previewer;

pub use config::{LanguageFilter, PreviewConfig};
pub use error::{NamespaceLoadError, PreviewError};
pub use graph::{GraphPreview, PropertyValue, VirtualNode, VirtualRelationship};
pub use namespaces::{NamespaceRegistry, NamespaceSource};
pub use previewer::PreviewMaterializer;

// Re-export the oxrdf types appearing on the public surface.
pub use oxrdf::vocab;
pub use oxrdf::{
    BlankNode, BlankNodeRef, IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject,
    SubjectRef, Term, TermRef, Triple, TripleRef,
};
