use oxrdf::NamedNode;

/// A statement retained for the materialization phase: it is neither a
/// literal-valued property nor a type assertion turned into a label.
///
/// The predicate is kept as a full IRI and shortened only during
/// materialization, so prefix assignment for relationship predicates follows
/// all property predicates, in arrival order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PendingRelationship {
    pub subject: String,
    pub predicate: NamedNode,
    pub object: String,
}

/// Holds relationship statements in arrival order until every node identity
/// is known. Repeated statements are kept; deduplication is the caller's
/// concern, not this buffer's.
#[derive(Debug, Default)]
pub(crate) struct StatementBuffer {
    statements: Vec<PendingRelationship>,
}

impl StatementBuffer {
    /// Appends one relationship statement.
    pub fn record(&mut self, subject: String, predicate: NamedNode, object: String) {
        self.statements.push(PendingRelationship {
            subject,
            predicate,
            object,
        });
    }

    /// The number of buffered statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl IntoIterator for StatementBuffer {
    type Item = PendingRelationship;
    type IntoIter = std::vec::IntoIter<PendingRelationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_preserved_and_no_deduplication() -> Result<(), oxrdf::IriParseError> {
        let knows = NamedNode::new("http://xmlns.com/foaf/0.1/knows")?;
        let mut buffer = StatementBuffer::default();
        buffer.record("a".to_owned(), knows.clone(), "b".to_owned());
        buffer.record("a".to_owned(), knows.clone(), "b".to_owned());
        assert_eq!(buffer.len(), 2);

        let statements: Vec<_> = buffer.into_iter().collect();
        assert_eq!(statements[0], statements[1]);
        assert_eq!(statements[0].predicate, knows);
        Ok(())
    }
}
