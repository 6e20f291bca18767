use crate::config::LanguageFilter;
use crate::graph::PropertyValue;
use oxrdf::vocab::xsd;
use oxrdf::{LiteralRef, NamedNodeRef};

/// The outcome of coercing one literal that passed the language filter.
#[derive(Debug, PartialEq)]
pub(crate) enum CoercedLiteral {
    /// A single property value.
    Value(PropertyValue),
    /// A string value plus its language tag, to be stored as two properties.
    Tagged { value: String, language: String },
}

/// Coerces RDF literals into native property values.
///
/// Numeric and boolean datatypes become native scalars; everything else,
/// including untyped literals and unrecognized datatypes, is kept as a string
/// subject to the configured language policy.
#[derive(Debug)]
pub(crate) struct LiteralCoercer {
    filter: LanguageFilter,
}

impl LiteralCoercer {
    pub fn new(filter: LanguageFilter) -> Self {
        Self { filter }
    }

    /// Coerces `literal`, returning `None` when the language filter drops it.
    ///
    /// A numeric or boolean literal whose lexical form does not parse falls
    /// back to the string branch; validating well-formedness is not this
    /// crate's job.
    pub fn coerce(&self, literal: LiteralRef<'_>) -> Option<CoercedLiteral> {
        let datatype = literal.datatype();
        if is_integer_datatype(datatype) {
            if let Ok(value) = literal.value().parse::<i64>() {
                return Some(CoercedLiteral::Value(PropertyValue::Integer(value)));
            }
        } else if is_floating_datatype(datatype) {
            if let Ok(value) = literal.value().parse::<f64>() {
                return Some(CoercedLiteral::Value(PropertyValue::Double(value)));
            }
        } else if datatype == xsd::BOOLEAN {
            if let Some(value) = parse_boolean(literal.value()) {
                return Some(CoercedLiteral::Value(PropertyValue::Boolean(value)));
            }
        }
        self.coerce_string(literal)
    }

    fn coerce_string(&self, literal: LiteralRef<'_>) -> Option<CoercedLiteral> {
        match (&self.filter, literal.language()) {
            (LanguageFilter::Only(code), Some(tag)) if tag != code => {
                tracing::debug!("dropping literal tagged '{tag}', filter is '{code}'");
                None
            }
            (LanguageFilter::AutoTag, Some(tag)) => Some(CoercedLiteral::Tagged {
                value: literal.value().to_owned(),
                language: tag.to_owned(),
            }),
            _ => Some(CoercedLiteral::Value(PropertyValue::String(
                literal.value().to_owned(),
            ))),
        }
    }
}

fn is_integer_datatype(datatype: NamedNodeRef<'_>) -> bool {
    [
        xsd::INTEGER,
        xsd::LONG,
        xsd::INT,
        xsd::SHORT,
        xsd::BYTE,
        xsd::UNSIGNED_LONG,
        xsd::UNSIGNED_INT,
        xsd::UNSIGNED_SHORT,
        xsd::UNSIGNED_BYTE,
        xsd::NON_NEGATIVE_INTEGER,
        xsd::NON_POSITIVE_INTEGER,
        xsd::NEGATIVE_INTEGER,
        xsd::POSITIVE_INTEGER,
    ]
    .contains(&datatype)
}

fn is_floating_datatype(datatype: NamedNodeRef<'_>) -> bool {
    [xsd::DECIMAL, xsd::DOUBLE, xsd::FLOAT].contains(&datatype)
}

fn parse_boolean(value: &str) -> Option<bool> {
    // xsd:boolean also admits the numeric lexical forms.
    match value {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{LanguageTagParseError, Literal};

    fn coerce(filter: LanguageFilter, literal: &Literal) -> Option<CoercedLiteral> {
        LiteralCoercer::new(filter).coerce(literal.as_ref())
    }

    #[test]
    fn integer_family() {
        for datatype in [xsd::INTEGER, xsd::LONG, xsd::INT, xsd::UNSIGNED_SHORT] {
            let literal = Literal::new_typed_literal("42", datatype);
            assert_eq!(
                coerce(LanguageFilter::None, &literal),
                Some(CoercedLiteral::Value(PropertyValue::Integer(42)))
            );
        }
    }

    #[test]
    fn floating_family() {
        for datatype in [xsd::DECIMAL, xsd::DOUBLE, xsd::FLOAT] {
            let literal = Literal::new_typed_literal("3.5", datatype);
            assert_eq!(
                coerce(LanguageFilter::None, &literal),
                Some(CoercedLiteral::Value(PropertyValue::Double(3.5)))
            );
        }
    }

    #[test]
    fn boolean_lexical_forms() {
        for (form, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
            let literal = Literal::new_typed_literal(form, xsd::BOOLEAN);
            assert_eq!(
                coerce(LanguageFilter::None, &literal),
                Some(CoercedLiteral::Value(PropertyValue::Boolean(expected)))
            );
        }
    }

    #[test]
    fn unparsable_numeric_falls_back_to_string() {
        let literal = Literal::new_typed_literal("forty-two", xsd::INTEGER);
        assert_eq!(
            coerce(LanguageFilter::None, &literal),
            Some(CoercedLiteral::Value(PropertyValue::String(
                "forty-two".to_owned()
            )))
        );
    }

    #[test]
    fn unrecognized_datatype_is_a_string() -> Result<(), oxrdf::IriParseError> {
        let datatype = oxrdf::NamedNode::new("http://example.com/voc#temperature")?;
        let literal = Literal::new_typed_literal("hot", datatype);
        assert_eq!(
            coerce(LanguageFilter::None, &literal),
            Some(CoercedLiteral::Value(PropertyValue::String(
                "hot".to_owned()
            )))
        );
        Ok(())
    }

    #[test]
    fn untagged_string_passes_any_filter() {
        let literal = Literal::new_simple_literal("Alice");
        for filter in [
            LanguageFilter::None,
            LanguageFilter::AutoTag,
            LanguageFilter::Only("en".to_owned()),
        ] {
            assert_eq!(
                coerce(filter, &literal),
                Some(CoercedLiteral::Value(PropertyValue::String(
                    "Alice".to_owned()
                )))
            );
        }
    }

    #[test]
    fn filter_drops_other_languages() -> Result<(), LanguageTagParseError> {
        let literal = Literal::new_language_tagged_literal("chat", "fr")?;
        assert_eq!(coerce(LanguageFilter::Only("en".to_owned()), &literal), None);
        assert_eq!(
            coerce(LanguageFilter::Only("fr".to_owned()), &literal),
            Some(CoercedLiteral::Value(PropertyValue::String(
                "chat".to_owned()
            )))
        );
        Ok(())
    }

    #[test]
    fn auto_mode_keeps_the_tag() -> Result<(), LanguageTagParseError> {
        let literal = Literal::new_language_tagged_literal("cat", "en")?;
        assert_eq!(
            coerce(LanguageFilter::AutoTag, &literal),
            Some(CoercedLiteral::Tagged {
                value: "cat".to_owned(),
                language: "en".to_owned(),
            })
        );
        Ok(())
    }

    #[test]
    fn no_filter_ignores_the_tag() -> Result<(), LanguageTagParseError> {
        let literal = Literal::new_language_tagged_literal("cat", "en")?;
        assert_eq!(
            coerce(LanguageFilter::None, &literal),
            Some(CoercedLiteral::Value(PropertyValue::String(
                "cat".to_owned()
            )))
        );
        Ok(())
    }
}
