/// Holds the configuration for one preview run.
///
/// The configuration is fixed for the lifetime of the run; a fresh
/// [`PreviewMaterializer`](crate::PreviewMaterializer) must be created for
/// each preview request.
#[derive(Clone, Debug)]
pub struct PreviewConfig {
    /// Whether IRIs are shortened into `prefix_localName` identifiers using the
    /// namespace registry. When disabled, full IRIs are used for property names,
    /// labels and relationship types.
    pub shorten_uris: bool,
    /// Whether `rdf:type` statements with a named object become node labels
    /// instead of relationships.
    pub types_to_labels: bool,
    /// How language-tagged string literals are handled.
    pub language_filter: LanguageFilter,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            shorten_uris: true,
            types_to_labels: true,
            language_filter: LanguageFilter::None,
        }
    }
}

/// The language policy applied to string literals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum LanguageFilter {
    /// Keep every string literal; language tags are ignored.
    #[default]
    None,
    /// Keep every string literal and, when a literal carries a language tag,
    /// also emit a companion `name@` property holding the tag.
    AutoTag,
    /// Keep only literals without a tag or whose tag equals the given code;
    /// everything else is dropped.
    Only(String),
}

impl LanguageFilter {
    /// Maps the optional filter setting onto a policy: no setting keeps
    /// everything, the `"@"` sentinel selects [`LanguageFilter::AutoTag`], and
    /// any other value filters by that language code.
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            None => LanguageFilter::None,
            Some("@") => LanguageFilter::AutoTag,
            Some(code) => LanguageFilter::Only(code.to_owned()),
        }
    }
}
