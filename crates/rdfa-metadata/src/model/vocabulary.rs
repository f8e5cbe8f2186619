//! Names used by RDFa type-metadata definition files.
//!
//! - element names (`children`, `config`, `rev`, ...) of the definition format
//! - attribute names (`typeof`, `vocab`, `prefix`, ...)
//! - the default vocabulary registered for implicit predicates
//! - a handful of well-known namespace URIs

/// Element names of a definition document.
pub mod element {
    pub const CHILDREN: &str = "children";
    pub const CONFIG: &str = "config";
    pub const ATTRIBUTE: &str = "attribute";
    pub const REV: &str = "rev";
    pub const CHILDTYPE: &str = "childtype";

    // Child kinds inside `children`
    pub const PROPERTY: &str = "property";
    pub const COLLECTION: &str = "collection";
    pub const NODE: &str = "node";
}

/// Attribute names of a definition document.
pub mod attribute {
    pub const TYPEOF: &str = "typeof";
    pub const VOCAB: &str = "vocab";
    pub const PREFIX: &str = "prefix";
    pub const IDENTIFIER: &str = "identifier";
    pub const PROPERTY: &str = "property";
    pub const REL: &str = "rel";
    pub const REV: &str = "rev";

    // `config` / `attribute` entries
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
}

/// Vocabulary registered on a type when a child falls back to its identifier
/// as predicate.
pub mod default_vocabulary {
    pub const PREFIX: &str = "dcterms";
    pub const URI: &str = "http://purl.org/dc/terms/";
}

/// Well-known namespace URIs.
pub mod standard {
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const SIOC: &str = "http://rdfs.org/sioc/ns#";
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const SCHEMA: &str = "http://schema.org/";
}
