//! Fixed vocabulary consumed by the mapping builder
//!
//! RML/R2RML binding predicates, the reference-formulation constants and the
//! application-local namespaces for generated maps, classes, resources and
//! logical sources.

use crate::model::Iri;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Base IRI for application-local namespaces.
pub const BASE_IRI: &str = "http://rdfolio.org/";

/// A namespace prefix: mints IRIs for local names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace(pub &'static str);

impl Namespace {
    pub fn iri(&self, local: &str) -> Iri {
        Iri::new(format!("{}{}", self.0, local))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const RML: Namespace = Namespace("http://semweb.mmlab.be/ns/rml#");
pub const RR: Namespace = Namespace("http://www.w3.org/ns/r2rml#");
pub const QL: Namespace = Namespace("http://rdfolio.org/ql#");
pub const MAP: Namespace = Namespace("http://rdfolio.org/mapping#");
pub const CLASS: Namespace = Namespace("http://rdfolio.org/class#");
pub const RESOURCE: Namespace = Namespace("http://rdfolio.org/resource#");
pub const LOGICAL_SOURCE: Namespace = Namespace("http://rdfolio.org/logicalSource#");
pub const RDF: Namespace = Namespace("http://www.w3.org/1999/02/22-rdf-syntax-ns#");
pub const RDFS: Namespace = Namespace("http://www.w3.org/2000/01/rdf-schema#");
pub const OWL: Namespace = Namespace("http://www.w3.org/2002/07/owl#");

pub fn rml_logical_source() -> Iri {
    RML.iri("logicalSource")
}
pub fn rml_source() -> Iri {
    RML.iri("source")
}
pub fn rml_reference() -> Iri {
    RML.iri("reference")
}
pub fn rr_subject_map() -> Iri {
    RR.iri("subjectMap")
}
pub fn rr_template() -> Iri {
    RR.iri("template")
}
pub fn rr_constant() -> Iri {
    RR.iri("constant")
}
pub fn rr_class() -> Iri {
    RR.iri("class")
}
pub fn rr_term_type() -> Iri {
    RR.iri("termType")
}
pub fn rr_graph() -> Iri {
    RR.iri("graph")
}
pub fn rr_graph_map() -> Iri {
    RR.iri("graphMap")
}
pub fn ql_reference_formulation() -> Iri {
    QL.iri("referenceFormulation")
}
pub fn ql_csv() -> Iri {
    QL.iri("CSV")
}
pub fn ql_json_path() -> Iri {
    QL.iri("JSONPath")
}
pub fn ql_xpath() -> Iri {
    QL.iri("XPath")
}
pub fn rdf_type() -> Iri {
    RDF.iri("type")
}
pub fn rdf_property() -> Iri {
    RDF.iri("Property")
}
pub fn rdfs_class() -> Iri {
    RDFS.iri("Class")
}
pub fn owl_class() -> Iri {
    OWL.iri("Class")
}
pub fn owl_ontology() -> Iri {
    OWL.iri("Ontology")
}

/// Application namespaces bound on every fresh mapping graph.
pub fn predefined_prefixes() -> Vec<(&'static str, &'static str)> {
    vec![
        ("rml", RML.as_str()),
        ("rr", RR.as_str()),
        ("ql", QL.as_str()),
        ("map", MAP.as_str()),
        ("class", CLASS.as_str()),
        ("resource", RESOURCE.as_str()),
        ("logicalSource", LOGICAL_SOURCE.as_str()),
    ]
}

lazy_static! {
    /// Well-known prefixes that are not reported as user-bound namespaces.
    pub static ref DEFAULT_PREFIXES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("brick", "https://brickschema.org/schema/Brick#");
        m.insert("csvw", "http://www.w3.org/ns/csvw#");
        m.insert("dc", "http://purl.org/dc/elements/1.1/");
        m.insert("dcam", "http://purl.org/dc/dcam/");
        m.insert("dcat", "http://www.w3.org/ns/dcat#");
        m.insert("dcmitype", "http://purl.org/dc/dcmitype/");
        m.insert("dcterms", "http://purl.org/dc/terms/");
        m.insert("doap", "http://usefulinc.com/ns/doap#");
        m.insert("foaf", "http://xmlns.com/foaf/0.1/");
        m.insert("geo", "http://www.opengis.net/ont/geosparql#");
        m.insert("odrl", "http://www.w3.org/ns/odrl/2/");
        m.insert("org", "http://www.w3.org/ns/org#");
        m.insert("owl", "http://www.w3.org/2002/07/owl#");
        m.insert("prof", "http://www.w3.org/ns/dx/prof/");
        m.insert("prov", "http://www.w3.org/ns/prov#");
        m.insert("qb", "http://purl.org/linked-data/cube#");
        m.insert("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        m.insert("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        m.insert("sdo", "https://schema.org/");
        m.insert("sh", "http://www.w3.org/ns/shacl#");
        m.insert("skos", "http://www.w3.org/2004/02/skos/core#");
        m.insert("sosa", "http://www.w3.org/ns/sosa/");
        m.insert("ssn", "http://www.w3.org/ns/ssn/");
        m.insert("time", "http://www.w3.org/2006/time#");
        m.insert("vann", "http://purl.org/vocab/vann/");
        m.insert("void", "http://rdfs.org/ns/void#");
        m.insert("xml", "http://www.w3.org/XML/1998/namespace");
        m.insert("xsd", "http://www.w3.org/2001/XMLSchema#");
        m.insert("schema", "https://schema.org/");
        m.insert("wgs", "https://www.w3.org/2003/01/geo/wgs84_pos#");
        m
    };
}
