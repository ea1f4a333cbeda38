//! The ontology sink: an in-memory triple graph with deterministic Turtle
//! serialization.
//!
//! Only records with a known successor contribute triples — a dead
//! identifier with no successor has nothing to assert a relation to and is
//! recorded only in the flat table. Curation metadata (date, contributor)
//! describes the curation event, not either identifier, so it attaches to
//! a reified axiom on the specific replaced-by assertion.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use graveyard_core::errors::{CollateError, RegistryError};
use graveyard_core::registry::Registry;
use graveyard_core::types::DeprecationRecord;

/// Namespace and term constants.
pub mod vocab {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDF Schema namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// Dublin Core terms namespace.
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    /// FOAF namespace.
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    /// OBO PURL namespace.
    pub const OBO: &str = "http://purl.obolibrary.org/obo/";
    /// ORCID resolver namespace.
    pub const ORCID: &str = "https://orcid.org/";

    /// The "term replaced by" annotation property (IAO:0100001).
    pub const REPLACED_BY: &str = "http://purl.obolibrary.org/obo/IAO_0100001";
    /// Homo sapiens, the class every contributor is an instance of.
    pub const HUMAN: &str = "http://purl.obolibrary.org/obo/NCBITaxon_9606";

    /// IRI of the ontology resource itself.
    pub const ONTOLOGY_IRI: &str = "https://w3id.org/graveyard/graveyard.ttl";
    /// Ontology title.
    pub const ONTOLOGY_TITLE: &str = "Dead Identifier Graveyard";
    /// Ontology homepage.
    pub const ONTOLOGY_HOMEPAGE: &str = "https://w3id.org/graveyard";
}

/// One RDF term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Term {
    Iri(String),
    Literal(String),
    Blank(usize),
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Self::Iri(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }
}

/// A small in-memory triple store with a `serialize(path)` surface.
///
/// Triples live in a `BTreeSet`, so membership is deduplicated and
/// serialization order is total — two runs over the same records produce
/// identical bytes.
#[derive(Debug, Default)]
pub struct TripleGraph {
    triples: BTreeSet<(Term, Term, Term)>,
    prefixes: BTreeMap<String, String>,
    blank_counter: usize,
}

impl TripleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a namespace prefix for CURIE compaction in the output.
    pub fn bind(&mut self, prefix: &str, uri: &str) {
        self.prefixes.insert(prefix.to_string(), uri.to_string());
    }

    /// Assert one triple. Re-asserting is a no-op.
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term) {
        self.triples.insert((subject, predicate, object));
    }

    /// Mint a fresh blank node.
    pub fn fresh_blank(&mut self) -> Term {
        let id = self.blank_counter;
        self.blank_counter += 1;
        Term::Blank(id)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, subject: &Term, predicate: &Term, object: &Term) -> bool {
        self.triples
            .contains(&(subject.clone(), predicate.clone(), object.clone()))
    }

    /// Iterate triples matching an optional subject/predicate/object mask.
    pub fn matching<'a>(
        &'a self,
        subject: Option<&'a Term>,
        predicate: Option<&'a Term>,
        object: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a (Term, Term, Term)> + 'a {
        self.triples.iter().filter(move |(s, p, o)| {
            subject.map_or(true, |t| t == s)
                && predicate.map_or(true, |t| t == p)
                && object.map_or(true, |t| t == o)
        })
    }

    fn render_term(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => {
                for (prefix, uri) in &self.prefixes {
                    if let Some(local) = iri.strip_prefix(uri) {
                        if !local.is_empty() && local.chars().all(is_local_char) {
                            return format!("{prefix}:{local}");
                        }
                    }
                }
                format!("<{iri}>")
            }
            Term::Literal(value) => {
                format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Term::Blank(id) => format!("_:b{id}"),
        }
    }

    /// Render the graph as Turtle.
    pub fn to_turtle(&self) -> String {
        let mut output = String::new();
        for (prefix, uri) in &self.prefixes {
            output.push_str(&format!("@prefix {prefix}: <{uri}> .\n"));
        }
        if !self.prefixes.is_empty() {
            output.push('\n');
        }
        for (s, p, o) in &self.triples {
            output.push_str(&format!(
                "{} {} {} .\n",
                self.render_term(s),
                self.render_term(p),
                self.render_term(o)
            ));
        }
        output
    }

    /// Serialize the graph to a file.
    pub fn serialize(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_turtle())
    }
}

/// Characters allowed in the local part of an emitted CURIE. Anything else
/// falls back to the full IRI form.
fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn rdf_type() -> Term {
    Term::iri(format!("{}type", vocab::RDF))
}

fn owl(local: &str) -> Term {
    Term::iri(format!("{}{local}", vocab::OWL))
}

fn dcterms(local: &str) -> Term {
    Term::iri(format!("{}{local}", vocab::DCTERMS))
}

/// Build the ontology graph from the merged record set.
///
/// A source whose URI prefix cannot be resolved aborts the build — there
/// is no partial-namespace mode.
pub fn build_graph<R: Registry + ?Sized>(
    records: &[DeprecationRecord],
    registry: &R,
) -> Result<TripleGraph, CollateError> {
    let mut graph = TripleGraph::new();
    graph.bind("rdf", vocab::RDF);
    graph.bind("rdfs", vocab::RDFS);
    graph.bind("owl", vocab::OWL);
    graph.bind("dcterms", vocab::DCTERMS);
    graph.bind("foaf", vocab::FOAF);
    graph.bind("obo", vocab::OBO);
    graph.bind("orcid", vocab::ORCID);

    let ontology = Term::iri(vocab::ONTOLOGY_IRI);
    graph.add(ontology.clone(), rdf_type(), owl("Ontology"));
    graph.add(
        ontology.clone(),
        dcterms("title"),
        Term::literal(vocab::ONTOLOGY_TITLE),
    );
    graph.add(
        ontology.clone(),
        Term::iri(format!("{}homepage", vocab::FOAF)),
        Term::iri(vocab::ONTOLOGY_HOMEPAGE),
    );

    let replaced_by = Term::iri(vocab::REPLACED_BY);
    graph.add(replaced_by.clone(), rdf_type(), owl("AnnotationProperty"));
    graph.add(
        replaced_by.clone(),
        Term::iri(format!("{}label", vocab::RDFS)),
        Term::literal("term replaced by"),
    );

    for record in records {
        let Some(successor_local) = record.successor_local() else {
            continue;
        };
        let uri_prefix = registry
            .get_uri_prefix(&record.source_key)
            .ok_or_else(|| RegistryError::MissingUriPrefix {
                prefix: record.source_key.clone(),
            })?;

        let dead = Term::iri(format!("{uri_prefix}{}", record.dead_local()));
        let successor = Term::iri(format!("{uri_prefix}{successor_local}"));

        graph.add(dead.clone(), rdf_type(), owl("Class"));
        graph.add(successor.clone(), rdf_type(), owl("Class"));
        graph.add(dead.clone(), replaced_by.clone(), successor.clone());

        if record.retired_on.is_none() && record.contributor_orcid.is_none() {
            continue;
        }

        let axiom = graph.fresh_blank();
        graph.add(axiom.clone(), rdf_type(), owl("Axiom"));
        graph.add(axiom.clone(), owl("annotatedSource"), dead);
        graph.add(axiom.clone(), owl("annotatedProperty"), replaced_by.clone());
        graph.add(axiom.clone(), owl("annotatedTarget"), successor);

        if let Some(ref date) = record.retired_on {
            graph.add(axiom.clone(), dcterms("date"), Term::literal(date.clone()));
        }
        if let Some(ref orcid) = record.contributor_orcid {
            let person = Term::iri(format!("{}{orcid}", vocab::ORCID));
            graph.add(axiom, dcterms("contributor"), person.clone());
            graph.add(person.clone(), rdf_type(), Term::iri(vocab::HUMAN));
            graph.add(ontology.clone(), dcterms("contributor"), person);
        }
    }

    Ok(graph)
}
