//! Collator tests: parsing, merge ordering, and the four sinks.

use std::path::Path;

use graveyard_core::config::GraveyardConfig;
use graveyard_core::errors::{CollateError, RegistryError};
use graveyard_core::registry::{PrefixEntry, SnapshotRegistry};
use graveyard_ingest::collate::graph::{build_graph, vocab, Term};
use graveyard_ingest::collate::{
    build_mapping_rows, merge, parse_file, render_histogram, render_sssom, render_table,
    summarize, Collator,
};
use graveyard_ingest::discover::discover_sources;

fn registry() -> SnapshotRegistry {
    SnapshotRegistry::from_entries([
        (
            "doid".to_string(),
            PrefixEntry {
                pattern: Some("^DOID:\\d+$".to_string()),
                uri_prefix: Some("http://purl.obolibrary.org/obo/DOID_".to_string()),
                synonyms: vec!["DOID".to_string()],
            },
        ),
        (
            "go".to_string(),
            PrefixEntry {
                pattern: Some("^GO:\\d{7}$".to_string()),
                uri_prefix: Some("http://purl.obolibrary.org/obo/GO_".to_string()),
                synonyms: vec!["GO".to_string()],
            },
        ),
    ])
}

fn write_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn config_for(dir: &Path) -> GraveyardConfig {
    GraveyardConfig::from_toml(&format!(
        "[paths]\ndata_dir = {:?}\nartifacts_dir = {:?}\n",
        dir.join("data").to_string_lossy(),
        dir.join("artifacts").to_string_lossy(),
    ))
    .unwrap()
}

/// Set up a tempdir with a data/ subdirectory.
fn setup() -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    dir
}

/// The end-to-end scenario: one 3-column row flows into all three data
/// artifacts.
#[test]
fn test_single_row_all_sinks() {
    let dir = setup();
    write_file(
        &dir.path().join("data"),
        "doid.tsv",
        "#did\twhen\tnextofkin\nDOID:999\t2020-01-01\tDOID:1000\n",
    );
    let registry = registry();
    let collator = Collator::new(&registry);
    let config = config_for(dir.path());
    let summary = collator.run(&config).unwrap();
    assert_eq!(summary.sources, 1);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.mappings, 1);

    let artifacts = dir.path().join("artifacts");
    let table = std::fs::read_to_string(artifacts.join("collated.tsv")).unwrap();
    assert!(table.starts_with("#prefix\tdid\twhen\tnextofkin\tcontributor\n"));
    assert!(table.contains("doid\tDOID:999\t2020-01-01\tDOID:1000\t"));

    let sssom = std::fs::read_to_string(artifacts.join("graveyard.sssom.tsv")).unwrap();
    assert!(sssom.contains("DOID:999\treplaced-by\tDOID:1000\tmanual-curation\t2020-01-01"));
    assert!(sssom.contains("#curie_map:"));
    assert!(sssom.contains("#  DOID: http://purl.obolibrary.org/obo/DOID_"));

    let turtle = std::fs::read_to_string(artifacts.join("graveyard.ttl")).unwrap();
    assert!(turtle.contains("obo:DOID_999"));
    assert!(turtle.contains("obo:DOID_1000"));
    assert!(turtle.contains("owl:Axiom"));
    assert!(turtle.contains("\"2020-01-01\""));

    let svg = std::fs::read_to_string(artifacts.join("summary.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("doid"));
}

/// A record with no successor appears in the table and nowhere else.
#[test]
fn test_no_successor_table_only() {
    let dir = setup();
    write_file(
        &dir.path().join("data"),
        "doid.tsv",
        "#did\twhen\tnextofkin\nDOID:999\t2020-01-01\t\n",
    );
    let registry = registry();
    let paths = discover_sources(&dir.path().join("data")).unwrap();
    let records = merge(&paths).unwrap();
    assert_eq!(records.len(), 1);

    let table = render_table(&records);
    assert!(table.contains("doid\tDOID:999\t2020-01-01\t\t"));

    let rows = build_mapping_rows(&records);
    assert!(rows.is_empty());

    let graph = build_graph(&records, &registry).unwrap();
    let replaced_by = Term::iri(vocab::REPLACED_BY);
    assert_eq!(graph.matching(None, Some(&replaced_by), None).count(), 0);
    // No class assertions either: the record contributed nothing.
    let owl_class = Term::iri(format!("{}Class", vocab::OWL));
    assert_eq!(graph.matching(None, None, Some(&owl_class)).count(), 0);
}

/// Merge order is the record sort key, independent of file order, and the
/// collation is byte-for-byte idempotent.
#[test]
fn test_merge_order_and_idempotence() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "go.tsv",
        "#did\twhen\tnextofkin\nGO:0000008\t\tGO:0005737\nGO:0000005\t2018-11-02\tGO:0042254\n",
    );
    write_file(
        &data,
        "doid.tsv",
        "#did\twhen\tnextofkin\tcontributor\nDOID:2\t\t\t\nDOID:1\t2020-01-01\tDOID:3\t0000-0002-1234-5678\n",
    );
    let registry = registry();
    let collator = Collator::new(&registry);
    let config = config_for(dir.path());
    collator.run(&config).unwrap();

    let artifacts = dir.path().join("artifacts");
    let table = std::fs::read_to_string(artifacts.join("collated.tsv")).unwrap();
    let expected = "#prefix\tdid\twhen\tnextofkin\tcontributor\n\
                    doid\tDOID:1\t2020-01-01\tDOID:3\t0000-0002-1234-5678\n\
                    doid\tDOID:2\t\t\t\n\
                    go\tGO:0000005\t2018-11-02\tGO:0042254\t\n\
                    go\tGO:0000008\t\tGO:0005737\t\n";
    assert_eq!(table, expected);

    let sssom = std::fs::read_to_string(artifacts.join("graveyard.sssom.tsv")).unwrap();
    let turtle = std::fs::read_to_string(artifacts.join("graveyard.ttl")).unwrap();

    // Second run over unchanged inputs: identical bytes everywhere.
    collator.run(&config).unwrap();
    assert_eq!(
        std::fs::read_to_string(artifacts.join("collated.tsv")).unwrap(),
        table
    );
    assert_eq!(
        std::fs::read_to_string(artifacts.join("graveyard.sssom.tsv")).unwrap(),
        sssom
    );
    assert_eq!(
        std::fs::read_to_string(artifacts.join("graveyard.ttl")).unwrap(),
        turtle
    );
}

/// Every record with a successor yields exactly one mapping row and one
/// replaced-by edge; records without yield none.
#[test]
fn test_round_trip_counts() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "go.tsv",
        "#did\twhen\tnextofkin\n\
         GO:0000005\t2018-11-02\tGO:0042254\n\
         GO:0000008\t\t\n\
         GO:0000012\t2019-01-01\tGO:0000014\n",
    );
    let registry = registry();
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    let rows = build_mapping_rows(&records);
    assert_eq!(rows.len(), 2);

    let graph = build_graph(&records, &registry).unwrap();
    let replaced_by = Term::iri(vocab::REPLACED_BY);
    // One declaration triple for the property itself is rdf:type, not an
    // edge; edges are keyed by predicate position.
    assert_eq!(graph.matching(None, Some(&replaced_by), None).count(), 2);
}

/// Blank data lines contribute nothing and are not an error.
#[test]
fn test_blank_lines_skipped() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "go.tsv",
        "#did\twhen\tnextofkin\n\nGO:0000005\t\t\n\n",
    );
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    assert_eq!(records.len(), 1);
}

/// A header-only file contributes zero records and is not an error.
#[test]
fn test_empty_source_ok() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(&data, "go.tsv", "#did\twhen\tnextofkin\n");
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    assert!(records.is_empty());
    let table = render_table(&records);
    assert_eq!(table, "#prefix\tdid\twhen\tnextofkin\tcontributor\n");
}

/// A row with the wrong column count aborts parsing.
#[test]
fn test_malformed_row_is_fatal() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(&data, "go.tsv", "#did\twhen\tnextofkin\nGO:0000005\t\n");
    match parse_file(&data.join("go.tsv")) {
        Err(CollateError::MalformedRow { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedRow, got: {other:?}"),
    }
}

/// Legacy comma-separated files parse via header sniffing.
#[test]
fn test_csv_parsing() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "go.csv",
        "#did,when,nextofkin\nGO:0000005,2018-11-02,GO:0042254\n",
    );
    let records = parse_file(&data.join("go.csv")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_key, "go");
    assert_eq!(records[0].dead_id, "GO:0000005");
    assert_eq!(records[0].successor_id.as_deref(), Some("GO:0042254"));
}

/// A missing URI prefix aborts before anything is written.
#[test]
fn test_missing_uri_prefix_no_partial_output() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "doid.tsv",
        "#did\twhen\tnextofkin\nDOID:1\t\tDOID:2\n",
    );
    let registry = SnapshotRegistry::from_entries([(
        "doid".to_string(),
        PrefixEntry {
            pattern: Some("^DOID:\\d+$".to_string()),
            uri_prefix: None,
            synonyms: vec![],
        },
    )]);
    let collator = Collator::new(&registry);
    let config = config_for(dir.path());
    match collator.run(&config) {
        Err(CollateError::Registry(RegistryError::MissingUriPrefix { prefix })) => {
            assert_eq!(prefix, "doid");
        }
        other => panic!("expected MissingUriPrefix, got: {other:?}"),
    }
    // Nothing was written: the artifacts directory was never created.
    assert!(!dir.path().join("artifacts").exists());
}

/// Reified axioms carry date and contributor; contributors are humans and
/// ontology-level contributors.
#[test]
fn test_graph_contributor_assertions() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "doid.tsv",
        "#did\twhen\tnextofkin\tcontributor\nDOID:1\t2020-01-01\tDOID:2\t0000-0002-1234-5678\n",
    );
    let registry = registry();
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    let graph = build_graph(&records, &registry).unwrap();

    let rdf_type = Term::iri(format!("{}type", vocab::RDF));
    let person = Term::iri(format!("{}0000-0002-1234-5678", vocab::ORCID));
    let human = Term::iri(vocab::HUMAN);
    let ontology = Term::iri(vocab::ONTOLOGY_IRI);
    let contributor = Term::iri(format!("{}contributor", vocab::DCTERMS));

    assert!(graph.contains(&person, &rdf_type, &human));
    assert!(graph.contains(&ontology, &contributor, &person));

    // Exactly one reified axiom for the one annotated assertion.
    let owl_axiom = Term::iri(format!("{}Axiom", vocab::OWL));
    assert_eq!(graph.matching(None, Some(&rdf_type), Some(&owl_axiom)).count(), 1);
}

/// A record with neither date nor contributor asserts no axiom.
#[test]
fn test_no_axiom_without_annotations() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(&data, "doid.tsv", "#did\twhen\tnextofkin\nDOID:1\t\tDOID:2\n");
    let registry = registry();
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    let graph = build_graph(&records, &registry).unwrap();

    let rdf_type = Term::iri(format!("{}type", vocab::RDF));
    let owl_axiom = Term::iri(format!("{}Axiom", vocab::OWL));
    assert_eq!(graph.matching(None, Some(&rdf_type), Some(&owl_axiom)).count(), 0);
    // The edge itself is still there.
    let replaced_by = Term::iri(vocab::REPLACED_BY);
    assert_eq!(graph.matching(None, Some(&replaced_by), None).count(), 1);
}

/// The curie_map lists each namespace once, sorted case-insensitively,
/// with orcid added only when an author appears.
#[test]
fn test_sssom_curie_map() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "doid.tsv",
        "#did\twhen\tnextofkin\tcontributor\nDOID:1\t\tDOID:2\t0000-0002-1234-5678\n",
    );
    write_file(
        &data,
        "go.tsv",
        "#did\twhen\tnextofkin\nGO:0000005\t\tGO:0042254\n",
    );
    let registry = registry();
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    let rows = build_mapping_rows(&records);
    let sssom = render_sssom(&rows, &registry).unwrap();

    let map_lines: Vec<&str> = sssom
        .lines()
        .filter(|l| l.starts_with("#  "))
        .collect();
    assert_eq!(
        map_lines,
        vec![
            "#  DOID: http://purl.obolibrary.org/obo/DOID_",
            "#  GO: http://purl.obolibrary.org/obo/GO_",
            "#  orcid: https://orcid.org/",
        ]
    );
    assert!(sssom.contains("subject_id\tpredicate_id\tobject_id\tmapping_justification\tmapping_date\tauthor_id"));
    assert!(sssom.contains("DOID:1\treplaced-by\tDOID:2\tmanual-curation\t\torcid:0000-0002-1234-5678"));
}

/// Per-source counts group and sort by source key.
#[test]
fn test_summarize_counts() {
    let dir = setup();
    let data = dir.path().join("data");
    write_file(
        &data,
        "go.tsv",
        "#did\twhen\tnextofkin\nGO:0000005\t\t\nGO:0000008\t\t\n",
    );
    write_file(&data, "doid.tsv", "#did\twhen\tnextofkin\nDOID:1\t\t\n");
    let records = merge(&discover_sources(&data).unwrap()).unwrap();
    let counts = summarize(&records);
    assert_eq!(
        counts,
        vec![("doid".to_string(), 1), ("go".to_string(), 2)]
    );

    let svg = render_histogram(&counts);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">doid<"));
    assert!(svg.contains(">go<"));
    assert!(svg.contains(">2<"));
}
