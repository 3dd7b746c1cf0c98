//! End-to-end search over an in-memory document corpus.
//!
//! Mirrors the full collaborator flow: embed at insert, owner-scope the
//! candidate listing, search, then look the ranked ids back up in the store.

use kombu_search::{SearchConfig, SearchService};
use kombu_store::{CandidateFilter, Document, DocumentStore, MemoryStore};
use kombu_testkit::{random_quantized_vector, seeded_rng, HashEmbedder};
use kombu_vector::Embedder;

const DIM: usize = 256;

fn seed_store(embedder: &HashEmbedder) -> MemoryStore {
    let store = MemoryStore::new(DIM);
    let docs: [(u64, u64, &str, &str); 4] = [
        (
            1,
            1,
            "Introduction to systems programming",
            "Memory layout, ownership, and why it all matters.",
        ),
        (
            2,
            1,
            "Vector storage layout guide",
            "How documents and their embeddings are arranged in the store.",
        ),
        (
            3,
            2,
            "Getting started with web services",
            "Building networked applications from scratch.",
        ),
        (
            4,
            1,
            "Cooking with seaweed",
            "Kombu and nori make a rich broth base.",
        ),
    ];

    for (id, owner, title, body) in docs {
        store
            .put(Document {
                id,
                owner,
                title: title.to_string(),
                body: body.to_string(),
                embedding: embedder.embed(title).unwrap(),
            })
            .unwrap();
    }
    store
}

#[test]
fn exact_title_query_ranks_its_document_first() {
    let embedder = HashEmbedder::new(DIM);
    let store = seed_store(&embedder);
    let service = SearchService::new(DIM);

    let query = embedder.embed("Introduction to systems programming").unwrap();
    let ranked = service
        .find_closest(&query, store.candidates(CandidateFilter::Owner(1)), 5)
        .unwrap();

    assert_eq!(ranked[0], 1);
    assert_eq!(ranked.len(), 3); // owner 1 has three documents
}

#[test]
fn owner_filter_excludes_other_tenants() {
    let embedder = HashEmbedder::new(DIM);
    let store = seed_store(&embedder);
    let service = SearchService::new(DIM);

    // The best global match belongs to owner 2; owner 1 must not see it.
    let query = embedder.embed("Getting started with web services").unwrap();
    let ranked = service
        .find_closest(&query, store.candidates(CandidateFilter::Owner(1)), 5)
        .unwrap();

    assert!(!ranked.contains(&3));
}

#[test]
fn ranked_ids_resolve_back_to_documents() {
    let embedder = HashEmbedder::new(DIM);
    let store = seed_store(&embedder);
    let service = SearchService::new(DIM);

    let query = embedder.embed("seaweed broth").unwrap();
    let ranked = service
        .find_closest(&query, store.candidates(CandidateFilter::Owner(1)), 2)
        .unwrap();

    let titles: Vec<String> = ranked
        .iter()
        .map(|id| store.get(*id).unwrap().title)
        .collect();
    assert_eq!(titles[0], "Cooking with seaweed");
}

#[test]
fn repeated_searches_are_identical() {
    let embedder = HashEmbedder::new(DIM);
    let store = seed_store(&embedder);
    let service = SearchService::new(DIM);

    let query = embedder.embed("storage layout").unwrap();
    let first = service
        .find_closest(&query, store.candidates(CandidateFilter::All), 4)
        .unwrap();
    let second = service
        .find_closest(&query, store.candidates(CandidateFilter::All), 4)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn sharded_scan_matches_sequential_on_random_corpus() {
    let mut rng = seeded_rng(20240817);
    let corpus: Vec<(u64, kombu_vector::QuantizedVector)> = (0..500)
        .map(|id| (id, random_quantized_vector(&mut rng, DIM)))
        .collect();
    let query = random_quantized_vector(&mut rng, DIM);

    let sequential = SearchService::new(DIM);
    let sharded = SearchService::with_config(
        DIM,
        SearchConfig {
            parallel_threshold: Some(100),
            shard_size: 64,
        },
    );

    let a = sequential.find_closest(&query, corpus.clone(), 20).unwrap();
    let b = sharded.find_closest(&query, corpus, 20).unwrap();
    assert_eq!(a, b);
}
