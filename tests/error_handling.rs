use vectorizer::{
    InMemoryBackend, PipelineError, StopwordSet, StoreError, VectorSource, VectorStore,
    Vectorizer, VectorizerConfig,
};

/// Backend whose every read fails.
struct BrokenDisk;

impl VectorSource for BrokenDisk {
    fn get(&self, _key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Err(StoreError::backend("read failed"))
    }
}

#[test]
fn store_error_aborts_with_query_index() {
    let v = Vectorizer::with_store(VectorStore::new(Box::new(BrokenDisk), 4));
    let err = v
        .aggregate_queries(&["", "---", "Cat"])
        .expect_err("store failure must abort");
    assert_eq!(
        err,
        PipelineError::Store {
            query: 2,
            source: StoreError::Backend("read failed".into())
        }
    );
    assert!(err.to_string().starts_with("at query 2: "));
}

#[test]
fn stopword_only_query_never_touches_a_broken_store() {
    let v = Vectorizer::with_store(VectorStore::new(Box::new(BrokenDisk), 4));
    assert_eq!(
        v.aggregate_queries(&["the and a"]),
        Err(PipelineError::NoVectors)
    );
}

#[test]
fn corrupt_value_is_an_error_not_a_skip() {
    let backend = InMemoryBackend::new();
    backend.insert("cat", vec![0xfd, 0x01]);
    let v = Vectorizer::with_store(VectorStore::new(Box::new(backend), 4));
    let err = v.aggregate_queries(&["cat"]).expect_err("decode failure");
    assert!(matches!(
        err,
        PipelineError::Store {
            query: 0,
            source: StoreError::Decode(_)
        }
    ));
}

#[test]
fn dimension_drift_in_the_store_is_reported() {
    let backend = InMemoryBackend::new();
    backend.insert("cat", index::encode_vector(&[1.0, 2.0, 3.0, 4.0]).unwrap());
    backend.insert("dog", index::encode_vector(&[1.0, 2.0]).unwrap());
    let v = Vectorizer::with_store(VectorStore::new(Box::new(backend), 4));
    let err = v.aggregate_queries(&["cat dog"]).expect_err("dimension");
    assert_eq!(
        err,
        PipelineError::Store {
            query: 0,
            source: StoreError::Dimension {
                expected: 4,
                found: 2
            }
        }
    );
}

#[test]
fn zero_occurrence_config_is_a_weight_error() {
    let backend = InMemoryBackend::new();
    backend.insert("cat", index::encode_vector(&[1.0]).unwrap());
    backend.insert("dog", index::encode_vector(&[2.0]).unwrap());
    let v = Vectorizer::new(
        VectorStore::new(Box::new(backend), 1),
        StopwordSet::english(),
        VectorizerConfig { occurrence: 0 },
    );
    assert!(matches!(
        v.aggregate_queries(&["cat dog"]),
        Err(PipelineError::Weight(_))
    ));
}
