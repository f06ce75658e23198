use super::*;

fn index_with(vectors: &[[f32; 2]]) -> FlatIndex {
    let mut index = FlatIndex::new(2);
    for v in vectors {
        index.add(v.to_vec()).expect("Failed to add vector");
    }
    index
}

#[test]
fn construction_requires_one_vector_per_chunk() {
    let index = index_with(&[[0.0, 0.0], [1.0, 1.0]]);
    let session = DocumentSession::new(index, vec!["a".to_string(), "b".to_string()]);
    assert!(session.is_ok());

    let index = index_with(&[[0.0, 0.0]]);
    let result = DocumentSession::new(index, vec!["a".to_string(), "b".to_string()]);
    assert!(matches!(result, Err(QaError::Index(_))));
}

#[test]
fn chunk_lookup_by_identifier() {
    let index = index_with(&[[0.0, 0.0], [1.0, 1.0]]);
    let session = DocumentSession::new(index, vec!["first".to_string(), "second".to_string()])
        .expect("Failed to build session");

    assert_eq!(session.chunk_count(), 2);
    assert_eq!(session.chunk(0), Some("first"));
    assert_eq!(session.chunk(1), Some("second"));
    assert_eq!(session.chunk(2), None);
}

#[test]
fn empty_session_is_detectable() {
    let session =
        DocumentSession::new(FlatIndex::new(2), Vec::new()).expect("Failed to build session");
    assert!(session.is_empty());
    assert_eq!(session.chunk_count(), 0);
}

#[test]
fn outcome_display_strings() {
    assert_eq!(
        QueryOutcome::Answer("it depends".to_string()).into_display(),
        "it depends"
    );
    assert_eq!(QueryOutcome::NotReady.into_display(), NOT_READY_MESSAGE);
    assert_eq!(
        QueryOutcome::Failed("Error from completion API: timeout".to_string()).into_display(),
        "Error from completion API: timeout"
    );
}
