use super::*;

fn config(chunk_size: usize) -> ChunkingConfig {
    ChunkingConfig { chunk_size }
}

fn numbered_words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn empty_text_yields_no_chunks() {
    assert!(chunk_document("", &config(500)).is_empty());
    assert!(chunk_document("   \n\t  ", &config(500)).is_empty());
}

#[test]
fn short_text_yields_single_chunk() {
    let chunks = chunk_document("one two three", &config(500));
    assert_eq!(chunks, vec!["one two three".to_string()]);
}

#[test]
fn exact_multiple_splits_evenly() {
    let text = numbered_words(10);
    let chunks = chunk_document(&text, &config(5));
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], "w0 w1 w2 w3 w4");
    assert_eq!(chunks[1], "w5 w6 w7 w8 w9");
}

#[test]
fn final_chunk_may_be_shorter() {
    let text = numbered_words(12);
    let chunks = chunk_document(&text, &config(5));
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2].split_whitespace().count(), 2);
}

#[test]
fn chunk_count_is_word_count_ceiling() {
    let chunk_size = 500;
    for word_count in [1, 499, 500, 501, 1200, 2500] {
        let text = numbered_words(word_count);
        let chunks = chunk_document(&text, &config(chunk_size));
        assert_eq!(chunks.len(), word_count.div_ceil(chunk_size));

        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.split_whitespace().count(), chunk_size);
        }
    }
}

#[test]
fn concatenated_chunks_reproduce_word_sequence() {
    let text = "a b  c\nd\te   f g h i j k l";
    let chunks = chunk_document(text, &config(3));

    let original: Vec<&str> = text.split_whitespace().collect();
    let rejoined: Vec<&str> = chunks
        .iter()
        .flat_map(|c| c.split_whitespace())
        .collect();
    assert_eq!(original, rejoined);
}

#[test]
fn whitespace_is_normalized_to_single_spaces() {
    let chunks = chunk_document("one\n\ntwo\t three", &config(500));
    assert_eq!(chunks, vec!["one two three".to_string()]);
}

#[test]
fn twelve_hundred_words_make_three_chunks() {
    let text = numbered_words(1200);
    let chunks = chunk_document(&text, &ChunkingConfig::default());
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].split_whitespace().count(), 500);
    assert_eq!(chunks[1].split_whitespace().count(), 500);
    assert_eq!(chunks[2].split_whitespace().count(), 200);
}
