use test_fixtures::*;

#[test]
fn sample_embeddings_share_one_dimension() {
    let value = load_fixture_value("corpus/article_embeddings.json");
    let map = value.as_object().expect("embeddings fixture must be an object");
    assert!(!map.is_empty());
    for (id, vector) in map {
        let len = vector.as_array().map(Vec::len).unwrap_or(0);
        assert_eq!(len, SAMPLE_DIMENSIONS, "{id} has the wrong dimension");
    }
}

#[test]
fn embeddings_keep_file_order() {
    let value = load_fixture_value("corpus/article_embeddings.json");
    let first = value.as_object().unwrap().keys().next().cloned();
    assert_eq!(first.as_deref(), Some("§ 1 StWG"));
}

#[test]
fn both_section_formats_cover_the_same_ids() {
    let rich = load_fixture_value("corpus/law_data.json");
    let plain = load_fixture_value("corpus/law_data_plain.json");
    let rich_ids: Vec<_> = rich.as_object().unwrap().keys().collect();
    let plain_ids: Vec<_> = plain.as_object().unwrap().keys().collect();
    assert_eq!(rich_ids, plain_ids);
}

#[test]
fn paths_point_at_existing_files() {
    assert!(sample_embeddings_path().exists());
    assert!(sample_sections_path().exists());
    assert!(sample_plain_sections_path().exists());
}
