use seeker_core::models::*;
use uuid::Uuid;

#[test]
fn score_source_serializes_snake_case() {
    let json = serde_json::to_string(&ScoreSource::CrossEncoder).unwrap();
    assert_eq!(json, "\"cross_encoder\"");
    let json = serde_json::to_string(&ScoreSource::TrigramSimilarity).unwrap();
    assert_eq!(json, "\"trigram_similarity\"");
}

#[test]
fn scored_item_roundtrips_with_history() {
    let chunk = Chunk::new(Uuid::new_v4(), 0, "Retirement accounts overview");
    let item = ScoredItem::new(chunk, ScoreSource::VectorSimilarity.of(0.71))
        .assign_score(ScoreSource::CrossEncoder.of(3.4));
    let json = serde_json::to_string(&item).unwrap();
    let back: ScoredItem<Chunk> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}

#[test]
fn unified_entity_reports_kind_and_id() {
    let doc = Document::new(Uuid::new_v4(), "Q3 portfolio review");
    let doc_id = doc.id;
    let entity = UnifiedEntity::Document(doc);
    assert_eq!(entity.kind(), ResultKind::Document);
    assert_eq!(entity.id(), doc_id);

    let client = ClientRecord::new("Grace", "Hopper", "grace@example.com", None);
    let entity = UnifiedEntity::Record(client);
    assert_eq!(entity.kind(), ResultKind::Record);
}

#[test]
fn result_kind_serializes_upper_case() {
    assert_eq!(
        serde_json::to_string(&ResultKind::Document).unwrap(),
        "\"DOCUMENT\""
    );
    assert_eq!(
        serde_json::to_string(&ResultKind::Record).unwrap(),
        "\"RECORD\""
    );
}

#[test]
fn document_defaults_to_pending_without_summary() {
    let doc = Document::new(Uuid::new_v4(), "Estate plan");
    assert_eq!(doc.status, DocumentStatus::Pending);
    assert!(doc.summary.is_none());
}
