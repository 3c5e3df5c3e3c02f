use std::sync::Arc;

use super::{
	FailingEmbedding, FailingSearch, FailingStore, RecordingStore, StaticSearch, StubEmbedding,
	build_service, candidate,
};
use triage_service::{Error, RouteRequest};

fn request() -> RouteRequest {
	RouteRequest {
		ticket_id: "T-NEW".to_string(),
		subject: "Printer jam".to_string(),
		content: "Tray 2 keeps jamming.".to_string(),
		owner_id: None,
	}
}

#[tokio::test]
async fn empty_ticket_id_is_rejected_before_any_io() {
	let search = Arc::new(StaticSearch::new(Vec::new()));
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		search.clone(),
		store.clone(),
	);
	let err = service
		.route_and_apply(RouteRequest { ticket_id: "  ".to_string(), ..request() })
		.await
		.unwrap_err();

	assert!(matches!(err, Error::InvalidRequest { .. }));
	assert_eq!(search.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
	assert!(store.applied().is_empty());
}

#[tokio::test]
async fn empty_subject_and_content_are_rejected() {
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(Vec::new())),
		Arc::new(RecordingStore::default()),
	);
	let err = service
		.route(RouteRequest {
			subject: String::new(),
			content: "  ".to_string(),
			..request()
		})
		.await
		.unwrap_err();

	assert!(matches!(err, Error::InvalidRequest { .. }));
}

#[tokio::test]
async fn embedding_failure_aborts_before_search() {
	let search = Arc::new(StaticSearch::new(Vec::new()));
	let store = Arc::new(RecordingStore::default());
	let service = build_service(2, Arc::new(FailingEmbedding), search.clone(), store.clone());
	let err = service.route_and_apply(request()).await.unwrap_err();

	assert!(matches!(err, Error::Embedding { .. }));
	assert_eq!(search.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
	assert!(store.applied().is_empty());
}

#[tokio::test]
async fn wrong_dimension_count_from_the_provider_is_an_embedding_error() {
	let search = Arc::new(StaticSearch::new(Vec::new()));
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0, 0.0] }),
		search.clone(),
		Arc::new(RecordingStore::default()),
	);
	let err = service.route(request()).await.unwrap_err();

	assert!(matches!(err, Error::Embedding { ref message } if message.contains("dimensions")));
	assert_eq!(search.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_failure_leaves_the_ticket_untouched() {
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(FailingSearch),
		store.clone(),
	);
	let err = service.route_and_apply(request()).await.unwrap_err();

	assert!(matches!(err, Error::Search { .. }));
	assert!(store.applied().is_empty());
}

#[tokio::test]
async fn candidate_dimension_mismatch_aborts_the_whole_decision() {
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(vec![
			candidate("A", "u1", vec![1.0, 0.0]),
			candidate("B", "u2", vec![1.0, 0.0, 0.0]),
		])),
		store.clone(),
	);
	let err = service.route_and_apply(request()).await.unwrap_err();

	assert!(matches!(
		err,
		Error::Routing(triage_domain::Error::DimensionMismatch { expected: 2, got: 3 }),
	));
	assert!(store.applied().is_empty());
}

#[tokio::test]
async fn degenerate_candidate_vector_aborts_the_whole_decision() {
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(vec![candidate("A", "u1", vec![0.0, 0.0])])),
		store.clone(),
	);
	let err = service.route_and_apply(request()).await.unwrap_err();

	assert!(matches!(err, Error::Routing(triage_domain::Error::DegenerateVector)));
	assert!(store.applied().is_empty());
}

#[tokio::test]
async fn update_failure_is_reported_with_no_retry() {
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(vec![candidate("A", "u1", vec![1.0, 0.0])])),
		Arc::new(FailingStore),
	);
	let err = service.route_and_apply(request()).await.unwrap_err();

	assert!(matches!(err, Error::Update { ref message } if message.contains("500")));
}
