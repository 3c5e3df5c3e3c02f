use std::sync::Arc;

use super::{RecordingStore, StaticSearch, StubEmbedding, build_service, candidate};
use triage_domain::patch::{PROPERTY_EMBEDDING, PROPERTY_OWNER_ID, PROPERTY_SIMILAR_TICKETS};
use triage_service::RouteRequest;

fn request(owner_id: Option<&str>) -> RouteRequest {
	RouteRequest {
		ticket_id: "T-NEW".to_string(),
		subject: "Printer jam".to_string(),
		content: "Tray 2 keeps jamming.".to_string(),
		owner_id: owner_id.map(str::to_string),
	}
}

#[tokio::test]
async fn routes_assigns_and_persists() {
	let search = Arc::new(StaticSearch::new(vec![
		candidate("A", "u1", vec![1.0, 0.0]),
		candidate("B", "u2", vec![0.0, 1.0]),
	]));
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		search.clone(),
		store.clone(),
	);
	let response = service.route_and_apply(request(None)).await.expect("routing failed");

	assert_eq!(response.ticket_id, "T-NEW");
	assert_eq!(response.assigned_owner.as_deref(), Some("u1"));
	assert_eq!(response.matches.len(), 2);
	assert_eq!(response.matches[0].ticket_id, "A");
	assert_eq!(response.matches[0].score, 1.0);
	assert_eq!(response.matches[1].ticket_id, "B");
	assert_eq!(response.matches[1].score, 0.0);

	assert_eq!(response.patch.get(PROPERTY_OWNER_ID), Some("u1"));
	assert_eq!(response.patch.get(PROPERTY_EMBEDDING), Some("[1,0]"));

	let report = response.patch.get(PROPERTY_SIMILAR_TICKETS).expect("report missing");

	assert!(report.find("tickets/A") < report.find("tickets/B"));

	// The routed ticket was excluded on the search side, and exactly the
	// composed patch was persisted.
	assert_eq!(search.excludes.lock().expect("excludes poisoned").clone(), vec!["T-NEW".to_string()]);

	let applied = store.applied();

	assert_eq!(applied.len(), 1);
	assert_eq!(applied[0].0, "T-NEW");
	assert_eq!(applied[0].1, response.patch);
}

#[tokio::test]
async fn existing_owner_is_never_reassigned() {
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(vec![candidate("A", "u1", vec![1.0, 0.0])])),
		store.clone(),
	);
	let response = service.route_and_apply(request(Some("u9"))).await.expect("routing failed");

	assert_eq!(response.assigned_owner, None);
	assert_eq!(response.patch.get(PROPERTY_OWNER_ID), None);
	// Embedding and report still land on the ticket.
	assert_eq!(response.patch.len(), 2);
	assert_eq!(store.applied().len(), 1);
}

#[tokio::test]
async fn blank_owner_counts_as_unassigned() {
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(vec![candidate("A", "u1", vec![1.0, 0.0])])),
		store,
	);
	let response = service.route_and_apply(request(Some("  "))).await.expect("routing failed");

	assert_eq!(response.assigned_owner.as_deref(), Some("u1"));
}

#[tokio::test]
async fn no_candidates_still_updates_the_ticket() {
	let store = Arc::new(RecordingStore::default());
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(Vec::new())),
		store.clone(),
	);
	let response = service.route_and_apply(request(None)).await.expect("routing failed");

	assert_eq!(response.assigned_owner, None);
	assert_eq!(response.report, "<ul></ul>");
	assert_eq!(response.patch.get(PROPERTY_OWNER_ID), None);
	assert!(response.patch.get(PROPERTY_EMBEDDING).is_some());
	assert_eq!(store.applied().len(), 1);
}

#[tokio::test]
async fn report_is_bounded_by_the_configured_maximum() {
	let candidates = (0..5)
		.map(|i| candidate(&format!("T-{i}"), &format!("u{i}"), vec![1.0, i as f32 * 0.1]))
		.collect();
	let service = build_service(
		2,
		Arc::new(StubEmbedding { vector: vec![1.0, 0.0] }),
		Arc::new(StaticSearch::new(candidates)),
		Arc::new(RecordingStore::default()),
	);
	let response = service.route(request(None)).await.expect("routing failed");

	assert_eq!(response.matches.len(), 5);
	assert_eq!(response.report.matches("<li>").count(), 3);
}
