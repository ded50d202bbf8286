use kanto_providers::{Error, UpstreamClient};
use kanto_testkit::{MockSpec, MockUpstream};

#[tokio::test]
async fn fetches_payload_pair_from_upstream() {
	let mock = MockUpstream::start(MockSpec::new(3)).await.expect("Failed to start mock.");
	let client =
		UpstreamClient::new(&mock.upstream_config(2_000)).expect("Failed to build client.");
	let (creature, species) = client.fetch_pair(2).await.expect("Failed to fetch pair.");

	assert_eq!(creature.id, 2);
	assert_eq!(creature.name, "creature-002");
	assert!(species.flavor_text_entries.iter().any(|entry| entry.language.name == "en"));
}

#[tokio::test]
async fn non_success_status_is_a_typed_error() {
	let mock = MockUpstream::start(MockSpec::new(3).with_failing([2]))
		.await
		.expect("Failed to start mock.");
	let client =
		UpstreamClient::new(&mock.upstream_config(2_000)).expect("Failed to build client.");
	let err = client.fetch_pair(2).await.expect_err("Expected a failing lookup.");

	assert!(matches!(err, Error::Status { id: 2, status: 500 }));

	let err = client.fetch_pair(9).await.expect_err("Expected a missing identifier.");

	assert!(matches!(err, Error::Status { id: 9, status: 404 }));
}
