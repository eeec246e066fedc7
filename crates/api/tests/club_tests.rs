mod common;

use common::*;
use serde_json::json;

#[tokio::test]
async fn clubs_maps_page_and_round_trips_crest() {
    let mock = MockUpstream::start().await;
    mock.respond_with(
        "clubs",
        json!({
            "total": 1,
            "data": [{
                "code": "MAD",
                "name": "Real Madrid",
                "alias": "Real Madrid",
                "isVirtual": false,
                "country": { "code": "ESP", "name": "Spain" },
                "city": "Madrid",
                "images": { "crest": "https://img.example/mad.png" },
                "venue": {
                    "name": "WiZink Center",
                    "code": "WIZINK",
                    "capacity": 13500,
                    "images": { "crest": "x" }
                },
                "venueBackup": {
                    "name": "Backup Arena"
                }
            }]
        }),
    );
    let schema = schema_for(&mock);

    let query = r#"
        query {
            clubs {
                code
                name
                isVirtual
                country { code name }
                city
                images { crest }
                venue { name capacity images { crest } }
                venueBackup { name images { crest } }
            }
        }
    "#;
    let response = execute_graphql(&schema, query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let clubs = data["clubs"].as_array().unwrap();
    assert_eq!(clubs.len(), 1);

    let club = &clubs[0];
    assert_eq!(club["code"], "MAD");
    assert_eq!(club["isVirtual"], false);
    assert_eq!(club["country"]["code"], "ESP");
    assert_eq!(club["images"]["crest"], "https://img.example/mad.png");
    // Exact crest round-trip through the venue nesting.
    assert_eq!(club["venue"]["images"]["crest"], "x");
    assert_eq!(club["venue"]["capacity"], 13500);
    // venueBackup has no images substructure: normalized to an empty crest.
    assert_eq!(club["venueBackup"]["images"]["crest"], "");
}

#[tokio::test]
async fn clubs_normalizes_missing_images_to_empty_crest() {
    let mock = MockUpstream::start().await;
    mock.respond_with(
        "clubs",
        json!({ "data": [{ "code": "PAR", "venue": { "name": "Arena" } }] }),
    );
    let schema = schema_for(&mock);

    let response = execute_graphql(
        &schema,
        "{ clubs { code images { crest } venue { images { crest } } } }",
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let club = &data["clubs"][0];
    assert_eq!(club["images"]["crest"], "");
    assert_eq!(club["venue"]["images"]["crest"], "");
}

#[tokio::test]
async fn clubs_returns_empty_list_when_data_key_absent() {
    let mock = MockUpstream::start().await;
    mock.respond_with("clubs", json!({}));
    let schema = schema_for(&mock);

    let response = execute_graphql(&schema, "{ clubs { code } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["clubs"], json!([]));
}

#[tokio::test]
async fn clubs_sends_defaults_and_drops_unset_filters() {
    let mock = MockUpstream::start().await;
    mock.respond_with("clubs", json!({ "data": [] }));
    let schema = schema_for(&mock);

    let response = execute_graphql(&schema, "{ clubs { code } }", None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let recorded = mock.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].path, "/clubs");
    let query = recorded[0].query.as_deref().unwrap_or_default();
    assert!(query.contains("Limit=10"), "query was: {query}");
    assert!(query.contains("Offset=0"), "query was: {query}");
    assert!(!query.contains("hasParentClub"), "query was: {query}");
    assert!(!query.contains("search"), "query was: {query}");
}

#[tokio::test]
async fn clubs_forwards_set_filters() {
    let mock = MockUpstream::start().await;
    mock.respond_with("clubs", json!({ "data": [] }));
    let schema = schema_for(&mock);

    let response = execute_graphql(
        &schema,
        r#"{ clubs(limit: 5, offset: 20, hasParentClub: true, search: "madrid") { code } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let query = mock.recorded()[0].query.clone().unwrap_or_default();
    assert!(query.contains("Limit=5"), "query was: {query}");
    assert!(query.contains("Offset=20"), "query was: {query}");
    assert!(query.contains("hasParentClub=true"), "query was: {query}");
    assert!(query.contains("search=madrid"), "query was: {query}");
}

#[tokio::test]
async fn club_by_code_requests_path_and_maps_club() {
    let mock = MockUpstream::start().await;
    mock.respond_with(
        "clubs/OLY",
        json!({
            "code": "OLY",
            "name": "Olympiacos Piraeus",
            "country": { "code": "GRE", "name": "Greece" }
        }),
    );
    let schema = schema_for(&mock);

    let response = execute_graphql(
        &schema,
        "{ clubByCode(clubCode: OLY) { code name country { name } images { crest } } }",
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["clubByCode"]["code"], "OLY");
    assert_eq!(data["clubByCode"]["country"]["name"], "Greece");
    assert_eq!(data["clubByCode"]["images"]["crest"], "");
    assert_eq!(mock.recorded()[0].path, "/clubs/OLY");
}

#[tokio::test]
async fn club_by_code_is_null_when_upstream_is_empty() {
    let mock = MockUpstream::start().await;
    // Path intentionally unconfigured: the mock answers 404 and the
    // transport client degrades that to an empty body.
    let schema = schema_for(&mock);

    let response = execute_graphql(&schema, "{ clubByCode(clubCode: ZAL) { code } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["clubByCode"], json!(null));
}

#[tokio::test]
async fn club_by_code_rejects_unknown_code() {
    let mock = MockUpstream::start().await;
    let schema = schema_for(&mock);

    let response = execute_graphql(&schema, "{ clubByCode(clubCode: NOPE) { code } }", None).await;

    assert!(!response.errors.is_empty());
    assert!(mock.recorded().is_empty(), "invalid input must not hit upstream");
}

#[tokio::test]
async fn club_info_returns_info_field() {
    let mock = MockUpstream::start().await;
    mock.respond_with("clubs/BAR/info", json!({ "info": "Founded in 1926." }));
    let schema = schema_for(&mock);

    let response = execute_graphql(&schema, "{ clubInfo(clubCode: BAR) }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["clubInfo"], "Founded in 1926.");
    assert_eq!(mock.recorded()[0].path, "/clubs/BAR/info");
}

#[tokio::test]
async fn club_info_defaults_to_empty_string() {
    let mock = MockUpstream::start().await;
    mock.respond_with("clubs/BAR/info", json!({}));
    let schema = schema_for(&mock);

    let response = execute_graphql(&schema, "{ clubInfo(clubCode: BAR) }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["clubInfo"], "");
}
