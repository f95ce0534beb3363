mod common;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use common::{ASSET_BYTES, FakeDiscord, FakeServer, TOKEN, start_server};
use stashcord::application::{
    BoundedScheduler, FailurePolicy, HarvestReport, HarvestSettings, HarvestUseCase,
};
use stashcord::domain::{AssetLocator, AuthToken, DownloadError, HarvestError};
use stashcord::infrastructure::{DiscordClient, HttpAssetDownloader};

async fn run_harvest(
    server: &FakeServer,
    output: &Path,
    token: &str,
    concurrency: usize,
) -> Result<HarvestReport, HarvestError> {
    let client = Arc::new(DiscordClient::with_base_url(server.api_base()).unwrap());
    let downloader = Arc::new(HttpAssetDownloader::new().unwrap());
    let settings = HarvestSettings::new(output)
        .with_locator(AssetLocator::with_cdn_base(server.cdn_base()))
        .with_failure_policy(FailurePolicy::CancelAll);

    HarvestUseCase::new(
        client,
        downloader,
        BoundedScheduler::new(concurrency),
        settings,
    )
    .execute(&AuthToken::new_unchecked(token))
    .await
}

fn test_guild_detail() -> serde_json::Value {
    json!({
        "id": "1",
        "name": "Test Guild",
        "emojis": [{ "id": "e1", "name": "smile", "animated": false }],
        "stickers": []
    })
}

fn single_guild() -> FakeDiscord {
    FakeDiscord::new(json!([{ "id": "1", "name": "Test Guild" }]))
        .with_detail("1", test_guild_detail())
}

#[tokio::test]
async fn test_single_emoji_is_saved_then_skipped() {
    let server = start_server(single_guild()).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    let saved = output.path().join("Test_Guild").join("emojis").join("smile.png");
    assert_eq!(std::fs::read(&saved).unwrap(), ASSET_BYTES);
    assert_eq!(report.guilds_processed, 1);
    assert_eq!(report.saved, 1);
    assert_eq!(server.state.asset_hits(), 1);

    let second = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    assert_eq!(second.saved, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(server.state.asset_hits(), 1);
}

#[tokio::test]
async fn test_mixed_assets_land_in_kind_folders() {
    let fake = FakeDiscord::new(json!([
        { "id": "10", "name": "Cats & Dogs!" },
        { "name": "no id here" }
    ]))
    .with_detail(
        "10",
        json!({
            "id": "10",
            "name": "Cats & Dogs!",
            "emojis": [
                { "id": "a1", "name": "party parrot", "animated": true },
                { "id": null, "name": "builtin" }
            ],
            "stickers": [
                { "id": "s1", "name": "wave", "format_type": 1 },
                { "id": "s2", "name": "dance", "format_type": 3 },
                { "id": "s3", "name": "blink", "format_type": 4 }
            ]
        }),
    );
    let server = start_server(fake).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    let guild = output.path().join("Cats__Dogs");
    assert!(guild.join("emojis").join("party_parrot.gif").is_file());
    assert!(guild.join("stickers").join("wave.png").is_file());
    assert!(guild.join("stickers").join("dance.json").is_file());
    assert!(guild.join("stickers").join("blink.gif").is_file());
    assert_eq!(report.guilds_listed, 1);
    assert_eq!(report.saved, 4);
    assert_eq!(server.state.asset_hits(), 4);
}

#[tokio::test]
async fn test_rejected_token_yields_empty_report() {
    let server = start_server(single_guild()).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), "wrong-token", 5)
        .await
        .unwrap();

    assert_eq!(report, HarvestReport::default());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    assert_eq!(server.state.asset_hits(), 0);
}

#[tokio::test]
async fn test_unknown_guild_is_skipped() {
    let fake = FakeDiscord::new(json!([
        { "id": "1", "name": "Test Guild" },
        { "id": "404", "name": "Gone" }
    ]))
    .with_detail("1", test_guild_detail());
    let server = start_server(fake).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    assert_eq!(report.guilds_processed, 1);
    assert_eq!(report.guilds_skipped, 1);
    assert!(!output.path().join("Gone").exists());
}

#[tokio::test]
async fn test_null_guild_detail_is_skipped() {
    let fake = FakeDiscord::new(json!([
        { "id": "1", "name": "Test Guild" },
        { "id": "2", "name": "Hollow" }
    ]))
    .with_detail("1", test_guild_detail())
    .with_detail("2", serde_json::Value::Null);
    let server = start_server(fake).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    assert_eq!(report.guilds_processed, 1);
    assert_eq!(report.guilds_skipped, 1);
    assert_eq!(report.saved, 1);
    assert!(!output.path().join("Hollow").exists());
}

#[tokio::test]
async fn test_null_guild_list_finishes_empty() {
    let server = start_server(FakeDiscord::new(serde_json::Value::Null)).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    assert_eq!(report, HarvestReport::default());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_non_array_guild_list_finishes_empty() {
    let server = start_server(FakeDiscord::new(json!({ "message": "weird" }))).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 5).await.unwrap();

    assert_eq!(report, HarvestReport::default());
    assert_eq!(server.state.asset_hits(), 0);
}

#[tokio::test]
async fn test_missing_asset_fails_the_run() {
    let server = start_server(single_guild().with_missing_asset("e1.png")).await;
    let output = tempfile::tempdir().unwrap();

    let result = run_harvest(&server, output.path(), TOKEN, 5).await;

    match result {
        Err(HarvestError::Download(DownloadError::HttpStatus {
            status,
            status_text,
            ..
        })) => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected 404 download error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_requests_never_exceed_concurrency() {
    let emojis: Vec<_> = (0..12)
        .map(|i| json!({ "id": format!("e{i}"), "name": format!("emoji{i}") }))
        .collect();
    let fake = FakeDiscord::new(json!([{ "id": "1", "name": "Busy" }]))
        .with_detail("1", json!({ "id": "1", "name": "Busy", "emojis": emojis }))
        .with_asset_delay(Duration::from_millis(30));
    let server = start_server(fake).await;
    let output = tempfile::tempdir().unwrap();

    let report = run_harvest(&server, output.path(), TOKEN, 3).await.unwrap();

    assert_eq!(report.saved, 12);
    assert!(server.state.max_in_flight() <= 3);
    assert!(server.state.max_in_flight() >= 1);
}
