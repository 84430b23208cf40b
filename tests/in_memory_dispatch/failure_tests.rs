//! Downstream failure handling in the command dispatcher.

use super::helpers::{UnavailableStore, ana, harness_with, mention, scope};
use dicecord::command::{
    adapters::memory::{InMemorySettingsStore, RecordingTransport},
    domain::{ChannelScope, ErrorReport, IncomingMessage},
    ports::{SettingsStoreError, TransportError},
    services::{DispatchError, FAILURE_REPLY},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_sends_fallback_reply(scope: ChannelScope) {
    let harness = harness_with(UnavailableStore, RecordingTransport::new());

    let reply = harness
        .dispatcher
        .on_message(&mention("splat mage", &scope))
        .await;

    assert_eq!(reply.as_deref(), Some(FAILURE_REPLY));
    assert_eq!(harness.transport.sent().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_surfaces_from_respond(scope: ChannelScope) {
    let harness = harness_with(UnavailableStore, RecordingTransport::new());

    let error = harness
        .dispatcher
        .respond(&IncomingMessage::in_channel("!d roll 5", ana(), scope))
        .await
        .expect_err("prefix lookup should fail");

    assert_eq!(
        error,
        DispatchError::Settings(SettingsStoreError::Unavailable("store offline".to_owned()))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rolls_do_not_touch_the_store_when_mentioned(scope: ChannelScope) {
    let harness = harness_with(UnavailableStore, RecordingTransport::new());

    let reply = harness
        .dispatcher
        .on_message(&mention("roll 2", &scope))
        .await;

    assert_eq!(reply.as_deref(), Some("ana rolled 2 dice (10-again)"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transport_failure_still_returns_text(scope: ChannelScope) {
    let harness = harness_with(
        InMemorySettingsStore::new(),
        RecordingTransport::failing(TransportError::Forbidden),
    );

    let reply = harness
        .dispatcher
        .on_message(&mention("roll 2", &scope))
        .await;

    assert_eq!(reply.as_deref(), Some("ana rolled 2 dice (10-again)"));
    assert!(harness.transport.sent().is_empty());
}

#[rstest]
fn error_report_names_the_message(scope: ChannelScope) {
    let message = mention("splat mage", &scope);
    let failure = DispatchError::from(SettingsStoreError::Unavailable("store offline".to_owned()));

    let report = ErrorReport::new(&message, &failure, &DefaultClock);
    let rendered = report.to_string();

    assert!(rendered.contains("Message: <@1234> splat mage"));
    assert!(rendered.contains("Server: Moonhaven"));
    assert!(rendered.contains("Channel: rolls"));
    assert!(rendered.contains("Author: Ana"));
    assert!(rendered.ends_with("settings store unavailable: store offline"));
}
