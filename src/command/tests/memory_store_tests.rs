//! Unit tests for the in-memory settings store.

use rstest::{fixture, rstest};

use crate::command::adapters::memory::InMemorySettingsStore;
use crate::command::domain::{ChannelScope, DeleteScope, PrefixTarget, Splat};
use crate::command::ports::SettingsStore;

#[fixture]
fn rolls() -> ChannelScope {
    ChannelScope::new("Moonhaven", "rolls")
}

#[fixture]
fn ooc() -> ChannelScope {
    ChannelScope::new("Moonhaven", "ooc")
}

async fn seeded(rolls: &ChannelScope, ooc: &ChannelScope) -> InMemorySettingsStore {
    let store = InMemorySettingsStore::new();
    for scope in [rolls, ooc] {
        store
            .set_splat(scope, "42", Splat::Mage)
            .await
            .expect("splat should be stored");
        store
            .set_flavour(scope, true)
            .await
            .expect("flavour should be stored");
        store
            .set_prefix(scope, PrefixTarget::Channel, Some("!d".to_owned()))
            .await
            .expect("prefix should be stored");
    }
    store
        .set_prefix(rolls, PrefixTarget::Server, Some("!s".to_owned()))
        .await
        .expect("server prefix should be stored");
    store
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn channel_prefix_overrides_server_prefix(rolls: ChannelScope) {
    let store = InMemorySettingsStore::new();
    store
        .set_prefix(&rolls, PrefixTarget::Server, Some("!s".to_owned()))
        .await
        .expect("server prefix should be stored");
    assert_eq!(store.prefix(&rolls).await, Ok(Some("!s".to_owned())));

    store
        .set_prefix(&rolls, PrefixTarget::Channel, Some("!c".to_owned()))
        .await
        .expect("channel prefix should be stored");
    assert_eq!(store.prefix(&rolls).await, Ok(Some("!c".to_owned())));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn channel_delete_leaves_other_channels(rolls: ChannelScope, ooc: ChannelScope) {
    let store = seeded(&rolls, &ooc).await;

    store
        .delete(&rolls, DeleteScope::Channel, "42")
        .await
        .expect("delete should succeed");

    assert_eq!(store.splat(&rolls, "42").await, Ok(None));
    assert_eq!(store.flavour(&rolls).await, Ok(None));
    assert_eq!(store.prefix(&rolls).await, Ok(Some("!s".to_owned())));
    assert_eq!(store.splat(&ooc, "42").await, Ok(Some(Splat::Mage)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn server_delete_clears_everything_in_guild(rolls: ChannelScope, ooc: ChannelScope) {
    let store = seeded(&rolls, &ooc).await;
    let elsewhere = ChannelScope::new("Elsewhere", "rolls");
    store
        .set_flavour(&elsewhere, false)
        .await
        .expect("flavour should be stored");

    store
        .delete(&ooc, DeleteScope::Server, "42")
        .await
        .expect("delete should succeed");

    assert_eq!(store.len(), 1);
    assert_eq!(store.flavour(&elsewhere).await, Ok(Some(false)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_delete_only_touches_author(rolls: ChannelScope) {
    let store = InMemorySettingsStore::new();
    store
        .set_splat(&rolls, "42", Splat::Mage)
        .await
        .expect("splat should be stored");
    store
        .set_splat(&rolls, "7", Splat::Default)
        .await
        .expect("splat should be stored");

    store
        .delete(&rolls, DeleteScope::User, "42")
        .await
        .expect("delete should succeed");

    assert_eq!(store.splat(&rolls, "42").await, Ok(None));
    assert_eq!(store.splat(&rolls, "7").await, Ok(Some(Splat::Default)));
}
