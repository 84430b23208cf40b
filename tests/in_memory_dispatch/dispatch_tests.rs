//! Routing and delivery tests for the command dispatcher.

use super::helpers::{BOT_ID, Harness, ana, harness, mention, scope};
use dicecord::command::{
    adapters::memory::SentMessage,
    domain::{Author, ChannelScope, HelpTopic, IncomingMessage},
    ports::Destination,
    services::help_text,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mentioned_roll_is_answered_in_channel(harness: Harness, scope: ChannelScope) {
    let reply = harness
        .dispatcher
        .on_message(&mention("roll 9again 5", &scope))
        .await;

    assert_eq!(reply.as_deref(), Some("ana rolled 5 dice (9-again)"));
    assert_eq!(
        harness.transport.sent(),
        vec![SentMessage {
            destination: Destination::Channel(scope),
            content: "ana rolled 5 dice (9-again)".to_owned(),
        }]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nickname_is_passed_to_engine(harness: Harness, scope: ChannelScope) {
    let message = IncomingMessage::in_channel(
        format!("<@{BOT_ID}> roll 3"),
        ana().with_nick("Lady Ana"),
        scope,
    )
    .mentioning_bot();

    let reply = harness.dispatcher.on_message(&message).await;

    assert_eq!(reply.as_deref(), Some("lady ana rolled 3 dice (10-again)"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gangrel_roll_uses_special_dice(harness: Harness, scope: ChannelScope) {
    let reply = harness
        .dispatcher
        .on_message(&mention("gangrel 4", &scope))
        .await;

    assert_eq!(reply.as_deref(), Some("ana rolled 4 special dice"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pool_roll_is_prefaced(harness: Harness, scope: ChannelScope) {
    let reply = harness
        .dispatcher
        .on_message(&mention("roll 5 + 2 - 1", &scope))
        .await;

    assert_eq!(
        reply.as_deref(),
        Some("Calculated a pool of `5+2-1=6` dice\nana rolled 6 dice (10-again)")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn too_many_dice_is_refused(harness: Harness, scope: ChannelScope) {
    let reply = harness
        .dispatcher
        .on_message(&mention("roll 60", &scope))
        .await;

    assert_eq!(
        reply.as_deref(),
        Some("Too many dice. Please roll less than 50.")
    );
}

#[rstest]
#[case(Author::new("7", "Helper").as_bot())]
#[case(Author::new(BOT_ID, "dicecord"))]
#[tokio::test(flavor = "multi_thread")]
async fn bots_are_ignored(harness: Harness, scope: ChannelScope, #[case] author: Author) {
    let message =
        IncomingMessage::in_channel(format!("<@{BOT_ID}> roll 5"), author, scope).mentioning_bot();

    let reply = harness.dispatcher.on_message(&message).await;

    assert_eq!(reply, None);
    assert!(harness.transport.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unaddressed_message_is_ignored(harness: Harness, scope: ChannelScope) {
    let message = IncomingMessage::in_channel("roll 5", ana(), scope);

    assert_eq!(harness.dispatcher.on_message(&message).await, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_command_gets_no_reply(harness: Harness, scope: ChannelScope) {
    assert_eq!(
        harness
            .dispatcher
            .on_message(&mention("good morning", &scope))
            .await,
        None
    );
}

#[rstest]
#[case("help", HelpTopic::Commands)]
#[case("what types are there", HelpTopic::RollTypes)]
#[case("hello", HelpTopic::Fallback)]
#[tokio::test(flavor = "multi_thread")]
async fn private_messages_receive_help(
    harness: Harness,
    #[case] content: &str,
    #[case] topic: HelpTopic,
) {
    let reply = harness
        .dispatcher
        .on_message(&IncomingMessage::private(content, ana()))
        .await;

    assert_eq!(reply.as_deref(), Some(help_text(topic)));
    assert_eq!(
        harness.transport.sent(),
        vec![SentMessage {
            destination: Destination::Direct {
                user_id: "42".to_owned(),
            },
            content: help_text(topic).to_owned(),
        }]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_prefix_addresses_the_bot(harness: Harness, scope: ChannelScope) {
    let set = harness
        .dispatcher
        .on_message(&mention("prefix !d", &scope))
        .await;
    let rolled = harness
        .dispatcher
        .on_message(&IncomingMessage::in_channel("!d roll 3", ana(), scope.clone()))
        .await;
    let other_channel = harness
        .dispatcher
        .on_message(&IncomingMessage::in_channel(
            "!d roll 3",
            ana(),
            ChannelScope::new("Moonhaven", "ooc"),
        ))
        .await;

    assert_eq!(
        set.as_deref(),
        Some("Prefix changed by <@42> to **!d** in server Moonhaven - #rolls")
    );
    assert_eq!(rolled.as_deref(), Some("ana rolled 3 dice (10-again)"));
    assert_eq!(other_channel, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn server_prefix_applies_to_every_channel(harness: Harness, scope: ChannelScope) {
    harness
        .dispatcher
        .on_message(&mention("prefix server !srv", &scope))
        .await;

    let reply = harness
        .dispatcher
        .on_message(&IncomingMessage::in_channel(
            "!srv roll 2",
            ana(),
            ChannelScope::new("Moonhaven", "ooc"),
        ))
        .await;

    assert_eq!(reply.as_deref(), Some("ana rolled 2 dice (10-again)"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn splat_settings_round_trip(harness: Harness, scope: ChannelScope) {
    let set = harness
        .dispatcher
        .on_message(&mention("splat mage", &scope))
        .await;
    let checked = harness
        .dispatcher
        .on_message(&mention("splat", &scope))
        .await;
    harness
        .dispatcher
        .on_message(&mention("delete user", &scope))
        .await;
    let after_delete = harness
        .dispatcher
        .on_message(&mention("splat", &scope))
        .await;

    assert_eq!(
        set.as_deref(),
        Some("Flavour for <@42> changed to mage in server Moonhaven - #rolls")
    );
    assert_eq!(
        checked.as_deref(),
        Some("Splat for <@42> is currently set to mage in server Moonhaven - #rolls")
    );
    assert_eq!(
        after_delete.as_deref(),
        Some("Splat for <@42> is currently not set in server Moonhaven - #rolls")
    );
    assert!(harness.store.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn flavour_toggle_and_check(harness: Harness, scope: ChannelScope) {
    let on = harness
        .dispatcher
        .on_message(&mention("flavour on", &scope))
        .await;
    let checked = harness
        .dispatcher
        .on_message(&mention("flavour", &scope))
        .await;

    assert_eq!(
        on.as_deref(),
        Some("Flavour turned on in server Moonhaven - #rolls")
    );
    assert_eq!(checked, on);
}
