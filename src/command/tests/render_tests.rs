//! Unit tests for reply rendering.

use rstest::{fixture, rstest};

use crate::command::render::{MENTION_MARKER, RenderError, Reply, ResponseRenderer};

#[fixture]
fn renderer() -> ResponseRenderer {
    ResponseRenderer::new()
}

#[rstest]
fn binds_author_mention(renderer: ResponseRenderer) {
    let reply = Reply::template("Prefix reset by {{ author }} in server {{ guild }}")
        .with_value("guild", "Moonhaven");

    let rendered = renderer
        .render(&reply, "<@42>")
        .expect("template should render");

    assert_eq!(rendered, "Prefix reset by <@42> in server Moonhaven");
}

#[rstest]
fn verbatim_text_is_not_interpreted(renderer: ResponseRenderer) {
    let reply = Reply::verbatim("{{ author }} {% if true %}x{% endif %}");

    let rendered = renderer
        .render(&reply, "<@42>")
        .expect("verbatim reply should render");

    assert_eq!(rendered, "{{ author }} {% if true %}x{% endif %}");
}

#[rstest]
fn user_values_are_not_templates(renderer: ResponseRenderer) {
    let reply = Reply::template("Current prefix for this channel is `{{ prefix }}`")
        .with_value("prefix", "{{ author }}");

    let rendered = renderer
        .render(&reply, "<@42>")
        .expect("template should render");

    assert_eq!(rendered, "Current prefix for this channel is `{{ author }}`");
}

#[rstest]
#[case("[userID] rolled 3 dice", "<@42> rolled 3 dice")]
#[case("[userID] and [userID]", "<@42> and <@42>")]
#[case("{{ author }} rolled", "{{ author }} rolled")]
#[case("no marker\n", "no marker\n")]
fn addressed_text_replaces_only_the_marker(
    renderer: ResponseRenderer,
    #[case] body: &str,
    #[case] expected: &str,
) {
    let rendered = renderer
        .render(&Reply::addressed(body), "<@42>")
        .expect("addressed reply should render");

    assert_eq!(rendered, expected);
}

#[rstest]
fn verbatim_text_keeps_the_marker(renderer: ResponseRenderer) {
    let rendered = renderer
        .render(&Reply::verbatim(MENTION_MARKER), "<@42>")
        .expect("verbatim reply should render");

    assert_eq!(rendered, MENTION_MARKER);
}

#[rstest]
fn multiline_text_is_preserved(renderer: ResponseRenderer) {
    let reply = Reply::verbatim("first\nsecond\n");

    let rendered = renderer
        .render(&reply, "<@42>")
        .expect("verbatim reply should render");

    assert_eq!(rendered, "first\nsecond\n");
}

#[rstest]
fn malformed_template_is_an_error(renderer: ResponseRenderer) {
    let error = renderer
        .render(&Reply::template("{{ author"), "<@42>")
        .expect_err("template should fail");

    assert!(matches!(error, RenderError::Template { .. }));
}
