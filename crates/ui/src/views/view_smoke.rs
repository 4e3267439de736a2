use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero_and_stats() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Empowering Coders at GMU"),
        "missing heading in {html}"
    );
    assert!(html.contains("500+"), "missing stat number in {html}");
    assert!(html.contains("Active Members"), "missing stat label in {html}");
    assert!(html.contains("Join the Club"), "missing CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn events_view_smoke_renders_countdown_and_seeded_events() {
    let mut harness = setup_view_harness(ViewKind::Events);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Next Event Starts In"),
        "missing countdown card in {html}"
    );
    // Fixed clock sits exactly fourteen days before the first event.
    assert!(html.contains("14"), "missing day count in {html}");
    assert!(html.contains("Days"), "missing unit label in {html}");
    assert!(html.contains("HackGMU 2025"), "missing event title in {html}");
    assert!(
        html.contains("Cybersecurity CTF Competition"),
        "missing last event in {html}"
    );
    assert!(html.contains("Register Now"), "missing register button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn projects_view_smoke_renders_showcase() {
    let mut harness = setup_view_harness(ViewKind::Projects);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Campus Connect Platform"),
        "missing project in {html}"
    );
    assert!(html.contains("TensorFlow"), "missing tech badge in {html}");
    assert!(
        !html.contains("No projects found"),
        "unfiltered view should not be empty: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing heading in {html}");
    assert!(
        html.contains("What does HTML stand for?"),
        "missing prompt in {html}"
    );
    assert!(
        html.contains("Hyper Text Markup Language"),
        "missing option in {html}"
    );
    assert!(html.contains("Score: 0/5"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn playground_view_smoke_renders_sanitized_preview() {
    let mut harness = setup_view_harness(ViewKind::Playground);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Welcome to GMU Coding Club!"),
        "missing starter content in {html}"
    );
    assert!(html.contains("Run Code"), "missing run button in {html}");
    assert!(html.contains("Live Preview"), "missing preview pane in {html}");
    assert!(
        !html.contains("<script"),
        "script tag leaked into preview: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn contact_view_smoke_renders_forms_and_hours() {
    let mut harness = setup_view_harness(ViewKind::Contact);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Join the GMU Coding Club"),
        "missing membership card in {html}"
    );
    assert!(html.contains("Full Name"), "missing form label in {html}");
    assert!(html.contains("Stay Updated"), "missing newsletter card in {html}");
    assert!(html.contains("Monday - Friday"), "missing office hours in {html}");
    assert!(
        html.contains("codingclub@gmu.ac.in"),
        "missing contact email in {html}"
    );
}
