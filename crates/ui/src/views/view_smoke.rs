use quiz_core::model::{AttemptRecord, HistoryLog, QuestionId, StarredSet};
use quiz_core::time::fixed_now;
use services::StaticCorpusSource;
use storage::repository::Storage;

use super::test_harness::{
    ROOT, ViewKind, chunk_json, corpus_source, setup_view_harness, setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_renders_first_page() {
    let mut harness = setup_view_harness(ViewKind::Browse, corpus_source(12));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Page 1 of 2"), "missing page label in {html}");
    assert!(html.contains("12 of 12 questions"), "missing count in {html}");
    assert!(html.contains("q-q000"), "missing first card in {html}");
    assert!(html.contains("q-q009"), "missing tenth card in {html}");
    assert!(!html.contains("q-q010"), "second page leaked into {html}");
    assert!(html.contains("<b>one</b>"), "missing choice html in {html}");
    assert!(html.contains("No explanation"), "missing placeholder in {html}");
    assert!(html.contains("Easy"), "missing difficulty badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_shows_persisted_stars() {
    let storage = Storage::in_memory();
    let starred: StarredSet = [QuestionId::new("q001").unwrap()].into_iter().collect();
    storage.progress.save_starred(&starred).unwrap();

    let mut harness = setup_view_harness_with_storage(ViewKind::Browse, corpus_source(3), storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("★ Starred"), "missing starred toggle in {html}");
    assert!(html.contains("☆ Star"), "missing unstarred toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_falls_back_to_sample_chunk() {
    let source = StaticCorpusSource::new().with(
        &format!("{ROOT}sample/sample-questions.json"),
        chunk_json(0, 2),
    );
    let mut harness = setup_view_harness(ViewKind::Browse, source);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("2 of 2 questions"), "missing fallback corpus in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_renders_error_state() {
    let source = StaticCorpusSource::new().with(
        &format!("{ROOT}manifest.json"),
        r#"{"chunks":[{"path":"missing.json"}]}"#,
    );
    let mut harness = setup_view_harness(ViewKind::Browse, source);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Could not load questions"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn browse_view_smoke_renders_empty_corpus() {
    let source = StaticCorpusSource::new()
        .with(
            &format!("{ROOT}manifest.json"),
            r#"{"chunks":[{"path":"empty.json"}]}"#,
        )
        .with(&format!("{ROOT}empty.json"), "[]");
    let mut harness = setup_view_harness(ViewKind::Browse, source);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("No questions match these filters."), "missing empty state in {html}");
    assert!(html.contains("Page 1 of 1"), "missing page label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_attempts() {
    let storage = Storage::in_memory();
    let history = HistoryLog::from_entries([
        AttemptRecord::new(QuestionId::new("q007").unwrap(), true, fixed_now()),
        AttemptRecord::new(QuestionId::new("q003").unwrap(), false, fixed_now()),
    ]);
    storage.progress.save_history(&history).unwrap();

    let mut harness = setup_view_harness_with_storage(ViewKind::History, corpus_source(1), storage);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("q007"), "missing attempt in {html}");
    assert!(html.contains("Incorrect"), "missing outcome in {html}");
    assert!(html.contains("1 correct out of the last 2 attempts"), "missing summary in {html}");
    assert!(html.contains("2023-11-14 22:13 UTC"), "missing timestamp in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::History, corpus_source(1));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No attempts yet."), "missing empty state in {html}");
    assert!(harness.storage.progress.load_history().is_empty());
}
