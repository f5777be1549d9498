mod common;

use common::DummyModel;
use gist::Stage;
use gist::core::{Progress, SummaryOptions, Tone, chunk_text};
use gist::worker::{plan_chunks, summarize};

fn ten_thousand_chars() -> String {
    "The quick brown fox jumps over the lazy dog. "
        .repeat(250)
        .chars()
        .take(10_000)
        .collect()
}

fn is_chunk_prompt(prompt: &str) -> bool {
    prompt.contains("Text:\n---")
}

fn is_consolidation_prompt(prompt: &str) -> bool {
    prompt.contains("Chunk summaries:\n---")
}

#[tokio::test]
async fn test_long_input_summarizes_each_chunk_then_consolidates_once() {
    let text = ten_thousand_chars();
    let options = SummaryOptions {
        approx_chars: 4000,
        ..SummaryOptions::default()
    };
    let expected_chunks = chunk_text(&text, 4000).unwrap();
    assert!(expected_chunks.len() >= 3);

    let model = DummyModel::numbered();
    let out = summarize(&text, &options, &model, |_| {}).await.unwrap();

    let prompts = model.prompts();
    let n = expected_chunks.len();
    assert_eq!(prompts.len(), n + 1);
    for (prompt, chunk) in prompts[..n].iter().zip(&expected_chunks) {
        assert!(is_chunk_prompt(prompt));
        assert!(prompt.contains(&chunk.text));
    }
    assert!(is_consolidation_prompt(&prompts[n]));

    // Intermediate summaries reach consolidation in chunk order.
    let combined = (1..=n)
        .map(|i| format!("summary {i}"))
        .collect::<Vec<_>>()
        .join("\n\n");
    assert!(prompts[n].contains(&combined));
    assert_eq!(out, format!("summary {}", n + 1));
}

#[tokio::test]
async fn test_short_input_is_still_consolidated() {
    let model = DummyModel::numbered();
    let options = SummaryOptions::default();

    let out = summarize("A short note. Nothing more.", &options, &model, |_| {})
        .await
        .unwrap();

    let prompts = model.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("---\nA short note. Nothing more.\n---"));
    assert!(is_consolidation_prompt(&prompts[1]));
    assert_eq!(out, "summary 2");
}

#[tokio::test]
async fn test_chunking_disabled_sends_whole_text() {
    let text = ten_thousand_chars();
    let options = SummaryOptions {
        chunking_enabled: false,
        approx_chars: 1000,
        ..SummaryOptions::default()
    };
    let model = DummyModel::numbered();

    summarize(&text, &options, &model, |_| {}).await.unwrap();

    let prompts = model.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains(text.trim()));
}

#[tokio::test]
async fn test_failure_aborts_remaining_chunks() {
    let text = ten_thousand_chars();
    let options = SummaryOptions {
        approx_chars: 2000,
        ..SummaryOptions::default()
    };
    let model = DummyModel::numbered().fail_on(2);
    let mut progress = Vec::new();

    let err = summarize(&text, &options, &model, |p| progress.push(p))
        .await
        .unwrap_err();

    assert_eq!(err.stage(), Stage::ChunkSummarization);
    assert_eq!(model.calls(), 2);
    assert_eq!(progress.len(), 1);
}

#[tokio::test]
async fn test_consolidation_failure_is_reported_as_such() {
    let model = DummyModel::numbered().fail_on(2);
    let err = summarize("One sentence.", &SummaryOptions::default(), &model, |_| {})
        .await
        .unwrap_err();

    assert_eq!(err.stage(), Stage::Consolidation);
    assert!(err.to_string().starts_with("final consolidation failed:"));
}

#[tokio::test]
async fn test_progress_reports_every_step() {
    let text = ten_thousand_chars();
    let options = SummaryOptions {
        approx_chars: 4000,
        ..SummaryOptions::default()
    };
    let chunks = chunk_text(&text, 4000).unwrap().len();
    let model = DummyModel::numbered();
    let mut progress: Vec<Progress> = Vec::new();

    summarize(&text, &options, &model, |p| progress.push(p))
        .await
        .unwrap();

    assert_eq!(progress.len(), chunks + 1);
    for (i, p) in progress.iter().enumerate() {
        assert_eq!(p.completed, i + 1);
        assert_eq!(p.total, chunks + 1);
    }
    assert_eq!(progress.last().unwrap().percent(), 100);
}

#[tokio::test]
async fn test_blank_input_makes_no_calls() {
    let model = DummyModel::numbered();
    let err = summarize("  \n\t ", &SummaryOptions::default(), &model, |_| {})
        .await
        .unwrap_err();

    assert_eq!(err.stage(), Stage::InvalidInput);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_chunk_cap_rejects_before_any_call() {
    let text = ten_thousand_chars();
    let options = SummaryOptions {
        approx_chars: 100,
        max_chunks: 5,
        ..SummaryOptions::default()
    };
    let model = DummyModel::numbered();

    let err = summarize(&text, &options, &model, |_| {}).await.unwrap_err();

    assert_eq!(err.stage(), Stage::InvalidInput);
    assert!(err.to_string().contains("limit of 5"));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_options_flow_into_prompts() {
    let model = DummyModel::numbered();
    let options = SummaryOptions {
        tone: Tone::BulletPoints,
        length: 0,
        quick_mode: true,
        ..SummaryOptions::default()
    };

    summarize("Some text to digest.", &options, &model, |_| {})
        .await
        .unwrap();

    let prompts = model.prompts();
    assert!(prompts[0].contains("1 concise bullet points"));
    assert!(prompts[1].contains("exactly 1 sentences long"));
}

#[test]
fn test_plan_chunks_uses_threshold() {
    let options = SummaryOptions {
        approx_chars: 30,
        ..SummaryOptions::default()
    };

    let single = plan_chunks("  Short enough for one chunk.  ", &options).unwrap();
    assert_eq!(single.len(), 1);

    let split = plan_chunks("First sentence here. Second sentence here.", &options).unwrap();
    assert_eq!(split.len(), 2);
    assert_eq!(split[0].text, "First sentence here.");
}
