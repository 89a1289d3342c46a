mod test_utils;

use std::sync::Arc;
use test_utils::{MockDriver, MockSource, Reply};
use tubescribe_core::ApiAccess;
use tubescribe_error::{PipelineErrorKind, Stage};
use tubescribe_pipeline::{
    HistoryEntry, PipelineOutcome, PipelineResult, PipelineSession, PromptTemplate,
};

const TITLE: &str = "5 Amazing Space Exploration Missions";
const SCRIPT: &str = "In the vast expanse...";
const RESEARCH: &str = "Space exploration is the use of...";

fn enabled() -> ApiAccess {
    ApiAccess::from_token(Some("sk-test-key"))
}

fn session(
    driver: &Arc<MockDriver>,
    source: &Arc<MockSource>,
) -> PipelineSession<Arc<MockDriver>, Arc<MockSource>> {
    PipelineSession::new(Arc::clone(driver), Arc::clone(source))
}

fn completed(outcome: PipelineOutcome) -> PipelineResult {
    match outcome {
        PipelineOutcome::Completed(result) => result,
        PipelineOutcome::Disabled => panic!("expected a completed run"),
    }
}

#[tokio::test]
async fn test_space_exploration_run() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);

    let result = completed(session.run("space exploration", &enabled()).await);

    assert_eq!(result.title(), TITLE);
    assert_eq!(result.research_text(), RESEARCH);
    assert_eq!(result.script(), SCRIPT);
    assert!(result.failures().is_empty());
    assert!(result.is_complete());
    assert_eq!(
        result.title_history().entries(),
        &[HistoryEntry::new("space exploration", TITLE)]
    );
    assert_eq!(
        result.script_history().entries(),
        &[HistoryEntry::new(TITLE, SCRIPT)]
    );

    let prompts = driver.prompts();
    assert_eq!(prompts.len(), 2);
    assert_eq!(
        prompts[0],
        "write me a youtube video title about space exploration"
    );
    assert_eq!(
        prompts[1],
        format!(
            "Write me a youtube video script based on this title TITLE: {} while leveraging this wikipedia research:{} ",
            TITLE, RESEARCH
        )
    );
    assert!(driver.temperatures().iter().all(|t| *t == Some(0.9)));
}

#[tokio::test]
async fn test_disabled_access_makes_no_calls() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);

    for token in [None, Some(""), Some("   \t")] {
        let outcome = session.run("space exploration", &ApiAccess::from_token(token)).await;
        assert!(outcome.is_disabled());
        assert!(outcome.result().is_none());
    }

    assert_eq!(driver.calls(), 0);
    assert_eq!(source.calls(), 0);
    assert!(session.title_generator().history().is_empty());
    assert!(session.script_generator().history().is_empty());
}

#[tokio::test]
async fn test_lookup_uses_raw_topic() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);

    session.run("tide pools", &enabled()).await;

    assert_eq!(source.topics(), vec!["tide pools".to_string()]);
}

#[tokio::test]
async fn test_histories_accumulate_across_runs() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);
    let access = enabled();

    let topics = ["space exploration", "tide pools", "volcanoes"];
    let mut last = None;
    for topic in topics {
        last = Some(completed(session.run(topic, &access).await));
    }

    let history = session.title_generator().history();
    assert_eq!(history.len(), 3);
    let inputs: Vec<&str> = history.entries().iter().map(|e| e.input().as_str()).collect();
    assert_eq!(inputs, topics);
    assert_eq!(session.script_generator().history().len(), 3);

    let last = last.unwrap();
    assert_eq!(last.title_history().len(), 3);
    assert_eq!(last.script_history().len(), 3);
}

#[tokio::test]
async fn test_lookup_failure_still_runs_script() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::Fail));
    let mut session = session(&driver, &source);

    let result = completed(session.run("space exploration", &enabled()).await);

    assert_eq!(result.title(), TITLE);
    assert_eq!(result.research_text(), "");
    assert_eq!(result.script(), SCRIPT);
    assert_eq!(result.failures().len(), 1);

    let failure = result.failure_for(Stage::Research).unwrap();
    assert!(matches!(
        failure.error().kind,
        PipelineErrorKind::LookupFailure(_)
    ));
    assert!(driver.prompts()[1].ends_with("wikipedia research: "));
    assert!(!result.is_complete());
}

#[tokio::test]
async fn test_title_failure_skips_script() {
    let driver = Arc::new(MockDriver::new(Reply::Fail, Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);

    let result = completed(session.run("space exploration", &enabled()).await);

    assert_eq!(result.title(), "");
    assert_eq!(result.script(), "");
    assert_eq!(result.research_text(), RESEARCH);
    assert_eq!(driver.calls(), 1);
    assert!(result.title_history().is_empty());
    assert!(result.script_history().is_empty());

    let failure = result.failure_for(Stage::Title).unwrap();
    assert_eq!(*failure.stage(), Stage::Title);
    assert_eq!(failure.error().kind.stage(), Some(Stage::Title));
    assert!(failure.message().contains("title stage"));
    assert!(result.failure_for(Stage::Script).is_none());
}

#[tokio::test]
async fn test_empty_title_skips_script() {
    let driver = Arc::new(MockDriver::new(Reply::text(""), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);

    let result = completed(session.run("space exploration", &enabled()).await);

    assert_eq!(driver.calls(), 1);
    assert_eq!(result.script(), "");
    assert!(result.failures().is_empty());
    assert_eq!(result.title_history().len(), 1);
    assert!(result.script_history().is_empty());
}

#[tokio::test]
async fn test_script_failure_keeps_title() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::Fail));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = session(&driver, &source);

    let result = completed(session.run("space exploration", &enabled()).await);

    assert_eq!(result.title(), TITLE);
    assert_eq!(result.script(), "");
    assert_eq!(result.title_history().len(), 1);
    assert!(result.script_history().is_empty());
    assert!(result.failure_for(Stage::Script).is_some());
}

#[tokio::test]
async fn test_script_receives_title_from_same_run() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = PipelineSession::with_templates(
        Arc::clone(&driver),
        Arc::clone(&source),
        PromptTemplate::new("title", "title for {topic}"),
        PromptTemplate::new("script", "TITLE: {title} | {wikipedia_research}"),
    );

    let result = completed(session.run("volcanoes", &enabled()).await);

    let prompts = driver.prompts();
    assert_eq!(prompts[0], "title for volcanoes");
    assert_eq!(prompts[1], format!("TITLE: {} | {}", TITLE, RESEARCH));
    assert_eq!(result.script_history().entries()[0].input(), TITLE);
}

#[tokio::test]
async fn test_each_script_uses_its_own_runs_title() {
    let driver = Arc::new(MockDriver::new(
        Reply::Numbered("Title".to_string()),
        Reply::Numbered("Script".to_string()),
    ));
    let source = Arc::new(MockSource::new(Reply::text(RESEARCH)));
    let mut session = PipelineSession::with_templates(
        Arc::clone(&driver),
        Arc::clone(&source),
        PromptTemplate::new("title", "title for {topic}"),
        PromptTemplate::new("script", "TITLE: {title} | {wikipedia_research}"),
    );
    let access = enabled();

    for (run, topic) in ["volcanoes", "glaciers", "tide pools"].into_iter().enumerate() {
        let n = run + 1;
        let result = completed(session.run(topic, &access).await);

        assert_eq!(result.title(), &format!("Title #{}", n));
        assert_eq!(result.script(), &format!("Script #{}", n));
        assert_eq!(
            result.script_history().last().unwrap(),
            &HistoryEntry::new(format!("Title #{}", n), format!("Script #{}", n))
        );
    }

    let script_prompts: Vec<String> = driver
        .prompts()
        .into_iter()
        .filter(|p| p.starts_with("TITLE:"))
        .collect();
    assert_eq!(
        script_prompts,
        vec![
            format!("TITLE: Title #1 | {}", RESEARCH),
            format!("TITLE: Title #2 | {}", RESEARCH),
            format!("TITLE: Title #3 | {}", RESEARCH),
        ]
    );
}

#[tokio::test]
async fn test_outcome_serializes_for_display() {
    let driver = Arc::new(MockDriver::new(Reply::text(TITLE), Reply::text(SCRIPT)));
    let source = Arc::new(MockSource::new(Reply::Fail));
    let mut session = session(&driver, &source);

    let outcome = session.run("space exploration", &enabled()).await;
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "completed");
    assert_eq!(json["result"]["title"], TITLE);
    assert_eq!(json["result"]["title_history"][0]["input"], "space exploration");
    assert_eq!(json["result"]["failures"][0]["stage"], "research");

    let disabled = serde_json::to_value(PipelineOutcome::Disabled).unwrap();
    assert_eq!(disabled["status"], "disabled");
}
