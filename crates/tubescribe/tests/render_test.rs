use async_trait::async_trait;
use tubescribe::{
    ApiAccess, Credential, GenerateRequest, GenerateResponse, MISSING_KEY_WARNING,
    PipelineOutcome, PipelineSession, ReferenceSource, ResearchError, ResearchErrorKind,
    TubescribeDriver, TubescribeResult, failure_lines, render_human, render_json,
};

/// Driver that answers every title prompt with one title and every script
/// prompt with one script.
struct FixedDriver;

#[async_trait]
impl TubescribeDriver for FixedDriver {
    async fn generate(
        &self,
        _credential: &Credential,
        req: &GenerateRequest,
    ) -> TubescribeResult<GenerateResponse> {
        let text = if req.prompt().contains("TITLE:") {
            "In the vast expanse..."
        } else {
            "5 Amazing Space Exploration Missions"
        };
        Ok(GenerateResponse::builder().text(text).build().unwrap())
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn model_name(&self) -> &str {
        "fixed-model"
    }
}

struct Encyclopedia {
    fail: bool,
}

#[async_trait]
impl ReferenceSource for Encyclopedia {
    async fn lookup(&self, _topic: &str) -> TubescribeResult<String> {
        if self.fail {
            Err(ResearchError::new(ResearchErrorKind::Http("connection reset".to_string())).into())
        } else {
            Ok("Page: Space exploration\nSummary: Space exploration is the use of...".to_string())
        }
    }

    fn source_name(&self) -> &'static str {
        "encyclopedia"
    }
}

async fn run(fail_lookup: bool) -> PipelineOutcome {
    let mut session = PipelineSession::new(FixedDriver, Encyclopedia { fail: fail_lookup });
    session
        .run("space exploration", &ApiAccess::from_token(Some("sk-test")))
        .await
}

#[tokio::test]
async fn test_human_rendering_panels_in_order() {
    let text = render_human(&run(false).await);

    let title = text.find("Title\n=====\n5 Amazing").unwrap();
    let script = text.find("Script\n======\nIn the vast expanse...").unwrap();
    let title_history = text
        .find("Title History\n-------------\nHuman: space exploration\nAI: 5 Amazing Space Exploration Missions")
        .unwrap();
    let script_history = text
        .find("Script History\n--------------\nHuman: 5 Amazing Space Exploration Missions\nAI: In the vast expanse...")
        .unwrap();
    let research = text.find("Wikipedia Research\n").unwrap();

    assert!(title < script);
    assert!(script < title_history);
    assert!(title_history < script_history);
    assert!(script_history < research);
    assert!(text.ends_with("Space exploration is the use of..."));
}

#[tokio::test]
async fn test_failures_become_warning_lines() {
    let outcome = run(true).await;
    let result = outcome.result().unwrap();

    let lines = failure_lines(result);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("warning: research stage: Lookup failed"));
    assert!(!lines[0].contains("sk-test"));

    assert_eq!(result.script(), "In the vast expanse...");
}

#[test]
fn test_disabled_renders_warning() {
    assert_eq!(render_human(&PipelineOutcome::Disabled), MISSING_KEY_WARNING);
    assert_eq!(
        MISSING_KEY_WARNING,
        "Please enter your OpenAI API key before searching."
    );

    let json = render_json(&PipelineOutcome::Disabled).unwrap();
    assert!(json.contains("\"status\": \"disabled\""));
}

#[tokio::test]
async fn test_json_rendering_has_every_field() {
    let json = render_json(&run(false).await).unwrap();

    for field in [
        "\"topic\"",
        "\"title\"",
        "\"research_text\"",
        "\"script\"",
        "\"title_history\"",
        "\"script_history\"",
        "\"failures\"",
    ] {
        assert!(json.contains(field), "missing {field}");
    }
}
