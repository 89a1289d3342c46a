use tubescribe_error::{
    ModelsError, ModelsErrorKind, PipelineError, PipelineErrorKind, ResearchError,
    ResearchErrorKind, Stage, TubescribeError, TubescribeErrorKind,
};

#[test]
fn test_template_binding_names_placeholder() {
    let err = PipelineError::new(PipelineErrorKind::TemplateBinding {
        template: "script".to_string(),
        placeholder: "wikipedia_research".to_string(),
    });

    let message = err.to_string();
    assert!(message.contains("'script'"));
    assert!(message.contains("{wikipedia_research}"));
    assert_eq!(err.kind.stage(), None);
}

#[test]
fn test_lookup_failure_belongs_to_research_stage() {
    let kind = PipelineErrorKind::LookupFailure("timed out".to_string());
    assert_eq!(kind.stage(), Some(Stage::Research));
}

#[test]
fn test_errors_record_caller_location() {
    let err = ResearchError::new(ResearchErrorKind::Http("dns".to_string()));
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_models_error_converts_to_top_level() {
    let err: TubescribeError = ModelsError::new(ModelsErrorKind::QuotaExceeded(
        "You exceeded your current quota".to_string(),
    ))
    .into();

    assert!(matches!(err.kind(), TubescribeErrorKind::Models(_)));
    assert!(err.to_string().contains("Quota exceeded"));
}

#[test]
fn test_models_error_labels() {
    assert_eq!(ModelsErrorKind::MissingApiKey.label(), "auth");
    assert_eq!(ModelsErrorKind::EmptyResponse.label(), "malformed_response");
    assert_eq!(ModelsErrorKind::Http("reset".to_string()).label(), "network");
}

#[test]
fn test_stage_display_and_serde() {
    assert_eq!(Stage::Script.to_string(), "script");
    assert_eq!(
        serde_json::to_string(&Stage::Research).expect("serialize stage"),
        "\"research\""
    );
}
