//! Pipeline behavior tests with a scripted generative model.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use caseforge::{
    AuthenticatedIdentity, CaseStudyBrief, CaseStudyGenerator, CompletionRequest, GenerativeModel,
    Role, ServiceError,
};

const VALID_DOCUMENT: &str = r#"{"title":"T","description":"D","content":"C"}"#;

/// Pops one scripted response per call; repeats the last script entry
/// once the script is exhausted.
struct ScriptedModel {
    script: Mutex<Vec<Option<String>>>,
    calls: AtomicU32,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl ScriptedModel {
    fn new(script: Vec<Option<&str>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().map(|s| s.map(str::to_string)).collect()),
            calls: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            Ok(script.remove(0))
        } else {
            Ok(script.first().cloned().flatten())
        }
    }
}

fn brief() -> CaseStudyBrief {
    CaseStudyBrief::new("Relaunch", "Acme GmbH", "Retail", "Projekt-Notizen")
        .with_service("SEO")
        .with_result("impressions", 1_000_000.0)
}

fn admin() -> AuthenticatedIdentity {
    AuthenticatedIdentity::new("user-123").with_role(Role::Admin)
}

#[tokio::test]
async fn success_path_makes_exactly_one_call() {
    let model = ScriptedModel::new(vec![Some(VALID_DOCUMENT)]);
    let generator = CaseStudyGenerator::new(&model);

    let document = generator.generate(&brief(), &admin()).await.unwrap();

    assert_eq!(document.title, "T");
    assert_eq!(document.description, "D");
    assert_eq!(document.content, "C");
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn schema_violations_never_surface_as_success() {
    // Missing field, empty field, wrong type: all count as failed
    // attempts, none is ever returned as a document.
    let non_conforming = [
        r#"{"description":"D","content":"C"}"#,
        r#"{"title":"T","content":"C"}"#,
        r#"{"title":"T","description":"D"}"#,
        r#"{"title":"","description":"D","content":"C"}"#,
        r#"{"title":"T","description":"D","content":42}"#,
    ];
    for raw in non_conforming {
        let model = ScriptedModel::new(vec![Some(raw)]);
        let generator = CaseStudyGenerator::new(&model);
        let err = generator.generate(&brief(), &admin()).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::GenerationExhausted { .. }),
            "output {raw} must exhaust retries, got {err:?}"
        );
    }
}

#[tokio::test]
async fn persistent_bad_output_makes_four_calls_then_exhausts() {
    let model = ScriptedModel::new(vec![Some("not json at all")]);
    let generator = CaseStudyGenerator::new(&model);

    let err = generator.generate(&brief(), &admin()).await.unwrap_err();

    let ServiceError::GenerationExhausted { brief: carried } = err else {
        panic!("expected GenerationExhausted");
    };
    assert_eq!(carried.title, "Relaunch");
    assert_eq!(model.calls(), 4, "1 initial attempt + 3 retries");
}

#[tokio::test]
async fn empty_model_output_is_terminal_after_one_call() {
    let model = ScriptedModel::new(vec![None]);
    let generator = CaseStudyGenerator::new(&model);

    let err = generator.generate(&brief(), &admin()).await.unwrap_err();

    assert!(matches!(err, ServiceError::GenerationFailed { .. }));
    assert_eq!(err.status_code(), 500);
    assert_eq!(model.calls(), 1, "empty output must not trigger the retry loop");
}

#[tokio::test]
async fn recovers_after_transient_bad_output() {
    let model = ScriptedModel::new(vec![Some("{\"title\":"), Some(VALID_DOCUMENT)]);
    let generator = CaseStudyGenerator::new(&model);

    let document = generator.generate(&brief(), &admin()).await.unwrap();

    assert_eq!(document.title, "T");
    assert_eq!(model.calls(), 2);
}

#[tokio::test]
async fn retries_reuse_the_identical_prompt() {
    let model = ScriptedModel::new(vec![Some("bad"), Some(VALID_DOCUMENT)]);
    let generator = CaseStudyGenerator::new(&model);

    let first_payload = {
        generator.generate(&brief(), &admin()).await.unwrap();
        let request = model.last_request.lock().unwrap().clone().unwrap();
        assert!(request.structured_output);
        assert_eq!(request.caller_id, "user-123");
        request.user_payload
    };

    // The payload of the final (retried) call is still the plain brief.
    let value: serde_json::Value = serde_json::from_str(&first_payload).unwrap();
    assert_eq!(value["title"], "Relaunch");
    assert_eq!(value["results"]["impressions"], 1_000_000.0);
}

#[tokio::test]
async fn generation_requires_admin_role() {
    let model = ScriptedModel::new(vec![Some(VALID_DOCUMENT)]);
    let generator = CaseStudyGenerator::new(&model);
    let caller = AuthenticatedIdentity::new("user-123");

    let err = generator
        .generate_case_study(&brief(), &caller)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::AccessDenied { .. }));
    assert_eq!(model.calls(), 0, "guard must run before any model call");
}

#[tokio::test]
async fn admin_passes_the_exposed_operation() {
    let model = ScriptedModel::new(vec![Some(VALID_DOCUMENT)]);
    let generator = CaseStudyGenerator::new(&model);

    let document = generator
        .generate_case_study(&brief(), &admin())
        .await
        .unwrap();
    assert_eq!(document.title, "T");
}

#[tokio::test]
async fn concurrent_invocations_do_not_share_retry_state() {
    let model = ScriptedModel::new(vec![Some(VALID_DOCUMENT)]);
    let generator = std::sync::Arc::new(CaseStudyGenerator::new(&model));

    let brief = brief();
    let caller = admin();
    let (a, b) = tokio::join!(
        generator.generate(&brief, &caller),
        generator.generate(&brief, &caller),
    );
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(model.calls(), 2);
}
