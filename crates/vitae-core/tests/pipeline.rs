use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pretty_assertions::assert_eq;
use serde_json::json;
use vitae_core::{
    Completion, FunctionCallRequest, GenerativeBackend, LlmError, ParseOptions, PlainTextExtractor,
    Refiner, ResumePipeline, RefinementError, VitaeConfig, VitaeError,
};

type Answer = Result<Completion, LlmError>;

const JANE: &str = "Jane Doe\nSenior Engineer\nLocation: Berlin\njane.doe@example.com\nSummary: Builds backend systems.";

struct ScriptedBackend {
    answer: Mutex<Option<Answer>>,
    calls: Mutex<usize>,
}

impl ScriptedBackend {
    fn new(answer: Answer) -> Arc<Self> {
        Arc::new(Self {
            answer: Mutex::new(Some(answer)),
            calls: Mutex::new(0),
        })
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn complete(&self, _request: &FunctionCallRequest) -> Answer {
        *self.calls.lock().unwrap() += 1;
        self.answer
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(LlmError::EmptyChoices))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

fn text_pipeline() -> ResumePipeline {
    ResumePipeline::new().with_text_extractor(Arc::new(PlainTextExtractor))
}

fn refined_candidate() -> String {
    json!({
        "slug": "jane-doe",
        "name": "Jane Doe",
        "title": "Senior Engineer",
        "location": "Berlin",
        "description": "Builds backend systems.",
        "contact": {"email": "jane.doe@example.com", "telegram": "", "linkedin": "", "github": "janedoe"},
        "skills": [
            {"title": "Programming Languages", "list": [
                {"name": "Python", "icon": "wrong.svg"},
                {"name": "Zig", "icon": ""}
            ]},
            {"title": "Databases", "list": [{"name": "PostgreSQL", "icon": ""}]}
        ],
        "experience": [{
            "company": "Acme",
            "location": "Berlin",
            "role": "Engineer",
            "period": "2020 - Present",
            "description": "Backend platform team",
            "achievements": ["Built APIs"]
        }],
        "projects": [{"name": "vitae", "description": "Resume parser", "techStack": ["Rust"], "url": ""}],
        "education": [{"icon": "", "name": "MIREA", "degree": "BSc", "field": "CS", "years": "2014 - 2018"}],
        "resume": {"resumeUrl": ""}
    })
    .to_string()
}

#[tokio::test]
async fn test_offline_parse_of_plain_text() {
    let record = text_pipeline()
        .parse(JANE.as_bytes(), ParseOptions::offline())
        .await
        .unwrap();

    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.slug, "jane-doe");
    assert_eq!(record.title, "Senior Engineer");
    assert_eq!(record.location, "Berlin");
    assert_eq!(record.contact.email, "jane.doe@example.com");
    assert_eq!(record.description, "Builds backend systems.");
    assert!(record.skills.is_empty());
    assert!(record.education.is_empty());
}

#[tokio::test]
async fn test_heuristic_record_passes_validation() {
    let record = text_pipeline()
        .parse(JANE.as_bytes(), ParseOptions::offline().with_validation(true))
        .await
        .unwrap();
    assert_eq!(record.slug, "jane-doe");
}

#[tokio::test]
async fn test_invalid_pdf_fails_at_extraction() {
    let backend = ScriptedBackend::new(Ok(Completion::from_call("updateResumeData", refined_candidate())));
    let pipeline = ResumePipeline::new().with_refiner(Refiner::new(backend.clone()));

    let err = pipeline
        .parse(b"%PDF-garbage", ParseOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, VitaeError::Extraction(_)));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_refinement_then_icon_enrichment() {
    let backend = ScriptedBackend::new(Ok(Completion::from_call("updateResumeData", refined_candidate())));
    let pipeline = text_pipeline().with_refiner(Refiner::new(backend.clone()));

    let record = pipeline
        .parse(JANE.as_bytes(), ParseOptions::default())
        .await
        .unwrap();

    assert_eq!(backend.calls(), 1);
    let languages = &record.skills[0].list;
    assert_eq!(languages[0].icon, "python.svg");
    assert_eq!(languages[1].icon, "");
    assert_eq!(record.skills[1].list[0].icon, "Postgresql.svg");
    assert_eq!(record.education[0].icon, "mirea.svg");
    assert_eq!(record.projects[0].tech_stack, vec!["Rust".to_string()]);
    assert_eq!(record.contact.github, "janedoe");
}

#[tokio::test]
async fn test_refinement_failure_returns_no_record() {
    let backend = ScriptedBackend::new(Ok(Completion::from_text("Sorry, I can't help with that.")));
    let pipeline = text_pipeline().with_refiner(Refiner::new(backend));

    let err = pipeline
        .parse(JANE.as_bytes(), ParseOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        VitaeError::Refinement(RefinementError::MissingFunctionCall)
    ));
}

#[tokio::test]
async fn test_invalid_refined_record_fails_validation() {
    let mut candidate: serde_json::Value = serde_json::from_str(&refined_candidate()).unwrap();
    candidate["slug"] = json!("");
    let backend = ScriptedBackend::new(Ok(Completion::from_call(
        "updateResumeData",
        candidate.to_string(),
    )));
    let pipeline = text_pipeline().with_refiner(Refiner::new(backend.clone()));

    let err = pipeline
        .parse(JANE.as_bytes(), ParseOptions::default())
        .await
        .unwrap_err();
    match err {
        VitaeError::Validation(e) => assert_eq!(e.violations[0].path, "/slug"),
        other => panic!("expected validation error, got {other}"),
    }

    // Same candidate is returned when validation is switched off.
    let backend = ScriptedBackend::new(Ok(Completion::from_call(
        "updateResumeData",
        candidate.to_string(),
    )));
    let record = text_pipeline()
        .with_refiner(Refiner::new(backend))
        .parse(JANE.as_bytes(), ParseOptions::default().with_validation(false))
        .await
        .unwrap();
    assert_eq!(record.slug, "");
}

#[tokio::test]
async fn test_refined_entries_without_icons_are_enriched() {
    let mut candidate: serde_json::Value = serde_json::from_str(&refined_candidate()).unwrap();
    candidate["skills"] = json!([{"title": "Programming Languages", "list": [{"name": "Python"}, {"name": "Zig"}]}]);
    candidate["education"] = json!([{"name": "Mohawk", "degree": "", "field": "", "years": ""}]);
    let backend = ScriptedBackend::new(Ok(Completion::from_call(
        "updateResumeData",
        candidate.to_string(),
    )));

    let record = text_pipeline()
        .with_refiner(Refiner::new(backend))
        .parse(JANE.as_bytes(), ParseOptions::default())
        .await
        .unwrap();

    assert_eq!(record.skills[0].list[0].icon, "python.svg");
    assert_eq!(record.skills[0].list[1].icon, "");
    assert_eq!(record.education[0].icon, "mohawk.svg");
}

#[tokio::test]
async fn test_malformed_refined_record_reports_every_violation() {
    let mut candidate: serde_json::Value = serde_json::from_str(&refined_candidate()).unwrap();
    let object = candidate.as_object_mut().unwrap();
    object.remove("resume");
    object.insert("name".to_string(), serde_json::Value::Null);
    candidate["contact"].as_object_mut().unwrap().remove("github");
    let backend = ScriptedBackend::new(Ok(Completion::from_call(
        "updateResumeData",
        candidate.to_string(),
    )));

    let err = text_pipeline()
        .with_refiner(Refiner::new(backend))
        .parse(JANE.as_bytes(), ParseOptions::default())
        .await
        .unwrap_err();

    match err {
        VitaeError::Validation(e) => {
            let found: Vec<String> = e.violations.iter().map(|v| v.to_string()).collect();
            assert_eq!(
                found,
                vec![
                    "/name: expected string, found null",
                    "/contact/github: is required",
                    "/resume: is required",
                ]
            );
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[tokio::test]
async fn test_refinement_enabled_without_backend() {
    let err = text_pipeline()
        .parse(JANE.as_bytes(), ParseOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "config");
}

#[tokio::test]
async fn test_pipeline_from_config_with_refiner() {
    let mut config = VitaeConfig::default();
    config.refinement.function_name = "emitProfile".to_string();
    let backend = ScriptedBackend::new(Ok(Completion::from_call("emitProfile", refined_candidate())));
    let refiner = Refiner::from_config(backend, &config.refinement);

    let pipeline = ResumePipeline::from_config(&config, Some(refiner))
        .with_text_extractor(Arc::new(PlainTextExtractor));
    let record = pipeline.parse(JANE.as_bytes(), config.pipeline).await.unwrap();
    assert_eq!(record.experience[0].company, "Acme");
}

fn single_page_pdf(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[tokio::test]
async fn test_pdf_document_end_to_end() {
    let pdf = single_page_pdf("Hello World");
    let record = ResumePipeline::new()
        .parse(&pdf, ParseOptions::offline())
        .await
        .unwrap();

    // Text layout from the PDF is not guaranteed, only that it was read.
    assert!(!record.slug.is_empty());
}

#[test]
fn test_pdf_text_is_extracted() {
    use vitae_core::{PdfExtractor, TextExtractor};

    let text = PdfExtractor::new()
        .extract_text(&single_page_pdf("Hello World"))
        .unwrap();
    assert!(text.contains("Hello"));
}
