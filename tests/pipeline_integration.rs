//! Pipeline tests through the public API: real PDFs in, scores out.

use std::sync::Arc;

use cvmatch::document::fixtures::pdf_with_pages;
use cvmatch::{
    MatchError, MiniLmEncoder, MockEncoder, MockExtractor, PdfExtractor, ResumeMatcher,
    Submission, TextExtractor, ValidationError,
};

#[test]
fn test_multi_page_resume_text_in_page_order() {
    let pdf = pdf_with_pages(&["Experience", "", "Education", "Skills"]);
    let text = PdfExtractor::new().extract(&pdf).expect("extracts");

    let body = text.as_str();
    let experience = body.find("Experience").expect("page 1 text");
    let education = body.find("Education").expect("page 3 text");
    let skills = body.find("Skills").expect("page 4 text");

    assert!(experience < education && education < skills);
    assert_eq!(text.page_count(), 4);
    assert_eq!(text.pages_with_text(), 3);
    assert!(body.ends_with('\n'));
}

#[test]
fn test_shared_encoder_serves_concurrent_matchers() {
    let encoder = Arc::new(MiniLmEncoder::stub().expect("stub encoder loads"));
    let matcher = Arc::new(ResumeMatcher::new(PdfExtractor::new(), Arc::clone(&encoder)));
    let pdf = pdf_with_pages(&["Distributed systems engineer with Rust and Go"]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            let pdf = pdf.clone();
            std::thread::spawn(move || {
                matcher
                    .evaluate(&Submission::new(pdf, "Rust engineer for distributed systems"))
                    .expect("evaluates")
                    .score
            })
        })
        .collect();

    let scores: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread completes"))
        .collect();

    assert!(scores.windows(2).all(|w| w[0] == w[1]));
    assert!(scores[0].percent > 0.0);
}

#[test]
fn test_pinned_vectors_drive_the_score() {
    let encoder = MockEncoder::new(3)
        .pin("resume text\n", vec![1.0, 0.0, 0.0])
        .pin("job text", vec![0.0, 1.0, 0.0]);
    let matcher = ResumeMatcher::new(MockExtractor::with_text("resume text"), encoder);

    let report = matcher
        .evaluate(&Submission::new(b"%PDF".to_vec(), "job text"))
        .expect("evaluates");

    assert_eq!(report.score.percent, 0.0);
    assert!(!report.score.degenerate);
    assert_eq!(report.score.to_string(), "0.00%");
}

#[test]
fn test_validation_error_stops_the_pipeline() {
    let extractor = MockExtractor::with_text("resume");
    let encoder = MockEncoder::new(4);
    let matcher = ResumeMatcher::new(extractor.clone(), encoder.clone());

    let err = matcher
        .evaluate(&Submission::without_document("Rust engineer"))
        .unwrap_err();

    assert!(matches!(
        err,
        MatchError::Validation(ValidationError::MissingDocument)
    ));
    assert_eq!(extractor.calls(), 0);
    assert_eq!(encoder.calls(), 0);
}
