//! Integration tests for the extraction pipeline, driven by PDF documents
//! built in memory with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdftext::error::AppError;
use pdftext::models::UploadedDocument;
use pdftext::services::{PdfExtractor, TextExtractor};

/// Builds a PDF with one page per entry in `page_texts`. An empty entry
/// produces a page with no text-showing operators.
fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let mut operations = vec![Operation::new("BT", vec![])];
        if !text.is_empty() {
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![50.into(), 700.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn extracts_pages_in_order_joined_by_newlines() {
    let pdf = pdf_with_pages(&["Page One", "Page Two", "Page Three"]);

    let result = PdfExtractor::new().extract(&pdf).unwrap();
    assert_eq!(result.pages, 3);
    assert_eq!(result.text, "Page One\nPage Two\nPage Three");
}

#[test]
fn joins_n_pages_with_n_minus_one_newlines() {
    let pdf = pdf_with_pages(&["A", "B", "C", "D"]);

    let result = PdfExtractor::new().extract(&pdf).unwrap();
    assert_eq!(result.pages, 4);
    assert_eq!(result.text.matches('\n').count(), 3);
}

#[test]
fn zero_page_document_yields_empty_string() {
    let pdf = pdf_with_pages(&[]);

    let result = PdfExtractor::new().extract(&pdf).unwrap();
    assert_eq!(result.pages, 0);
    assert_eq!(result.text, "");
}

#[test]
fn page_without_text_contributes_empty_segment() {
    let pdf = pdf_with_pages(&["Alpha", "", "Gamma"]);

    let result = PdfExtractor::new().extract(&pdf).unwrap();
    assert_eq!(result.text, "Alpha\n\nGamma");
}

#[test]
fn all_blank_pages_yield_only_separators() {
    let pdf = pdf_with_pages(&["", ""]);

    let result = PdfExtractor::new().extract(&pdf).unwrap();
    assert_eq!(result.pages, 2);
    assert_eq!(result.text, "\n");
}

#[test]
fn non_pdf_input_is_an_error() {
    let err = PdfExtractor::new().extract(b"this is not a pdf").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn truncated_input_is_an_error() {
    let pdf = pdf_with_pages(&["Page One"]);
    let truncated = &pdf[..40];

    assert!(PdfExtractor::new().extract(truncated).is_err());
}

#[test]
fn extraction_is_deterministic() {
    let pdf = pdf_with_pages(&["Page One", "Page Two"]);

    let extractor = PdfExtractor::new();
    let first = extractor.extract(&pdf).unwrap();
    let second = extractor.extract(&pdf).unwrap();
    assert_eq!(first, second);
}

#[test]
fn extraction_error_maps_to_app_error() {
    use axum::http::StatusCode;

    let err = PdfExtractor::new().extract(b"garbage").unwrap_err();
    let app_err = AppError::from(err);
    assert_eq!(app_err.error_code(), "EXTRACTION_ERROR");
    assert_eq!(app_err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app_err.to_string().starts_with("PDF extraction failed"));
}

#[test]
fn upload_extract_download_scenario() {
    let pdf = pdf_with_pages(&["Page One", "Page Two", "Page Three"]);
    let document = UploadedDocument::new("doc.pdf".to_string(), pdf);
    assert!(document.is_pdf());

    let result = PdfExtractor::new().extract(&document.content).unwrap();
    assert_eq!(result.text, "Page One\nPage Two\nPage Three");
    assert_eq!(document.download_filename(), "doc_extracted.txt");
}
