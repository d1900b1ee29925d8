use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{Object, Stream, dictionary};

use scholia::application::ports::{FileLoader, FileLoaderError};
use scholia::domain::{ContentType, Document};
use scholia::infrastructure::text_processing::PdfAdapter;

/// Builds a PDF with one line of Courier text per page.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
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

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Per-page text as the PDF library itself reports it.
fn library_page_texts(bytes: &[u8]) -> Vec<String> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    let mut doc = pdf_oxide::PdfDocument::open(file.path()).unwrap();
    let count = doc.page_count().unwrap();
    (0..count).map(|i| doc.extract_text(i).unwrap()).collect()
}

fn pdf_document(bytes: &[u8]) -> Document {
    Document::new(
        "paper.pdf".to_string(),
        ContentType::Pdf,
        bytes.len() as u64,
    )
}

#[tokio::test]
async fn given_valid_pdf_when_extracting_then_returns_page_text() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = build_pdf(&["Graphene conducts heat"]);

    let result = adapter.extract_text(&pdf_bytes, &pdf_document(&pdf_bytes)).await;

    assert!(result.unwrap().contains("Graphene"));
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_concatenates_pages_in_order() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = build_pdf(&["Alpha findings", "Beta methods", "Gamma outlook"]);

    let text = adapter
        .extract_text(&pdf_bytes, &pdf_document(&pdf_bytes))
        .await
        .unwrap();

    assert_eq!(text, library_page_texts(&pdf_bytes).concat());
    let alpha = text.find("Alpha").unwrap();
    let beta = text.find("Beta").unwrap();
    let gamma = text.find("Gamma").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[tokio::test]
async fn given_concurrent_extractions_when_extracting_then_each_reads_its_own_upload() {
    let adapter = PdfAdapter::new();
    let first = build_pdf(&["Alpha findings"]);
    let second = build_pdf(&["Beta methods"]);

    let first_document = pdf_document(&first);
    let second_document = pdf_document(&second);
    let (first_text, second_text) = tokio::join!(
        adapter.extract_text(&first, &first_document),
        adapter.extract_text(&second, &second_document),
    );

    let first_text = first_text.unwrap();
    let second_text = second_text.unwrap();
    assert!(first_text.contains("Alpha") && !first_text.contains("Beta"));
    assert!(second_text.contains("Beta") && !second_text.contains("Alpha"));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";

    let result = adapter.extract_text(garbage, &pdf_document(garbage)).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_text_content_type_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"some data";
    let document = Document::new(
        "notes.txt".to_string(),
        ContentType::Text,
        data.len() as u64,
    );

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
