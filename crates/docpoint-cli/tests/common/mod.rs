//! PDF fixtures built in memory with lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

/// Build a PDF whose pages hold the given lines of text, one text object
/// per line. An empty slice produces a page without text.
pub fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    build_pdf_with_font(
        pages,
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        },
    )
}

/// Like [`build_pdf`], with `font` as the only font resource.
pub fn build_pdf_with_font(pages: &[&[&str]], font: Dictionary) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (760 - 16 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
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
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("pdf saves");
    buffer
}

/// A one-page invoice.
pub fn invoice_pdf() -> Vec<u8> {
    build_pdf(&[&[
        "ACME SUPPLY",
        "Invoice Number: INV-2024-001",
        "Invoice Date: 2024-03-15",
        "Bill To: Acme Corp",
        "123 Main St",
        "Total: $1,234.56",
    ]])
}

/// A page set in a composite font that is missing its `DescendantFonts`.
/// lopdf loads it but cannot decode the text, and pdf-extract panics on it.
pub fn broken_font_pdf() -> Vec<u8> {
    build_pdf_with_font(
        &[&["Total: $42.00"]],
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "BrokenSans",
            "Encoding" => "Identity-H",
        },
    )
}
