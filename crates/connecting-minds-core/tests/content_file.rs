//! Loading site content from disk.

use std::io::Write;

use connecting_minds_core::{Gallery, RecordingHost, SiteContent, SiteError};
use tempfile::NamedTempFile;

fn write_content(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_custom_cards_into_gallery() {
    let file = write_content(
        r#"{
            "cards": [
                {
                    "title": "Hot Desk",
                    "description": "Flexible",
                    "image_ref": "https://example.com/desk.jpg",
                    "cta_label": "Book",
                    "cta_target": "https://example.com/book",
                    "detail": [["Daily passes", "Drop in any time."]]
                },
                {
                    "title": "Private Office",
                    "description": "Dedicated",
                    "image_ref": "https://example.com/office.jpg",
                    "cta_target": "https://example.com/office"
                }
            ]
        }"#,
    );

    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content.testimonials.len(), 4);

    let mut gallery = Gallery::new(content.cards, RecordingHost::new());
    gallery.activate_by_title("Hot Desk");
    let overlay = gallery.view().overlay.unwrap();
    assert_eq!(overlay.cta_label, "Book");
    assert!(overlay.detail.contains("Daily passes"));
}

#[test]
fn load_custom_testimonials() {
    let file = write_content(
        r#"{"testimonials":[{"quote":"Great space","name":"Ana","designation":"Tenant","image_ref":"a.jpg"}]}"#,
    );
    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content.testimonials.len(), 1);
    assert_eq!(content.testimonials[0].name, "Ana");
    assert_eq!(content.cards.len(), 4);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteContent::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SiteError::Io(_)));
}

#[test]
fn duplicate_titles_in_file_rejected() {
    let file = write_content(
        r#"{"cards":[
            {"title":"Same","description":"","image_ref":"","cta_target":""},
            {"title":"Same","description":"","image_ref":"","cta_target":""}
        ]}"#,
    );
    let err = SiteContent::load(file.path()).unwrap_err();
    assert!(matches!(err, SiteError::DuplicateCardTitle(_)));
}

#[test]
fn titles_differing_only_in_case_and_punctuation_rejected() {
    let file = write_content(
        r#"{"cards":[
            {"title":"Prime Location","description":"","image_ref":"","cta_target":""},
            {"title":"prime-location","description":"","image_ref":"","cta_target":""}
        ]}"#,
    );
    let err = SiteContent::load(file.path()).unwrap_err();
    assert!(matches!(err, SiteError::DuplicateCardTitle(ref t) if t == "prime-location"));
}

#[test]
fn distinct_titles_get_distinct_keys() {
    let file = write_content(
        r#"{"cards":[
            {"title":"Prime Location","description":"","image_ref":"","cta_target":""},
            {"title":"Prime Locations","description":"","image_ref":"","cta_target":""}
        ]}"#,
    );
    let content = SiteContent::load(file.path()).unwrap();
    let gallery = Gallery::new(content.cards, RecordingHost::new());
    let view = gallery.view();
    assert_ne!(view.rows[0].keys, view.rows[1].keys);
}
