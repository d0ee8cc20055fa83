use std::path::Path;

use curator::files::mime::allowed_type;

#[test]
fn test_allowed_types_pass() {
    assert_eq!(
        allowed_type(Path::new("index.html")).unwrap().essence_str(),
        "text/html"
    );
    assert_eq!(
        allowed_type(Path::new("image.png")).unwrap().essence_str(),
        "image/png"
    );
    assert_eq!(
        allowed_type(Path::new("doc.pdf")).unwrap().essence_str(),
        "application/pdf"
    );
}

#[test]
fn test_extension_match_is_case_insensitive() {
    assert_eq!(
        allowed_type(Path::new("REPORT.PDF")).unwrap().essence_str(),
        "application/pdf"
    );
}

#[test]
fn test_known_but_disallowed_types_are_rejected() {
    assert!(allowed_type(Path::new("notes.txt")).is_none());
    assert!(allowed_type(Path::new("photo.jpg")).is_none());
    assert!(allowed_type(Path::new("data.json")).is_none());
}

#[test]
fn test_unclassifiable_names_are_rejected() {
    assert!(allowed_type(Path::new("README")).is_none());
    assert!(allowed_type(Path::new("archive.weirdext")).is_none());
}
