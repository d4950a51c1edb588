use revcycle_export::docx::generate_docx;
use revcycle_export::styles::LetterStyles;

#[test]
fn letter_packs_into_a_zip_container() {
    let rendered = "# Appeal\n\n**Re:** Claim 1\n- CPT 99213: underpaid **$5.00**\n---\n# Appeal\n";
    let bytes = generate_docx(rendered, &LetterStyles::default()).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn unclosed_bold_marker_still_packs() {
    let bytes = generate_docx("**dangling", &LetterStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
