use std::io;

use vitae::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::TemplateNotFound("modern.json".to_string());
    assert_eq!(err.to_string(), "Template not found: modern.json");

    let err = Error::ParseError { origin: "me.yaml".to_string(), message: "bad indent".to_string() };
    assert_eq!(err.to_string(), "Failed to parse me.yaml: bad indent");

    let err = Error::OutputExistsError { output: "resume.html".to_string() };
    assert_eq!(
        err.to_string(),
        "Output file 'resume.html' already exists. Use --force to overwrite it."
    );
}
