use bytes::Bytes;
use statik::http::response::{Response, ResponseBuilder, SERVER_NAME, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    // Lowercase "found" is deliberate
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not found");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(Bytes::from_static(b"Hello, World!"))
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, Bytes::from_static(b"Hello, World!"));
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Allow", "GET")
        .header("Server", "test")
        .header("Content-type", "text/plain")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Allow", "Server", "Content-type"]);
}

#[test]
fn test_response_builder_adds_no_implicit_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(Bytes::from_static(b"test"))
        .build();

    // No automatic Content-Length; the two response shapes control their
    // exact header sets themselves.
    assert!(response.headers.is_empty());
}

#[test]
fn test_error_response_shape() {
    let response = Response::error(
        StatusCode::NotImplemented,
        "Server does not support this method",
        "POST",
    );

    assert_eq!(response.status, StatusCode::NotImplemented);
    assert_eq!(
        response.headers,
        vec![("Content-type".to_string(), "text/html".to_string())]
    );

    let body = String::from_utf8(response.body.to_vec()).unwrap();
    assert!(body.contains("501 Not Implemented"));
    assert!(body.contains("Server does not support this method: POST"));
    assert!(body.contains(SERVER_NAME));
}

#[test]
fn test_error_response_embeds_filename_cause() {
    let response = Response::error(
        StatusCode::NotFound,
        "Server couldn't find this file",
        "./missing.txt",
    );

    let body = String::from_utf8(response.body.to_vec()).unwrap();
    assert!(body.contains("404 Not found"));
    assert!(body.contains("./missing.txt"));
}

#[test]
fn test_file_response_header_set_and_order() {
    let response = Response::file("text/html", 11, Bytes::from_static(b"<h1>Hi</h1>"));

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers,
        vec![
            ("Allow".to_string(), "GET".to_string()),
            ("Server".to_string(), SERVER_NAME.to_string()),
            ("Content-length".to_string(), "11".to_string()),
            ("Content-type".to_string(), "text/html;charset=UTF-8".to_string()),
        ]
    );
    assert_eq!(response.body, Bytes::from_static(b"<h1>Hi</h1>"));
}

#[test]
fn test_file_response_body_is_verbatim_binary() {
    let payload = Bytes::from(vec![0x00u8, 0xff, 0x89, 0x50, 0x4e, 0x47]);
    let response = Response::file("image/png", 6, payload.clone());

    assert_eq!(response.body, payload);
}
