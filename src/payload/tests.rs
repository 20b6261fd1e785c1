use super::{FormatConfig, FormatMode, assemble};
use crate::CopyError;
use crate::message::{HttpMessage, RequestResponse, SelectionBounds};

const JSON_REQUEST: &str = "POST /api HTTP/1.1\r\nHost: a\r\n\r\n{\"a\":1}";
const JSON_RESPONSE: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\r\n{\"ok\":true}";
const GET_REQUEST: &str = "GET / HTTP/1.1\r\nHost: a\r\n\r\n";
const TEXT_RESPONSE: &str = "HTTP/1.1 200 OK\r\nA: b\r\n\r\nhello world\r\n";

fn exchange(request: &str, response: &str) -> RequestResponse {
    RequestResponse::new(request, Some(HttpMessage::from(response)))
}

fn render(mode: FormatMode, exchange: &RequestResponse, selection: Option<SelectionBounds>) -> String {
    let payload = assemble(mode, exchange, selection, &FormatConfig::default()).unwrap();
    String::from_utf8(payload.as_bytes().to_vec()).unwrap()
}

#[test]
fn test_raw_mode_layout() {
    let text = render(FormatMode::Raw, &exchange(JSON_REQUEST, JSON_RESPONSE), None);
    assert_eq!(
        text,
        "HTTP Request:\rPOST /api HTTP/1.1\r\nHost: a\r\r{\"a\":1}\r\r\
         HTTP Response:\rHTTP/1.1 200 OK\r\nContent-Type: application/json\r\r{\"ok\":true}"
    );
}

#[test]
fn test_pretty_json_formats_request_body_only() {
    let text = render(FormatMode::PrettyJson, &exchange(JSON_REQUEST, JSON_RESPONSE), None);
    assert_eq!(
        text,
        "HTTP Request:\rPOST /api HTTP/1.1\r\nHost: a\r\r{\n    \"a\": 1\n}\r\r\
         HTTP Response:\rHTTP/1.1 200 OK\r\nContent-Type: application/json\r\r{\"ok\":true}"
    );
}

#[test]
fn test_pretty_json_with_pretty_response() {
    let config = FormatConfig {
        pretty_response: true,
        ..FormatConfig::default()
    };
    let payload = assemble(
        FormatMode::PrettyJson,
        &exchange(JSON_REQUEST, JSON_RESPONSE),
        None,
        &config,
    )
    .unwrap();
    assert!(payload.as_bytes().ends_with(b"\r\r{\n    \"ok\": true\n}"));
}

#[test]
fn test_labeled_modes_without_body_separator() {
    let text = render(FormatMode::Raw, &exchange("GET / HTTP/1.1", "HTTP/1.1 204 No Content"), None);
    assert_eq!(
        text,
        "HTTP Request:\rGET / HTTP/1.1\r\r\r\rHTTP Response:\rHTTP/1.1 204 No Content\r\r"
    );
}

#[test]
fn test_full_full_strips_trailing_newlines() {
    let text = render(FormatMode::FullFull, &exchange(GET_REQUEST, TEXT_RESPONSE), None);
    assert_eq!(
        text,
        "GET / HTTP/1.1\r\nHost: a\r\rHTTP/1.1 200 OK\r\nA: b\r\n\r\nhello world"
    );
}

#[test]
fn test_full_header_cuts_body() {
    let text = render(FormatMode::FullHeader, &exchange(GET_REQUEST, TEXT_RESPONSE), None);
    assert_eq!(text, "GET / HTTP/1.1\r\nHost: a\r\rHTTP/1.1 200 OK\r\nA: b\r\n\r\n[...]");
    assert_eq!(text.matches("[...]").count(), 1);
}

#[test]
fn test_full_selected_wraps_selection_in_markers() {
    let start = TEXT_RESPONSE.find("hello").unwrap();
    let selection = SelectionBounds::new(start, start + "hello".len());
    let text = render(
        FormatMode::FullSelected,
        &exchange(GET_REQUEST, TEXT_RESPONSE),
        Some(selection),
    );
    assert_eq!(
        text,
        "GET / HTTP/1.1\r\nHost: a\r\rHTTP/1.1 200 OK\r\nA: b\r\n\r\n[...]\rhello\r[...]"
    );
    assert_eq!(text.matches("[...]").count(), FormatMode::FullSelected.cut_points());
}

#[test]
fn test_custom_cut_marker() {
    let config = FormatConfig {
        cut_marker: "<snip>".to_string(),
        ..FormatConfig::default()
    };
    let payload = assemble(
        FormatMode::FullHeader,
        &exchange(GET_REQUEST, TEXT_RESPONSE),
        None,
        &config,
    )
    .unwrap();
    assert!(payload.as_bytes().ends_with(b"\r\n\r\n<snip>"));
}

#[test]
fn test_full_selected_requires_selection() {
    let result = assemble(
        FormatMode::FullSelected,
        &exchange(GET_REQUEST, TEXT_RESPONSE),
        None,
        &FormatConfig::default(),
    );
    assert!(matches!(result, Err(CopyError::MissingSelection)));
}

#[test]
fn test_full_selected_rejects_out_of_bounds() {
    let len = TEXT_RESPONSE.len();
    let result = assemble(
        FormatMode::FullSelected,
        &exchange(GET_REQUEST, TEXT_RESPONSE),
        Some(SelectionBounds::new(len - 2, len + 5)),
        &FormatConfig::default(),
    );
    assert!(matches!(result, Err(CopyError::InvalidSelection { .. })));
}

#[test]
fn test_every_mode_requires_response() {
    let exchange = RequestResponse::new(GET_REQUEST, None);
    for mode in FormatMode::ALL {
        let result = assemble(mode, &exchange, Some(SelectionBounds::new(0, 1)), &FormatConfig::default());
        assert!(matches!(result, Err(CopyError::MissingResponse)), "mode {mode}");
    }
}

#[test]
fn test_normalized_text_uses_newlines_only() {
    let payload = assemble(
        FormatMode::Raw,
        &exchange(JSON_REQUEST, JSON_RESPONSE),
        None,
        &FormatConfig::default(),
    )
    .unwrap();
    let text = payload.normalized_text();
    assert!(!text.contains('\r'));
    assert_eq!(
        text,
        "HTTP Request:\nPOST /api HTTP/1.1\nHost: a\n\n{\"a\":1}\n\n\
         HTTP Response:\nHTTP/1.1 200 OK\nContent-Type: application/json\n\n{\"ok\":true}"
    );
}

#[test]
fn test_mode_names_round_trip() {
    for mode in FormatMode::ALL {
        assert_eq!(mode.name().parse::<FormatMode>().unwrap(), mode);
    }
    assert_eq!("JSON".parse::<FormatMode>().unwrap(), FormatMode::PrettyJson);
    assert!(matches!("bogus".parse::<FormatMode>(), Err(CopyError::UnknownMode(_))));
}

#[test]
fn test_cut_points_per_mode() {
    assert_eq!(FormatMode::PrettyJson.cut_points(), 0);
    assert_eq!(FormatMode::Raw.cut_points(), 0);
    assert_eq!(FormatMode::FullFull.cut_points(), 0);
    assert_eq!(FormatMode::FullHeader.cut_points(), 1);
    assert_eq!(FormatMode::FullSelected.cut_points(), 2);
    assert!(FormatMode::FullSelected.requires_selection());
    assert!(!FormatMode::FullHeader.requires_selection());
}
