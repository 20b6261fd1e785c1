use proptest::prelude::*;
use reqcopy::{
    ClipboardConfig, ClipboardPayload, ClipboardTarget, ClipboardWriter, CopyQueue, FormatConfig,
    FormatMode, HttpMessage, MemoryClipboard, RequestResponse, SelectionBounds, assemble,
    format_body,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Header-ish text without a blank line in it
fn header_block() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z-]{1,12}: [ -~]{0,20}", 0..6).prop_map(|lines| {
        std::iter::once("HTTP/1.1 200 OK".to_string())
            .chain(lines)
            .collect::<Vec<_>>()
            .join("\r\n")
    })
}

/// Bodies that never contain the cut marker
fn message_body() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
        .prop_filter("body contains the cut marker", |body| {
            !body.windows(5).any(|w| w == b"[...]")
        })
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: splitting and rejoining with the separator reproduces the message
    #[test]
    fn split_rejoin_is_lossless(headers in header_block(), body in message_body()) {
        let raw = [headers.as_bytes(), b"\r\n\r\n".as_slice(), body.as_slice()].concat();
        let message = HttpMessage::new(raw.clone());
        let (head, tail) = message.split();
        prop_assert_eq!([head, b"\r\n\r\n".as_slice(), tail].concat(), raw);
    }

    /// Property: anything that is not JSON passes through untouched
    #[test]
    fn non_json_body_is_identity(body in message_body()) {
        prop_assume!(serde_json::from_slice::<Value>(&body).is_err());
        let formatted = format_body(&body);
        prop_assert_eq!(&formatted[..], &body[..]);
    }

    /// Property: formatting already-pretty JSON changes nothing
    #[test]
    fn pretty_json_is_idempotent(value in json_value()) {
        let compact = serde_json::to_vec(&value).unwrap();
        let once = format_body(&compact).into_owned();
        let twice = format_body(&once).into_owned();
        prop_assert_eq!(&once, &twice);

        let reparsed: Value = serde_json::from_slice(&once).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    /// Property: truncating modes write exactly one marker per cut point
    #[test]
    fn truncating_modes_mark_each_cut(
        headers in header_block(),
        response_body in message_body(),
        request_body in message_body(),
        start in any::<prop::sample::Index>(),
        len in 1usize..32,
    ) {
        let request = [b"GET / HTTP/1.1\r\nHost: a\r\n\r\n".as_slice(), request_body.as_slice()].concat();
        prop_assume!(!headers.contains("[...]"));
        let response = [headers.as_bytes(), b"\r\n\r\n".as_slice(), response_body.as_slice()].concat();
        let exchange = RequestResponse::new(request, Some(HttpMessage::new(response.clone())));

        let start = start.index(response.len());
        let end = (start + len).min(response.len());
        prop_assume!(start < end);
        let selection = SelectionBounds::new(start, end);
        prop_assume!(!response[start..end].windows(5).any(|w| w == b"[...]"));

        for mode in [FormatMode::FullHeader, FormatMode::FullSelected] {
            let payload = assemble(mode, &exchange, Some(selection), &FormatConfig::default()).unwrap();
            let markers = payload.as_bytes().windows(5).filter(|w| *w == b"[...]").count();
            prop_assert_eq!(markers, mode.cut_points());
        }
    }

    /// Property: concurrent queued copies each land whole, in submission order
    #[test]
    fn queued_copies_never_interleave(texts in prop::collection::vec("[a-z ]{1,40}", 1..12)) {
        tokio_test::block_on(async {
            let sink = MemoryClipboard::new();
            let writer = Arc::new(ClipboardWriter::new(sink.clone(), ClipboardConfig::default()));
            let queue = CopyQueue::start(writer);

            let tickets: Vec<_> = texts
                .iter()
                .map(|text| queue.submit(ClipboardPayload::new(text.clone().into_bytes()), Duration::ZERO))
                .collect::<Result<_, _>>()
                .map_err(|e| TestCaseError::fail(format!("submit failed: {e}")))?;
            for ticket in tickets {
                ticket.wait().await.map_err(|e| TestCaseError::fail(format!("copy failed: {e}")))?;
            }
            queue.shutdown().await;

            let writes = sink.writes();
            prop_assert_eq!(writes.len(), texts.len() * 2);
            for (pair, text) in writes.chunks(2).zip(&texts) {
                prop_assert_eq!(pair[0].target, ClipboardTarget::Clipboard);
                prop_assert_eq!(pair[1].target, ClipboardTarget::Primary);
                prop_assert_eq!(&pair[0].text, text);
                prop_assert_eq!(&pair[1].text, text);
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}
