//! HTTP request handlers.

/// Readiness probe endpoint.
pub mod health;
/// Paste JSON endpoints.
pub mod paste;
/// Server-rendered paste page.
pub mod view;

use crate::{
    constants::TEST_NOW_HEADER,
    Clock, FixedClock, SystemClock,
};
use axum::http::HeaderMap;

/// Pick the time source for one read request.
///
/// In test mode a parseable `x-test-now-ms` header pins "now" to that value;
/// otherwise the system clock is used. Outside test mode the header is
/// ignored.
pub(crate) fn request_clock(headers: &HeaderMap, test_mode: bool) -> Box<dyn Clock> {
    if !test_mode {
        return Box::new(SystemClock);
    }
    let Some(raw) = headers.get(TEST_NOW_HEADER) else {
        return Box::new(SystemClock);
    };
    match raw.to_str().ok().and_then(|value| value.trim().parse::<i64>().ok()) {
        Some(now_millis) => Box::new(FixedClock(now_millis)),
        None => {
            tracing::debug!("Ignoring unparseable {} header: {:?}", TEST_NOW_HEADER, raw);
            Box::new(SystemClock)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::request_clock;
    use crate::{constants::TEST_NOW_HEADER, Clock, SystemClock};
    use axum::http::{HeaderMap, HeaderValue};

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(TEST_NOW_HEADER, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn header_pins_time_in_test_mode() {
        let clock = request_clock(&headers_with("1700000000000"), true);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
    }

    #[test]
    fn header_is_ignored_outside_test_mode() {
        let before = SystemClock.now_millis();
        let clock = request_clock(&headers_with("5"), false);
        assert!(clock.now_millis() >= before);
    }

    #[test]
    fn unparseable_header_falls_back_to_system_time() {
        let before = SystemClock.now_millis();
        for value in ["soon", "", "12.5"] {
            let clock = request_clock(&headers_with(value), true);
            assert!(clock.now_millis() >= before);
        }
    }

    #[test]
    fn missing_header_uses_system_time() {
        let before = SystemClock.now_millis();
        let clock = request_clock(&HeaderMap::new(), true);
        assert!(clock.now_millis() >= before);
    }
}
