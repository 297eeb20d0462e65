use reqwest::StatusCode;

/// Service name used when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "client-metrics";

/// The label set identifying one latency histogram.
///
/// Field order matches the exposition order `status, method, url, module_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestLabels<'a> {
    pub status: &'a str,
    pub method: &'a str,
    pub url: &'a str,
    pub module_name: &'a str,
}

impl RequestLabels<'_> {
    /// Label names, in the same order as [`RequestLabels::values`].
    pub const NAMES: [&'static str; 4] = ["status", "method", "url", "module_name"];

    pub fn values(&self) -> [&str; 4] {
        // ---
        [self.status, self.method, self.url, self.module_name]
    }
}

/// Derive the status label for a response code.
///
/// With `normalize` set, the code collapses to its class (`404` -> `"4XX"`).
pub fn status_label(status: StatusCode, normalize: bool) -> String {
    // ---
    if normalize {
        format!("{}XX", status.as_u16() / 100)
    } else {
        status.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn exact_codes_are_kept_without_normalization() {
        // ---
        assert_eq!(status_label(StatusCode::OK, false), "200");
        assert_eq!(status_label(StatusCode::NOT_FOUND, false), "404");
        assert_eq!(status_label(StatusCode::SERVICE_UNAVAILABLE, false), "503");
    }

    #[test]
    fn codes_collapse_to_class_with_normalization() {
        // ---
        assert_eq!(status_label(StatusCode::OK, true), "2XX");
        assert_eq!(status_label(StatusCode::NO_CONTENT, true), "2XX");
        assert_eq!(status_label(StatusCode::NOT_FOUND, true), "4XX");
        assert_eq!(status_label(StatusCode::SERVICE_UNAVAILABLE, true), "5XX");
        assert_eq!(status_label(StatusCode::CONTINUE, true), "1XX");
    }

    #[test]
    fn values_follow_name_order() {
        // ---
        let labels = RequestLabels {
            status: "200",
            method: "GET",
            url: "/users/:id",
            module_name: "svc",
        };

        let pairs: Vec<_> = RequestLabels::NAMES
            .iter()
            .zip(labels.values())
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        assert_eq!(
            pairs,
            ["status=200", "method=GET", "url=/users/:id", "module_name=svc"]
        );
    }
}
