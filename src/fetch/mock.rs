//! Fixed page content substituted when the fetch fails.

use std::collections::BTreeMap;

use super::content::PageContent;

/// Server header of the mock page.
pub const MOCK_SERVER_HEADER: &str = "nginx/1.18.0";

/// HTML fragment of the mock page.
pub const MOCK_HTML: &str = r#"
<html>
  <head>
    <title>Example Web Page</title>
    <meta name="description" content="This is an example web page">
    <meta name="keywords" content="example, web, analysis">
    <meta name="viewport" content="width=device-width, initial-scale=1">
  </head>
  <body>
    <h1>Main Heading</h1>
    <h2>Subheading</h2>
    <img src="image.jpg" alt="Example image">
    <img src="image2.jpg">
    <a href="/internal-page">Internal link</a>
    <a href="https://external.example.org">External link</a>
  </body>
</html>
"#;

/// The mock page content: status 200, an nginx server header and `MOCK_HTML`.
pub fn mock_page_content() -> PageContent {
    PageContent {
        status: 200,
        headers: BTreeMap::from([
            ("server".to_string(), MOCK_SERVER_HEADER.to_string()),
            (
                "content-type".to_string(),
                "text/html; charset=UTF-8".to_string(),
            ),
        ]),
        body: MOCK_HTML.to_string(),
        response_time_ms: 0,
    }
}
