//! JavaScript snippets run through `Session::execute_script` and `Session::wait`

/// Client-side library loaded into the Maildev UI
pub const JQUERY_URL: &str = "//ajax.googleapis.com/ajax/libs/jquery/3.1.0/jquery.min.js";

/// Quote a value as a JavaScript string literal
fn js_string(value: &str) -> String {
    // JSON string literals are valid JavaScript string literals
    serde_json::Value::from(value).to_string()
}

/// Script appending a `<script>` tag for `url` to the document head.
///
/// Nothing waits for the script to load; callers follow up with a fixed delay.
pub fn inject_script_tag(url: &str) -> String {
    format!(
        r#"(function() {{
    var script = document.createElement('script');
    document.head.appendChild(script);
    script.type = 'text/javascript';
    script.src = {};
}})();"#,
        js_string(url)
    )
}

/// jQuery condition that holds once `selector` matches a visible element
pub fn visibility_condition(selector: &str) -> String {
    format!("$({}).is(':visible')", js_string(selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_script_tag_points_at_url() {
        let script = inject_script_tag(JQUERY_URL);
        assert!(script.contains("document.head.appendChild(script)"));
        assert!(script.contains(r#"script.src = "//ajax.googleapis.com/ajax/libs/jquery/3.1.0/jquery.min.js";"#));
    }

    #[test]
    fn test_visibility_condition_quotes_selector() {
        assert_eq!(visibility_condition(".modal"), r#"$(".modal").is(':visible')"#);
        assert_eq!(
            visibility_condition(r#"a[title="x"]"#),
            r#"$("a[title=\"x\"]").is(':visible')"#
        );
    }
}
