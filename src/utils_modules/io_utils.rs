use crate::common::*;

#[doc = r#"
    Reduce a chart title to a safe filename stem: alphanumerics, `-` and `_`
    survive, everything else becomes `_`. Lowercased for consistency.
"#]
pub fn sanitize_filename(title: &str) -> String {
    let stem: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        String::from("chart")
    } else {
        stem
    }
}
