//! Locally generated cover image for listings without a user photo.

const DATA_URL_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Build a deterministic SVG data URL showing `title` on a soft gradient.
///
/// The title is XML-escaped before it is placed in the document and the whole
/// document is percent-encoded, so quotes, angle brackets, ampersands and
/// non-Latin scripts all survive inside an `<img src>` attribute.
pub fn placeholder_image(title: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='1200' height='800'>\
<defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>\
<stop offset='0%' stop-color='#eef2ff'/><stop offset='100%' stop-color='#e0f2fe'/>\
</linearGradient></defs>\
<rect width='100%' height='100%' fill='url(#g)'/>\
<g font-family='Inter,Segoe UI,Roboto,Arial' fill='#0f172a'>\
<text x='50%' y='50%' font-size='44' text-anchor='middle' dominant-baseline='middle' opacity='0.9'>{}</text>\
</g></svg>",
        escape_xml(title)
    );

    format!("{}{}", DATA_URL_PREFIX, urlencoding::encode(&svg))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(url: &str) -> String {
        let body = url.strip_prefix(DATA_URL_PREFIX).unwrap();
        urlencoding::decode(body).unwrap().into_owned()
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder_image("iPhone 12"), placeholder_image("iPhone 12"));
        assert_ne!(placeholder_image("iPhone 12"), placeholder_image("iPhone 13"));
    }

    #[test]
    fn test_placeholder_embeds_title() {
        let svg = decode(&placeholder_image("iPhone 12 128GB"));
        assert!(svg.contains(">iPhone 12 128GB</text>"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_placeholder_escapes_markup() {
        let svg = decode(&placeholder_image("Bike 20\" <kids> & 'more'"));
        assert!(svg.contains("Bike 20&quot; &lt;kids&gt; &amp; &apos;more&apos;"));
        assert!(!svg.contains("<kids>"));
    }

    #[test]
    fn test_placeholder_output_is_url_safe() {
        let url = placeholder_image("طيبلة خدمة 120×60 #1");
        let body = url.strip_prefix(DATA_URL_PREFIX).unwrap();
        assert!(!body.contains(' '));
        assert!(!body.contains('#'));
        assert!(!body.contains('"'));
        assert!(decode(&url).contains("طيبلة خدمة 120×60 #1"));
    }
}
