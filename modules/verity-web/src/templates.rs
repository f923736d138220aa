use verity_common::{Label, Prediction};

/// Headlines offered on the page as things to try.
pub const EXAMPLE_HEADLINES: &[&str] = &[
    "Aliens have landed in New York City",
    "India successfully landed Chandrayaan-3 on the Moon in 2023",
    "Scientists say drinking water makes you immortal",
];

pub const EMPTY_INPUT_WARNING: &str = "Please enter text";

// --- View Models ---

#[derive(Debug, Default)]
pub struct IndexView {
    /// Text to put back into the textarea
    pub text: String,
    pub warning: Option<String>,
    pub result: Option<ResultView>,
    pub explain_enabled: bool,
    pub explain_checked: bool,
}

#[derive(Debug)]
pub struct ResultView {
    pub label: Label,
    pub confidence_percent: String,
    pub explanation: Option<String>,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction, explanation: Option<String>) -> Self {
        Self {
            label: prediction.label,
            confidence_percent: prediction.confidence_percent(),
            explanation,
        }
    }
}

// --- Pages ---

/// Render the analyzer page: intro, examples, form and optional result.
pub fn render_index(view: &IndexView) -> String {
    let examples: String = EXAMPLE_HEADLINES
        .iter()
        .map(|h| format!("<li>\"{}\"</li>", html_escape(h)))
        .collect::<Vec<_>>()
        .join("");

    let warning = match &view.warning {
        Some(w) => format!(r#"<div class="warning">⚠️ {}</div>"#, html_escape(w)),
        None => String::new(),
    };

    let explain_box = if view.explain_enabled {
        let checked = if view.explain_checked { " checked" } else { "" };
        format!(
            r#"<label class="explain"><input type="checkbox" name="explain" value="on"{checked}> Explain the verdict with AI</label>"#
        )
    } else {
        String::new()
    };

    let result = view.result.as_ref().map(render_result).unwrap_or_default();

    let content = format!(
        r#"<div class="glass">
    <div class="title">📰 Fake News Detector</div>
    <div class="subtitle">AI-powered news verification system</div>
    <hr>
    <h3>🔎 How it works</h3>
    <ul>
        <li>Paste any news text 📰</li>
        <li>Click <strong>Analyze News</strong></li>
        <li>Get instant result ⚡</li>
    </ul>
    <h3>💡 Try examples</h3>
    <ul>{examples}</ul>
    <h3>✍️ Enter news text</h3>
    <form method="post" action="/">
        <textarea name="text" rows="7" placeholder="Paste your news here...">{text}</textarea>
        {explain_box}
        <button type="submit">🚀 Analyze News</button>
    </form>
    {warning}
    {result}
</div>
<div class="footer">Verity · text classifier demo</div>"#,
        text = html_escape(&view.text),
    );

    build_page("Fake News Detector", &content)
}

fn render_result(result: &ResultView) -> String {
    let (class, badge) = match result.label {
        Label::Real => ("real", "🟢 REAL NEWS"),
        Label::Fake => ("fake", "🔴 FAKE NEWS"),
    };

    let explanation = match &result.explanation {
        Some(e) => format!(
            r#"<div class="explanation"><h3>🧠 Why?</h3><p>{}</p></div>"#,
            html_escape(e)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="result {class}">{badge}<br>{pct} confidence</div>{explanation}"#,
        pct = html_escape(&result.confidence_percent),
    )
}

/// Render a bare error page.
pub fn render_error(message: &str) -> String {
    let content = format!(
        r#"<div class="glass"><div class="title">Something went wrong</div><p class="subtitle">{}</p><p class="subtitle"><a href="/">Back</a></p></div>"#,
        html_escape(message)
    );
    build_page("Error", &content)
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — Verity</title>
<style>
*{{box-sizing:border-box;}}
body{{margin:0;min-height:100vh;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#e2e8f0;background:linear-gradient(135deg,#0f172a,#1e293b);}}
.glass{{background:rgba(255,255,255,0.08);backdrop-filter:blur(15px);border-radius:20px;padding:30px;margin:40px auto;width:85%;max-width:820px;border:1px solid rgba(255,255,255,0.2);box-shadow:0 8px 32px rgba(0,0,0,0.3);animation:fadeIn 1s ease-in-out;}}
.title{{text-align:center;font-size:42px;font-weight:bold;color:#38bdf8;}}
.subtitle{{text-align:center;color:#cbd5f5;margin-bottom:20px;}}
.subtitle a{{color:#38bdf8;}}
h3{{color:#38bdf8;}}
hr{{border:none;height:1px;background:rgba(255,255,255,0.2);margin:20px 0;}}
textarea{{width:100%;background:rgba(255,255,255,0.1);color:white;border-radius:12px;border:1px solid rgba(255,255,255,0.3);padding:10px;font-size:15px;transition:0.3s;}}
textarea:focus{{outline:none;border:1px solid #38bdf8;box-shadow:0 0 12px #38bdf8;}}
.explain{{display:block;margin:12px 0;color:#cbd5f5;font-size:14px;}}
button{{margin-top:12px;background:linear-gradient(135deg,#38bdf8,#0ea5e9);color:white;border:none;border-radius:10px;padding:10px 20px;font-size:15px;cursor:pointer;transition:0.3s;}}
button:hover{{transform:scale(1.05);}}
.warning{{margin-top:20px;padding:12px 16px;border-radius:12px;background:rgba(250,204,21,0.15);color:#facc15;}}
.result{{padding:20px;border-radius:15px;margin-top:20px;text-align:center;font-size:22px;font-weight:bold;animation:fadeIn 0.8s ease-in-out;}}
.real{{background:rgba(34,197,94,0.2);color:#22c55e;}}
.fake{{background:rgba(239,68,68,0.2);color:#ef4444;}}
.explanation{{margin-top:20px;line-height:1.5;color:#cbd5f5;}}
.footer{{text-align:center;margin:30px 0;color:#94a3b8;}}
@keyframes fadeIn{{from{{opacity:0;transform:translateY(10px);}}to{{opacity:1;transform:translateY(0);}}}}
</style>
</head>
<body>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_examples_and_form() {
        let html = render_index(&IndexView::default());
        for headline in EXAMPLE_HEADLINES {
            assert!(html.contains(headline));
        }
        assert!(html.contains(r#"<textarea name="text""#));
        assert!(!html.contains(r#"name="explain""#));
        assert!(!html.contains(r#"class="result"#));
    }

    #[test]
    fn test_explain_checkbox_only_when_enabled() {
        let html = render_index(&IndexView {
            explain_enabled: true,
            explain_checked: true,
            ..Default::default()
        });
        assert!(html.contains(r#"name="explain" value="on" checked"#));
    }

    #[test]
    fn test_result_card() {
        let prediction = Prediction {
            label: Label::Real,
            confidence: 0.9,
        };
        let html = render_index(&IndexView {
            result: Some(ResultView::from_prediction(&prediction, None)),
            ..Default::default()
        });
        assert!(html.contains(r#"<div class="result real">🟢 REAL NEWS<br>90.00% confidence</div>"#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render_index(&IndexView {
            text: "<script>alert('x')</script>".into(),
            ..Default::default()
        });
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"a & "b""#), "a &amp; &quot;b&quot;");
    }
}
