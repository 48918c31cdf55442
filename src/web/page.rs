// src/web/page.rs
//! The single page: tab navigation, input forms and the three result panels

use v_htmlescape::escape;

use super::types::{PageQuery, LANG_HEADER};
use crate::types::Platform;
use crate::view::{Labels, Lang, Panel};

/// Filled into the job text box by "Load Sample"
pub const SAMPLE_JOB_TEXT: &str = "We are looking for a remote data entry specialist. No experience required. \
You can work from home and earn $50-100 per hour. Immediate start available. \
Please send your personal information including bank details and credit card information. \
This is an urgent opportunity with limited time. Certificate will be provided for a small fee.";

/// Filled into the company box by "Load Sample"
pub const SAMPLE_COMPANY: &str = "fakecorp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Job,
    Company,
    Platform,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Job, Tab::Company, Tab::Platform];

    /// Unknown or missing tabs land on job analysis
    pub fn from_query(tab: Option<&str>) -> Self {
        match tab.map(|t| t.trim().to_lowercase()).as_deref() {
            Some("company") => Tab::Company,
            Some("platform") | Some("integrations") => Tab::Platform,
            _ => Tab::Job,
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Tab::Job => "job",
            Tab::Company => "company",
            Tab::Platform => "platform",
        }
    }

    fn title(&self, labels: &Labels) -> &'static str {
        match self {
            Tab::Job => labels.job_detection,
            Tab::Company => labels.company_search,
            Tab::Platform => labels.platform_integrations,
        }
    }
}

/// How the job posting is supplied on the job tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    Text,
    Url,
}

impl InputMethod {
    const ALL: [InputMethod; 2] = [InputMethod::Text, InputMethod::Url];

    pub fn from_query(method: Option<&str>) -> Self {
        match method.map(|m| m.trim().to_lowercase()).as_deref() {
            Some("url") => InputMethod::Url,
            _ => InputMethod::Text,
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            InputMethod::Text => "text",
            InputMethod::Url => "url",
        }
    }

    fn title(&self, labels: &Labels) -> &'static str {
        match self {
            InputMethod::Text => labels.direct_text,
            InputMethod::Url => labels.url_extraction,
        }
    }
}

/// Everything the page query selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub tab: Tab,
    pub method: InputMethod,
    pub lang: Lang,
    pub sample: bool,
}

impl PageView {
    pub fn from_query(query: &PageQuery) -> Self {
        Self {
            tab: Tab::from_query(query.tab.as_deref()),
            method: InputMethod::from_query(query.method.as_deref()),
            lang: Lang::from_code(query.lang.as_deref()),
            sample: query.sample.is_some(),
        }
    }

    fn href(&self, tab: Tab, method: InputMethod, lang: Lang, sample: bool) -> String {
        let mut href = format!(
            "/?tab={}&amp;method={}&amp;lang={}",
            tab.slug(),
            method.slug(),
            lang.code()
        );
        if sample {
            href.push_str("&amp;sample=1");
        }
        href
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            tab: Tab::Job,
            method: InputMethod::Text,
            lang: Lang::En,
            sample: false,
        }
    }
}

pub fn render_index(view: &PageView) -> String {
    let labels = view.lang.labels();

    let nav: String = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == view.tab { "tab-btn active" } else { "tab-btn" };
            format!(
                r#"<a class="{}" href="{}" data-tab="{}">{}</a>"#,
                class,
                view.href(*tab, view.method, view.lang, false),
                tab.slug(),
                tab.title(labels)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let languages: String = Lang::ALL
        .iter()
        .map(|lang| {
            let class = if *lang == view.lang { "lang-btn active" } else { "lang-btn" };
            format!(
                r#"<a class="{}" href="{}" hreflang="{}">{}</a>"#,
                class,
                view.href(view.tab, view.method, *lang, false),
                lang.code(),
                lang.native_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let sections = [
        (Tab::Job, job_section(view)),
        (Tab::Company, company_section(view)),
        (Tab::Platform, platform_section(labels)),
    ]
    .into_iter()
    .map(|(tab, body)| {
        let hidden = if tab == view.tab { "" } else { " hidden" };
        format!(
            "<section id=\"tab-{}\" class=\"tab-content\"{}>\n{}</section>",
            tab.slug(),
            hidden,
            body
        )
    })
    .collect::<Vec<_>>()
    .join("\n        ");

    format!(
        r##"<!DOCTYPE html>
<html lang="{code}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="https://unpkg.com/htmx.org@1.9.12"></script>
    <script>
        document.addEventListener("htmx:beforeSwap", function (event) {{
            if (event.detail.xhr.status >= 400) {{
                event.detail.shouldSwap = true;
                event.detail.isError = false;
            }}
        }});
    </script>
    <style>
        .htmx-indicator {{ display: none; }}
        .htmx-request.htmx-indicator, .htmx-request .htmx-indicator {{ display: flex; }}
        .loading-overlay {{ position: fixed; inset: 0; align-items: center; justify-content: center; background: rgba(0, 0, 0, .4); color: #fff; }}
        .tab-btn.active, .method-tab.active, .lang-btn.active {{ font-weight: bold; border-bottom: 2px solid #3b82f6; }}
        .result-card.fraud, .company-card.fraud {{ border-left: 6px solid #dc2626; }}
        .result-card.legitimate, .company-card.legitimate {{ border-left: 6px solid #16a34a; }}
        .alert-error {{ color: #991b1b; background: #fee2e2; }}
        .alert-info {{ color: #1e3a8a; background: #dbeafe; }}
    </style>
</head>
<body hx-indicator="#loading" hx-headers='{{"{lang_header}": "{code}"}}'>
    <header>
        <h1>JobGuardian Pro</h1>
        <p>{tagline}</p>
        <nav class="lang-switch">
            {languages}
        </nav>
    </header>
    <nav class="tabs">
            {nav}
    </nav>
    <main>
        {sections}
    </main>
    <div id="loading" class="htmx-indicator loading-overlay">{analyzing}</div>
    <footer>
        <p>{disclaimer}</p>
    </footer>
</body>
</html>
"##,
        code = view.lang.code(),
        title = labels.title,
        lang_header = LANG_HEADER,
        tagline = escape(labels.tagline),
        languages = languages,
        nav = nav,
        sections = sections,
        analyzing = labels.analyzing,
        disclaimer = labels.disclaimer,
    )
}

fn job_section(view: &PageView) -> String {
    let labels = view.lang.labels();
    let target = Panel::JobAnalysis.target_id();

    let method_tabs: String = InputMethod::ALL
        .iter()
        .map(|method| {
            let class = if *method == view.method { "method-tab active" } else { "method-tab" };
            format!(
                r#"<a class="{}" href="{}" data-method="{}">{}</a>"#,
                class,
                view.href(Tab::Job, *method, view.lang, false),
                method.slug(),
                method.title(labels)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let hidden = |method: InputMethod| if method == view.method { "" } else { " hidden" };
    let sample_text = if view.sample { SAMPLE_JOB_TEXT } else { "" };

    format!(
        r##"    <h2>{heading}</h2>
    <p class="section-desc">{desc}</p>
    <div class="method-tabs">
        {method_tabs}
    </div>
    <div id="text-input" class="input-section"{text_hidden}>
        <form class="analyze-text-form" method="post" action="/ui/analyze-text" hx-post="/ui/analyze-text" hx-target="#{target}">
            <textarea name="text" rows="10" placeholder="{paste}">{sample_text}</textarea>
            <button type="submit">{analyze}</button>
        </form>
        <a class="sample-link" href="{sample_href}">{sample}</a>
    </div>
    <div id="url-input" class="input-section"{url_hidden}>
        <form class="analyze-url-form" method="post" action="/ui/analyze-url" hx-post="/ui/analyze-url" hx-target="#{target}">
            <input type="url" name="url" placeholder="{url_placeholder}">
            <button type="submit">{extract}</button>
        </form>
    </div>
    <div id="{target}" class="results-panel"></div>
"##,
        heading = labels.job_analysis,
        desc = labels.analysis_desc,
        method_tabs = method_tabs,
        text_hidden = hidden(InputMethod::Text),
        url_hidden = hidden(InputMethod::Url),
        target = target,
        paste = labels.paste_placeholder,
        sample_text = escape(sample_text),
        analyze = labels.analyze_btn,
        sample_href = view.href(Tab::Job, InputMethod::Text, view.lang, true),
        sample = labels.sample_btn,
        url_placeholder = labels.url_placeholder,
        extract = escape(labels.extract_btn),
    )
}

fn company_section(view: &PageView) -> String {
    let labels = view.lang.labels();
    let sample_company = if view.sample { SAMPLE_COMPANY } else { "" };

    format!(
        r##"    <h2>{heading}</h2>
    <p class="section-desc">{desc}</p>
    <form class="company-form" method="post" action="/ui/search-company" hx-post="/ui/search-company" hx-target="#{target}">
        <input type="text" name="company_name" placeholder="{placeholder}" value="{sample_company}">
        <button type="submit">{search}</button>
    </form>
    <a class="sample-link" href="{sample_href}">{sample}</a>
    <div id="{target}" class="results-panel"></div>
"##,
        heading = labels.company_database,
        desc = labels.company_desc,
        target = Panel::CompanySearch.target_id(),
        placeholder = labels.company_placeholder,
        sample_company = sample_company,
        search = labels.search_btn,
        sample_href = view.href(Tab::Company, view.method, view.lang, true),
        sample = labels.sample_btn,
    )
}

fn platform_section(labels: &Labels) -> String {
    let target = Panel::PlatformIntegration.target_id();
    let mut html = format!("    <h2>{}</h2>\n", labels.platform_integrations);

    for platform in Platform::ALL {
        html.push_str(&format!(
            r##"    <form class="platform-form platform-{slug}" method="post" action="/ui/platform/{slug}" hx-post="/ui/platform/{slug}" hx-target="#{target}">
        <label>{label}</label>
        <input type="url" name="url" placeholder="Enter {name} job URL...">
        <button type="submit">Analyze {name} Job</button>
    </form>
"##,
            slug = platform.slug(),
            label = labels.integration(platform),
            name = platform.display_name(),
            target = target
        ));
    }

    html.push_str(&format!(
        "    <div id=\"{}\" class=\"results-panel\"></div>\n",
        target
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn select(html: &str, selector: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    fn attr(html: &str, selector: &str, name: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    fn view(query: PageQuery) -> PageView {
        PageView::from_query(&query)
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(Tab::from_query(None), Tab::Job);
        assert_eq!(Tab::from_query(Some("company")), Tab::Company);
        assert_eq!(Tab::from_query(Some("PLATFORM")), Tab::Platform);
        assert_eq!(Tab::from_query(Some("settings")), Tab::Job);
    }

    #[test]
    fn test_only_active_tab_is_visible() {
        let html = render_index(&PageView {
            tab: Tab::Company,
            ..PageView::default()
        });

        assert_eq!(select(&html, ".tab-btn.active"), vec!["Company Search"]);
        assert_eq!(select(&html, "section.tab-content:not([hidden])").len(), 1);
        assert_eq!(select(&html, "#tab-company:not([hidden])").len(), 1);
        assert_eq!(select(&html, "#tab-job[hidden]").len(), 1);
    }

    #[test]
    fn test_every_panel_and_platform_form_is_present() {
        let html = render_index(&PageView::default());

        for id in ["#results", "#company-results", "#platform-results", "#loading"] {
            assert_eq!(select(&html, id).len(), 1, "missing {}", id);
        }
        assert_eq!(select(&html, "form.platform-form").len(), 3);
        assert_eq!(
            select(&html, r#"form[hx-post="/ui/platform/glassdoor"]"#).len(),
            1
        );
    }

    #[test]
    fn test_method_tabs_switch_input_section() {
        let text = render_index(&PageView::default());
        assert_eq!(select(&text, ".method-tab.active"), vec!["Direct Text"]);
        assert_eq!(select(&text, "#text-input:not([hidden])").len(), 1);
        assert_eq!(select(&text, "#url-input[hidden]").len(), 1);

        let url = render_index(&view(PageQuery {
            method: Some("url".to_string()),
            ..PageQuery::default()
        }));
        assert_eq!(select(&url, ".method-tab.active"), vec!["URL Extraction"]);
        assert_eq!(select(&url, "#url-input:not([hidden])").len(), 1);
        assert_eq!(select(&url, "#text-input[hidden]").len(), 1);
        assert_eq!(
            attr(&url, r#".method-tab[data-method="text"]"#, "href").as_deref(),
            Some("/?tab=job&method=text&lang=en")
        );
    }

    #[test]
    fn test_sample_prefills_job_text_and_company() {
        let empty = render_index(&PageView::default());
        assert_eq!(select(&empty, "textarea[name=text]"), vec![""]);

        let sample = render_index(&view(PageQuery {
            tab: Some("company".to_string()),
            sample: Some("1".to_string()),
            ..PageQuery::default()
        }));
        assert_eq!(select(&sample, "textarea[name=text]"), vec![SAMPLE_JOB_TEXT]);
        assert_eq!(
            attr(&sample, "input[name=company_name]", "value").as_deref(),
            Some(SAMPLE_COMPANY)
        );
    }

    #[test]
    fn test_language_applies_to_labels_and_requests() {
        let html = render_index(&view(PageQuery {
            lang: Some("bn".to_string()),
            ..PageQuery::default()
        }));

        assert_eq!(attr(&html, "html", "lang").as_deref(), Some("bn"));
        assert_eq!(select(&html, ".tab-btn.active"), vec!["চাকরি সনাক্তকরণ"]);
        assert_eq!(select(&html, ".lang-btn.active"), vec!["বাংলা"]);
        assert_eq!(
            attr(&html, "body", "hx-headers").as_deref(),
            Some(r#"{"X-Lang": "bn"}"#)
        );
    }

    #[test]
    fn test_unknown_language_renders_english() {
        let html = render_index(&view(PageQuery {
            lang: Some("xx".to_string()),
            ..PageQuery::default()
        }));

        assert_eq!(attr(&html, "html", "lang").as_deref(), Some("en"));
        assert_eq!(select(&html, ".analyze-text-form button"), vec!["Analyze Job Posting"]);
    }
}
