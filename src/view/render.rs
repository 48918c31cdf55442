// src/view/render.rs
//! HTML fragments for the result panels. Every backend-provided string is
//! escaped; numbers are printed exactly as the backend sent them.

use std::borrow::Cow;
use v_htmlescape::escape;

use super::i18n::Lang;
use super::panel::{Fragment, Panel};
use crate::types::{
    AnalysisResult, CompanyData, CompanySearchResponse, CompanyStanding, Platform, Verdict,
};

/// Maximum characters of extracted text shown back to the user
pub const PREVIEW_LIMIT: usize = 500;
const ELLIPSIS: &str = "...";

const COMPANY_NOT_FOUND: &str = "Company not found in our database.";
const PARTIAL_MATCH_NOTE: &str =
    "Partial match: showing the closest company in our database for this name.";

/// First `PREVIEW_LIMIT` characters, with an ellipsis only when something was cut
pub fn truncate_preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(PREVIEW_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

/// Result card. Platform analyses live in the platform panel, so their
/// export button reports failures there.
pub fn analysis_card(result: &AnalysisResult, platform: Option<Platform>, lang: Lang) -> String {
    let labels = lang.labels();
    let verdict = Verdict::from_label(&result.result);
    let export_panel = match platform {
        Some(_) => Panel::PlatformIntegration,
        None => Panel::JobAnalysis,
    };

    let platform_tag = platform
        .map(|p| {
            format!(
                r#"<span class="platform-tag platform-{}">{} Analysis</span>"#,
                p.slug(),
                p.display_name()
            )
        })
        .unwrap_or_default();

    let mut html = format!(
        r#"<div class="result-card {class}" data-verdict="{class}">
    {platform_tag}<h3 class="verdict">{label}</h3>
    <div class="metrics">
        <div class="metric"><span class="metric-label">{confidence_label}</span><span class="metric-value confidence">{confidence}%</span></div>
        <div class="metric"><span class="metric-label">{words_label}</span><span class="metric-value word-count">{words}</span></div>
    </div>
"#,
        class = verdict.css_class(),
        platform_tag = platform_tag,
        label = escape(&result.result),
        confidence_label = labels.confidence,
        confidence = result.confidence_score,
        words_label = labels.words_analyzed,
        words = result.word_count,
    );

    let insights: Vec<(&str, &str)> = [
        (labels.salary_analysis, result.salary_analysis.as_deref()),
        (labels.job_quality, result.job_quality_score.as_deref()),
        (labels.interview_analysis, result.interview_analysis.as_deref()),
    ]
    .into_iter()
    .filter_map(|(title, value)| value.map(|v| (title, v)))
    .collect();

    if !insights.is_empty() {
        html.push_str("    <div class=\"ai-analysis\">\n");
        for (title, value) in insights {
            html.push_str(&format!(
                "        <div class=\"insight\"><span class=\"insight-title\">{}</span><span class=\"insight-value\">{}</span></div>\n",
                title,
                escape(value)
            ));
        }
        html.push_str("    </div>\n");
    }

    if !result.pattern_matches.is_empty() {
        html.push_str(&format!(
            "    <div class=\"patterns\">\n        <h4>{}</h4>\n        <ul>\n",
            labels.suspicious_patterns
        ));
        html.push_str(&list_items(&result.pattern_matches, "            "));
        html.push_str("        </ul>\n    </div>\n");
    }

    html.push_str(&format!(
        r##"    <button type="button" class="export-btn" hx-post="/ui/export?panel={slug}" hx-target="#{target}">{text}</button>
</div>
"##,
        slug = export_panel.slug(),
        target = export_panel.target_id(),
        text = labels.export_pdf,
    ));
    html
}

/// Preview of extracted text, with the extractor's word count when it sent one
pub fn text_preview(text: &str, word_count: Option<u64>, lang: Lang) -> String {
    let count = word_count
        .map(|n| format!(" <span class=\"extracted-words\">({} words)</span>", n))
        .unwrap_or_default();

    format!(
        r#"<div class="extracted-preview">
    <h4>{title}{count}</h4>
    <p class="preview-text">{text}</p>
</div>
"#,
        title = lang.labels().extracted_preview,
        count = count,
        text = escape(&truncate_preview(text))
    )
}

pub fn company_result(response: &CompanySearchResponse, lang: Lang) -> Fragment {
    if !response.found {
        let message = response
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(COMPANY_NOT_FOUND);
        return info(message);
    }

    match &response.company_data {
        Some(company) => Fragment::success(company_card(
            company,
            CompanyStanding::of(response),
            response.partial_match,
            lang,
        )),
        None => info(COMPANY_NOT_FOUND),
    }
}

fn company_card(
    company: &CompanyData,
    standing: CompanyStanding,
    partial: bool,
    lang: Lang,
) -> String {
    let labels = lang.labels();
    let headline = match standing {
        CompanyStanding::Fraudulent => labels.fraud_detected,
        CompanyStanding::Legitimate => labels.legitimate_company,
    };
    let mut html = format!(
        r#"<div class="company-card {class}" data-standing="{class}">
    <h3 class="company-status">{headline}</h3>
    <h4 class="company-name">{name}</h4>
"#,
        class = standing.css_class(),
        headline = headline,
        name = escape(&company.name),
    );

    if partial {
        html.push_str(&format!(
            "    <p class=\"partial-match-note\">{}</p>\n",
            PARTIAL_MATCH_NOTE
        ));
    }

    let fraud_score = company.fraud_score.as_ref().map(|s| format!("{}/100", s));
    let reports = company.reports.as_ref().map(|r| r.to_string());
    let details: [(&str, &str, Option<&str>); 9] = [
        ("fraud-score", labels.fraud_score, fraud_score.as_deref()),
        ("reports", labels.reports, reports.as_deref()),
        ("last-updated", labels.last_updated, company.last_updated.as_deref()),
        ("domain-age", labels.domain_age, company.domain_age.as_deref()),
        ("social-media", labels.social_media, company.social_media.as_deref()),
        (
            "contact-verification",
            labels.contact_verification,
            company.contact_verification.as_deref(),
        ),
        ("industry", labels.industry, company.industry.as_deref()),
        ("location", labels.location, company.location.as_deref()),
        ("website", labels.website, company.website.as_deref()),
    ];

    html.push_str("    <div class=\"company-details\">\n");
    for (key, label, value) in details {
        html.push_str(&format!(
            "        <div class=\"detail {}\"><span class=\"detail-label\">{}</span><span class=\"detail-value\">{}</span></div>\n",
            key,
            label,
            escape(value.unwrap_or("N/A"))
        ));
    }
    html.push_str("    </div>\n");

    for (class, title, flags) in [
        ("red-flags", labels.red_flags, &company.red_flags),
        ("green-flags", labels.green_flags, &company.green_flags),
    ] {
        if flags.is_empty() {
            continue;
        }
        html.push_str(&format!(
            "    <div class=\"flags {}\">\n        <h5>{}</h5>\n        <ul>\n",
            class, title
        ));
        html.push_str(&list_items(flags, "            "));
        html.push_str("        </ul>\n    </div>\n");
    }

    html.push_str("</div>\n");
    html
}

pub fn error(message: &str) -> Fragment {
    Fragment::error(format!(
        "<div class=\"alert alert-error\" role=\"alert\">{}</div>\n",
        escape(message)
    ))
}

pub fn info(message: &str) -> Fragment {
    Fragment::info(format!(
        "<div class=\"alert alert-info\" role=\"status\">{}</div>\n",
        escape(message)
    ))
}

fn list_items(items: &[String], indent: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}<li>{}</li>\n", indent, escape(item)))
        .collect()
}
