//! Full dashboard pages.

use super::charts::{comparison_chart, coverage_donut, improvement_plan_chart};
use super::html::{
    BLUE, LIGHT_BLUE, STYLE, bullet_list, card, columns, escape, notice, table,
};
use crate::models::{
    ComparisonReport, ConceptReport, DashboardMetrics, DataStatus, ExecutiveSummary, Guidance,
    MappingAnalysis, Tone, UnmappedTableReport, format_percent,
};
use crate::services::metrics_service::SUCCESS_TARGET;

/// The pages of the dashboard, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPage {
    ExecutiveSummary,
    DetailedComparison,
    ConceptMapping,
    MappingAnalysis,
}

impl DashboardPage {
    pub const ALL: [DashboardPage; 4] = [
        DashboardPage::ExecutiveSummary,
        DashboardPage::DetailedComparison,
        DashboardPage::ConceptMapping,
        DashboardPage::MappingAnalysis,
    ];

    pub fn path(self) -> &'static str {
        match self {
            DashboardPage::ExecutiveSummary => "/",
            DashboardPage::DetailedComparison => "/comparison",
            DashboardPage::ConceptMapping => "/concepts",
            DashboardPage::MappingAnalysis => "/mapping",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DashboardPage::ExecutiveSummary => "Executive summary",
            DashboardPage::DetailedComparison => "Detailed comparison",
            DashboardPage::ConceptMapping => "Concept mapping",
            DashboardPage::MappingAnalysis => "Detailed mapping analysis",
        }
    }
}

/// Everything the shared layout needs besides the page body.
pub struct PageContext<'a> {
    pub page: DashboardPage,
    pub metrics: &'a DashboardMetrics,
    pub region: &'a str,
    pub specialty: &'a str,
    /// URL of the logo image; text fallback when `None`.
    pub logo_url: Option<&'a str>,
}

fn sidebar(ctx: &PageContext<'_>) -> String {
    let metrics = ctx.metrics;
    let mut html = String::from(r#"<nav class="side">"#);

    match ctx.logo_url {
        Some(url) => html.push_str(&format!(
            r#"<img src="{}" alt="IDARA" width="200">"#,
            escape(url)
        )),
        None => html.push_str("<h2>IDARA</h2>"),
    }
    html.push_str("<p><strong>OMOP framework dashboard</strong></p><hr>");

    for page in DashboardPage::ALL {
        let class = if page == ctx.page { " class=\"active\"" } else { "" };
        html.push_str(&format!(
            r#"<a href="{}"{}>{}</a>"#,
            page.path(),
            class,
            escape(page.title())
        ));
    }

    html.push_str("<hr><h3>System status</h3>");
    match metrics.status {
        DataStatus::Loaded => {
            html.push_str(&notice(Tone::Good, "Real data loaded", ""));
            html.push_str(&notice(
                Tone::Good,
                &format!("{} Synthea files", metrics.synthea_files),
                "",
            ));
            html.push_str(&notice(
                Tone::Good,
                &format!("{} OMOP tables", metrics.omop_tables),
                "",
            ));
        }
        DataStatus::SyntheaOnly => {
            html.push_str(&notice(Tone::Warning, "Synthea data only", ""));
        }
        DataStatus::NoData => {
            html.push_str(&notice(Tone::Critical, "No data found", ""));
        }
    }

    html.push_str("<h3>Test information</h3>");
    html.push_str(&bullet_list(&[
        format!("Patients: {}", metrics.total_patients),
        format!("Encounters: {}", metrics.total_encounters),
        format!("Conditions: {}", metrics.total_conditions),
        format!("Medications: {}", metrics.total_medications),
        format!("Region: {}", ctx.region),
        format!("Specialty: {}", ctx.specialty),
    ]));

    html.push_str("<hr><h3>Transformation status</h3>");
    let tone = if metrics.success_rate >= SUCCESS_TARGET {
        Tone::Good
    } else {
        Tone::Warning
    };
    html.push_str(&notice(
        tone,
        &format!("Success: {}", format_percent(metrics.success_rate)),
        "",
    ));
    html.push_str(&format!(
        "<p>Time: {}</p>",
        escape(&metrics.processing_time_display())
    ));
    html.push_str("</nav>");
    html
}

/// Wrap a page body in the shared document, banner and navigation.
pub fn layout(ctx: &PageContext<'_>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>OMOP Dashboard - {page_title}</title>
<style>{style}</style>
</head>
<body>
<div class="shell">
{sidebar}
<main>
<div class="banner">
  <h1>OMOP Framework Dashboard</h1>
  <h2>Synthea → OMOP transformation - {specialty}, {region}</h2>
  <p>Real data: {patients} patients transformed</p>
</div>
{body}
</main>
</div>
</body>
</html>"#,
        page_title = escape(ctx.page.title()),
        style = STYLE,
        sidebar = sidebar(ctx),
        specialty = escape(ctx.specialty),
        region = escape(ctx.region),
        patients = ctx.metrics.total_patients,
        body = body,
    )
}

fn count_lines(lines: &[crate::models::CountLine]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("{}: {}", line.label, line.count))
        .collect()
}

pub fn executive_summary_page(ctx: &PageContext<'_>, summary: &ExecutiveSummary) -> String {
    let mut body = String::from("<h2>Framework executive summary</h2>");

    let cards: Vec<String> = summary.cards.iter().map(card).collect();
    body.push_str(&columns(&cards));

    let b = &summary.bottleneck;
    body.push_str("<hr>");
    body.push_str(&notice(
        Tone::Warning,
        "Main bottleneck",
        &format!(
            "<p>{area}: {mapped}. When new data arrives, {unmapped} of ICD-10 concepts will need manual mapping to SNOMED-CT.</p><p>Cause: {cause}<br>Solution: {solution}</p>",
            area = escape(&b.area),
            mapped = format_percent(b.mapped_rate),
            unmapped = format_percent(b.unmapped_rate),
            cause = escape(&b.cause),
            solution = escape(&b.solution),
        ),
    ));

    body.push_str("<hr><h2>Synthea → OMOP transformation summary</h2>");
    let input = format!(
        "<h3>Input (Synthea)</h3>{}<p><strong>Total records: {}</strong></p>",
        bullet_list(&count_lines(&summary.inputs)),
        summary.synthea_total
    );
    let output = format!(
        "<h3>Output (OMOP CDM)</h3>{}<p><strong>Total records: {}</strong></p>",
        bullet_list(&count_lines(&summary.outputs)),
        summary.omop_total
    );
    body.push_str(&columns(&[input, output]));

    body.push_str("<hr><h2>Key answers</h2>");
    let answers: Vec<String> = summary
        .answers
        .iter()
        .map(|answer| {
            let tone = if answer.passed { Tone::Good } else { Tone::Warning };
            notice(
                tone,
                &answer.question,
                &format!(
                    "<p><strong>{}</strong></p><p>{}</p><p>{}</p>",
                    escape(&answer.headline),
                    escape(&answer.detail),
                    escape(&answer.action)
                ),
            )
        })
        .collect();
    body.push_str(&columns(&answers));

    layout(ctx, &body)
}

pub fn comparison_page(ctx: &PageContext<'_>, report: &ComparisonReport) -> String {
    let mut body = String::from("<h2>Detailed comparison Synthea → OMOP</h2>");

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let target = match (row.target_count, &row.target_note) {
                (Some(count), _) => count.to_string(),
                (None, Some(note)) => note.clone(),
                (None, None) => String::new(),
            };
            vec![
                row.source_table.clone(),
                row.source_count.to_string(),
                row.target_table.clone(),
                target,
                row.integrity.label().to_string(),
            ]
        })
        .collect();
    body.push_str(&table(
        &[
            "Synthea table",
            "Synthea records",
            "OMOP table",
            "OMOP records",
            "Integrity",
        ],
        &rows,
    ));

    body.push_str("<h3>Transformation chart</h3>");
    body.push_str(&comparison_chart(&report.chart, LIGHT_BLUE, BLUE));

    body.push_str("<h3>Transformation statistics</h3>");
    let efficiency = report
        .efficiency
        .map(|e| format!("{:.1}%", e))
        .unwrap_or_else(|| "N/A".to_string());
    let metric = |label: &str, value: String| {
        format!(
            r#"<div class="metric"><div>{}</div><div class="value">{}</div></div>"#,
            escape(label),
            escape(&value)
        )
    };
    body.push_str(&columns(&[
        metric("Total Synthea records", report.synthea_total.to_string()),
        metric("Total OMOP records", report.omop_total.to_string()),
        metric("Transformation efficiency", efficiency),
    ]));

    layout(ctx, &body)
}

pub fn concepts_page(ctx: &PageContext<'_>, report: &ConceptReport) -> String {
    let mut body = String::from("<h2>OMOP concept mapping</h2>");
    body.push_str(&coverage_donut(
        "OMOP concept mapping coverage",
        report.mapped_rate,
    ));

    let rows: Vec<Vec<String>> = report
        .categories
        .iter()
        .map(|c| {
            vec![
                format!("{} ({})", c.category, c.table),
                format_percent(c.mapped_rate),
                c.status.label().to_string(),
                c.vocabularies.clone(),
            ]
        })
        .collect();
    body.push_str(&table(
        &["Category", "Concepts mapped", "Status", "Description"],
        &rows,
    ));

    body.push_str("<h3>Recommendations to improve mapping</h3>");
    body.push_str(&columns(&[
        format!("<h4>Strengths</h4>{}", bullet_list(&report.strengths)),
        format!("<h4>Areas to improve</h4>{}", bullet_list(&report.improvements)),
    ]));

    layout(ctx, &body)
}

fn guidance_columns(groups: &[Guidance], tone: impl Fn(usize) -> Tone) -> String {
    let parts: Vec<String> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| notice(tone(i), &g.title, &bullet_list(&g.items)))
        .collect();
    columns(&parts)
}

fn unmapped_section(report: &UnmappedTableReport) -> String {
    let mut html = format!(
        "<h3>{} ({}) unmapped</h3>",
        escape(report.omop_table.name()),
        escape(report.source_table.label())
    );

    let with_value = report.records.iter().any(|r| r.value.is_some());
    let rows: Vec<Vec<String>> = report
        .records
        .iter()
        .map(|r| {
            let mut row = vec![r.id.clone()];
            match &r.code {
                Some(code) => row.push(code.clone()),
                None => row.push(String::new()),
            }
            row.push(r.description.clone());
            if with_value {
                row.push(r.value.clone().unwrap_or_default());
            }
            row.extend([
                r.patient.clone(),
                r.date.clone(),
                r.gap.label().to_string(),
                r.suggestion.clone(),
                r.priority.label().to_string(),
            ]);
            row
        })
        .collect();

    let mut headers = vec!["ID", "Code", "Description"];
    if with_value {
        headers.push("Value");
    }
    headers.extend(["Patient", "Date", "Status", "Suggestion", "Priority"]);
    html.push_str(&table(&headers, &rows));

    html.push_str(&notice(
        Tone::Neutral,
        &format!(
            "Total unmapped: {} of {} records ({:.1}%)",
            report.unmapped, report.source_total, report.unmapped_percent
        ),
        "",
    ));
    html
}

pub fn mapping_page(ctx: &PageContext<'_>, analysis: &MappingAnalysis) -> String {
    let mut body = String::from(
        "<h2>Detailed mapping analysis</h2><h3>Missing concepts and improvement strategies</h3>",
    );

    let conditions: Vec<Vec<String>> = analysis
        .missing_conditions
        .iter()
        .map(|c| {
            vec![
                c.code.clone().unwrap_or_default(),
                c.description.clone(),
                c.gap.label().to_string(),
                c.suggestion.clone(),
            ]
        })
        .collect();
    let drugs: Vec<Vec<String>> = analysis
        .missing_drugs
        .iter()
        .map(|d| {
            vec![
                d.description.clone(),
                d.code.clone().unwrap_or_default(),
                d.gap.label().to_string(),
                d.suggestion.clone(),
            ]
        })
        .collect();

    let gastro = format!(
        "<h4>Gastroenterology ({} - critical)</h4>{}{}",
        format_percent(analysis.gastro_rate),
        notice(
            Tone::Critical,
            &format!("{} of concepts unmapped", format_percent(1.0 - analysis.gastro_rate)),
            "",
        ),
        table(&["Source code", "Description", "Status", "Suggestion"], &conditions),
    );
    let medication = format!(
        "<h4>Drugs ({} - improve)</h4>{}{}",
        format_percent(analysis.drug_rate),
        notice(
            Tone::Warning,
            &format!("{} of drugs unmapped", format_percent(1.0 - analysis.drug_rate)),
            "",
        ),
        table(&["Drug", "ATC", "Status", "Suggestion"], &drugs),
    );
    body.push_str(&columns(&[gastro, medication]));

    body.push_str("<hr><h3>Recommended actions</h3>");
    body.push_str(&guidance_columns(&analysis.actions, |_| Tone::Good));

    body.push_str("<hr><h2>Unmapped records by table</h2>");
    for report in &analysis.tables {
        body.push_str(&unmapped_section(report));
    }

    body.push_str("<hr><h3>Tools to improve mapping</h3>");
    body.push_str(&guidance_columns(&analysis.tools, |i| match i {
        1 => Tone::Warning,
        _ => Tone::Neutral,
    }));

    body.push_str("<hr><h3>Mapping improvement plan</h3>");
    body.push_str(&improvement_plan_chart(&analysis.improvement_plan));

    body.push_str("<hr><h3>Why USAGI is not needed with the automated framework</h3>");
    body.push_str(&guidance_columns(&analysis.framework_comparison, |i| {
        if i == 0 { Tone::Critical } else { Tone::Good }
    }));
    body.push_str(&notice(
        Tone::Neutral,
        "Conclusion",
        &format!("<p>{}</p>", escape(&analysis.conclusion)),
    ));

    body.push_str("<h3>Priority next steps</h3>");
    body.push_str(&guidance_columns(&analysis.next_steps, |i| {
        if i == 0 { Tone::Good } else { Tone::Neutral }
    }));

    layout(ctx, &body)
}

/// Body for unknown page paths.
pub fn not_found_page(ctx: &PageContext<'_>, path: &str) -> String {
    let links: Vec<String> = DashboardPage::ALL
        .iter()
        .map(|p| format!(r#"<li><a href="{}">{}</a></li>"#, p.path(), escape(p.title())))
        .collect();
    layout(
        ctx,
        &format!(
            "<h2>Page not found</h2><p>No dashboard page at <code>{}</code>.</p><ul>{}</ul>",
            escape(path),
            links.join("")
        ),
    )
}
