use crate::infra::{load_library, parse_var};
use clap::Args;
use codda::config::AppConfig;
use codda::error::AppError;
use codda::language::{LanguageTemplate, TemplateCategory, TemplateLibrary};
use codda::scoring::{
    import_evidence_path, BiasReport, CompletenessScorer, DraftOutline, EvidenceSummary, GapScan,
    LintFlag, QaStatus, RulePath, SectionReport,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Template id
    pub(crate) id: String,
    /// Placeholder value as KEY=VALUE; repeat for each placeholder
    #[arg(long = "var", value_parser = parse_var)]
    pub(crate) vars: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreDocumentArgs {
    /// Markdown draft with `## ISSUE`, `## EVIDENCE`, ... headings
    pub(crate) path: PathBuf,
    /// Override the minimum characters a section needs to count as written
    #[arg(long)]
    pub(crate) min_chars: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreEvidenceArgs {
    /// Evidence register CSV (Id, Kind, Title, Date, Source, Reliability, Summary, Gap)
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreBiasArgs {
    /// Draft text or markdown to check for conclusory language
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct RulePathArgs {
    /// Service fact, e.g. "AWOL for 200 days"; repeat for each fact
    #[arg(long = "fact")]
    pub(crate) facts: Vec<String>,
}

fn configured_scorer() -> Result<CompletenessScorer, AppError> {
    let config = AppConfig::load()?;
    Ok(CompletenessScorer::new(config.drafting.scoring))
}

fn configured_library() -> Result<TemplateLibrary, AppError> {
    let config = AppConfig::load()?;
    load_library(&config.drafting)
}

pub(crate) fn list_templates(category: Option<&str>) -> Result<(), AppError> {
    let library = configured_library()?;

    let categories: Vec<TemplateCategory> = match category {
        Some(key) => match TemplateCategory::from_key(key) {
            Some(category) => vec![category],
            None => {
                println!("No templates in category '{key}'.");
                return Ok(());
            }
        },
        None => TemplateCategory::all().to_vec(),
    };

    for category in categories {
        let templates = library.by_category(category);
        println!("{} ({})", category.label(), templates.len());
        for template in templates {
            println!("  {:<36} {}", template.id, template.title);
        }
    }
    Ok(())
}

pub(crate) fn show_template(id: &str) -> Result<(), AppError> {
    let library = configured_library()?;
    let template = library
        .by_id(id)
        .ok_or_else(|| AppError::Usage(format!("unknown template '{id}'")))?;
    print_template(template);
    Ok(())
}

fn print_template(template: &LanguageTemplate) {
    println!("{} [{}]", template.title, template.id);
    match &template.subcategory {
        Some(sub) => println!("Category: {} / {sub}", template.category.label()),
        None => println!("Category: {}", template.category.label()),
    }
    if !template.variables.is_empty() {
        println!("Variables: {}", template.variables.join(", "));
    }
    if !template.regulations.is_empty() {
        println!("Regulations: {}", template.regulations.join("; "));
    }
    if let Some(notes) = &template.notes {
        println!("Notes: {notes}");
    }
    println!("\n{}", template.content);
}

pub(crate) fn render_template(args: RenderArgs) -> Result<(), AppError> {
    let library = configured_library()?;
    let values: BTreeMap<String, String> = args.vars.into_iter().collect();
    let rendered = library
        .render(&args.id, &values)
        .ok_or_else(|| AppError::Usage(format!("unknown template '{}'", args.id)))?;

    println!("{}", rendered.text);
    if !rendered.is_complete() {
        eprintln!(
            "\nUnfilled placeholders: {}",
            rendered
                .unresolved
                .iter()
                .map(|name| format!("[{name}]"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}

pub(crate) fn show_regulations() -> Result<(), AppError> {
    let library = configured_library()?;
    for citation in library.regulation_citations() {
        println!("{citation}");
    }
    Ok(())
}

pub(crate) fn validate_catalog() -> Result<(), AppError> {
    let library = configured_library()?;
    let issues = library.validate();

    println!(
        "Checked {} templates: {} issue(s)",
        library.len(),
        issues.len()
    );
    for issue in &issues {
        println!("- {issue}");
    }
    Ok(())
}

pub(crate) fn score_document(args: ScoreDocumentArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut scoring = config.drafting.scoring;
    if let Some(min_chars) = args.min_chars {
        scoring.min_section_chars = min_chars;
    }

    let text = std::fs::read_to_string(&args.path)?;
    let outline = DraftOutline::parse(&text);
    let scorer = CompletenessScorer::new(scoring);
    let report = scorer.section_report(outline.sections());
    let flags = scorer.lint(outline.sections(), &report, &[]);

    render_section_report(&report, &flags);
    Ok(())
}

pub(crate) fn render_section_report(report: &SectionReport, flags: &[LintFlag]) {
    let status = QaStatus::from_completeness(report.completeness);
    println!(
        "Completeness: {}% ({}) | {} of {} required sections written",
        report.completeness,
        status.label(),
        report.complete_count(),
        report.checks.iter().filter(|check| check.required).count()
    );
    for check in &report.checks {
        let marker = if check.required { "*" } else { " " };
        println!(
            "  {marker} {:<20} {:?} ({} chars)",
            check.label(),
            check.status,
            check.characters
        );
    }

    if flags.is_empty() {
        println!("No quality findings.");
        return;
    }
    println!("Quality findings:");
    for flag in flags {
        println!("  [{:?}] {}: {}", flag.kind, flag.section, flag.message);
        if let Some(suggestion) = &flag.suggestion {
            println!("      -> {suggestion}");
        }
    }
}

pub(crate) fn score_evidence(args: ScoreEvidenceArgs) -> Result<(), AppError> {
    let items = import_evidence_path(&args.path)?;
    let scorer = configured_scorer()?;
    let summary = scorer.score_evidence(&items);
    let scan = scorer.gap_scan(&items);

    render_evidence_summary(&summary, &scan);
    Ok(())
}

pub(crate) fn score_bias(args: ScoreBiasArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.path)?;
    let report = configured_scorer()?.bias_scan(&text);
    render_bias_report(&report);
    Ok(())
}

pub(crate) fn suggest_rule_paths(args: RulePathArgs) -> Result<(), AppError> {
    let scorer = configured_scorer()?;
    render_rule_paths(&scorer.suggest_rule_paths(&args.facts));
    Ok(())
}

fn render_bias_report(report: &BiasReport) {
    println!("Neutral tone score: {}", report.score);
    if report.is_neutral() {
        println!("No conclusory language found.");
        return;
    }
    for finding in &report.findings {
        println!("  {}: \"{}\"", finding.section, finding.term);
        println!("      -> {}", finding.suggestion);
    }
    for advice in &report.suggestions {
        println!("  - {advice}");
    }
}

fn render_rule_paths(paths: &[&RulePath]) {
    for path in paths {
        println!("{} [{}]", path.label, path.citation);
        println!("  {}", path.description);
        println!("  Branches: {}", path.branches.join(", "));
        let mut checks = Vec::new();
        if path.requires_insanity_check {
            checks.push("insanity");
        }
        if path.requires_compelling_circumstances {
            checks.push("compelling circumstances");
        }
        if !checks.is_empty() {
            println!("  Also consider: {}", checks.join(", "));
        }
    }
}

pub(crate) fn render_evidence_summary(summary: &EvidenceSummary, scan: &GapScan) {
    println!(
        "Evidence: {} item(s), {} gap(s) | evidence completeness {}%",
        summary.total, summary.gaps, scan.completeness
    );
    for (reliability, count) in &summary.by_reliability {
        println!("  {:<8} {count}", reliability.label());
    }
    for gap in &scan.detected_gaps {
        match &gap.summary {
            Some(summary) => println!("  missing: {} ({summary})", gap.title),
            None => println!("  missing: {}", gap.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn configured_scorer_follows_the_section_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        env::set_var("CODDA_MIN_SECTION_CHARS", "42");

        let scorer = configured_scorer().expect("config loads");
        env::remove_var("CODDA_MIN_SECTION_CHARS");

        assert_eq!(scorer.config().min_section_chars, 42);
    }
}
