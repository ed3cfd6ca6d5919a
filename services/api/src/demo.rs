use crate::commands::{render_evidence_summary, render_section_report};
use crate::infra::{load_library, InMemoryCaseRepository};
use chrono::NaiveDate;
use clap::Args;
use codda::config::AppConfig;
use codda::error::AppError;
use codda::scoring::{EvidenceItem, EvidenceKind, EvidenceSource, Reliability};
use codda::workspace::{CaseDocument, CaseServiceError, CaseWorkspaceService, NewCase};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Claimant name shown on the sample case
    #[arg(long)]
    pub(crate) claimant: Option<String>,
    /// Leave the command statement outstanding so the evidence gap stays open
    #[arg(long)]
    pub(crate) keep_gap: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let library = Arc::new(load_library(&config.drafting)?);
    let service = CaseWorkspaceService::new(
        Arc::new(InMemoryCaseRepository::default()),
        library,
        config.drafting.scoring,
    );

    walkthrough(&service, args).map_err(|err| AppError::Usage(format!("demo failed: {err}")))
}

fn walkthrough(
    service: &CaseWorkspaceService<InMemoryCaseRepository>,
    args: DemoArgs,
) -> Result<(), CaseServiceError> {
    let claimant = args
        .claimant
        .unwrap_or_else(|| "Sample Veteran".to_string());

    println!("Character of Discharge drafting demo");
    let case = service.open(NewCase {
        claimant: claimant.clone(),
        ipr_required: true,
        evidence: demo_evidence(),
        ..NewCase::default()
    })?;
    println!("\nOpened {} for {claimant}", case.id.as_str());
    print_assessment(service, &case);

    let period = values(&[("START_DATE", "2012-01-05"), ("END_DATE", "2016-06-30")]);
    let steps: [(&str, &str, BTreeMap<String, String>); 5] = [
        ("issue", "issue-standard", period),
        ("evidence", "evidence-standard-list", BTreeMap::new()),
        ("laws-regs", "regs-standard", BTreeMap::new()),
        ("decision", "decision-honorable-for-va", BTreeMap::new()),
        ("reasons-bases", "reasoning-ipr-required", BTreeMap::new()),
    ];

    let mut document = case;
    for (section, template_id, values) in &steps {
        let (updated, rendered) =
            service.insert_template(&document.id, section, template_id, values)?;
        println!(
            "Inserted '{template_id}' into {section} ({} placeholder(s) left)",
            rendered.unresolved.len()
        );
        document = updated;
    }
    print_assessment(service, &document);

    println!("\nReplacing placeholders with case facts");
    let drafted = document.sections.clone();
    for (section, text) in &drafted {
        let filled = fill_case_facts(text);
        if filled != *text {
            document = service.update_section(&document.id, section, filled)?;
        }
    }

    if !args.keep_gap {
        println!("Command statement received");
        document = service.add_evidence(&document.id, received_statement())?;
    }
    print_assessment(service, &document);
    Ok(())
}

fn print_assessment(
    service: &CaseWorkspaceService<InMemoryCaseRepository>,
    document: &CaseDocument,
) {
    let assessment = service.assess_document(document);
    println!(
        "\nRevision {} | IPR {} | upload {}",
        assessment.revision,
        gate(assessment.can_run_ipr),
        gate(assessment.can_upload)
    );
    render_section_report(&assessment.sections, &assessment.lint_flags);
    render_evidence_summary(
        &assessment.evidence,
        &service.scorer().gap_scan(&document.evidence),
    );
}

fn gate(open: bool) -> &'static str {
    if open {
        "ready"
    } else {
        "blocked"
    }
}

fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Strip every remaining `[TOKEN]` so the demo draft reaches template fidelity.
fn fill_case_facts(text: &str) -> String {
    let mut filled = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('[') {
        filled.push_str(&rest[..start]);
        match rest[start..].find(']') {
            Some(end) => {
                let token = &rest[start + 1..start + end];
                filled.push_str(&demo_fact(token));
                rest = &rest[start + end + 1..];
            }
            None => {
                rest = &rest[start + 1..];
            }
        }
    }
    filled.push_str(rest);
    filled
}

fn demo_fact(token: &str) -> String {
    match token {
        "DISCHARGE_TYPE" => "Other Than Honorable".to_string(),
        "He/She" => "He".to_string(),
        "his/her" => "his".to_string(),
        "he/she" => "he".to_string(),
        other => other.to_lowercase().replace('_', " "),
    }
}

fn demo_evidence() -> Vec<EvidenceItem> {
    vec![
        EvidenceItem {
            id: "ev-1".to_string(),
            kind: EvidenceKind::ServicePersonnel,
            title: "Service Personnel Records".to_string(),
            date: NaiveDate::from_ymd_opt(2016, 7, 2),
            source: EvidenceSource::EFolder,
            reliability: Reliability::High,
            summary: Some("Complete SPR including DD-214".to_string()),
            tags: vec!["personnel".to_string()],
            is_gap: false,
        },
        EvidenceItem {
            id: "ev-2".to_string(),
            kind: EvidenceKind::ServiceTreatment,
            title: "Service Treatment Records".to_string(),
            date: NaiveDate::from_ymd_opt(2016, 5, 18),
            source: EvidenceSource::Henry,
            reliability: Reliability::Medium,
            summary: Some("In-service behavioral health notes".to_string()),
            tags: Vec::new(),
            is_gap: false,
        },
        EvidenceItem {
            id: "ev-gap-1".to_string(),
            kind: EvidenceKind::Lay,
            title: "Command Statement".to_string(),
            date: None,
            source: EvidenceSource::External,
            reliability: Reliability::Medium,
            summary: Some("Statement from commanding officer".to_string()),
            tags: Vec::new(),
            is_gap: true,
        },
    ]
}

fn received_statement() -> EvidenceItem {
    EvidenceItem {
        id: "ev-gap-1".to_string(),
        kind: EvidenceKind::Lay,
        title: "Command Statement".to_string(),
        date: NaiveDate::from_ymd_opt(2016, 8, 9),
        source: EvidenceSource::Upload,
        reliability: Reliability::Medium,
        summary: Some("Statement from commanding officer".to_string()),
        tags: Vec::new(),
        is_gap: false,
    }
}
