use crate::commands::{
    list_templates, render_template, score_bias, score_document, score_evidence,
    show_regulations, show_template, suggest_rule_paths, validate_catalog, RenderArgs,
    RulePathArgs, ScoreBiasArgs, ScoreDocumentArgs, ScoreEvidenceArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use codda::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Character of Discharge Drafting Assistant",
    about = "Serve and inspect the decision language library and completeness scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse, render, and check the decision language library
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
    /// Score a draft decision or an evidence register
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
    /// Walk a sample case from an empty draft to upload readiness
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TemplatesCommand {
    /// List templates, optionally limited to one category
    List {
        /// Category key (issue, evidence, regulations, analysis, decision, reasoning, favorable, special)
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one template with its variables and citations
    Show {
        /// Template id
        id: String,
    },
    /// Fill a template's placeholders and print the result
    Render(RenderArgs),
    /// List every regulation cited across the library
    Regulations,
    /// Check declared variables against the placeholders each template uses
    Validate,
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Score a markdown draft split on `## HEADING` lines
    Document(ScoreDocumentArgs),
    /// Summarise an evidence register CSV
    Evidence(ScoreEvidenceArgs),
    /// Flag conclusory language in a draft
    Bias(ScoreBiasArgs),
    /// Suggest regulatory rule paths for a set of service facts
    RulePaths(RulePathArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Templates { command } => match command {
            TemplatesCommand::List { category } => list_templates(category.as_deref()),
            TemplatesCommand::Show { id } => show_template(&id),
            TemplatesCommand::Render(args) => render_template(args),
            TemplatesCommand::Regulations => show_regulations(),
            TemplatesCommand::Validate => validate_catalog(),
        },
        Command::Score { command } => match command {
            ScoreCommand::Document(args) => score_document(args),
            ScoreCommand::Evidence(args) => score_evidence(args),
            ScoreCommand::Bias(args) => score_bias(args),
            ScoreCommand::RulePaths(args) => suggest_rule_paths(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}
