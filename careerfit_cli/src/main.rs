use anyhow::{Context, Result};
/// CareerFit CLI - Career Aptitude Assessment Terminal UI
///
/// Provides the interactive assessment wizard plus non-interactive scoring
/// and catalog listing commands.
use careerfit_cli::ui;
use careerfit_core::catalog;
use careerfit_core::types::AnswerSet;
use careerfit_core::AssessmentReport;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "careerfit-cli")]
#[command(about = "CareerFit - Career Aptitude Assessment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive assessment wizard
    Tui {
        /// Path to a custom catalog YAML file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<String>,
    },
    /// Score a recorded answer set (non-interactive)
    Score {
        /// Path to a JSON file mapping question ids to answer text
        #[arg(short, long)]
        answers: String,
        /// Emit the full report as JSON instead of the text summary
        #[arg(short, long)]
        json: bool,
    },
    /// List the questions in the catalog (non-interactive)
    Questions {
        /// Path to a custom catalog YAML file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<String>,
        /// Filter by question id
        #[arg(short, long)]
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { catalog } => {
            ui::run_tui(catalog.as_deref())?;
        }
        Commands::Score { answers, json } => {
            run_score_cli(&answers, json)?;
        }
        Commands::Questions { catalog, filter } => {
            run_questions_cli(catalog.as_deref(), filter.as_deref())?;
        }
    }

    Ok(())
}

fn run_score_cli(answers_path: &str, as_json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(answers_path)
        .with_context(|| format!("Failed to read answers file {}", answers_path))?;
    let answers: AnswerSet = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse answers file {}", answers_path))?;

    let report = AssessmentReport::from_answers(&answers);

    if as_json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{}", report.format_text());

    println!("Recommended career paths:");
    for role in &report.job_roles {
        println!("  {} [{}] - {}", role.title, role.match_pct, role.description);
    }

    println!("\nLearning path:");
    for (index, topic) in report.learning_path.iter().enumerate() {
        println!("  {}. {}", index + 1, topic);
    }

    Ok(())
}

fn run_questions_cli(catalog_path: Option<&str>, filter: Option<&str>) -> Result<()> {
    let questions = match catalog_path {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::builtin_catalog(),
    };

    let filtered: Vec<_> = if let Some(f) = filter {
        questions.iter().filter(|q| q.id.contains(f)).collect()
    } else {
        questions.iter().collect()
    };

    println!("{} questions:", filtered.len());

    for question in &filtered {
        println!("\n  [{}] {}", question.id, question.section);
        println!("  {}", question.prompt);
        for option in catalog::options_for(question) {
            println!("    - {}", option);
        }
    }

    Ok(())
}
