use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use screening::scoring::{self, LocalScores};
use screening::{
    AnswerStore, Assessment, Demographics, ExternalSignalData, MedicalHistory, Session,
    SurveyResponses, validate,
};
use screening_http::{ClientConfig, HttpClient};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(name = "screening", version, about = "Sleep-apnea screening submission tool")]
struct Args {
    /// TOML file with backend connection settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with the collected answers
    #[arg(long, conflicts_with = "example")]
    answers: Option<PathBuf>,

    /// Built-in answers to use when no file is given
    #[arg(long, value_enum, default_value_t = Example::Typical)]
    example: Example,

    /// Bearer token of the signed-in user
    #[arg(long, env = "SCREENING_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Only validate and score locally
    #[arg(long)]
    preview_only: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Example {
    Typical,
    HighRisk,
}

/// The answers file: one key per wizard step, each optional.
#[derive(Deserialize)]
struct AnswersFile {
    demographics: Option<Demographics>,
    medical_history: Option<MedicalHistory>,
    survey_responses: Option<SurveyResponses>,
    google_fit: Option<ExternalSignalData>,
}

impl AnswersFile {
    fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading answers from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing answers in {}", path.display()))
    }

    fn into_store(self) -> AnswerStore {
        let mut store = AnswerStore::new();
        if let Some(demographics) = self.demographics {
            store.set_demographics(demographics);
        }
        if let Some(history) = self.medical_history {
            store.set_medical_history(history);
        }
        if let Some(responses) = self.survey_responses {
            store.set_survey_responses(responses);
        }
        if let Some(signal) = self.google_fit {
            store.set_external_signal(signal);
        }
        store
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = match &args.answers {
        Some(path) => AnswersFile::read(path)?.into_store(),
        None => match args.example {
            Example::Typical => example_sessions::typical_store(),
            Example::HighRisk => example_sessions::high_risk_store(),
        },
    };

    let valid = match validate(&store.snapshot()) {
        Ok(valid) => valid,
        Err(violations) => {
            println!("The answers are incomplete:");
            for violation in &violations {
                println!("  - {violation}");
            }
            anyhow::bail!("{} validation error(s)", violations.len());
        }
    };
    print_preview(&scoring::preview(&valid));

    if args.preview_only {
        return Ok(());
    }
    let Some(token) = args.token else {
        println!("\nNo token given; skipping submission.");
        return Ok(());
    };

    let config = ClientConfig::load(args.config.as_deref())?;
    let client = HttpClient::new(&config)?;
    info!(base_url = %client.base_url(), "submitting survey");

    let demographics = valid.demographics().clone();
    let session = Session::new(store);
    let assessment = session.submit(&client, &token).await?;
    print_assessment(&assessment, &demographics);
    Ok(())
}

fn print_preview(local: &LocalScores) {
    println!("=== Local preview ===");
    println!("BMI:       {:.1}", local.bmi);
    println!("ESS:       {} ({})", local.ess.score, local.ess.category);
    println!("Berlin:    {} ({})", local.berlin.score, local.berlin.category);
    println!("STOP-BANG: {} ({})", local.stopbang.score, local.stopbang.category);
}

fn print_assessment(assessment: &Assessment, demographics: &Demographics) {
    println!("\n=== Backend assessment ===");
    if let Some(id) = assessment.survey_id {
        println!("Survey #{id}: {}", assessment.message);
    } else {
        println!("{}", assessment.message);
    }

    if let Some(scores) = &assessment.scores {
        for (name, score) in [
            ("ESS", &scores.ess),
            ("Berlin", &scores.berlin),
            ("STOP-BANG", &scores.stopbang),
        ] {
            if let Some(score) = score {
                println!("{name:<10} {} ({})", score.value, score.category);
            }
        }
    }

    if let Some(prediction) = &assessment.prediction {
        println!(
            "OSA probability: {:.0}% ({})",
            prediction.probability * 100.0,
            prediction.risk_level
        );
        println!("Recommendation: {}", prediction.recommendation);
    }

    if let Some(factors) = &assessment.risk_factors {
        println!("Top risk factors:");
        for factor in factors {
            println!("  [{}] {}: {}", factor.impact, factor.factor, factor.detail);
        }
    }

    if assessment.bmi_consistent_with(demographics, 0.05) == Some(false) {
        println!("Note: the reported BMI differs from the one computed locally.");
    }
}
