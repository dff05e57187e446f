//! redpanda-operator - admission checks for Redpanda Cluster resources.
//!
//! This is the command line entry point that:
//! - Initializes structured logging
//! - Prints the Cluster CustomResourceDefinition
//! - Validates Cluster manifests with the same policies the webhook runs

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use kube::{CustomResourceExt, ResourceExt};
use tracing::{info, warn};

use redpanda_operator::crd::Cluster;
use redpanda_operator::webhooks::policies::apply_defaults;
use redpanda_operator::webhooks::{Operation, ValidationContext, validate_all};

#[derive(Parser, Debug)]
#[command(name = "redpanda-operator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the Cluster CustomResourceDefinition as YAML
    Crd,

    /// Validate a Cluster manifest and print the admission Status as JSON
    Validate {
        /// Admission operation to simulate
        #[arg(long, value_enum, default_value_t = AdmissionOperation::Create)]
        operation: AdmissionOperation,

        /// Cluster manifest under review (YAML)
        #[arg(long)]
        object: PathBuf,

        /// Currently stored Cluster manifest, required for update
        #[arg(long, required_if_eq("operation", "update"))]
        old: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AdmissionOperation {
    Create,
    Update,
    Delete,
}

impl From<AdmissionOperation> for Operation {
    fn from(operation: AdmissionOperation) -> Self {
        match operation {
            AdmissionOperation::Create => Operation::Create,
            AdmissionOperation::Update => Operation::Update,
            AdmissionOperation::Delete => Operation::Delete,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("redpanda_operator=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Crd => {
            print!("{}", serde_yaml::to_string(&Cluster::crd())?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate {
            operation,
            object,
            old,
        } => {
            if validate(operation.into(), &object, old.as_deref())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn read_cluster(path: &Path) -> redpanda_operator::Result<Cluster> {
    let manifest = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&manifest)?)
}

/// Validate the manifest at `object`, print the admission Status and return
/// whether the Cluster was admitted.
fn validate(
    operation: Operation,
    object: &Path,
    old: Option<&Path>,
) -> redpanda_operator::Result<bool> {
    let mut resource = read_cluster(object)?;
    let old_resource = old.map(read_cluster).transpose()?;
    apply_defaults(&mut resource);

    let ctx = ValidationContext {
        resource: &resource,
        old_resource: old_resource.as_ref(),
        operation: operation.clone(),
        dry_run: true,
        namespace: resource.metadata.namespace.as_deref(),
    };
    let verdict = validate_all(&ctx)?;

    let name = resource.name_any();
    let admitted = verdict.is_admitted();
    let status = verdict.into_status::<Cluster>(&name);
    println!("{}", serde_json::to_string_pretty(&status)?);

    if admitted {
        info!(name = %name, operation = ?operation, "Cluster admitted");
    } else {
        warn!(name = %name, operation = ?operation, "Cluster denied");
    }
    Ok(admitted)
}
