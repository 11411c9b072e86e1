use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain layer must never pull in directly.
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &[
    "tokio",
    "reqwest",
    "axum",
    "dioxus",
    "dioxus-desktop",
    "async-trait",
    "tracing-subscriber",
    "dotenvy",
];

/// Allowed workspace dependencies per workspace crate.
const LAYERS: &[(&str, &[&str])] = &[
    ("charsheet-domain", &[]),
    ("charsheet-shared", &["charsheet-domain"]),
    ("charsheet-player", &["charsheet-domain", "charsheet-shared"]),
    ("xtask", &[]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Package {
    id: String,
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = check_layers(&metadata);
    if violations.is_empty() {
        println!("arch-check passed");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("  - {violation}");
    }
    anyhow::bail!("arch-check failed with {} violation(s)", violations.len())
}

fn check_layers(metadata: &Metadata) -> Vec<String> {
    let members: Vec<&Package> = metadata
        .packages
        .iter()
        .filter(|p| metadata.workspace_members.contains(&p.id))
        .collect();
    let member_names: Vec<&str> = members.iter().map(|p| p.name.as_str()).collect();
    let layers: BTreeMap<&str, &[&str]> = LAYERS.iter().copied().collect();

    let mut violations = Vec::new();
    for package in members {
        // Dev-dependencies (test servers, mocks) are exempt.
        let normal_deps = package
            .dependencies
            .iter()
            .filter(|d| d.kind.as_deref() != Some("dev"));

        for dep in normal_deps {
            let name = dep.name.as_str();
            if member_names.contains(&name) {
                let allowed = layers.get(package.name.as_str()).copied().unwrap_or(&[]);
                if !allowed.contains(&name) {
                    violations.push(format!("{} must not depend on {}", package.name, name));
                }
            }
            if package.name == "charsheet-domain" && DOMAIN_FORBIDDEN_DEPS.contains(&name) {
                violations.push(format!("charsheet-domain must not depend on I/O crate {name}"));
            }
        }
    }
    violations
}
