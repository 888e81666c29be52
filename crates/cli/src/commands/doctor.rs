use brewguide_core::community::CommunityBoard;
use brewguide_core::config::{AppConfig, LoadOptions};
use brewguide_core::domain::preferences::WizardPreferences;
use brewguide_core::recommend::RecommendationEngine;
use brewguide_core::store::{self, COMMUNITY_KEY, PREFERENCES_KEY};
use serde::Serialize;

use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\
                 \"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match AppContext::from_config(config) {
                Ok(context) => {
                    checks.push(DoctorCheck {
                        name: "catalog_validation",
                        status: CheckStatus::Pass,
                        details: format!(
                            "{} coffees, {} recipes, {} equipment",
                            context.catalog.all_coffees().len(),
                            context.catalog.all_recipes().len(),
                            context.catalog.all_equipment().len()
                        ),
                    });
                    checks.push(check_storage(&context));
                    checks.push(check_determinism(&context));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "catalog_validation",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("storage_readiness", "catalog did not load"));
                    checks.push(skipped("recommendation_determinism", "catalog did not load"));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("catalog_validation", "configuration did not load"));
            checks.push(skipped("storage_readiness", "configuration did not load"));
            checks.push(skipped("recommendation_determinism", "configuration did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

// Saved blobs must decode; a missing data dir is fine until the first save.
fn check_storage(context: &AppContext) -> DoctorCheck {
    let preferences = store::load_json::<WizardPreferences>(&context.store, PREFERENCES_KEY);
    let board = store::load_json::<CommunityBoard>(&context.store, COMMUNITY_KEY);

    match (preferences, board) {
        (Ok(preferences), Ok(board)) => DoctorCheck {
            name: "storage_readiness",
            status: CheckStatus::Pass,
            details: format!(
                "data dir `{}` (saved preferences: {}, shared brews: {})",
                context.store.root().display(),
                if preferences.is_some() { "yes" } else { "no" },
                board.map(|board| board.brews().len()).unwrap_or_default()
            ),
        },
        (Err(error), _) | (_, Err(error)) => DoctorCheck {
            name: "storage_readiness",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_determinism(context: &AppContext) -> DoctorCheck {
    let engine = context.engine();
    let preferences = WizardPreferences::default();
    let first = engine.recommend(&context.catalog, &preferences);
    let second = engine.recommend(&context.catalog, &preferences);

    if first == second && !first.is_empty() {
        DoctorCheck {
            name: "recommendation_determinism",
            status: CheckStatus::Pass,
            details: format!("stable results for catalog {}", context.catalog.fingerprint()),
        }
    } else if first.is_empty() {
        DoctorCheck {
            name: "recommendation_determinism",
            status: CheckStatus::Fail,
            details: "default preferences produced no recommendations".to_string(),
        }
    } else {
        DoctorCheck {
            name: "recommendation_determinism",
            status: CheckStatus::Fail,
            details: "repeated runs produced different recommendations".to_string(),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
