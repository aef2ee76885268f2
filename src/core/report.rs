use crate::core::{BreedFetcher, BreedQuery, ResolutionError, SubBreedList};
use crate::utils::error::AppError;
use serde_json::{json, Value};

pub type Outcome = (BreedQuery, Result<SubBreedList, ResolutionError>);

/// Resolves each breed in turn; one failure does not stop the rest.
pub async fn resolve_each<F>(fetcher: &F, breeds: &[BreedQuery]) -> Vec<Outcome>
where
    F: BreedFetcher + ?Sized,
{
    let mut outcomes = Vec::with_capacity(breeds.len());
    for breed in breeds {
        let result = fetcher.get_sub_breeds(breed).await;
        match &result {
            Ok(sub_breeds) => tracing::info!("{}: {} sub-breeds", breed, sub_breeds.len()),
            Err(e) => tracing::warn!("{}", e),
        }
        outcomes.push((breed.clone(), result));
    }
    outcomes
}

pub fn failures(outcomes: &[Outcome]) -> Vec<AppError> {
    outcomes
        .iter()
        .filter_map(|(_, r)| r.as_ref().err())
        .map(|e| AppError::from(e.clone()))
        .collect()
}

pub fn render_text(outcomes: &[Outcome]) -> String {
    let mut lines = Vec::new();
    for (breed, result) in outcomes {
        match result {
            Ok(sub_breeds) => {
                lines.push(format!("{}:", breed));
                if sub_breeds.is_empty() {
                    lines.push("  (no sub-breeds)".to_string());
                }
                lines.extend(sub_breeds.iter().map(|s| format!("  {}", s)));
            }
            Err(e) => lines.push(format!("{}: error: {}", breed, e)),
        }
    }
    lines.join("\n")
}

/// One entry per outcome, in input order. Repeated breeds keep their own entries.
pub fn render_json(outcomes: &[Outcome]) -> Value {
    outcomes
        .iter()
        .map(|(breed, result)| match result {
            Ok(sub_breeds) => json!({"breed": breed.as_str(), "sub_breeds": sub_breeds}),
            Err(e) => json!({"breed": breed.as_str(), "sub_breeds": null, "error": e.to_string()}),
        })
        .collect()
}
