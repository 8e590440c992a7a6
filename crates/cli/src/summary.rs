use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// JSON artifact describing one experiment run: which experiment, with what
/// parameters, producing what numbers. Written next to the console output so
/// results stay greppable after the terminal scrolls away.
#[derive(Serialize)]
pub struct RunSummary {
    pub experiment: &'static str,
    pub code_rev: String,
    pub params: Value,
    pub results: Value,
}

impl RunSummary {
    pub fn new(experiment: &'static str, params: Value, results: Value) -> Self {
        Self {
            experiment,
            code_rev: code_rev(),
            params,
            results,
        }
    }
}

/// Write the summary as pretty-printed JSON, creating parent directories.
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn code_rev() -> String {
    option_env!("GIT_COMMIT").unwrap_or("unknown").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn write_summary_creates_parents_and_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs/escape.json");
        let summary = RunSummary::new(
            "escape",
            json!({"iterations": 10, "seed": 42}),
            json!({"escaped": 3, "probability": 0.3}),
        );
        write_summary(&path, &summary).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["experiment"], "escape");
        assert_eq!(parsed["params"]["iterations"], 10);
        assert_eq!(parsed["results"]["escaped"], 3);
    }
}
