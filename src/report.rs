use serde_json::json;

use crate::scenarios::Outcome;

/// Human-readable narration of a self-check run.
pub fn render_text(capacity: usize, outcomes: &[Outcome]) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════\n");
    out.push_str(&format!("  Bounded Queue Self-Check · {}\n", now));
    out.push_str("═══════════════════════════════════════════════\n\n");
    out.push_str(&format!("  Capacity: {}\n\n", capacity));

    for o in outcomes {
        out.push_str(&format!("  [{}]  {}. {}\n", o.verdict.label(), o.id, o.name));
        out.push_str(&format!("          {}\n", o.detail));
    }

    out.push_str(&format!("\n── {}/{} checks passed ──\n", passed, outcomes.len()));
    out
}

pub fn render_json(capacity: usize, outcomes: &[Outcome]) -> serde_json::Result<String> {
    let doc = json!({
        "boundq_version": env!("CARGO_PKG_VERSION"),
        "timestamp":      chrono::Local::now().to_rfc3339(),
        "capacity":       capacity,
        "passed":         outcomes.iter().all(|o| o.passed()),
        "outcomes":       outcomes,
    });
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios;

    #[test]
    fn text_lists_every_check() {
        let outcomes = scenarios::run_all(3).unwrap();
        let text = render_text(3, &outcomes);
        assert!(text.contains("Capacity: 3"));
        assert!(text.contains("[PASS]  1. capacity bound"));
        assert!(text.contains("[PASS]  6. wrap-around reuse"));
        assert!(text.contains("6/6 checks passed"));
    }

    #[test]
    fn json_is_well_formed() {
        let outcomes = scenarios::run_all(5).unwrap();
        let text = render_json(5, &outcomes).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["capacity"], 5);
        assert_eq!(v["passed"], true);
        assert_eq!(v["outcomes"].as_array().unwrap().len(), 6);
        assert_eq!(v["outcomes"][3]["verdict"], "passed");
    }
}
