//! Field command handler.
//!
//! Purity estimate and harvest plan from one sample reading.

use clap::Args;
use honeyscope_core::AppResult;
use honeyscope_pipeline::{assess, FieldReport, HiveStrength, SampleFeatures};

/// Estimate sample purity and plan the next harvest
#[derive(Args, Debug)]
pub struct FieldCommand {
    /// Sample moisture in percent (default 20)
    #[arg(short, long)]
    pub moisture: Option<f64>,

    /// Sample HMF in mg/kg (default 10)
    #[arg(long)]
    pub hmf: Option<f64>,

    /// Colony strength: strong, moderate, weak or unknown
    #[arg(short, long, default_value = "unknown")]
    pub strength: HiveStrength,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl FieldCommand {
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing field command");

        let sample = SampleFeatures::new(self.moisture, self.hmf)?;
        let report = assess(self.strength, sample);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", render_report(&report));
        }

        Ok(())
    }
}

fn render_report(report: &FieldReport) -> String {
    let mut out = format!(
        "Sample:     moisture {:.1}%, HMF {:.1} mg/kg\n",
        report.sample.moisture, report.sample.hmf
    );
    out.push_str(&format!(
        "Purity:     {:.1}% ({}, confidence {:.2})\n",
        report.purity.purity_percent,
        report.purity.label.as_str(),
        report.purity.confidence
    ));
    out.push_str(&format!("Harvest:    {}\n", report.harvest.advice));
    out.push_str(&format!(
        "Window:     {} days\n\n**Safety Checklist:**\n",
        report.harvest.recommended_window_days
    ));
    for item in &report.harvest.safety_checklist {
        out.push_str(&format!("- {}\n", item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let report = assess(HiveStrength::Unknown, SampleFeatures::default());
        let text = render_report(&report);

        assert!(text.starts_with("Sample:     moisture 20.0%, HMF 10.0 mg/kg\n"));
        assert!(text.contains("Purity:     86.0% (High, confidence 0.86)"));
        assert!(text.contains("Harvest:    Moisture high: delay harvest and dry frames."));
        assert!(text.contains("Window:     7 days"));
        assert!(text.ends_with("- Check for brood frames before extraction\n"));
    }

    #[test]
    fn test_weak_colony_rendering() {
        let sample = SampleFeatures::new(Some(17.2), Some(4.0)).unwrap();
        let text = render_report(&assess(HiveStrength::Weak, sample));

        assert!(text.contains("Consider supplemental feeding and wait 2-3 weeks."));
        assert!(text.contains("Window:     3 days"));
    }
}
