pub mod prompt;

use crate::modulation::Modulation;
use crate::pipeline::PipelineReport;

pub fn print_banner() {
    println!("=== Digital Signal Generator ===");
}

/// Console lines for a finished run, in display order
pub fn report_lines(report: &PipelineReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(modulation) = report.modulation {
        lines.push(match modulation {
            Modulation::Pcm { .. } => format!("PCM: {}", report.bits),
            Modulation::Delta => format!("Delta Modulation: {}", report.bits),
        });
    }
    lines.push(report.palindrome.to_string());
    lines.push(report.result.title.clone());
    lines.push(format!("Signal: {}", report.result.levels_text()));
    if let Some(zero_run) = report.zero_run {
        lines.push(zero_run.to_string());
    }

    lines
}

pub fn print_report(report: &PipelineReport) {
    for line in report_lines(report) {
        println!("{line}");
    }
}
