//! `presets` command.

use crate::config::ToolConfig;
use crate::svg::{ExportScale, PRESET_SCALES};

/// List the preset scales, marking the configured default with `*`.
pub fn run_presets(config: &ToolConfig) {
    for line in preset_lines(config.export.export_scale()) {
        println!("{line}");
    }
}

fn preset_lines(default: ExportScale) -> Vec<String> {
    PRESET_SCALES
        .iter()
        .map(|s| {
            let preset = ExportScale::Preset(*s);
            let marker = if preset == default { "*" } else { " " };
            format!("{marker} {preset}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_default() {
        let lines = preset_lines(ExportScale::Preset(2.0));
        assert_eq!(lines.len(), PRESET_SCALES.len());
        assert_eq!(lines[0], "  0.25x");
        assert_eq!(lines[5], "* 2x");
        assert_eq!(lines.iter().filter(|l| l.starts_with('*')).count(), 1);
    }

    #[test]
    fn test_custom_marks_nothing() {
        let lines = preset_lines(ExportScale::Custom);
        assert!(lines.iter().all(|l| l.starts_with(' ')));
    }
}
