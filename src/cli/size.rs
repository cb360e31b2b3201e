//! `size` command: intrinsic size and export dimensions.

use anyhow::Result;
use serde::Serialize;

use super::args::SizeArgs;
use super::common::read_svg_input;
use crate::config::ToolConfig;
use crate::svg::{
    Dimensions, ExportScale, ExportSize, resolve_intrinsic_size, set_height_preserving_aspect,
    set_width_preserving_aspect,
};
use crate::{debug, log};

/// Requested edit on top of the scale-derived export size.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Edit {
    Width(f64),
    Height(f64),
}

/// Output of the `size` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct SizeReport {
    intrinsic: Dimensions,
    export: ExportSize,
}

/// Run the `size` command.
pub fn run_size(args: &SizeArgs, config: &ToolConfig) -> Result<()> {
    let svg = read_svg_input(&args.input)?;

    let intrinsic = resolve_intrinsic_size(&svg);
    debug!("size"; "intrinsic {}x{}", intrinsic.width, intrinsic.height);

    let scale = args.scale.unwrap_or_else(|| config.export.export_scale());
    let edit = args
        .width
        .map(Edit::Width)
        .or(args.height.map(Edit::Height));

    let report = SizeReport {
        intrinsic,
        export: plan_export(intrinsic, scale, edit),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Start from the scale-derived size and apply the edit, if any.
///
/// Rejected edits leave the scale-derived size untouched.
fn plan_export(base: Dimensions, scale: ExportScale, edit: Option<Edit>) -> ExportSize {
    let initial = ExportSize::initial(base, scale);

    let edited = match edit {
        None => return initial,
        Some(Edit::Width(w)) => set_width_preserving_aspect(base, w),
        Some(Edit::Height(h)) => set_height_preserving_aspect(base, h),
    };

    match edited {
        Some((dimensions, scale)) => ExportSize { dimensions, scale },
        None => {
            log!("size"; "ignoring non-positive {}", edit_label(edit));
            initial
        }
    }
}

fn edit_label(edit: Option<Edit>) -> String {
    match edit {
        Some(Edit::Width(w)) => format!("width {w}"),
        Some(Edit::Height(h)) => format!("height {h}"),
        None => String::new(),
    }
}

fn print_report(report: &SizeReport) {
    let SizeReport { intrinsic, export } = report;
    println!("intrinsic  {} x {}", intrinsic.width, intrinsic.height);
    println!(
        "export     {} x {} ({})",
        export.dimensions.width, export.dimensions.height, export.scale
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Dimensions = Dimensions::new(200.0, 100.0);

    #[test]
    fn test_plan_scale_only() {
        let size = plan_export(BASE, ExportScale::Preset(0.25), None);
        assert_eq!(size.dimensions, Dimensions::new(50.0, 25.0));
        assert_eq!(size.scale, ExportScale::Preset(0.25));
    }

    #[test]
    fn test_plan_width_edit_matches_preset() {
        let size = plan_export(BASE, ExportScale::Preset(1.0), Some(Edit::Width(400.0)));
        assert_eq!(size.dimensions, Dimensions::new(400.0, 200.0));
        assert_eq!(size.scale, ExportScale::Preset(2.0));
    }

    #[test]
    fn test_plan_height_edit_custom() {
        let size = plan_export(BASE, ExportScale::Preset(1.0), Some(Edit::Height(70.0)));
        assert_eq!(size.dimensions, Dimensions::new(140.0, 70.0));
        assert_eq!(size.scale, ExportScale::Custom);
    }

    #[test]
    fn test_plan_rejected_edit_keeps_scale_size() {
        let size = plan_export(BASE, ExportScale::Preset(3.0), Some(Edit::Width(0.0)));
        assert_eq!(size.dimensions, Dimensions::new(600.0, 300.0));
        assert_eq!(size.scale, ExportScale::Preset(3.0));

        let size = plan_export(BASE, ExportScale::Preset(3.0), Some(Edit::Width(-5.0)));
        assert_eq!(size.dimensions, Dimensions::new(600.0, 300.0));
    }

    #[test]
    fn test_report_json_shape() {
        let report = SizeReport {
            intrinsic: BASE,
            export: plan_export(BASE, ExportScale::Custom, None),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["intrinsic"]["width"], 200.0);
        assert_eq!(json["export"]["width"], 400.0);
        assert_eq!(json["export"]["scale"], "custom");
    }
}
