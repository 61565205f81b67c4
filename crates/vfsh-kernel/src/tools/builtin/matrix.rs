//! matrix: Start or stop the matrix rain effect.

use vfsh_types::{Output, Sentinel};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

const MODES: &[&str] = &["classic", "digital", "code", "neo", "stop"];
const INTENSITIES: &[&str] = &["low", "medium", "high"];
const DURATION_MS: std::ops::RangeInclusive<u32> = 1000..=30000;

const HELP: &str = "\
**matrix** [mode] [--duration=<ms>] [--intensity=<level>]

Modes:
- `classic`: green rain (default)
- `digital`: cyan rain with glitches
- `code`: falling source code
- `neo`: boot sequence first
- `stop`: end the effect

Options:
- `--duration=<ms>`: 1000 to 30000, default 5000
- `--intensity=<level>`: low, medium (default) or high";

/// Matrix tool: emits a `MATRIX:` sentinel for the host to animate.
pub struct Matrix;

/// Validated effect settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Effect {
    mode: String,
    duration: u32,
    intensity: String,
}

impl Default for Effect {
    fn default() -> Self {
        Self {
            mode: "classic".to_string(),
            duration: 5000,
            intensity: "medium".to_string(),
        }
    }
}

impl Effect {
    fn parse(args: &ToolArgs) -> Result<Self, String> {
        let mut effect = Self::default();

        if let Some(mode) = args.first() {
            if !MODES.contains(&mode) {
                return Err(format!("Invalid mode: {mode}. Valid modes: {}", MODES.join(", ")));
            }
            effect.mode = mode.to_string();
        }

        for arg in args.raw().iter().filter(|a| a.starts_with('-') && a.len() > 1) {
            if let Some(value) = arg.strip_prefix("--duration=") {
                effect.duration = value
                    .parse::<u32>()
                    .ok()
                    .filter(|ms| DURATION_MS.contains(ms))
                    .ok_or("Duration must be between 1000ms and 30000ms")?;
            } else if let Some(value) = arg.strip_prefix("--intensity=") {
                if !INTENSITIES.contains(&value) {
                    return Err(format!(
                        "Invalid intensity: {value}. Valid intensities: {}",
                        INTENSITIES.join(", ")
                    ));
                }
                effect.intensity = value.to_string();
            } else {
                return Err(format!("matrix: unrecognized option '{arg}'"));
            }
        }
        Ok(effect)
    }

    fn payload(&self) -> String {
        if self.mode == "stop" {
            return self.mode.clone();
        }
        format!(
            "{};duration={};intensity={}",
            self.mode, self.duration, self.intensity
        )
    }
}

impl Tool for Matrix {
    fn name(&self) -> &str {
        "matrix"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("matrix", "Enter the Matrix")
            .usage("matrix [mode] [--duration=<ms>] [--intensity=<level>]")
            .alias("neo")
            .example("Classic rain", "matrix")
            .example("Short and intense", "matrix digital --duration=2000 --intensity=high")
            .example("Stop the effect", "matrix stop")
    }

    fn execute(&self, args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> Output {
        if args.has_flag("help") || args.has_flag("h") {
            return Output::info(HELP).with_rich();
        }
        match Effect::parse(args) {
            Ok(effect) => Output::system(Sentinel::Matrix(effect.payload())),
            Err(message) => Output::error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[test]
    fn test_matrix_defaults() {
        let mut h = Harness::new();
        let out = h.run(&Matrix, &[]);
        assert_eq!(
            out.as_sentinel(),
            Some(&Sentinel::Matrix("classic;duration=5000;intensity=medium".into()))
        );
        assert_eq!(out.text(), "MATRIX:classic;duration=5000;intensity=medium");
    }

    #[test]
    fn test_matrix_options() {
        let mut h = Harness::new();
        let out = h.run(&Matrix, &["neo", "--duration=2000", "--intensity=high"]);
        assert_eq!(out.text(), "MATRIX:neo;duration=2000;intensity=high");
        assert_eq!(h.run(&Matrix, &["stop"]).text(), "MATRIX:stop");
    }

    #[test]
    fn test_matrix_rejects_bad_input() {
        let mut h = Harness::new();
        assert_eq!(
            h.run(&Matrix, &["rainbow"]).text(),
            "Invalid mode: rainbow. Valid modes: classic, digital, code, neo, stop"
        );
        for duration in ["--duration=10", "--duration=40000", "--duration=soon"] {
            let out = h.run(&Matrix, &[duration]);
            assert!(out.is_error(), "{duration}");
            assert_eq!(out.text(), "Duration must be between 1000ms and 30000ms");
        }
        assert_eq!(
            h.run(&Matrix, &["--intensity=max"]).text(),
            "Invalid intensity: max. Valid intensities: low, medium, high"
        );
        assert_eq!(
            h.run(&Matrix, &["--speed=9"]).text(),
            "matrix: unrecognized option '--speed=9'"
        );
    }

    #[test]
    fn test_matrix_help_is_rich() {
        let mut h = Harness::new();
        let out = h.run(&Matrix, &["--help"]);
        assert!(out.rich);
        assert!(!out.is_error());
        assert!(out.text().contains("--intensity=<level>"));
    }
}
