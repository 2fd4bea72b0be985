//! # Shopcalc CLI
//!
//! Command-line front end for the `calc_core` calculators. Every numeric
//! argument is taken as raw text and goes through the same forms, parsing
//! and validation gates a GUI would use.
//!
//! ```text
//! shopcalc length 12 --from in --to mm
//! shopcalc bend-deduction --angle 90 --radius 1 --thickness 1 --preset aluminum
//! shopcalc flat-pattern --thickness 1 --radius 2 --k-factor 0.4 10:0 20:90 15:45:3
//! shopcalc json job.json --json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, Level};

use calc_core::calculations::{
    BendResult, CalculationItem, CalculationOutput, CircleAreaResult, CircumferenceResult, FlatPatternResult,
    LengthConversionResult,
};
use calc_core::catalog::{self, CalculatorId, CATEGORIES};
use calc_core::equations::{KFactorPreset, MeasureType};
use calc_core::forms::{
    BendForm, CalculatorForm, CircleAreaForm, CircumferenceForm, FlatPatternForm, FormSession, LengthConverterForm,
    SegmentFields,
};
use calc_core::{load_settings, AreaUnit, CalcError, CalculatorSettings, LengthUnit, UnitSystem};

const RULE: &str = "═══════════════════════════════════════";

#[derive(Parser)]
#[command(name = "shopcalc", about = "Shop calculators: units, circles and sheet-metal bends", version)]
struct Cli {
    /// Settings file (JSON) with default units and K-factor preset
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results (and errors) as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators by category
    List,

    /// Convert a length between units
    Length {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source unit (mm, cm, m, in, ft, km, mi)
        #[arg(long)]
        from: Option<LengthUnit>,

        /// Target unit
        #[arg(long)]
        to: Option<LengthUnit>,
    },

    /// Area of a circle from its radius or diameter
    CircleArea {
        /// Radius, or diameter with --diameter
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Treat the value as a diameter
        #[arg(long)]
        diameter: bool,

        /// Unit of the value
        #[arg(long)]
        unit: Option<LengthUnit>,

        /// Unit of the area (mm², cm², m², in², ft²; "mm2" and "sq in" also work)
        #[arg(long)]
        output_unit: Option<AreaUnit>,
    },

    /// Circumference of a circle from its radius
    Circumference {
        /// Radius
        #[arg(allow_negative_numbers = true)]
        radius: String,

        /// Unit of the radius
        #[arg(long)]
        unit: Option<LengthUnit>,
    },

    /// Bend allowance of a single bend
    BendAllowance(BendArgs),

    /// Bend deduction of a single bend
    BendDeduction(BendArgs),

    /// Flat-pattern length of a multi-bend part
    FlatPattern {
        /// Material thickness
        #[arg(long, allow_hyphen_values = true)]
        thickness: String,

        /// Default inside radius for bends without their own
        #[arg(long, allow_hyphen_values = true)]
        radius: Option<String>,

        #[command(flatten)]
        material: MaterialArgs,

        /// Segments as LENGTH[:ANGLE[:RADIUS]], in order, after all options
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        segments: Vec<String>,
    },

    /// Evaluate a JSON calculation document (file, or stdin when omitted)
    Json {
        /// Input file
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BendArgs {
    /// Bend angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    angle: String,

    /// Inside bend radius
    #[arg(long, allow_hyphen_values = true)]
    radius: String,

    /// Material thickness
    #[arg(long, allow_hyphen_values = true)]
    thickness: String,

    #[command(flatten)]
    material: MaterialArgs,
}

#[derive(Args)]
struct MaterialArgs {
    /// K-factor; overrides the preset value
    #[arg(long, allow_hyphen_values = true)]
    k_factor: Option<String>,

    /// K-factor preset (mild-steel, aluminum, stainless, none)
    #[arg(long)]
    preset: Option<KFactorPreset>,

    /// Unit system of every length (mm or in)
    #[arg(long)]
    units: Option<UnitSystem>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if cli.json {
                if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                    if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                        eprintln!();
                        eprintln!("Error JSON:");
                        eprintln!("{}", json);
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => load_settings(path).with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CalculatorSettings::default(),
    };
    debug!(?settings, "settings in effect");

    match &cli.command {
        Commands::List => {
            print_catalog();
            Ok(())
        }
        Commands::Length { value, from, to } => {
            let mut form = LengthConverterForm::with_settings(&settings);
            form.value = value.clone();
            form.from = from.unwrap_or(form.from);
            form.to = to.unwrap_or(form.to);
            let from_unit = form.from;
            let result = evaluate(form)?;
            emit(cli.json, CalculationOutput::LengthConversion(result), || print_length(value, from_unit, &result))
        }
        Commands::CircleArea { value, diameter, unit, output_unit } => {
            let mut form = CircleAreaForm::with_settings(&settings);
            form.value = value.clone();
            if *diameter {
                form.measure_type = MeasureType::Diameter;
            }
            form.input_unit = unit.unwrap_or(form.input_unit);
            form.output_unit = output_unit.unwrap_or(form.output_unit);
            let result = evaluate(form)?;
            emit(cli.json, CalculationOutput::CircleArea(result), || print_circle_area(&result))
        }
        Commands::Circumference { radius, unit } => {
            let mut form = CircumferenceForm::with_settings(&settings);
            form.radius = radius.clone();
            form.unit = unit.unwrap_or(form.unit);
            let result = evaluate(form)?;
            emit(cli.json, CalculationOutput::Circumference(result), || print_circumference(&result))
        }
        Commands::BendAllowance(args) => {
            let result = evaluate(bend_form(args, &settings))?;
            emit(cli.json, CalculationOutput::Bend(result), || {
                print_bend(CalculatorId::BendAllowance, &result)
            })
        }
        Commands::BendDeduction(args) => {
            let result = evaluate(bend_form(args, &settings))?;
            emit(cli.json, CalculationOutput::Bend(result), || {
                print_bend(CalculatorId::BendDeduction, &result)
            })
        }
        Commands::FlatPattern { thickness, radius, material, segments } => {
            let mut form = FlatPatternForm::with_settings(&settings);
            apply_material(&mut form, material);
            form.thickness = thickness.clone();
            form.default_inside_radius = radius.clone().unwrap_or_default();
            form.segments = segments.iter().map(|s| parse_segment(s)).collect::<Result<_>>()?;
            let result = evaluate(form)?;
            emit(cli.json, CalculationOutput::FlatPattern(result.clone()), || print_flat_pattern(&result))
        }
        Commands::Json { input } => {
            let item = read_item(input.as_deref())?;
            debug!(calc_type = item.calc_type(), "evaluating JSON item");
            let output = item.calculate()?;
            if cli.json {
                print_json(&output)
            } else {
                banner(item.calc_type());
                println!("  Result: {}", output.headline());
                println!("{}", RULE);
                Ok(())
            }
        }
    }
}

/// Run a form through a session's calculate step. Input errors also print
/// the form's help text.
fn evaluate<F: CalculatorForm>(form: F) -> Result<F::Output> {
    let mut session = FormSession::new(form);
    match session.calculate() {
        Ok(output) => Ok(output),
        Err(err) => {
            if err.is_input_error() {
                if let Some(message) = session.message() {
                    eprintln!("{}", message);
                }
            }
            Err(err.into())
        }
    }
}

trait SheetMetalForm {
    fn set_unit_system(&mut self, next: UnitSystem);
    fn select_preset(&mut self, preset: KFactorPreset);
    fn k_factor_mut(&mut self) -> &mut String;
}

impl SheetMetalForm for BendForm {
    fn set_unit_system(&mut self, next: UnitSystem) {
        BendForm::set_unit_system(self, next)
    }
    fn select_preset(&mut self, preset: KFactorPreset) {
        BendForm::select_preset(self, preset)
    }
    fn k_factor_mut(&mut self) -> &mut String {
        &mut self.k_factor
    }
}

impl SheetMetalForm for FlatPatternForm {
    fn set_unit_system(&mut self, next: UnitSystem) {
        FlatPatternForm::set_unit_system(self, next)
    }
    fn select_preset(&mut self, preset: KFactorPreset) {
        FlatPatternForm::select_preset(self, preset)
    }
    fn k_factor_mut(&mut self) -> &mut String {
        &mut self.k_factor
    }
}

/// Unit system and K-factor options. Applied before any length is typed so
/// the unit switch has nothing to convert.
fn apply_material(form: &mut impl SheetMetalForm, material: &MaterialArgs) {
    if let Some(units) = material.units {
        form.set_unit_system(units);
    }
    if let Some(preset) = material.preset {
        form.select_preset(preset);
    }
    if let Some(k) = &material.k_factor {
        *form.k_factor_mut() = k.clone();
    }
}

fn bend_form(args: &BendArgs, settings: &CalculatorSettings) -> BendForm {
    let mut form = BendForm::with_settings(settings);
    apply_material(&mut form, &args.material);
    form.angle_deg = args.angle.clone();
    form.inside_radius = args.radius.clone();
    form.thickness = args.thickness.clone();
    form
}

/// Parse `LENGTH[:ANGLE[:RADIUS]]`. A missing angle means a straight segment.
fn parse_segment(text: &str) -> Result<SegmentFields> {
    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [length] => Ok(SegmentFields::new(*length, "0", "")),
        [length, angle] => Ok(SegmentFields::new(*length, *angle, "")),
        [length, angle, radius] => Ok(SegmentFields::new(*length, *angle, *radius)),
        _ => bail!("segment '{}' must be LENGTH[:ANGLE[:RADIUS]]", text),
    }
}

fn read_item(input: Option<&Path>) -> Result<CalculationItem> {
    let contents = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
            buf
        }
    };
    let item = serde_json::from_str(&contents).map_err(CalcError::from)?;
    Ok(item)
}

// ============================================================================
// Output
// ============================================================================

fn emit(json: bool, output: CalculationOutput, render: impl FnOnce()) -> Result<()> {
    if json {
        print_json(&output)
    } else {
        render();
        Ok(())
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{}", json);
    Ok(())
}

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title.to_uppercase());
    println!("{}", RULE);
    println!();
}

fn print_catalog() {
    for category in &CATEGORIES {
        println!("{} - {}", category.name, category.description);
        let mut any = false;
        for calc in catalog::calculators_in(category.id) {
            any = true;
            println!("  {:<18} {:<22} {}", calc.id, calc.name, calc.description);
        }
        if !any {
            println!("  (none yet)");
        }
        println!();
    }
}

fn print_length(input: &str, from: LengthUnit, result: &LengthConversionResult) {
    banner(CalculatorId::LengthConverter.info().name);
    println!("  {} {} = {}", input.trim(), from, result.headline());
    println!("{}", RULE);
}

fn print_circle_area(result: &CircleAreaResult) {
    banner(CalculatorId::AreaOfCircle.info().name);
    println!("  Radius: {}", result.radius_display());
    if result.measure_type == MeasureType::Diameter {
        println!("  (from diameter)");
    }
    println!();
    println!("  Area:   {}", result.headline());
    println!("{}", RULE);
}

fn print_circumference(result: &CircumferenceResult) {
    banner(CalculatorId::Circumference.info().name);
    println!("  C = 2πr = {}", result.headline());
    println!("{}", RULE);
}

fn print_bend(id: CalculatorId, result: &BendResult) {
    banner(id.info().name);
    println!("  Bend allowance: {}", result.headline());
    println!("  Setback:        {}", result.setback_display());
    println!("  Bend deduction: {}", result.deduction_headline());
    println!();
    let primary = match id {
        CalculatorId::BendDeduction => result.deduction_headline(),
        _ => result.headline(),
    };
    println!("{}", RULE);
    println!("  RESULT: {}", primary);
    println!("{}", RULE);
}

fn print_flat_pattern(result: &FlatPatternResult) {
    banner(CalculatorId::FlatPattern.info().name);
    if result.per_bend.is_empty() {
        println!("  No bends");
    }
    for bend in &result.per_bend {
        println!(
            "  Segment {:>2}: {:>6.1}°  R {:<10} BA {}",
            bend.index,
            bend.angle_deg,
            result.display(bend.radius).to_string(),
            result.display(bend.bend_allowance)
        );
    }
    println!();
    println!("  Σ straight:       {}", result.display(result.sum_straight));
    println!("  Σ bend allowance: {}", result.display(result.sum_bend_allowance));
    println!();
    println!("{}", RULE);
    println!("  FLAT LENGTH: {}", result.headline());
    println!("{}", RULE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_forms() {
        let straight = parse_segment("10").unwrap();
        assert_eq!(straight, SegmentFields::new("10", "0", ""));

        let bent = parse_segment("20:90:2").unwrap();
        assert_eq!(bent, SegmentFields::new("20", "90", "2"));

        assert!(parse_segment("1:2:3:4").is_err());
    }

    #[test]
    fn test_cli_parses_flat_pattern() {
        let cli = Cli::try_parse_from([
            "shopcalc", "flat-pattern", "--thickness", "1", "--k-factor", "0.4", "--radius", "2", "10:0", "20:90",
        ])
        .unwrap();
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_material_args_apply_before_lengths() {
        let cli = Cli::try_parse_from([
            "shopcalc", "bend-allowance", "--angle", "90", "--radius", "1", "--thickness", "1", "--units", "in",
            "--preset", "aluminum",
        ])
        .unwrap();
        let Commands::BendAllowance(args) = &cli.command else {
            panic!("expected bend-allowance");
        };
        let form = bend_form(args, &CalculatorSettings::default());
        assert_eq!(form.unit_system(), UnitSystem::Inches);
        assert_eq!(form.inside_radius, "1");
        assert_eq!(form.k_factor, "0.33");
    }

    #[test]
    fn test_invalid_input_is_calc_error() {
        let cli = Cli::try_parse_from(["shopcalc", "circumference", "-5"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert_eq!(err.downcast_ref::<CalcError>().map(|e| e.error_code()), Some("INVALID_INPUT"));
    }

    #[test]
    fn test_negative_bend_angle_reaches_validation() {
        let cli = Cli::try_parse_from([
            "shopcalc", "bend-allowance", "--angle", "-1", "--radius", "1", "--thickness", "1",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        let calc_err = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc_err.error_code(), "INVALID_INPUT");
        assert!(calc_err.is_input_error());
    }

    #[test]
    fn test_negative_options_and_segments_parse() {
        let cli = Cli::try_parse_from([
            "shopcalc", "flat-pattern", "--thickness", "-1", "--radius", "1", "--k-factor", "-0.1", "10", "-5:90",
        ])
        .unwrap();
        let Commands::FlatPattern { thickness, material, segments, .. } = &cli.command else {
            panic!("expected flat-pattern");
        };
        assert_eq!(thickness, "-1");
        assert_eq!(material.k_factor.as_deref(), Some("-0.1"));
        assert_eq!(segments, &vec!["10".to_string(), "-5:90".to_string()]);

        let err = run(&cli).unwrap_err();
        assert_eq!(err.downcast_ref::<CalcError>().map(|e| e.error_code()), Some("INVALID_INPUT"));
    }

    #[test]
    fn test_negative_segment_length_is_invalid_input() {
        let cli = Cli::try_parse_from(["shopcalc", "flat-pattern", "--thickness", "1", "--radius", "1", "10", "-5:90"])
            .unwrap();
        let err = run(&cli).unwrap_err();
        match err.downcast_ref::<CalcError>() {
            Some(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "segments[2].length"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_unknown_unit_rejected_by_parser() {
        assert!(Cli::try_parse_from(["shopcalc", "length", "1", "--from", "parsec"]).is_err());
    }
}
