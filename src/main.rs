//! web2apk's main application entry point and orchestration logic.
//! Handles command-line argument parsing, settings resolution, and the
//! generation pipeline invocation.

use web2apk::{
    cli::{get_args, Args},
    config::{load_config_file, Settings},
    error::{default_error_handler, Result},
    processor::generate,
    renderer::TokenRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the optional configuration file
/// 2. Resolves settings (flags override file values)
/// 3. Runs the generation pipeline
/// 4. Prints build instructions for the generated project
fn run(args: Args) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => Some(load_config_file(path)?),
        None => None,
    };
    let settings = Settings::resolve(&args, file_config)?;

    let engine = TokenRenderer::new();
    generate(&engine, &settings, &args.template_dir, &args.output_dir, args.force)?;

    println!("Wrapper project generated successfully in {}.", args.output_dir.display());
    println!();
    println!("Next steps:");
    println!("  1. cd {}", args.output_dir.display());
    println!("  2. ./gradlew assembleDebug");
    println!("  3. Find the APK in: app/build/outputs/apk/debug/");
    Ok(())
}
