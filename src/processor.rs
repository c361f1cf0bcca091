//! Core generation pipeline.
//! A single linear pass: validate inputs, copy the template tree with token
//! substitution, rename the placeholder package path, then stamp launcher
//! icons. Any failure after the output directory was created removes it
//! again, so no partial project is ever left behind as a result.

use globset::GlobSet;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Settings;
use crate::constants::{JAVA_SRC_ROOT, PLACEHOLDER_PACKAGE, TEXT_EXTENSIONS};
use crate::error::{Error, Result};
use crate::icons;
use crate::ignore::load_ignore_patterns;
use crate::renderer::Renderer;
use crate::validation::{validate_icon_path, validate_package_id, validate_url};

fn path_io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |e| Error::PathIoError { path: path.to_path_buf(), source: e }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(path_io_error(path))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(path_io_error(parent))?;
    }
    fs::write(path, content).map_err(path_io_error(path))
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(path_io_error(parent))?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(path_io_error(dest))
}

/// Carries the source file's permission bits over to the destination,
/// so an executable gradlew wrapper stays executable.
fn copy_permissions(source: &Path, dest: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(path_io_error(source))?;
    fs::set_permissions(dest, metadata.permissions()).map_err(path_io_error(dest))
}

/// Returns true when the file's extension marks it as text-bearing and
/// therefore subject to token substitution.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Converts a validated package identifier to its source directory path
/// (`com.example.app` becomes `com/example/app`).
pub fn package_to_path(package_id: &str) -> PathBuf {
    package_id.split('.').collect()
}

/// Ensures the output directory does not collide with existing content.
///
/// # Arguments
/// * `output_dir` - Target directory path for generated output
/// * `force` - Whether to overwrite an existing directory
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and force
///   is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        if !force {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: output_dir.display().to_string(),
            });
        }
        warn!("Output directory exists, removing: {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(path_io_error(output_dir))?;
    }
    Ok(output_dir.to_path_buf())
}

/// Executes the copy, substitute and rename stages for one generation run.
pub struct Processor<'a> {
    engine: &'a dyn Renderer,
    template_root: &'a Path,
    output_root: &'a Path,
    settings: &'a Settings,
    ignored: GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn Renderer,
        template_root: &'a Path,
        output_root: &'a Path,
        settings: &'a Settings,
        ignored: GlobSet,
    ) -> Self {
        Self { engine, template_root, output_root, settings, ignored }
    }

    /// Runs the pipeline stages in order.
    pub fn run(&self) -> Result<()> {
        self.copy_and_substitute()?;
        self.rename_package()
    }

    /// Walks the template tree, substituting tokens in text files and
    /// copying everything else verbatim.
    fn copy_and_substitute(&self) -> Result<()> {
        let context = self.settings.context();

        for entry in WalkDir::new(self.template_root) {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            let path = entry.path();
            let relative = path
                .strip_prefix(self.template_root)
                .map_err(|e| Error::TemplateError(e.to_string()))?;
            if relative.as_os_str().is_empty() {
                continue;
            }

            if self.ignored.is_match(relative) {
                debug!("Skipping ignored path: {}", relative.display());
                continue;
            }

            let target = self.output_root.join(relative);

            if path.is_dir() {
                fs::create_dir_all(&target).map_err(path_io_error(&target))?;
            } else if is_text_file(path) {
                debug!("Substituting: {}", relative.display());
                let content = read_file(path)?;
                let rendered = self.engine.render(&content, &context).map_err(|e| match e {
                    Error::UnresolvedToken { token, .. } => {
                        Error::UnresolvedToken { token, path: relative.to_path_buf() }
                    }
                    other => other,
                })?;
                write_file(&target, &rendered)?;
                copy_permissions(path, &target)?;
            } else {
                debug!("Copying: {}", relative.display());
                copy_file(path, &target)?;
            }
        }

        Ok(())
    }

    /// Moves the placeholder package directory to the path derived from the
    /// requested package identifier and prunes emptied parents.
    fn rename_package(&self) -> Result<()> {
        let java_root = self.output_root.join(JAVA_SRC_ROOT);
        let old_path = java_root.join(package_to_path(PLACEHOLDER_PACKAGE));
        let new_path = java_root.join(package_to_path(&self.settings.package_id));

        if !old_path.exists() {
            warn!("Placeholder package path not found: {}", old_path.display());
            return Ok(());
        }
        if old_path == new_path {
            return Ok(());
        }

        debug!("Renaming package path to {}", new_path.display());

        if let Some(parent) = new_path.parent() {
            fs::create_dir_all(parent).map_err(path_io_error(parent))?;
        }
        fs::rename(&old_path, &new_path).map_err(path_io_error(&old_path))?;

        // Remove intermediate directories the move emptied, up to the java
        // source root.
        let mut current = old_path.parent().map(Path::to_path_buf);
        while let Some(dir) = current {
            if dir == java_root || !dir.exists() {
                break;
            }
            let is_empty = fs::read_dir(&dir).map_err(path_io_error(&dir))?.next().is_none();
            if !is_empty {
                break;
            }
            fs::remove_dir(&dir).map_err(path_io_error(&dir))?;
            current = dir.parent().map(Path::to_path_buf);
        }

        Ok(())
    }
}

/// Generates a wrapper project from a template directory.
///
/// Validates every input before the first filesystem mutation, then runs the
/// copy/substitute/rename pipeline and optional icon stamping. If anything
/// fails after the output directory was created, the directory is removed
/// before the error is returned.
///
/// # Arguments
/// * `engine` - Placeholder substitution engine
/// * `settings` - Resolved generation settings
/// * `template_dir` - Template root directory
/// * `output_dir` - Target directory for the generated project
/// * `force` - Overwrite an existing output directory
pub fn generate(
    engine: &dyn Renderer,
    settings: &Settings,
    template_dir: &Path,
    output_dir: &Path,
    force: bool,
) -> Result<()> {
    validate_package_id(&settings.package_id)?;
    validate_url(&settings.url)?;

    if !template_dir.is_dir() {
        return Err(Error::TemplateError(format!(
            "template directory not found: {}",
            template_dir.display()
        )));
    }

    // Decode the icon up front so an unreadable image fails before any copy.
    let icon = match &settings.icon {
        Some(path) => {
            validate_icon_path(path)?;
            Some(icons::load_icon(path)?)
        }
        None => None,
    };

    let ignored = load_ignore_patterns(template_dir)?;
    let output_root = ensure_output_dir(output_dir, force)?;

    let processor = Processor::new(engine, template_dir, &output_root, settings, ignored);
    let result = processor
        .run()
        .and_then(|()| match &icon {
            Some(image) => icons::write_launcher_icons(image, &output_root),
            None => Ok(()),
        });

    if result.is_err() && output_root.exists() {
        if let Err(cleanup) = fs::remove_dir_all(&output_root) {
            warn!("Failed to clean up '{}': {}", output_root.display(), cleanup);
        }
    }

    result
}
