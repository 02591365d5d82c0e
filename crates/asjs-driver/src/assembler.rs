//! Unit assembly: selects the visible compilation units, runs the emitter
//! over each, and materializes the result under the configured output policy.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use asjs_ast::CompilationUnit;
use asjs_common::{Problem, ProblemSink, SourceLocation};
use asjs_emitter::JsEmitter;

use crate::settings::{OutputPolicy, TargetSettings};
use crate::writer::ArtifactWriter;

/// Orchestrates one generation run over an ordered unit collection.
///
/// Problems recorded during emission never abort the run; materialization
/// failures do, under the per-class policy.
pub struct UnitAssembler<'a> {
    settings: &'a TargetSettings,
    problems: &'a ProblemSink,
}

impl<'a> UnitAssembler<'a> {
    pub fn new(settings: &'a TargetSettings, problems: &'a ProblemSink) -> Self {
        Self { settings, problems }
    }

    /// Run generation over `units`, in order, returning the artifact paths
    /// that were written.
    pub fn generate(
        &self,
        units: &[CompilationUnit],
        writer: &dyn ArtifactWriter,
    ) -> Result<Vec<PathBuf>> {
        let visible: Vec<&CompilationUnit> =
            units.iter().filter(|unit| self.is_visible(unit)).collect();

        match self.settings.output_policy {
            OutputPolicy::ClassesAsFiles => self.generate_class_files(&visible, writer),
            OutputPolicy::SingleBundle => self.generate_bundle(&visible, writer),
        }
    }

    /// Support-code namespaces are never re-emitted as user code.
    fn is_visible(&self, unit: &CompilationUnit) -> bool {
        let excluded = self
            .settings
            .excluded_namespace_prefixes
            .iter()
            .any(|prefix| unit.qualified_name.starts_with(prefix));
        if excluded {
            debug!(unit = %unit.qualified_name, "skipping support-code unit");
        }
        !excluded
    }

    /// One artifact per unit. Emission runs in parallel; materialization is
    /// sequential and aborts the remaining queue on the first failure, since
    /// partial per-class output is treated as stale on the next run.
    fn generate_class_files(
        &self,
        units: &[&CompilationUnit],
        writer: &dyn ArtifactWriter,
    ) -> Result<Vec<PathBuf>> {
        let emitted: Vec<String> = units.par_iter().map(|unit| self.emit_unit(unit)).collect();

        let mut written = Vec::with_capacity(units.len());
        for (unit, text) in units.iter().zip(emitted) {
            let path = self.settings.base_path.join(
                unit.qualified_name
                    .to_output_path(&self.settings.extension),
            );
            writer
                .write_artifact(&path, &text)
                .with_context(|| format!("materializing unit {}", unit.qualified_name))?;
            info!(unit = %unit.qualified_name, path = %path.display(), "wrote class file");
            written.push(path);
        }
        Ok(written)
    }

    /// All units concatenated, in input order, into one named artifact.
    fn generate_bundle(
        &self,
        units: &[&CompilationUnit],
        writer: &dyn ArtifactWriter,
    ) -> Result<Vec<PathBuf>> {
        if self.settings.app_name.is_empty() {
            self.problems.add(Problem::error(
                "bundle output requires an application name",
                SourceLocation::UNKNOWN,
            ));
            return Ok(Vec::new());
        }

        let emitted: Vec<String> = units.par_iter().map(|unit| self.emit_unit(unit)).collect();
        let bundle = emitted.concat();

        let mut file_name = PathBuf::from(&self.settings.app_name);
        file_name.set_extension(&self.settings.extension);
        let path = self.settings.base_path.join(file_name);
        writer.write_artifact(&path, &bundle)?;
        info!(units = units.len(), path = %path.display(), "wrote bundle");
        Ok(vec![path])
    }

    fn emit_unit(&self, unit: &CompilationUnit) -> String {
        let mut emitter = JsEmitter::new(self.problems);
        emitter.emit_unit(unit)
    }
}
