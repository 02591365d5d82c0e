//! End-to-end generation tests: policy selection, visibility filtering,
//! artifact layout, and failure handling.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tempfile::TempDir;

use asjs_ast::{ClassNode, CompilationUnit, TypeNode};
use asjs_common::{ProblemSeverity, ProblemSink};
use asjs_driver::{
    ArtifactWriter, FileSystemWriter, OutputPolicy, TargetSettings, UnitAssembler,
};

fn unit(qualified_name: &str) -> CompilationUnit {
    let local = qualified_name.rsplit('.').next().unwrap();
    CompilationUnit::new(qualified_name, TypeNode::Class(ClassNode::new(local)))
}

fn expected_text(package: &str, qualified_name: &str) -> String {
    format!("as3.provide(\"{package}\");\n\n{qualified_name} = function() {{\n}};\n")
}

/// Records every write without touching the filesystem.
#[derive(Default)]
struct RecordingWriter {
    writes: Mutex<Vec<(PathBuf, String)>>,
}

impl RecordingWriter {
    fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().unwrap().clone()
    }
}

impl ArtifactWriter for RecordingWriter {
    fn write_artifact(&self, path: &Path, contents: &str) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

/// Fails every write, recording which paths were attempted.
#[derive(Default)]
struct FailingWriter {
    attempts: Mutex<Vec<PathBuf>>,
}

impl ArtifactWriter for FailingWriter {
    fn write_artifact(&self, path: &Path, _contents: &str) -> Result<()> {
        self.attempts.lock().unwrap().push(path.to_path_buf());
        Err(anyhow!("disk full"))
    }
}

#[test]
fn per_class_files_writes_one_artifact_per_unit() {
    let dir = TempDir::new().unwrap();
    let settings = TargetSettings::new(OutputPolicy::ClassesAsFiles, dir.path().join("out"));
    let problems = ProblemSink::new();
    let units = vec![unit("a.Foo"), unit("b.Bar")];

    let written = UnitAssembler::new(&settings, &problems)
        .generate(&units, &FileSystemWriter)
        .unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("out/a/Foo.js"),
            dir.path().join("out/b/Bar.js"),
        ]
    );
    assert_eq!(
        std::fs::read_to_string(&written[0]).unwrap(),
        expected_text("a", "a.Foo")
    );
    assert_eq!(
        std::fs::read_to_string(&written[1]).unwrap(),
        expected_text("b", "b.Bar")
    );
    assert!(problems.is_empty());
}

#[test]
fn excluded_namespaces_never_materialize() {
    let settings = TargetSettings::new(OutputPolicy::ClassesAsFiles, "out");
    let problems = ProblemSink::new();
    let units = vec![
        unit("as3.Runtime"),
        unit("guice.Injector"),
        unit("app.Main"),
    ];
    let writer = RecordingWriter::default();

    let written = UnitAssembler::new(&settings, &problems)
        .generate(&units, &writer)
        .unwrap();

    assert_eq!(written, vec![PathBuf::from("out/app/Main.js")]);
    let writes = writer.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, PathBuf::from("out/app/Main.js"));
}

#[test]
fn bundle_concatenates_units_in_input_order() {
    let settings =
        TargetSettings::new(OutputPolicy::SingleBundle, "out").with_app_name("App");
    let problems = ProblemSink::new();
    let units = vec![unit("a.Foo"), unit("b.Bar")];
    let writer = RecordingWriter::default();

    let written = UnitAssembler::new(&settings, &problems)
        .generate(&units, &writer)
        .unwrap();

    assert_eq!(written, vec![PathBuf::from("out/App.js")]);
    let writes = writer.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(
        writes[0].1,
        format!(
            "{}{}",
            expected_text("a", "a.Foo"),
            expected_text("b", "b.Bar")
        )
    );
}

#[test]
fn bundle_without_app_name_records_an_error_and_writes_nothing() {
    let settings = TargetSettings::new(OutputPolicy::SingleBundle, "out");
    let problems = ProblemSink::new();
    let writer = RecordingWriter::default();

    let written = UnitAssembler::new(&settings, &problems)
        .generate(&[unit("a.Foo")], &writer)
        .unwrap();

    assert!(written.is_empty());
    assert!(writer.writes().is_empty());
    let recorded = problems.collect();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].severity, ProblemSeverity::Error);
}

#[test]
fn class_file_failure_aborts_the_remaining_queue() {
    let settings = TargetSettings::new(OutputPolicy::ClassesAsFiles, "out");
    let problems = ProblemSink::new();
    let units = vec![unit("a.Foo"), unit("b.Bar")];
    let writer = FailingWriter::default();

    let result = UnitAssembler::new(&settings, &problems).generate(&units, &writer);

    assert!(result.is_err());
    let attempts = writer.attempts.lock().unwrap();
    assert_eq!(*attempts, vec![PathBuf::from("out/a/Foo.js")]);
}

#[test]
fn custom_extension_flows_into_artifact_paths() {
    let mut settings =
        TargetSettings::new(OutputPolicy::SingleBundle, "out").with_app_name("App");
    settings.extension = "mjs".into();
    let problems = ProblemSink::new();
    let writer = RecordingWriter::default();

    let written = UnitAssembler::new(&settings, &problems)
        .generate(&[unit("a.Foo")], &writer)
        .unwrap();

    assert_eq!(written, vec![PathBuf::from("out/App.mjs")]);
}

#[test]
fn bundle_output_is_deterministic() {
    let settings =
        TargetSettings::new(OutputPolicy::SingleBundle, "out").with_app_name("App");
    let units = vec![unit("a.Foo"), unit("b.Bar"), unit("c.Baz")];

    let run = || {
        let problems = ProblemSink::new();
        let writer = RecordingWriter::default();
        UnitAssembler::new(&settings, &problems)
            .generate(&units, &writer)
            .unwrap();
        writer.writes().remove(0).1
    };

    assert_eq!(run(), run());
}
