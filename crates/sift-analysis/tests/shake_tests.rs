use sift_analysis::{
    BindingScope, EmitError, Error, NativeRuntime, OutputLayout, Shaker, UsageAnalysis,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn create_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for (path, content) in files {
        let file = dir.path().join(path);
        fs::create_dir_all(file.parent().expect("parent")).expect("create dir");
        fs::write(&file, content).expect("write file");
    }
    dir
}

fn shaker(project: &TempDir, entry: &str) -> Shaker<sift_analysis::Configured> {
    Shaker::new()
        .entry(entry)
        .out_dir("dist")
        .cwd(project.path())
        .runtime(Arc::new(NativeRuntime::new()))
}

fn output(project: &TempDir, path: &str) -> String {
    fs::read_to_string(project.path().join(path)).expect("output file")
}

#[tokio::test]
async fn unused_export_next_to_a_used_one_is_removed() {
    let project = create_project(&[
        ("main.js", "import { a } from './x.js';\nconsole.log(a);\n"),
        ("x.js", "export const a = 1;\nexport const b = 2;\n"),
    ]);

    shaker(&project, "main.js").shake().await.expect("shake");

    let x = output(&project, "dist/x.js");
    assert!(x.contains("export const a = 1;"));
    assert!(!x.contains("b = 2"));
}

#[tokio::test]
async fn exported_function_survives_only_through_usage() {
    let files = [
        ("main.js", "import { a } from './x.js';\nconsole.log(a);\n"),
        ("x.js", "export const a = 1;\nexport function f() {\n  return 2;\n}\n"),
    ];

    let project = create_project(&files);
    let result = shaker(&project, "main.js").shake().await.expect("shake");
    assert!(!output(&project, "dist/x.js").contains("function f"));
    assert_eq!(
        result.removed().map(|(_, name)| name).collect::<Vec<_>>(),
        vec!["f"]
    );

    let project = create_project(&files);
    shaker(&project, "main.js")
        .protect_exported_functions(true)
        .shake()
        .await
        .expect("shake");
    assert!(output(&project, "dist/x.js").contains("export function f()"));
}

#[tokio::test]
async fn renamed_import_keeps_the_exported_name() {
    let project = create_project(&[
        ("main.js", "import { a as b } from './x.js';\nconsole.log(b);\n"),
        ("x.js", "export const a = 1;\nexport const c = 3;\n"),
    ]);

    shaker(&project, "main.js").shake().await.expect("shake");

    let x = output(&project, "dist/x.js");
    assert!(x.contains("export const a = 1;"));
    assert!(!x.contains("c = 3"));
}

#[tokio::test]
async fn diamond_dependency_gets_the_union_of_its_importers() {
    let files = [
        (
            "main.js",
            "import { l } from './left.js';\nimport { r } from './right.js';\nl();\nr();\n",
        ),
        ("left.js", "import { a } from './shared.js';\nexport const l = () => a;\n"),
        ("right.js", "import { b } from './shared.js';\nexport const r = () => b;\n"),
        (
            "shared.js",
            "export const a = 1;\nexport const b = 2;\nexport const c = 3;\n",
        ),
    ];

    for scope in [BindingScope::Shared, BindingScope::PerDependency] {
        let project = create_project(&files);
        shaker(&project, "main.js")
            .binding_scope(scope)
            .shake()
            .await
            .expect("shake");

        let shared = output(&project, "dist/shared.js");
        assert!(shared.contains("export const a = 1;"), "{scope:?}");
        assert!(shared.contains("export const b = 2;"), "{scope:?}");
        assert!(!shared.contains("c = 3"), "{scope:?}");
    }
}

#[tokio::test]
async fn entry_is_never_pruned() {
    let project = create_project(&[
        (
            "main.js",
            "import { a } from './x.js';\nconst unused = 1;\nfunction helper() {}\nexport const api = a;\n",
        ),
        ("x.js", "export const a = 1;\n"),
    ]);

    let result = shaker(&project, "main.js").shake().await.expect("shake");

    let main = output(&project, "dist/main.js");
    assert!(main.contains("const unused = 1;"));
    assert!(main.contains("function helper()"));
    assert!(main.contains("export const api = a;"));
    let entry = result.module(project.path().join("main.js")).expect("entry outcome");
    assert!(entry.is_entry);
    assert!(!entry.pruned);
    assert!(entry.report.is_unchanged());
}

#[tokio::test]
async fn shaking_the_output_again_changes_nothing() {
    let project = create_project(&[
        (
            "main.js",
            "import { a, g } from './x.js';\nimport { y } from './y.js';\nconsole.log(a, g(), y);\n",
        ),
        (
            "x.js",
            "export const a = 1;\nexport const b = 2;\nexport function g() {\n  return a;\n}\nexport function h() {}\n",
        ),
        ("y.js", "export let y = 1, z = 2;\n"),
    ]);

    shaker(&project, "main.js").shake().await.expect("first shake");
    Shaker::new()
        .entry("dist/main.js")
        .out_dir("dist2")
        .cwd(project.path())
        .runtime(Arc::new(NativeRuntime::new()))
        .shake()
        .await
        .expect("second shake");

    for file in ["main.js", "x.js", "y.js"] {
        assert_eq!(
            output(&project, &format!("dist/{file}")),
            output(&project, &format!("dist2/{file}")),
            "{file} changed on the second run"
        );
    }
    let x = output(&project, "dist/x.js");
    assert!(x.contains("export function g()"));
    assert!(!x.contains("function h"));
    assert!(!x.contains("b = 2"));
    assert!(!output(&project, "dist/y.js").contains("z = 2"));
}

#[tokio::test]
async fn import_cycles_terminate() {
    let project = create_project(&[
        (
            "main.js",
            "import { fromB } from './b.js';\nexport const fromA = 1;\nexport const extra = 2;\nfromB();\n",
        ),
        (
            "b.js",
            "import { fromA } from './main.js';\nexport const fromB = () => fromA;\nexport const dead = 0;\n",
        ),
    ]);

    let result = shaker(&project, "main.js").shake().await.expect("shake");

    assert_eq!(result.stats.modules, 2);
    assert_eq!(result.stats.edges, 2);
    assert!(output(&project, "dist/main.js").contains("export const extra = 2;"));
    let b = output(&project, "dist/b.js");
    assert!(b.contains("fromB"));
    assert!(!b.contains("dead"));
}

#[tokio::test]
async fn bare_imports_are_reported_not_followed() {
    let project = create_project(&[(
        "main.js",
        "import { h } from 'preact';\nimport { a } from './x.js';\nh(a);\n",
    ), ("x.js", "export const a = 1;\n")]);

    let result = shaker(&project, "main.js").shake().await.expect("shake");

    assert_eq!(result.external, vec!["preact"]);
    assert_eq!(result.stats.modules, 2);
}

#[tokio::test]
async fn preserve_layout_mirrors_directories() {
    let project = create_project(&[
        ("src/main.js", "import { u } from '../lib/util.js';\nu();\n"),
        ("lib/util.js", "export const u = () => 1;\nexport const v = 2;\n"),
    ]);

    shaker(&project, "src/main.js").shake().await.expect("shake");

    assert!(output(&project, "dist/src/main.js").contains("from \"../lib/util.js\""));
    assert!(!output(&project, "dist/lib/util.js").contains("v = 2"));
}

#[tokio::test]
async fn flatten_layout_rejects_colliding_basenames() {
    let project = create_project(&[
        (
            "main.js",
            "import { a } from './a/util.js';\nimport { b } from './b/util.js';\n",
        ),
        ("a/util.js", "export const a = 1;\n"),
        ("b/util.js", "export const b = 1;\n"),
    ]);

    let err = shaker(&project, "main.js")
        .layout(OutputLayout::Flatten)
        .shake()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Emit(EmitError::OutputCollision { .. })));
    assert!(!project.path().join("dist").exists());
}

#[tokio::test]
async fn scoped_analysis_ignores_shadowed_names() {
    let files = [
        (
            "main.js",
            "import { a } from './x.js';\nexport function g(a) {\n  return a;\n}\n",
        ),
        ("x.js", "export const a = 1;\nconst internal = 2;\n"),
    ];

    // Name-based: the parameter `a` counts as a use, so x.js is pruned.
    let project = create_project(&files);
    shaker(&project, "main.js").shake().await.expect("shake");
    assert!(!output(&project, "dist/x.js").contains("internal"));

    // Scope-resolved: nothing is forwarded, so x.js is emitted whole.
    let project = create_project(&files);
    let result = shaker(&project, "main.js")
        .usage_analysis(UsageAnalysis::Scoped)
        .shake()
        .await
        .expect("shake");
    assert!(output(&project, "dist/x.js").contains("const internal = 2;"));
    assert_eq!(result.stats.pruned_modules, 0);
}

#[tokio::test]
async fn export_lists_keep_their_local_declarations() {
    let project = create_project(&[
        ("main.js", "import { c } from './x.js';\nconsole.log(c);\n"),
        (
            "x.js",
            "const a = 1;\nconst b = 2;\nconst gone = 3;\nexport { a, b as c };\n",
        ),
    ]);

    shaker(&project, "main.js").shake().await.expect("shake");

    let x = output(&project, "dist/x.js");
    assert!(x.contains("const a = 1;"));
    assert!(x.contains("const b = 2;"));
    assert!(x.contains("export { a, b as c };"));
    assert!(!x.contains("gone"));
}

#[tokio::test]
async fn missing_dependency_is_fatal() {
    let project = create_project(&[("main.js", "import { a } from './nope.js';\n")]);

    let err = shaker(&project, "main.js").shake().await.unwrap_err();

    assert!(matches!(err, Error::Walk(_)));
    assert!(err.to_string().contains("nope.js"));
}
