use client_assets::assets::{
    use_client_assets, BuildMetadata, FileProvider, PhysicalFileProvider, WebHostEnvironment,
    CLIENT_ASSETS_DIRECTORY_KEY,
};
use client_assets::config::FailurePolicy;
use client_assets::libs::{LibraryCopier, LIBRARIES};
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn write(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn populate_node_modules(base: &Path) {
    for lib in LIBRARIES {
        let dist = base.join("node_modules").join(lib.name).join("dist");
        write(&dist.join("js").join(format!("{}.js", lib.name)), lib.name.as_bytes());
        write(&dist.join("css/site.css"), b"body { margin: 0 }");
    }
}

fn assert_same_tree(left: &Path, right: &Path) {
    for entry in walkdir::WalkDir::new(left) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(left).unwrap();
        let other = right.join(relative);
        if entry.file_type().is_dir() {
            assert!(other.is_dir(), "missing dir {}", other.display());
        } else {
            assert_eq!(fs::read(entry.path()).unwrap(), fs::read(&other).unwrap());
        }
    }
}

#[test]
fn copies_libraries_into_custom_root_and_serves_them_through_composed_provider() {
    let tmp = tempfile::tempdir().unwrap();
    let assets_dir = tmp.path().join("ClientAssets");
    populate_node_modules(&assets_dir);

    // Copy into <content root>/obj/client/lib, which then becomes the client assets dir
    let output_root = format!("{}/", tmp.path().join("obj/client").display());
    let report = LibraryCopier::new(&assets_dir, Some(&output_root)).run(FailurePolicy::Continue);
    assert!(report.all_succeeded());
    assert_eq!(report.outcomes.len(), 4);

    for lib in LIBRARIES {
        assert_same_tree(
            &assets_dir.join("node_modules").join(lib.name).join("dist"),
            &tmp.path().join("obj/client/lib").join(lib.name).join("dist"),
        );
    }

    write(&tmp.path().join("wwwroot/lib/jquery/dist/js/jquery.js"), b"stale");
    write(&tmp.path().join("wwwroot/favicon.ico"), b"icon");

    let web_root: Arc<dyn FileProvider> =
        Arc::new(PhysicalFileProvider::new(tmp.path().join("wwwroot"), Vec::new()));
    let mut env = WebHostEnvironment::new(tmp.path(), web_root, Vec::new());
    let metadata = BuildMetadata::default().with_entry(CLIENT_ASSETS_DIRECTORY_KEY, "obj/client");
    assert!(use_client_assets(&mut env, &metadata));

    let jquery = env.web_root_provider.resolve("/lib/jquery/dist/js/jquery.js").unwrap();
    assert_eq!(fs::read(jquery.path).unwrap(), b"jquery");
    let favicon = env.web_root_provider.resolve("/favicon.ico").unwrap();
    assert_eq!(fs::read(favicon.path).unwrap(), b"icon");
}

#[test]
fn second_run_produces_identical_output() {
    let tmp = tempfile::tempdir().unwrap();
    populate_node_modules(tmp.path());
    let copier = LibraryCopier::new(tmp.path(), Some("public/"));

    assert!(copier.run(FailurePolicy::Continue).all_succeeded());
    let second = copier.run(FailurePolicy::Continue);
    assert!(second.all_succeeded());

    for lib in LIBRARIES {
        assert_same_tree(
            &tmp.path().join("node_modules").join(lib.name).join("dist"),
            &tmp.path().join("public/lib").join(lib.name).join("dist"),
        );
    }
}

#[test]
fn partial_failure_is_reported_without_stopping() {
    let tmp = tempfile::tempdir().unwrap();
    populate_node_modules(tmp.path());
    fs::remove_dir_all(tmp.path().join("node_modules/bootstrap")).unwrap();

    let report = LibraryCopier::new(tmp.path(), Some("public/")).run(FailurePolicy::Continue);

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.succeeded().count(), 3);
    assert_eq!(report.failed().next().map(|o| o.library), Some("bootstrap"));
    assert!(report.outcomes[0].result.as_ref().unwrap_err().to_string().contains("does not exist"));
}
