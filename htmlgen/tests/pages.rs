use htmlgen_core::{
    MPath,
    config::Config,
    context::Context,
    fs::{read_string, to_mpath, write_string},
};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("htmlgen-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn builds_a_page_from_a_nested_project_dir() {
    let root = to_mpath(scratch_dir("build")).unwrap();
    write_string(
        &root.join(Config::FILE_NAME),
        "[render]\nheadings = \"verbatim\"\n[build]\noutput_dir = \"out\"\n",
    )
    .unwrap();
    let page = root.join("pages/docs/intro.toml");
    write_string(
        &page,
        "doctype = true\n[[node]]\nkind = \"heading\"\nlevel = 9\ncontent = \"Intro\"\n",
    )
    .unwrap();

    let nested = root.join("pages/docs");
    let ctx = Context::new(nested.into_std_path_buf()).unwrap();
    let output = ctx.build_file(&page).unwrap();

    assert_eq!(output, root.join("out/docs/intro.html"));
    assert_eq!(read_string(&output).unwrap(), "<!DOCTYPE html><9 >Intro</9>");
}

#[test]
fn malformed_page_is_an_error() {
    let root = to_mpath(scratch_dir("malformed")).unwrap();
    let page: MPath = root.join("broken.toml");
    write_string(&page, "[[node]]\nkind = \"element\"\n").unwrap();

    let ctx = Context::from_config(Config::parse("", root.clone()).unwrap(), root);
    let error = ctx.process_file(&page).unwrap_err();

    assert!(error.to_string().contains("broken.toml"));
}
