use clap::Parser;
use kiln::cli::Args;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("kiln")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["cool-tool"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name, "cool-tool");
    assert_eq!(parsed.author, "Author Name");
    assert_eq!(parsed.version, "0.1.0");
    assert_eq!(parsed.python_version, "3.9");
    assert_eq!(parsed.branch, "main");
    assert!(parsed.description.is_none());
    assert!(parsed.import_name.is_none());
    assert!(parsed.org.is_none());
    assert!(!parsed.private);
    assert!(!parsed.no_init);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_options() {
    let args = make_args(&[
        "cool-tool",
        "--author",
        "Jane Doe",
        "--description",
        "A very cool tool",
        "--import-name",
        "cooltool",
        "--version",
        "1.2.3",
        "--python-version",
        "3.11",
        "--private",
        "--branch",
        "trunk",
        "--org",
        "cool-org",
        "--no-init",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.author, "Jane Doe");
    assert_eq!(parsed.description.as_deref(), Some("A very cool tool"));
    assert_eq!(parsed.import_name.as_deref(), Some("cooltool"));
    assert_eq!(parsed.version, "1.2.3");
    assert_eq!(parsed.python_version, "3.11");
    assert_eq!(parsed.branch, "trunk");
    assert_eq!(parsed.org.as_deref(), Some("cool-org"));
    assert!(parsed.private);
    assert!(parsed.no_init);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&[
        "-a", "Jane Doe", "-d", "desc", "-i", "cooltool", "-p", "3.12", "-b", "dev", "-v",
        "cool-tool",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name, "cool-tool");
    assert_eq!(parsed.author, "Jane Doe");
    assert_eq!(parsed.description.as_deref(), Some("desc"));
    assert_eq!(parsed.import_name.as_deref(), Some("cooltool"));
    assert_eq!(parsed.python_version, "3.12");
    assert_eq!(parsed.branch, "dev");
    assert!(parsed.verbose);
}

#[test]
fn test_version_option_is_project_version() {
    // --version is the generated project's version, not an app version flag
    let args = make_args(&["--version", "2.0.0", "cool-tool"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert_eq!(parsed.version, "2.0.0");
}

#[test]
fn test_missing_project_name() {
    let args = make_args(&["--author", "Jane Doe"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["cool-tool", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
