use super::*;

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["kira-platemap", "order.txt", "filter.txt"]).unwrap();
    assert_eq!(cli.probe_file, PathBuf::from("order.txt"));
    assert_eq!(cli.filter_file, PathBuf::from("filter.txt"));
    assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    assert!(cli.output.is_none());
    assert!(!cli.keep);
    assert!(cli.debug.is_none());
}

#[test]
fn test_cli_flags() {
    let cli = Cli::try_parse_from([
        "kira-platemap",
        "order.txt",
        "filter.txt",
        "-o",
        "out",
        "-c",
        "plates.json",
        "--keep",
        "-d",
    ])
    .unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("out")));
    assert_eq!(cli.config, PathBuf::from("plates.json"));
    assert!(cli.keep);
    assert_eq!(cli.debug, Some(PathBuf::from(logging::DEFAULT_DEBUG_LOG)));

    let cli = Cli::try_parse_from([
        "kira-platemap",
        "order.txt",
        "filter.txt",
        "--debug",
        "run.log",
    ])
    .unwrap();
    assert_eq!(cli.debug, Some(PathBuf::from("run.log")));
}

#[test]
fn test_cli_requires_both_files() {
    assert!(Cli::try_parse_from(["kira-platemap", "order.txt"]).is_err());
}

#[test]
fn test_resolve_output_dir_defaults_to_input_stem() {
    let out = resolve_output_dir(None, Path::new("/tmp/orders/plateA.txt"));
    assert_eq!(out, PathBuf::from("/tmp/orders/plateA"));
    let out = resolve_output_dir(None, Path::new("/tmp/orders/plateA.txt.gz"));
    assert_eq!(out, PathBuf::from("/tmp/orders/plateA"));
    let out = resolve_output_dir(None, Path::new("/tmp/orders/plateA.tsv.gz"));
    assert_eq!(out, PathBuf::from("/tmp/orders/plateA"));
}

#[test]
fn test_resolve_output_dir_explicit() {
    let out = resolve_output_dir(Some(Path::new("/tmp/out")), Path::new("plateA.txt"));
    assert_eq!(out, PathBuf::from("/tmp/out"));
    let out = resolve_output_dir(Some(Path::new("")), Path::new("plateA.txt"));
    assert_eq!(out, PathBuf::from("plateA"));
}
