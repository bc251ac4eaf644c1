use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use std::io::Write;
use svgpoly::cli::{run, Config};
use tempfile::NamedTempFile;

const INPUT: &str = r#"<svg><title>L</title><path d="M0,0 L5,0 L10,0 L10,5"/></svg>"#;

#[test]
fn test_cmdline_empty_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin("").assert().failure().code(1);
}

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert_contains!(output, "Usage");
    assert_contains!(output, "--precision");
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin(INPUT)
        .assert()
        .success()
        .stdout("# L\n0,0 5,0 10,0 10,5\n");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--simplify", "--scale", "2", "-"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("# L\n0,0 20,0 20,10\n");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--bbox")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("0 0 10 5\n");
}

#[test]
fn test_cmdline_bad_input() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd
        .write_stdin(r#"<svg><path d="M0,0 L"/></svg>"#)
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert_contains!(String::from_utf8(output).unwrap(), "Malformed");
}

#[test]
fn test_cmdline_config() {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, "{INPUT}").expect("tmpfile write failed");
    let in_path = tmpfile.path().to_str().unwrap();
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let out_path = outfile.path().to_str().unwrap();

    let config = Config::from_cmdline(&format!(
        "{} --translate 1,1 -o {out_path} {in_path}",
        crate_name!()
    ))
    .expect("cmdline should be valid");
    run(config).expect("run failed");
    let output = std::fs::read_to_string(out_path).unwrap();
    assert_eq!(output, "# L\n1,1 6,1 11,1 11,6\n");

    // output must not overwrite input
    let config = Config::from_cmdline(&format!("{} -o {in_path} {in_path}", crate_name!()));
    assert!(config.is_err());
}

#[cfg(feature = "json")]
#[test]
fn test_cmdline_json() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd
        .args(["--format", "json"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();
    assert_contains!(output, r#""title":"L""#);
    assert_contains!(output, r#""bbox":[0.0,0.0,10.0,5.0]"#);
}
