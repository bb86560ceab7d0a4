use clap::Parser;

use arsimto::cli::Cli;

fn run(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let mut out = Vec::new();
    cli.execute(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn no_flags_reports_sample_record() {
    let output = run(&["arsimto"]);
    assert_eq!(
        output,
        "Not collecting!\n\
         We will do plain black n white\n\
         Object:{\"foo\":\"bar\",\"ip\":\"10.18.1.100\",\"name\":\"mach100\"}\n"
    );
}

#[test]
fn collect_and_colour_flags_are_echoed() {
    let output = run(&["arsimto", "--collect=alice@example.com", "-c"]);
    assert_eq!(
        output,
        "Collecting from  alice@example.com\n\
         We will do colour\n\
         Object:{\"foo\":\"bar\",\"ip\":\"10.18.1.100\",\"name\":\"mach100\"}\n"
    );
}

#[test]
fn awkward_collect_uris_still_take_the_collecting_branch() {
    for uri in ["a b c", "ssh://root@10.0.0.1:22/", "héllo", "\"quoted\""] {
        let output = run(&["arsimto", "--collect", uri]);
        assert!(
            output.starts_with(&format!("Collecting from  {uri}\n")),
            "unexpected status line for uri {uri:?}: {output}"
        );
    }
}

#[test]
fn empty_collect_value_takes_the_not_collecting_branch() {
    let output = run(&["arsimto", "--collect", ""]);
    assert!(output.starts_with("Not collecting!\n"));
}

#[test]
fn record_is_fixed_regardless_of_flags() {
    for args in [
        vec!["arsimto"],
        vec!["arsimto", "-c"],
        vec!["arsimto", "--collect", "bob@mach200"],
    ] {
        let output = run(&args);
        assert!(
            output.ends_with("Object:{\"foo\":\"bar\",\"ip\":\"10.18.1.100\",\"name\":\"mach100\"}\n"),
            "unexpected report for args {args:?}: {output}"
        );
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = run(&["arsimto", "--collect", "host1", "-c"]);
    let second = run(&["arsimto", "--collect", "host1", "-c"]);
    assert_eq!(first, second);
}
