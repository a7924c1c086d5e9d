use crate::common::SnapshotFixture;

fn run(args: &[&str]) -> String {
    let fixture = SnapshotFixture::interpreter();
    let output = fixture.command().args(args).output().expect("binary runs");
    assert!(output.status.success(), "treels {args:?} failed: {output:?}");
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn no_arguments() {
    assert_eq!(run(&[]), "LICENSE\nREADME.md\nast\n");
}

#[test]
fn show_all() {
    assert_eq!(run(&["-A"]), ".gitignore\nLICENSE\nREADME.md\nast\n");
}

#[test]
fn long_format() {
    assert_eq!(
        run(&["-l"]),
        "-rwxr-xr-x 1071 Nov 14 05:57 LICENSE\n\
         -rwxr-xr-x 83 Nov 14 05:57 README.md\n\
         drw-r--r-- 4096 Nov 14 10:28 ast\n"
    );
}

#[test]
fn long_format_human_readable() {
    assert_eq!(
        run(&["-l", "-h"]),
        "-rwxr-xr-x 1.0 KB Nov 14 05:57 LICENSE\n\
         -rwxr-xr-x 83 B Nov 14 05:57 README.md\n\
         drw-r--r-- 4.0 KB Nov 14 10:28 ast\n"
    );
}

#[test]
fn human_readable_alone_is_short_form() {
    assert_eq!(run(&["-h"]), "LICENSE\nREADME.md\nast\n");
}

#[test]
fn reverse() {
    assert_eq!(run(&["-r"]), "ast\nREADME.md\nLICENSE\n");
}

#[test]
fn sort_by_time() {
    assert_eq!(run(&["-t"]), "LICENSE\nREADME.md\nast\n");
}

#[test]
fn sort_by_time_reversed_with_hidden() {
    assert_eq!(run(&["-Atr"]), "ast\nREADME.md\nLICENSE\n.gitignore\n");
}

#[test]
fn filter_file() {
    assert_eq!(run(&["--filter", "file"]), "LICENSE\nREADME.md\n");
}

#[test]
fn filter_dir() {
    assert_eq!(run(&["--filter=dir"]), "ast\n");
}

#[test]
fn specific_path() {
    assert_eq!(run(&["ast"]), "go.mod\nast.go\n");
}

#[test]
fn file_path_is_listed_alone() {
    assert_eq!(run(&["-l", "ast/go.mod"]), "-rw-r--r-- 225 Nov 14 10:29 ./ast/go.mod\n");
}

#[test]
fn hidden_file_path_is_always_shown() {
    assert_eq!(run(&[".gitignore"]), "./.gitignore\n");
}

#[test]
fn non_existent_path() {
    assert_eq!(
        run(&["non_existent_path"]),
        "error: cannot access 'non_existent_path': No such file or directory\n"
    );
}

#[test]
fn non_existent_nested_path() {
    assert_eq!(
        run(&["-l", "ast/missing.go"]),
        "error: cannot access 'ast/missing.go': No such file or directory\n"
    );
}
