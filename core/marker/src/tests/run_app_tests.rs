use std::fs;

use crate::cli::Config;
use crate::domain::command::Command;
use crate::ports::inbound::UseCaseRunner;
use crate::usecase::InstallInput;
use crate::wiring::App;
use common::error::Error;

use super::{app_with, bash5, dirs_in};

/// install 済みの App（サンプル 5 件入り）
fn installed() -> (tempfile::TempDir, App) {
    let tmp = tempfile::tempdir().unwrap();
    let app = app_with(dirs_in(tmp.path()), bash5());
    app.install_use_case.run(&InstallInput::default()).unwrap();
    (tmp, app)
}

/// Runner で 1 コマンド実行する（テスト用の入口）
fn run_command(app: App, command: Command) -> (App, Result<i32, Error>) {
    let runner = crate::Runner { app };
    let result = runner.run(Config {
        data_dir: None,
        install_dir: None,
        command,
    });
    (runner.app, result)
}

#[test]
fn test_search_tar_ranks_description_hits_first() {
    let (_tmp, app) = installed();
    let report = app.search_use_case.run("tar", None).unwrap();
    let top: Vec<(usize, u32)> = report
        .hits
        .iter()
        .take(2)
        .map(|h| (h.position, h.score))
        .collect();
    // 両方とも description と template に当たり、同点はストア順
    assert_eq!(top, vec![(1, 150), (2, 150)]);
    assert_eq!(report.hits[0].record.description, "tar ");
    assert!(report.warnings.is_empty());
}

#[test]
fn test_expand_grep_sample() {
    let (_tmp, app) = installed();
    let (cmd, _) = app
        .expand_use_case
        .run(3, &["TODO".to_string()])
        .unwrap();
    assert_eq!(cmd, r#"grep -irn "TODO" *"#);
}

#[test]
fn test_add_then_expand_without_placeholders() {
    let (tmp, app) = installed();
    let (position, dropped) = app.marks_use_case.add("pwd", "print dir").unwrap();
    assert_eq!(position, 6);
    assert!(dropped.is_empty());

    let (cmd, _) = app.expand_use_case.run(6, &[]).unwrap();
    assert_eq!(cmd, "pwd");

    let text = fs::read_to_string(tmp.path().join("data/marks.txt")).unwrap();
    assert!(text.ends_with("\npwd##print dir"));
}

#[test]
fn test_runner_expand_arity_mismatch_is_usage_error() {
    let (_tmp, app) = installed();
    let (_, result) = run_command(
        app,
        Command::Expand {
            position: 1,
            values: vec!["only-one".to_string()],
        },
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("2"), "got: {}", err);
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_runner_remove_out_of_range() {
    let (tmp, app) = installed();
    let before = fs::read(tmp.path().join("data/marks.txt")).unwrap();
    let (_, result) = run_command(app, Command::Remove { position: 9 });
    assert_eq!(result.unwrap_err().exit_code(), 64);
    // 失敗時はファイルに触れない
    assert_eq!(fs::read(tmp.path().join("data/marks.txt")).unwrap(), before);
}

#[test]
fn test_runner_remove_then_list() {
    let (_tmp, app) = installed();
    let (app, result) = run_command(app, Command::Remove { position: 1 });
    assert_eq!(result.unwrap(), 0);
    let report = app.search_use_case.list().unwrap();
    assert_eq!(report.hits.len(), 4);
    assert_eq!(report.hits[0].record.description, "untar ");
}

#[test]
fn test_runner_check_reports_duplicates() {
    let (_tmp, app) = installed();
    let (app, result) = run_command(app, Command::Check);
    assert_eq!(result.unwrap(), 0);

    app.marks_use_case.add("tar cvzf %%.tar.gz %%", "tar ").unwrap();
    let (groups, _) = app.check_use_case.duplicates().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].positions, vec![1, 6]);

    let (_, result) = run_command(app, Command::Check);
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn test_runner_search_json() {
    let (_tmp, app) = installed();
    let (_, result) = run_command(
        app,
        Command::Search {
            query: "untar".to_string(),
            json: true,
            limit: Some(1),
        },
    );
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_runner_without_store_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app_with(dirs_in(tmp.path()), bash5());
    let (_, result) = run_command(app, Command::List { json: false });
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_undecodable_lines_are_skipped_on_read() {
    let tmp = tempfile::tempdir().unwrap();
    let dirs = dirs_in(tmp.path());
    fs::create_dir_all(&dirs.data_dir).unwrap();
    fs::write(dirs.marks_file(), b"ls -la##list\n\xff\xfe\n\nuptime##load").unwrap();
    let app = app_with(dirs, bash5());

    let report = app.search_use_case.list().unwrap();
    assert_eq!(report.hits.len(), 2);
    assert_eq!(report.hits[1].position, 2);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].line_no, 2);
}
