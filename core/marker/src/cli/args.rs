use crate::domain::command::Command;
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// -d/--data-dir（MARKER_DATA_HOME より優先）
    pub data_dir: Option<String>,
    /// install --install-dir（MARKER_HOME より優先）
    pub install_dir: Option<String>,
    pub command: Command,
}

/// 解析結果: 通常の Config、補完スクリプト生成、またはヘルプ・バージョン表示
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// clap が組み立てたヘルプ・バージョン文字列（標準出力に出して終了）
    Display(String),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::Arg::new("data-dir")
            .short('d')
            .long("data-dir")
            .value_name("directory")
            .help("Directory holding marks.txt (default: $MARKER_DATA_HOME or ~/.local/share/marker)")
            .num_args(1),
    )
    .arg(
        clap::Arg::new("generate")
            .long("generate")
            .value_name("shell")
            .help("Generate shell completion script")
            .value_parser(value_parser!(Shell))
            .num_args(1),
    )
}

fn position_arg() -> clap::Arg {
    clap::Arg::new("position")
        .required(true)
        .value_name("position")
        .help("Bookmark position as shown by search/list (starts at 1)")
        .value_parser(value_parser!(u64).range(1..))
}

fn json_flag() -> clap::Arg {
    clap::Arg::new("json")
        .long("json")
        .help("Print one JSON object per line")
        .action(ArgAction::SetTrue)
}

pub(crate) fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("marker")
            .about("Bookmark shell commands and recall them with %% placeholders")
            .version(clap::crate_version!())
            .subcommand_required(false)
            .subcommand(
                clap::Command::new("search")
                    .about("Search bookmarks (description matches rank above command matches)")
                    .arg(json_flag())
                    .arg(
                        clap::Arg::new("limit")
                            .short('n')
                            .long("limit")
                            .value_name("count")
                            .help("Show at most this many matches")
                            .value_parser(value_parser!(usize)),
                    )
                    .arg(
                        clap::Arg::new("query")
                            .num_args(0..)
                            .value_name("query")
                            .trailing_var_arg(true)
                            .allow_hyphen_values(true),
                    ),
            )
            .subcommand(
                clap::Command::new("expand")
                    .about("Fill the %% placeholders of a bookmark and print the command")
                    .arg(position_arg())
                    .arg(
                        clap::Arg::new("values")
                            .num_args(0..)
                            .value_name("value")
                            .trailing_var_arg(true)
                            .allow_hyphen_values(true),
                    ),
            )
            .subcommand(
                clap::Command::new("add")
                    .about("Bookmark a command")
                    .arg(
                        clap::Arg::new("description")
                            .short('D')
                            .long("description")
                            .value_name("text")
                            .help("Text shown and matched by search")
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("template")
                            .required(true)
                            .value_name("command")
                            .allow_hyphen_values(true),
                    ),
            )
            .subcommand(
                clap::Command::new("list")
                    .about("List all bookmarks in store order")
                    .arg(json_flag()),
            )
            .subcommand(
                clap::Command::new("remove")
                    .about("Remove a bookmark")
                    .arg(position_arg()),
            )
            .subcommand(clap::Command::new("check").about("Report duplicate bookmarks"))
            .subcommand(
                clap::Command::new("install")
                    .about("Write the shell shim and seed marks.txt (existing bookmarks are kept)")
                    .arg(
                        clap::Arg::new("install-dir")
                            .long("install-dir")
                            .value_name("directory")
                            .help("Directory containing bin/marker.sh (default: $MARKER_HOME)")
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("skip-checks")
                            .long("skip-checks")
                            .help("Do not verify the login shell and its version")
                            .action(ArgAction::SetTrue),
                    ),
            ),
    )
}

fn get_position(m: &clap::ArgMatches) -> usize {
    m.get_one::<u64>("position").copied().unwrap_or(1) as usize
}

fn get_strings(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|i| i.cloned().collect())
        .unwrap_or_default()
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let data_dir = matches.get_one::<String>("data-dir").cloned();
    let mut install_dir = None;

    let command = match matches.subcommand() {
        Some(("search", m)) => Command::Search {
            query: get_strings(m, "query").join(" "),
            json: m.get_flag("json"),
            limit: m.get_one::<usize>("limit").copied(),
        },
        Some(("expand", m)) => Command::Expand {
            position: get_position(m),
            values: get_strings(m, "values"),
        },
        Some(("add", m)) => Command::Add {
            template: m.get_one::<String>("template").cloned().unwrap_or_default(),
            description: m.get_one::<String>("description").cloned().unwrap_or_default(),
        },
        Some(("list", m)) => Command::List {
            json: m.get_flag("json"),
        },
        Some(("remove", m)) => Command::Remove {
            position: get_position(m),
        },
        Some(("check", _)) => Command::Check,
        Some(("install", m)) => {
            install_dir = m.get_one::<String>("install-dir").cloned();
            Command::Install {
                skip_checks: m.get_flag("skip-checks"),
            }
        }
        Some((name, _)) => {
            return Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            )))
        }
        None => {
            return Err(Error::invalid_argument(
                "a command is required (try 'marker --help')",
            ))
        }
    };

    Ok(Config {
        data_dir,
        install_dir,
        command,
    })
}

/// コマンドラインを解析する（テスト用に引数列を受け取る版）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_clap_command().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(ParseOutcome::Display(e.to_string()))
                }
                _ => {
                    let msg = e.to_string();
                    let msg = msg.trim_start_matches("error: ").trim_end();
                    Err(Error::invalid_argument(msg.to_string()))
                }
            };
        }
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// プロセスの引数を解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "marker", &mut std::io::stdout());
}
