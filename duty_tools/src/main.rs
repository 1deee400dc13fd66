use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use duty_rotation::{
    application::time::{today_local, year_month0},
    domain::week_calendar::{adjacent_week, month_name},
    infrastructure::config_repo::{load_or_default, ConfigRepository},
    current_week_index, init_logging, weeks_in_month, ReportFormat, Roster, RosterConfig,
};

// 引数を構造体として定義します
#[derive(Parser)]
#[command(name = "duty_tools")]
#[command(version = "0.1.0")]
#[command(about = "週替わりの当番表を表示・出力します", long_about = None)]
struct Cli {
    /// 当番表の設定ファイル (JSON). 省略時は組み込みの設定
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// ログレベル (off|error|warn|info|debug|trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// 年・月の指定 (省略時は今日)
#[derive(clap::Args, Clone, Copy)]
struct MonthArgs {
    #[arg(short, long)]
    year: Option<i32>,

    /// 1-12
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
}

impl MonthArgs {
    /// (年, 月 0-11)
    fn resolve(self) -> (i32, u32) {
        let (this_year, this_month) = year_month0(today_local());
        let year = self.year.unwrap_or(this_year);
        let month = self.month.map(|m| m - 1).unwrap_or(this_month);
        (year, month)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Csv,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// その週の当番一覧を表示します
    Week {
        #[command(flatten)]
        month: MonthArgs,

        /// 月内の週番号 (1始まり). 省略時は今日を含む週
        #[arg(short, long)]
        week: Option<usize>,

        /// 次の週を表示します (月末なら翌月へ)
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// 前の週を表示します (月初なら前月へ)
        #[arg(long)]
        prev: bool,
    },
    /// メンバー個人の月間予定を表示します
    Member {
        name: String,

        #[command(flatten)]
        month: MonthArgs,
    },
    /// 月の週区切りを表示します
    Weeks {
        #[command(flatten)]
        month: MonthArgs,
    },
    /// 月間レポートを出力します
    Report {
        #[command(flatten)]
        month: MonthArgs,

        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,

        /// 出力先. 省略時は標準出力
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// 洗面台掃除の順番を表示します
    Basin,
    /// 設定ファイルを検証します
    Validate,
    /// 組み込みの設定をファイルに書き出します
    InitConfig {
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// 週番号 (1始まり) を index に変換する. 省略時は今日を含む週 (無ければ先頭)
fn resolve_week_index(year: i32, month: u32, week: Option<usize>) -> Result<usize> {
    match week {
        Some(0) => Err(anyhow!("week numbers start at 1")),
        Some(n) => Ok(n - 1),
        None => Ok(current_week_index(
            &weeks_in_month(year, month as i32),
            today_local(),
        )),
    }
}

/// --next / --prev の適用
fn navigate(
    year: i32,
    month: u32,
    index: usize,
    next: bool,
    prev: bool,
) -> Result<(i32, u32, usize)> {
    if !next && !prev {
        return Ok((year, month, index));
    }
    adjacent_week(year, month, index, next)
        .ok_or_else(|| anyhow!("no week {} next to {}-{:02}", index + 1, year, month + 1))
}

fn show_week(
    roster: &Roster,
    month: MonthArgs,
    week: Option<usize>,
    next: bool,
    prev: bool,
) -> Result<()> {
    let (year, month) = month.resolve();
    let week_index = resolve_week_index(year, month, week)?;
    let (year, month, week_index) = navigate(year, month, week_index, next, prev)?;
    debug!(
        "event=cli_week year={} month={} week_index={}",
        year,
        month + 1,
        week_index
    );
    let view = roster.week_assignments(year, month as i32, week_index, today_local())?;

    println!(
        "{} {} / Week {}{}",
        month_name(view.year, view.month),
        view.year,
        view.week.sequence_number,
        if view.is_now { "  [NOW]" } else { "" }
    );
    println!("{}", view.week.label);
    println!();

    let width = view
        .assignments
        .iter()
        .map(|a| a.member.chars().count())
        .max()
        .unwrap_or(0);
    for a in &view.assignments {
        let pad = width - a.member.chars().count();
        println!("  {}{}  {} ({})", a.member, " ".repeat(pad), a.duty, a.duty_display);
    }
    Ok(())
}

fn show_member(roster: &Roster, name: &str, month: MonthArgs) -> Result<()> {
    let (year, month) = month.resolve();
    let (member_index, _) = roster.find_member(name)?;
    let view_index = current_week_index(&weeks_in_month(year, month as i32), today_local());
    let schedule = roster.member_schedule(member_index, year, month as i32, view_index)?;

    println!("{} ({} {})", schedule.member, month_name(year, month), year);
    println!("current: {}", schedule.current_duty);
    for row in &schedule.rows {
        println!(
            "{} Week {} {:<16} {}",
            if row.is_current { ">" } else { " " },
            row.week.sequence_number,
            row.week.label,
            row.duty_display
        );
    }
    Ok(())
}

fn show_weeks(roster: &Roster, month: MonthArgs) -> Result<()> {
    let (year, month) = month.resolve();

    println!("{} {}", month_name(year, month), year);
    for week in weeks_in_month(year, month as i32) {
        println!(
            "  W{} {} .. {}  {:<16} abs={}",
            week.sequence_number,
            week.start,
            week.end,
            week.label,
            roster.week_offset(&week)
        );
    }
    Ok(())
}

fn export_report(
    roster: &Roster,
    month: MonthArgs,
    format: ReportFormat,
    out: Option<PathBuf>,
) -> Result<()> {
    let (year, month) = month.resolve();
    let report = roster.monthly_report(year, month as i32);
    let text = report.render(format)?;

    if let Some(path) = out {
        let path = if path.is_dir() {
            path.join(report.file_name(format))
        } else {
            path
        };
        fs::write(&path, text)
            .with_context(|| format!("failed to write report `{}`", path.display()))?;
        info!(
            "event=report_write status=ok format={} path={}",
            format,
            path.display()
        );
        println!("wrote {}", path.display());
    } else {
        print!("{text}");
    }
    Ok(())
}

fn show_basin(roster: &Roster) {
    let chain = roster
        .config()
        .basin_order
        .iter()
        .map(|name| name.split(' ').next().unwrap_or(name))
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{chain}");
}

fn validate(roster: &Roster, config_path: Option<&Path>) {
    let config = roster.config();
    match config_path {
        Some(path) => println!("config: {}", path.display()),
        None => println!("config: (built-in)"),
    }
    println!("reference week: {}", config.reference_date);
    println!("duties: {}", config.duties.len());
    for member in &config.members {
        println!("  {} (offset {})", member.name, member.phase_offset);
    }
    println!("ok");
}

fn init_config(out: PathBuf) -> Result<()> {
    ConfigRepository::new(&out)
        .save(&RosterConfig::default())
        .with_context(|| format!("failed to write config `{}`", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}

fn load_roster(config: Option<&Path>) -> Result<Roster> {
    let config = load_or_default(config)?;
    Ok(Roster::new(config)?)
}

fn run(args: Cli) -> Result<()> {
    init_logging(&args.log_level).map_err(|e| anyhow!(e))?;
    let config_path = args.config.as_deref();

    // パターンマッチで分岐処理
    match args.command {
        Commands::Week {
            month,
            week,
            next,
            prev,
        } => show_week(&load_roster(config_path)?, month, week, next, prev),
        Commands::Member { name, month } => {
            show_member(&load_roster(config_path)?, &name, month)
        }
        Commands::Weeks { month } => show_weeks(&load_roster(config_path)?, month),
        Commands::Report { month, format, out } => {
            export_report(&load_roster(config_path)?, month, format.into(), out)
        }
        Commands::Basin => {
            show_basin(&load_roster(config_path)?);
            Ok(())
        }
        Commands::Validate => {
            validate(&load_roster(config_path)?, config_path);
            Ok(())
        }
        // 設定を書き出すだけなので読み込みは不要
        Commands::InitConfig { out } => init_config(out),
    }
}

fn main() {
    let args = Cli::parse();

    if let Err(e) = run(args) {
        eprintln!("エラー: {e:#}");
        std::process::exit(1);
    }
}
