//! バリアント定義の確認ツール
//!
//! # 使用例
//!
//! ```bash
//! # 登録済みバリアントの一覧
//! cargo run -p rfairy-variants -- list
//!
//! # 設定ファイルを追加で読み込んで要約を表示
//! cargo run -p rfairy-variants -- --config variants.ini show mychess --json
//!
//! # 設定ファイルの検査（失敗があれば終了コード 1）
//! cargo run -p rfairy-variants -- check variants.toml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rfairy_core::registry::VariantRegistry;
use rfairy_core::variant::VariantSummary;

#[derive(Parser, Debug)]
#[command(name = "rfairy-variants", version, about = "バリアント定義の一覧・要約・検査")]
struct Cli {
    /// 追加で読み込む設定ファイル（.toml / .ini、複数指定可）
    #[arg(long = "config", value_name = "FILE", global = true)]
    configs: Vec<PathBuf>,

    /// 設定ファイルの検査を省略する（未知のフィールドは警告して読み飛ばす）
    #[arg(long, global = true)]
    no_validate: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// 登録済みのバリアント名を登録順に表示
    List,
    /// バリアントの要約を表示
    Show {
        /// バリアント名
        name: String,
        /// JSON で出力
        #[arg(long)]
        json: bool,
    },
    /// 設定ファイルを検査つきで読み込み、結果を表示
    Check {
        /// 設定ファイル
        file: PathBuf,
    },
}

/// 組み込みバリアントと `--config` のファイルを読み込む
fn load_registry(configs: &[PathBuf], validate: bool) -> Result<VariantRegistry> {
    let mut registry = VariantRegistry::with_builtins();
    for path in configs {
        let report = registry
            .load_path(path, validate)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?;
        for err in &report.failed {
            eprintln!("warning: {}: {err}", path.display());
        }
    }
    Ok(registry)
}

fn run_list(registry: &VariantRegistry) {
    for name in registry.names() {
        println!("{name}");
    }
}

fn run_show(registry: &VariantRegistry, name: &str, json: bool) -> Result<()> {
    let Some(variant) = registry.get(name) else {
        bail!("バリアント '{name}' は登録されていません");
    };
    let summary = VariantSummary::new(name, variant);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn run_check(registry: &mut VariantRegistry, file: &Path) -> Result<bool> {
    let report = registry
        .load_path(file, true)
        .with_context(|| format!("設定ファイルを読み込めません: {}", file.display()))?;
    for name in &report.loaded {
        println!("ok     {name}");
    }
    for err in &report.failed {
        println!("failed {err}");
    }
    println!("{} loaded, {} failed", report.loaded.len(), report.failed.len());
    Ok(report.is_ok())
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let mut registry = load_registry(&cli.configs, !cli.no_validate)?;
    log::debug!("{} variants registered", registry.len());

    match cli.cmd {
        Cmd::List => run_list(&registry),
        Cmd::Show { name, json } => run_show(&registry, &name, json)?,
        Cmd::Check { file } => {
            if !run_check(&mut registry, &file)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
