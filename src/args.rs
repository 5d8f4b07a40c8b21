// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::options::{DEFAULT_TOP_N, InputFormat, RowsFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "corpus_profile",
    version = crate::VERSION,
    about = "テキストコーパスの文字/トークン/バイグラム頻度と行メトリクスの集計ツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 入力ファイル
    pub input: PathBuf,

    /// 入力フォーマット（省略時は拡張子から推定）
    #[arg(long, value_enum)]
    pub input_format: Option<CliInputFormat>,

    /// jsonl/tsv で読み取るフィールド名（tsv では必須）
    #[arg(long)]
    pub field: Option<String>,

    /// プロファイル設定ファイル (YAML または JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 小文字化しない
    #[arg(long)]
    pub keep_case: bool,

    /// HTMLタグ対の計測を無効化
    #[arg(long)]
    pub no_html_tags: bool,

    /// 特殊文字率の計測を無効化
    #[arg(long)]
    pub no_special_chars: bool,

    /// 空白率の計測を無効化
    #[arg(long)]
    pub no_whitespace: bool,

    /// 上位/下位チャートの件数
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// 行メトリクス表の出力フォーマット
    #[arg(long, value_enum)]
    pub rows: Option<CliRowsFormat>,

    /// 先頭N件だけ表示して終了（N省略時は5）
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "5")]
    pub head: Option<usize>,

    /// チャートを表示しない
    #[arg(long)]
    pub no_charts: bool,

    /// プロファイル全体を JSON で出力
    #[arg(long, conflicts_with_all = ["rows", "head"])]
    pub json: bool,

    /// ログ詳細度 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliInputFormat {
    Lines,
    Jsonl,
    Tsv,
}

impl From<CliInputFormat> for InputFormat {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Lines => InputFormat::Lines,
            CliInputFormat::Jsonl => InputFormat::Jsonl,
            CliInputFormat::Tsv => InputFormat::Tsv,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliRowsFormat {
    Table,
    Csv,
    Json,
    Jsonl,
}

impl From<CliRowsFormat> for RowsFormat {
    fn from(value: CliRowsFormat) -> Self {
        match value {
            CliRowsFormat::Table => RowsFormat::Table,
            CliRowsFormat::Csv => RowsFormat::Csv,
            CliRowsFormat::Json => RowsFormat::Json,
            CliRowsFormat::Jsonl => RowsFormat::Jsonl,
        }
    }
}
