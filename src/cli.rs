use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "health-reports")]
#[command(about = "検査レポートのカード表示・アップロード前チェック", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レポートをカード形式で表示
    List {
        /// レポートJSONファイル（省略時は設定またはサンプルデータ）
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// カード表示モデルをJSONで出力
    Export {
        /// レポートJSONファイル
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// レポートJSONを検査（ID重複・日付形式）
    Validate {
        /// レポートJSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// アップロード可能なファイルか確認（送信はしない）
    Check {
        /// ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のレポートJSONファイルを設定
        #[arg(long)]
        set_reports_file: Option<PathBuf>,

        /// 入場アニメーションの遅延（ミリ秒/枚）
        #[arg(long)]
        set_stagger_ms: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
