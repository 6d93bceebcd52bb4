use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cotton-classifier")]
#[command(about = "綿の葉・株の病害判定クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像1枚を判定
    Predict {
        /// 画像ファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// プレビュー(Data URI)をファイルに保存
        #[arg(long)]
        preview_out: Option<PathBuf>,
    },

    /// フォルダ内の画像をまとめて判定
    Scan {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 判定できるラベルと説明を表示
    Labels,

    /// 設定を表示/編集
    Config {
        /// 予測APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
