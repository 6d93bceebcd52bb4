//! tracingによるログ設定
//!
//! 出力先はstderr。レベルは環境変数 `COTTON_LOG` で上書きできる。
//!
//! ```bash
//! COTTON_LOG=debug cotton-classifier predict leaf.png
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "COTTON_LOG";

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "cotton_classifier=debug,cotton_common=debug,warn"
    } else {
        "cotton_classifier=info,cotton_common=info,warn"
    };

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_file(verbose)
                .with_line_number(verbose),
        )
        .try_init();
}
