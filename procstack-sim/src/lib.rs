//! procstack シミュレータ
//!
//! このクレートは、プロセスレコードの読み込み、`calls` をたどった呼び出しチェーン（スレッド）の
//! 構築、各チェーンの実行時間の集計、メニューコマンドの解釈を提供します。
//! チェーンの保持には `procstack-lstack` の `Lstack` を使います。

pub mod command;
pub mod loader;
pub mod process;
pub mod processor;

pub use command::{parse_thread_choice, Command};
pub use loader::{load_processes, parse_processes};
pub use process::Process;
pub use processor::{
    Processor, ProcessorConfig, Thread, ThreadReport, ThreadSummary, DEFAULT_DELIMITER,
    DEFAULT_THREADS,
};

// 他のクレートから使用するために再エクスポート
pub use procstack_lstack::{Lstack, StackError};

/// シミュレータの結果型
pub type Result<T> = anyhow::Result<T>;
