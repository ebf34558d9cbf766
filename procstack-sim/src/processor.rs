//! 呼び出しチェーン（スレッド）の構築と実行

use crate::{loader, Lstack, Process, Result};
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// デフォルトのスレッド数
pub const DEFAULT_THREADS: usize = 5;

/// デフォルトのフィールド区切り文字
pub const DEFAULT_DELIMITER: char = '|';

/// 1本の呼び出しチェーン
///
/// 先頭（インデックス 0）が最後にたどり着いたプロセスです。
pub type Thread = Lstack<Rc<Process>>;

/// プロセッサの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// 作成するスレッド数（先頭から何レコードをチェーンの起点にするか）
    pub threads: usize,
    /// レコードのフィールド区切り文字
    pub delimiter: char,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// スレッドの概要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadSummary {
    /// 1始まりのスレッド番号
    pub number: usize,
    pub size: usize,
}

/// スレッド実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadReport {
    /// 1始まりのスレッド番号
    pub number: usize,
    /// 実行時間の合計（ミリ秒）
    pub total_duration: u64,
}

/// プロセッサ
///
/// 読み込んだプロセスを保持し、各起点プロセスから `call` をたどって
/// スレッドを組み立てます。スレッドはプロセスを共有参照で持ちます。
pub struct Processor {
    processes: Vec<Rc<Process>>,
    threads: Vec<Thread>,
}

impl Processor {
    /// プロセス一覧からプロセッサを作成する（スレッドはまだ作らない）
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes: processes.into_iter().map(Rc::new).collect(),
            threads: Vec::new(),
        }
    }

    /// ファイルからプロセスを読み込み、設定どおりにスレッドを作成する
    pub fn load<P: AsRef<Path>>(path: P, config: &ProcessorConfig) -> Result<Self> {
        let processes = loader::load_processes(path, config.delimiter)?;
        let mut processor = Self::new(processes);
        processor.populate_threads(config.threads);
        Ok(processor)
    }

    /// 読み込んだ全てのプロセスを取得する
    pub fn processes(&self) -> &[Rc<Process>] {
        &self.processes
    }

    /// 指定IDを持つ最初のプロセスのインデックスを返す
    pub fn index_of(&self, id: i32) -> Option<usize> {
        self.processes.iter().position(|p| p.id == id)
    }

    /// 指定インデックスのプロセスを起点に呼び出しチェーンを構築する
    pub fn build_chain(&self, start: usize) -> Result<Thread> {
        let first = self.processes.get(start).ok_or_else(|| {
            anyhow::anyhow!(
                "Process index {} is out of range ({} processes)",
                start,
                self.processes.len()
            )
        })?;
        Ok(self.chain_from(first))
    }

    /// `first` から呼び出し先IDに一致するプロセスがなくなるまでたどる
    ///
    /// 既にチェーン内にあるプロセスに戻った場合（循環）もそこで止めます。
    fn chain_from(&self, first: &Rc<Process>) -> Thread {
        let mut chain = Thread::new();
        chain.push(Rc::clone(first));

        let mut next = self.index_of(first.call);
        while let Some(index) = next {
            let process = &self.processes[index];
            if let Some(pos) = chain.find(process) {
                warn!(
                    "Call cycle detected: '{}' (id={}) is already at position {} of the chain started by '{}'",
                    process.name, process.id, pos, first.name
                );
                break;
            }

            chain.push(Rc::clone(process));
            next = self.index_of(process.call);
        }

        debug!("Built chain from '{}' with {} processes", first.name, chain.len());
        chain
    }

    /// 先頭から `count` 個のプロセスを起点にスレッドを作成する
    ///
    /// プロセス数が足りない場合はプロセス数に切り詰めます。
    /// 既存のスレッドは置き換えられます。作成したスレッド数を返します。
    pub fn populate_threads(&mut self, count: usize) -> usize {
        if count > self.processes.len() {
            warn!(
                "Requested {} threads but only {} processes are loaded",
                count,
                self.processes.len()
            );
        }

        self.threads = self
            .processes
            .iter()
            .take(count)
            .map(|first| self.chain_from(first))
            .collect();

        info!("Populated {} threads", self.threads.len());
        self.threads.len()
    }

    /// 全てのスレッドを取得する
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    /// スレッド数
    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }

    /// 各スレッドの番号と要素数を取得する
    pub fn list_threads(&self) -> Vec<ThreadSummary> {
        self.threads
            .iter()
            .enumerate()
            .map(|(i, thread)| ThreadSummary {
                number: i + 1,
                size: thread.len(),
            })
            .collect()
    }

    /// 1始まりの番号でスレッドを取得する
    pub fn thread(&self, number: usize) -> Result<&Thread> {
        number
            .checked_sub(1)
            .and_then(|i| self.threads.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Thread {} does not exist (valid: 1-{})",
                    number,
                    self.threads.len()
                )
            })
    }

    /// 全てのスレッドを実行する
    ///
    /// 各スレッドを先頭から空になるまで取り出し、実行時間を合計します。
    /// 実行済みのスレッドは空になるため、再実行すると合計は 0 になります。
    pub fn start_threads(&mut self) -> Vec<ThreadReport> {
        self.threads
            .iter_mut()
            .enumerate()
            .map(|(i, thread)| {
                let mut total_duration = 0u64;
                while let Some(process) = thread.pop() {
                    debug!("Thread {}: running '{}' ({} ms)", i + 1, process.name, process.duration);
                    total_duration += u64::from(process.duration);
                }
                ThreadReport {
                    number: i + 1,
                    total_duration,
                }
            })
            .collect()
    }
}
