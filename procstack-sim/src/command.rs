//! メニューコマンド

/// メニューコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// スレッドの内容を表示（番号未指定なら選択を促す）
    DisplayThread(Option<usize>),
    /// 全てのスレッドを実行
    StartThreads,
    /// スレッドごとのプロセス数を表示
    ListThreads,
    /// 読み込んだプロセス一覧を表示
    Processes,
    /// ヘルプ表示
    Help,
    /// 終了
    Quit,
}

impl Command {
    /// コマンド文字列をパースする
    ///
    /// メニュー番号（`1`〜`3`）と単語の両方を受け付けます。
    pub fn parse(input: &str) -> Option<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return None;
        }

        match parts[0] {
            "1" | "display" | "d" | "show" => match parts.len() {
                1 => Some(Command::DisplayThread(None)),
                2 => parts[1].parse().ok().map(|n| Command::DisplayThread(Some(n))),
                _ => None,
            },
            "2" | "start" | "s" => Some(Command::StartThreads),
            "3" | "quit" | "q" | "exit" => Some(Command::Quit),
            "list" | "ls" => Some(Command::ListThreads),
            "processes" | "ps" => Some(Command::Processes),
            "help" | "h" | "?" => Some(Command::Help),
            _ => None,
        }
    }
}

/// スレッド番号の入力を検証する
///
/// `1..=thread_count` の範囲にある数値だけを受け付けます。
pub fn parse_thread_choice(input: &str, thread_count: usize) -> Option<usize> {
    let choice: i64 = input.trim().parse().ok()?;
    let choice = usize::try_from(choice).ok()?;
    (1..=thread_count).contains(&choice).then_some(choice)
}
