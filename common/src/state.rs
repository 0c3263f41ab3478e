//! 解析画面の状態遷移
//!
//! idle → loading（送信）→ result / error（完了）→ idle（ファイル再選択）
//!
//! 送信ごとにチケットを発行し、最新のチケットの完了だけを反映する。
//! ファイル再選択と画面破棄は実行中のリクエストを無効化する。

use crate::error::Error;
use crate::types::AnalysisResult;

/// 送信ごとに発行される識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 完了を反映したかどうか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    /// より新しいリクエストまたはファイル再選択で無効化済み
    Stale,
    /// 画面が破棄済み
    TornDown,
}

/// 解析画面のローカル状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzeState {
    has_file: bool,
    loading: bool,
    error: Option<String>,
    result: Option<AnalysisResult>,
    issued: u64,
    torn_down: bool,
}

impl AnalyzeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// ファイル選択
    ///
    /// 直前のエラーと結果をクリアし、実行中のリクエストを無効化する。
    pub fn select_file(&mut self) {
        self.has_file = true;
        self.loading = false;
        self.error = None;
        self.result = None;
        self.issued += 1;
    }

    /// ファイル選択の拒否（画像以外など）
    ///
    /// 選択済みファイルは破棄され、検証エラーを表示する。
    pub fn reject_file(&mut self, error: &Error) {
        self.select_file();
        self.has_file = false;
        self.error = Some(error.user_message());
    }

    /// 送信開始
    ///
    /// ファイル未選択なら検証エラーを同期的に設定して `Err` を返す。
    pub fn begin_submit(&mut self) -> Result<RequestTicket, Error> {
        if !self.has_file {
            let error = Error::NoFileSelected;
            self.error = Some(error.user_message());
            return Err(error);
        }

        self.loading = true;
        self.error = None;
        self.result = None;
        self.issued += 1;
        Ok(RequestTicket(self.issued))
    }

    /// 送信完了
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<AnalysisResult, Error>,
    ) -> Applied {
        if self.torn_down {
            return Applied::TornDown;
        }
        if ticket.0 != self.issued {
            log::debug!("dropping stale response #{} (latest #{})", ticket.0, self.issued);
            return Applied::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => {
                log::warn!("analysis #{} failed: {}", ticket.0, error);
                self.result = None;
                self.error = Some(error.user_message());
            }
        }
        Applied::Yes
    }

    /// 画面破棄
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.loading = false;
    }
}
