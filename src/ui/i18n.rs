//! User-visible text, per locale. Every message a user can see about the
//! schedule or the report log comes from here.

use crate::models::server::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    ServerTime,
    ColumnType,
    ColumnTime,
    ColumnContent,
    NoData,
    LoadFailed,
    ShowMore,
    Close,
    EmptyComment,
    ReportSent,
    ReportsCleared,
    NoReports,
    ReportsHeader,
    CommentHint,
    WatchFooter,
    ToggleInert,
    LogWriteFailed,
}

pub const PLACEHOLDER_TIME: &str = "--:--";
pub const PLACEHOLDER_CONTENT: &str = "-------";

pub fn text(locale: Locale, msg: Msg) -> &'static str {
    use Locale::*;
    use Msg::*;
    match (msg, locale) {
        (ServerTime, Zh) => "台灣時間",
        (ServerTime, Ja) => "日本時間",
        (ColumnType, Zh) => "類型",
        (ColumnType, Ja) => "種類",
        (ColumnTime, _) => "時間",
        (ColumnContent, Zh) => "內容",
        (ColumnContent, Ja) => "内容",
        (NoData, Zh) => "今日無排程",
        (NoData, Ja) => "本日の予定なし",
        (LoadFailed, Zh) => "時間表讀取失敗（顯示先前資料）",
        (LoadFailed, Ja) => "時間表の読み込みに失敗しました（前回のデータを表示中）",
        (ShowMore, Zh) => "其他時間 ▼",
        (ShowMore, Ja) => "その他 ▼",
        (Close, Zh) => "關閉 ▲",
        (Close, Ja) => "閉じる ▲",
        (EmptyComment, Zh) => "請輸入內容",
        (EmptyComment, Ja) => "内容を入力してください",
        (ReportSent, Zh) => "回報內容已送出",
        (ReportSent, Ja) => "送信完了",
        (ReportsCleared, Zh) => "回報已清除",
        (ReportsCleared, Ja) => "報告を削除しました",
        (NoReports, Zh) => "目前沒有回報",
        (NoReports, Ja) => "報告はありません",
        (ReportsHeader, Zh) => "回報紀錄",
        (ReportsHeader, Ja) => "報告一覧",
        (CommentHint, Zh) => "例：10/08 19:26 地點 地點",
        (CommentHint, Ja) => "例：10/08 19:26 場所 場所",
        (WatchFooter, Zh) => "每小時整點自動更新・s 切換伺服器・1-3 展開/關閉・q 結束",
        (WatchFooter, Ja) => "毎正時に自動更新・s サーバー切替・1-3 開閉・q で終了",
        (ToggleInert, Zh) => "目前無法展開",
        (ToggleInert, Ja) => "現在は展開できません",
        (LogWriteFailed, Zh) => "內部紀錄寫入失敗",
        (LogWriteFailed, Ja) => "内部ログの書き込みに失敗しました",
    }
}

/// Legend under the board: what the time column means and how long after
/// it each event actually spawns.
pub fn legend(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Zh => &[
            "・時間為系統出字提示的時間。",
            "・儀式：出字提示後、等待10分鐘出怪。",
            "・野王：出字提示後、等待  5分鐘出王。",
        ],
        Locale::Ja => &[
            "・表の時間＝予兆が出る時間",
            "・怪しい儀式 ：予兆後、約10分でボス出現",
            "・水月/白青FB：予兆後、約 5分でボス出現",
        ],
    }
}
