use crate::models::server::Locale;

/// One kind of recurring event tracked on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskType {
    pub key: &'static str,
    pub label_zh: &'static str,
    pub label_ja: &'static str,
    /// Minutes after the listed time before the current entry is shown as stale.
    pub offset_minutes: i64,
    /// ANSI colour used for the group header.
    pub color: &'static str,
}

impl TaskType {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.label_zh,
            Locale::Ja => self.label_ja,
        }
    }

    pub fn time_column(&self) -> String {
        format!("{}-time", self.key)
    }

    pub fn label_column(&self, locale: Locale) -> String {
        match locale {
            Locale::Zh => format!("{}-zh", self.key),
            Locale::Ja => format!("{}-jp", self.key),
        }
    }
}

pub static TASK_TYPES: [TaskType; 3] = [
    TaskType {
        key: "gishiki",
        label_zh: "可疑的儀式",
        label_ja: "怪しい儀式",
        offset_minutes: 10,
        color: "\x1b[35m",
    },
    TaskType {
        key: "mizuki",
        label_zh: "水月野王",
        label_ja: "水月FB",
        offset_minutes: 5,
        color: "\x1b[34m",
    },
    TaskType {
        key: "shirao",
        label_zh: "白青野王",
        label_ja: "白青FB",
        offset_minutes: 5,
        color: "\x1b[32m",
    },
];

pub fn find_task_type(key: &str) -> Option<&'static TaskType> {
    TASK_TYPES.iter().find(|t| t.key == key)
}

/// Task categories a report can be filed under: the event types plus `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportTask {
    pub key: &'static str,
    pub label_zh: &'static str,
    pub label_ja: &'static str,
}

pub static REPORT_TASKS: [ReportTask; 4] = [
    ReportTask {
        key: "gishiki",
        label_zh: "可疑的儀式",
        label_ja: "怪しい儀式",
    },
    ReportTask {
        key: "mizuki",
        label_zh: "水月野王",
        label_ja: "水月FB",
    },
    ReportTask {
        key: "shirao",
        label_zh: "白青野王",
        label_ja: "白青FB",
    },
    ReportTask {
        key: "other",
        label_zh: "其他",
        label_ja: "その他",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportKind {
    pub key: &'static str,
    pub label_zh: &'static str,
    pub label_ja: &'static str,
}

const DATE_REPORT: ReportKind = ReportKind {
    key: "date_report",
    label_zh: "時間回報",
    label_ja: "時間報告",
};

const OTHER_REPORT: ReportKind = ReportKind {
    key: "other",
    label_zh: "其他",
    label_ja: "その他",
};

static EVENT_REPORT_KINDS: [ReportKind; 2] = [DATE_REPORT, OTHER_REPORT];
static OTHER_REPORT_KINDS: [ReportKind; 1] = [OTHER_REPORT];

impl ReportTask {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.label_zh,
            Locale::Ja => self.label_ja,
        }
    }

    /// Report kinds accepted for this task. Time reports only make sense
    /// for scheduled event types.
    pub fn kinds(&self) -> &'static [ReportKind] {
        if find_task_type(self.key).is_some() {
            &EVENT_REPORT_KINDS
        } else {
            &OTHER_REPORT_KINDS
        }
    }

    pub fn find_kind(&self, key: &str) -> Option<&'static ReportKind> {
        self.kinds().iter().find(|k| k.key == key)
    }
}

impl ReportKind {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.label_zh,
            Locale::Ja => self.label_ja,
        }
    }
}

pub fn find_report_task(key: &str) -> Option<&'static ReportTask> {
    REPORT_TASKS.iter().find(|t| t.key == key)
}
