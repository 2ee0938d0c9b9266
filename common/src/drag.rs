//! ドラッグ表示の状態遷移
//!
//! inactive --enter/over--> active --leave/drop--> inactive

/// ドロップエリアで受け取るドラッグイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragEventKind {
    /// DOMイベント名から変換
    pub fn from_dom_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" => Some(DragEventKind::Enter),
            "dragover" => Some(DragEventKind::Over),
            "dragleave" => Some(DragEventKind::Leave),
            "drop" => Some(DragEventKind::Drop),
            _ => None,
        }
    }
}

/// ドラッグ表示の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragIndicator {
    #[default]
    Inactive,
    Active,
}

impl DragIndicator {
    pub fn is_active(&self) -> bool {
        matches!(self, DragIndicator::Active)
    }

    /// イベント適用後の状態
    pub fn next(self, event: DragEventKind) -> Self {
        match event {
            DragEventKind::Enter | DragEventKind::Over => DragIndicator::Active,
            DragEventKind::Leave | DragEventKind::Drop => DragIndicator::Inactive,
        }
    }
}

impl From<bool> for DragIndicator {
    fn from(active: bool) -> Self {
        if active {
            DragIndicator::Active
        } else {
            DragIndicator::Inactive
        }
    }
}
