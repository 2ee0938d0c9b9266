//! アップロードエリアコンポーネント
//!
//! ドロップされたファイルは受付チェックの結果をログに出すだけで破棄する。

use leptos::prelude::*;
use web_sys::{DragEvent, FileList};
use health_reports_common::upload::SUPPORTED_FORMATS_NOTE;
use health_reports_common::{DragEventKind, DragIndicator, UploadCandidate, UploadPolicy};

#[component]
pub fn UploadArea(
    drag_active: ReadSignal<bool>,
    set_drag_active: WriteSignal<bool>,
) -> impl IntoView {
    let on_drag = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        if let Some(kind) = DragEventKind::from_dom_type(&ev.type_()) {
            let next = DragIndicator::from(drag_active.get_untracked()).next(kind);
            set_drag_active.set(next.is_active());
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let candidates = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|files| candidates_from(&files))
            .unwrap_or_default();

        let (active, lines) = handle_drop(drag_active.get_untracked(), &candidates);
        set_drag_active.set(active);
        for line in lines {
            leptos::logging::log!("{}", line);
        }
    };

    view! {
        <div
            class=move || drop_zone_class(drag_active.get())
            on:dragenter=on_drag
            on:dragover=on_drag
            on:dragleave=on_drag
            on:drop=on_drop
        >
            <div class="upload-icon">"⬆"</div>
            <h3>"Upload Medical Reports"</h3>
            <p class="text-muted">"Drag and drop your PDF or image files here, or click to browse"</p>
            <button class="btn btn-primary">"Choose Files"</button>
            <p class="text-muted text-small">{SUPPORTED_FORMATS_NOTE}</p>
        </div>
    }
}

fn candidates_from(files: &FileList) -> Vec<UploadCandidate> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| UploadCandidate::new(file.name(), file.type_(), file.size().max(0.0) as u64))
        .collect()
}

fn drop_zone_class(active: bool) -> &'static str {
    if active {
        "upload-area dragover"
    } else {
        "upload-area"
    }
}

/// ドロップ後のドラッグ表示とログ行
fn handle_drop(active: bool, candidates: &[UploadCandidate]) -> (bool, Vec<String>) {
    let next = DragIndicator::from(active).next(DragEventKind::Drop);
    (next.is_active(), screening_log(candidates, &UploadPolicy::default()))
}

/// ドロップ結果のログ行（ファイルはどこにも送らない）
fn screening_log(candidates: &[UploadCandidate], policy: &UploadPolicy) -> Vec<String> {
    let mut lines: Vec<String> = candidates
        .iter()
        .map(|candidate| match policy.screen(candidate) {
            Ok(()) => format!("drop: {} would be accepted", candidate.file_name),
            Err(reason) => format!("drop: {} would be rejected ({})", candidate.file_name, reason),
        })
        .collect();
    lines.push(format!("drop: discarded {} file(s)", candidates.len()));
    lines
}
