//! Media upload zone with drag & drop support.
//!
//! Handles file acquisition and kicks off local preview decoding.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement, MouseEvent};

use crate::services::read_data_url;
use crate::{
    BrowserWidget, WidgetError, DROP_ACTIVE_BORDER, DROP_IDLE_BORDER, INVALID_TYPE_NOTICE,
    MAX_FILE_SIZE, PREVIEW_FAILED_NOTICE, TOO_LARGE_NOTICE,
};

#[component]
pub fn UploadZone(
    widget: RwSignal<BrowserWidget>,
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let (is_dragover, set_is_dragover) = create_signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        // Only the first file of a multi-file drop is used
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(widget, file_input, file);
        }
    };

    // Clicking anywhere on the zone opens the hidden input
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(widget, file_input, file);
        }
    };

    view! {
        <div
            class="upload-section"
            id="dropZone"
            class:dragover=move || is_dragover.get()
            style=move || {
                let border = if is_dragover.get() { DROP_ACTIVE_BORDER } else { DROP_IDLE_BORDER };
                format!("border-color: {};", border)
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">"Drag & drop an image or video here"</div>
            <div class="upload-hint">"or click to browse"</div>

            <input
                type="file"
                id="fileInput"
                accept="image/*,video/*"
                style="display:none"
                node_ref=file_input
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}

/// Validate and store a newly acquired file, then decode its preview.
pub fn handle_file(widget: RwSignal<BrowserWidget>, file_input: NodeRef<html::Input>, file: File) {
    let mime = file.type_();
    let size = file.size() as usize;

    let selected = widget.try_update(|w| w.select_file_checked(file.clone(), &mime, size, MAX_FILE_SIZE));

    let id = match selected {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            log::warn!("Rejected {}: {}", file.name(), e);
            notify(match e {
                WidgetError::FileTooLarge { .. } => TOO_LARGE_NOTICE,
                _ => INVALID_TYPE_NOTICE,
            });
            return;
        }
        None => return,
    };

    log::info!("Selected {} ({}, {} bytes)", file.name(), mime, size);

    spawn_local(async move {
        match read_data_url(&file).await {
            Ok(data_url) => {
                let applied = widget.try_update(|w| w.preview_loaded(id, data_url));
                if applied != Some(true) {
                    log::debug!("Dropped stale preview for {}", file.name());
                }
            }
            Err(e) => {
                log::error!("{}", e);
                if widget.try_update(|w| w.preview_failed(id)) == Some(true) {
                    // let the same file be picked again
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    notify(PREVIEW_FAILED_NOTICE);
                }
            }
        }
    });
}

fn notify(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::warn!("{}", message);
    }
}
