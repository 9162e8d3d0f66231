//! Preview panel: the selected media plus the Analyze and Reset controls.

use leptos::*;

use crate::services::analyze_media;
use crate::{analyze_url, BrowserWidget, MediaKind, WidgetError};

#[component]
pub fn PreviewPanel(
    widget: RwSignal<BrowserWidget>,
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let image_src = move || widget.with(|w| w.preview_source(MediaKind::Image).map(str::to_owned));
    let video_src = move || widget.with(|w| w.preview_source(MediaKind::Video).map(str::to_owned));

    let on_analyze = move |_| run_analysis(widget);

    let on_reset = move |_| {
        log::info!("Reset");
        widget.update(|w| w.reset());
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="preview-section show" id="previewSection">
            <div class="preview-media">
                <Show when=move || image_src().is_some() fallback=|| view! { }>
                    <img id="imagePreview" alt="Selected image" src=image_src/>
                </Show>
                <Show when=move || video_src().is_some() fallback=|| view! { }>
                    <video id="videoPreview" controls=true src=video_src></video>
                </Show>
            </div>

            <div class="preview-footer">
                <button
                    class="btn btn-primary"
                    id="analyzeBtn"
                    on:click=on_analyze
                    disabled=move || !widget.with(|w| w.trigger_enabled())
                >
                    {move || if widget.with(|w| w.is_analyzing()) {
                        view! { <span class="loading"></span> " Analyzing..." }.into_view()
                    } else {
                        "Analyze".into_view()
                    }}
                </button>
                <button class="btn btn-secondary" id="resetBtn" on:click=on_reset>
                    "Reset"
                </button>
            </div>
        </div>
    }
}

/// Submit the selected file and render the outcome.
///
/// [`BrowserWidget::finish_analysis`] runs on every completion path, which
/// is what re-enables the trigger.
pub fn run_analysis(widget: RwSignal<BrowserWidget>) {
    let (ticket, file) = match widget.try_update(|w| w.begin_analysis()) {
        Some(Ok(started)) => started,
        Some(Err(WidgetError::NoFileSelected)) | None => return,
        Some(Err(e)) => {
            log::warn!("{}", e);
            return;
        }
    };

    log::info!("Analyzing {}", file.name());

    spawn_local(async move {
        let outcome = analyze_media(&file, &analyze_url()).await;
        match &outcome {
            Ok(result) => log::info!(
                "Verdict for {}: deepfake={} confidence={:.3}",
                file.name(),
                result.is_deepfake,
                result.confidence
            ),
            Err(e) => log::error!("Error: {}", e),
        }
        let shown = widget.try_update(|w| w.finish_analysis(ticket, outcome));
        if shown == Some(false) {
            log::debug!("Discarded result for {}: widget moved on", file.name());
        }
    });
}
