//! Result panel: verdict label, confidence bar and percentage.

use leptos::*;

use crate::{BrowserWidget, ResultView};

#[component]
pub fn ResultPanel(widget: RwSignal<BrowserWidget>) -> impl IntoView {
    let view_data = move || widget.with(|w| w.result_view()).unwrap_or_else(ResultView::processing);

    view! {
        <div class="result-section show" id="resultSection">
            <div class="result-title">"Analysis Result"</div>
            <div
                id="detectionResult"
                class=move || format!("detection-result {}", view_data().tone.css_class())
                style=move || format!("color: {};", view_data().tone.color())
            >
                {move || view_data().label}
            </div>
            <div class="confidence">
                <div class="confidence-bar">
                    <div
                        class="confidence-fill"
                        id="confidenceFill"
                        style=move || format!("width: {};", view_data().bar_width())
                    ></div>
                </div>
                <span class="confidence-score" id="confidenceScore">
                    {move || view_data().score_text()}
                </span>
            </div>
        </div>
    }
}
