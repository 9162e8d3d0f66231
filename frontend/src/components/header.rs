use leptos::*;

use crate::BrowserWidget;

/// Top bar with a small status badge mirroring the widget state.
#[component]
pub fn Header(widget: RwSignal<BrowserWidget>) -> impl IntoView {
    let status = move || {
        widget.with(|w| {
            if w.is_analyzing() {
                "Analyzing"
            } else if w.result_visible() {
                "Done"
            } else if w.preview_visible() {
                "Ready"
            } else {
                "Idle"
            }
        })
    };

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"DEEPSCAN"</a>
            </div>
            <div class="header-right">
                <span class="badge" class:busy=move || widget.with(|w| w.is_analyzing())>
                    {status}
                </span>
            </div>
        </header>
    }
}
